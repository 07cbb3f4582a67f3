use super::MAX_POWER_BITS;
use crate::algebra::*;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Pow, Signed, ToPrimitive, Zero};
use std::fmt;

/// Bits used for random elements when no size limit is set.
const RANDTEST_BITS: u64 = 100;

/// The ring of integers.
///
/// An optional size limit bounds the bit length of every result; results
/// exceeding it are reported as `UNABLE`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegerRing {
    size_limit: Option<u64>,
}

impl IntegerRing {
    pub fn new() -> Self {
        Self { size_limit: None }
    }

    pub fn with_size_limit(bits: u64) -> Result<Self, ContextError> {
        if bits == 0 {
            return Err(ContextError::ZeroSizeLimit);
        }
        Ok(Self {
            size_limit: Some(bits),
        })
    }

    pub fn size_limit(&self) -> Option<u64> {
        self.size_limit
    }

    fn check(&self, x: &BigInt) -> Status {
        match self.size_limit {
            Some(limit) if x.bits() > limit => Status::UNABLE,
            _ => Status::SUCCESS,
        }
    }

    fn store(&self, res: &mut BigInt, v: BigInt) -> Status {
        *res = v;
        self.check(res)
    }
}

impl Ring for IntegerRing {
    type Element = BigInt;

    fn flags(&self) -> RingFlags {
        let mut flags = RingFlags::COMMUTATIVE | RingFlags::INTEGRAL_DOMAIN;
        if self.size_limit.is_some() {
            flags |= RingFlags::SIZE_LIMITED;
        }
        flags
    }

    fn write_context(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer ring (fmpz)")?;
        if let Some(limit) = self.size_limit {
            write!(f, " with size limit {} bits", limit)?;
        }
        Ok(())
    }

    fn write_element(&self, f: &mut fmt::Formatter<'_>, x: &BigInt) -> fmt::Result {
        write!(f, "{}", x)
    }

    fn init(&self) -> BigInt {
        BigInt::zero()
    }

    fn set(&self, res: &mut BigInt, x: &BigInt) -> Status {
        res.clone_from(x);
        Status::SUCCESS
    }

    fn randtest(&self, res: &mut BigInt, state: &mut RandState) -> Status {
        let bits = self.size_limit.map_or(RANDTEST_BITS, |l| l.min(RANDTEST_BITS));
        *res = randtest_bigint(state, bits);
        Status::SUCCESS
    }

    fn zero(&self, res: &mut BigInt) -> Status {
        res.set_zero();
        Status::SUCCESS
    }

    fn one(&self, res: &mut BigInt) -> Status {
        res.set_one();
        Status::SUCCESS
    }

    fn set_bigint(&self, res: &mut BigInt, v: &BigInt) -> Status {
        res.clone_from(v);
        self.check(res)
    }

    fn set_rational(&self, res: &mut BigInt, v: &BigRational) -> Status {
        if !v.is_integer() {
            return Status::DOMAIN;
        }
        self.set_bigint(res, v.numer())
    }

    fn equal(&self, x: &BigInt, y: &BigInt) -> Truth {
        Truth::from(x == y)
    }

    fn is_zero(&self, x: &BigInt) -> Truth {
        Truth::from(x.is_zero())
    }

    fn is_one(&self, x: &BigInt) -> Truth {
        Truth::from(x.is_one())
    }

    fn neg(&self, res: &mut BigInt, x: &BigInt) -> Status {
        self.store(res, -x)
    }

    fn add(&self, res: &mut BigInt, x: &BigInt, y: &BigInt) -> Status {
        self.store(res, x + y)
    }

    fn sub(&self, res: &mut BigInt, x: &BigInt, y: &BigInt) -> Status {
        self.store(res, x - y)
    }

    fn mul(&self, res: &mut BigInt, x: &BigInt, y: &BigInt) -> Status {
        self.store(res, x * y)
    }

    /// Only `1` and `-1` are units.
    fn inv(&self, res: &mut BigInt, x: &BigInt) -> Status {
        if x.magnitude().is_one() {
            res.clone_from(x);
            Status::SUCCESS
        } else {
            Status::DOMAIN
        }
    }

    /// Exact division; `DOMAIN` unless `y` divides `x`.
    fn div(&self, res: &mut BigInt, x: &BigInt, y: &BigInt) -> Status {
        if y.is_zero() {
            return Status::DOMAIN;
        }
        let (q, r) = x.div_rem(y);
        if !r.is_zero() {
            return Status::DOMAIN;
        }
        self.store(res, q)
    }

    fn pow_ui(&self, res: &mut BigInt, x: &BigInt, e: u64) -> Status {
        // |x| >= 2^(b-1) implies bits(x^e) >= e(b-1) + 1
        let limit = self.size_limit.unwrap_or(MAX_POWER_BITS);
        let b = x.bits();
        if b > 1 && e.saturating_mul(b - 1) >= limit {
            return Status::UNABLE;
        }
        self.store(res, Pow::pow(x, e))
    }

    fn pow_bigint(&self, res: &mut BigInt, x: &BigInt, e: &BigInt) -> Status {
        if let Some(u) = e.to_u64() {
            return self.pow_ui(res, x, u);
        }
        if e.is_negative() {
            let mut t = self.init();
            let status = self.inv(&mut t, x);
            if !status.is_success() {
                return status;
            }
            return self.pow_bigint(res, &t, &-e);
        }
        // huge exponent: only 0 and +-1 have representable powers
        if x.is_zero() || x.is_one() {
            res.clone_from(x);
            Status::SUCCESS
        } else if x.magnitude().is_one() {
            *res = if e.is_even() { BigInt::one() } else { x.clone() };
            Status::SUCCESS
        } else {
            Status::UNABLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_and_exact_division() {
        let zz = IntegerRing::new();
        let mut r = zz.init();

        assert_eq!(zz.inv(&mut r, &BigInt::from(2)), Status::DOMAIN);
        assert_eq!(zz.inv(&mut r, &BigInt::zero()), Status::DOMAIN);
        assert!(zz.inv(&mut r, &BigInt::from(-1)).is_success());
        assert_eq!(r, BigInt::from(-1));

        assert!(zz.div(&mut r, &BigInt::from(12), &BigInt::from(-4)).is_success());
        assert_eq!(r, BigInt::from(-3));
        assert_eq!(
            zz.div(&mut r, &BigInt::from(12), &BigInt::from(5)),
            Status::DOMAIN
        );
        assert_eq!(
            zz.div(&mut r, &BigInt::from(12), &BigInt::zero()),
            Status::DOMAIN
        );
    }

    #[test]
    fn test_rational_conversion() {
        let zz = IntegerRing::new();
        let mut r = zz.init();
        let half = BigRational::new(1.into(), 2.into());
        let four = BigRational::new(8.into(), 2.into());
        assert_eq!(zz.set_rational(&mut r, &half), Status::DOMAIN);
        assert!(zz.set_rational(&mut r, &four).is_success());
        assert_eq!(r, BigInt::from(4));
    }

    #[test]
    fn test_size_limit() {
        assert_eq!(
            IntegerRing::with_size_limit(0),
            Err(ContextError::ZeroSizeLimit)
        );

        let zz = IntegerRing::with_size_limit(64).unwrap();
        assert!(zz.flags().is_size_limited());

        let mut r = zz.init();
        let x = BigInt::from(u64::MAX);
        assert!(zz.set(&mut r, &x).is_success());
        assert_eq!(zz.mul(&mut r, &x, &x), Status::UNABLE);
        assert_eq!(zz.pow_ui(&mut r, &BigInt::from(3), 100), Status::UNABLE);
        assert!(zz.pow_ui(&mut r, &BigInt::from(3), 40).is_success());
        assert_eq!(r, Pow::pow(BigInt::from(3), 40u32));
    }

    #[test]
    fn test_huge_exponents() {
        let zz = IntegerRing::new();
        let mut r = zz.init();
        let e: BigInt = BigInt::one() << 80u32;

        assert!(zz.pow_bigint(&mut r, &BigInt::from(-1), &e).is_success());
        assert!(r.is_one());
        assert!(zz.pow_bigint(&mut r, &BigInt::from(-1), &(&e + BigInt::one())).is_success());
        assert_eq!(r, BigInt::from(-1));
        assert_eq!(zz.pow_bigint(&mut r, &BigInt::from(2), &e), Status::UNABLE);
        assert_eq!(zz.pow_bigint(&mut r, &BigInt::from(2), &-e), Status::DOMAIN);
    }

    #[test]
    fn test_unlimited_power_too_large() {
        let zz = IntegerRing::new();
        let mut r = zz.init();
        let two = BigInt::from(2);

        assert_eq!(zz.pow_ui(&mut r, &two, 1u64 << 40), Status::UNABLE);
        assert_eq!(zz.pow_ui(&mut r, &two, MAX_POWER_BITS), Status::UNABLE);
        assert_eq!(
            zz.pow_bigint(&mut r, &two, &BigInt::from(1u64 << 40)),
            Status::UNABLE
        );
        assert!(zz.pow_ui(&mut r, &BigInt::from(-1), 1u64 << 40).is_success());
        assert!(r.is_one());
        assert!(zz.pow_ui(&mut r, &two, 1000).is_success());
        assert_eq!(r.bits(), 1001);
    }

    #[test]
    fn test_pow_si() {
        let zz = IntegerRing::new();
        let mut r = zz.init();
        assert!(zz.pow_si(&mut r, &BigInt::from(-1), -3).is_success());
        assert_eq!(r, BigInt::from(-1));
        assert_eq!(zz.pow_si(&mut r, &BigInt::from(5), -1), Status::DOMAIN);
        assert!(zz.pow_si(&mut r, &BigInt::from(5), 0).is_success());
        assert!(r.is_one());
    }
}
