use super::MAX_POWER_BITS;
use crate::algebra::*;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Pow, ToPrimitive, Zero};
use std::fmt;

const RANDTEST_BITS: u64 = 100;

/// The field of rational numbers.
///
/// With a size limit, a result whose numerator and denominator together
/// need more bits than the limit is reported as `UNABLE`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RationalField {
    size_limit: Option<u64>,
}

/// Combined bit length of numerator and denominator.
pub fn rational_bits(x: &BigRational) -> u64 {
    x.numer().bits() + x.denom().bits()
}

impl RationalField {
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

    fn check(&self, x: &BigRational) -> Status {
        match self.size_limit {
            Some(limit) if rational_bits(x) > limit => Status::UNABLE,
            _ => Status::SUCCESS,
        }
    }

    fn store(&self, res: &mut BigRational, v: BigRational) -> Status {
        *res = v;
        self.check(res)
    }
}

impl Ring for RationalField {
    type Element = BigRational;

    fn flags(&self) -> RingFlags {
        let mut flags = RingFlags::COMMUTATIVE | RingFlags::FIELD | RingFlags::INTEGRAL_DOMAIN;
        if self.size_limit.is_some() {
            flags |= RingFlags::SIZE_LIMITED;
        }
        flags
    }

    fn write_context(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational field (fmpq)")?;
        if let Some(limit) = self.size_limit {
            write!(f, " with size limit {} bits", limit)?;
        }
        Ok(())
    }

    fn write_element(&self, f: &mut fmt::Formatter<'_>, x: &BigRational) -> fmt::Result {
        write!(f, "{}", x)
    }

    fn init(&self) -> BigRational {
        BigRational::zero()
    }

    fn set(&self, res: &mut BigRational, x: &BigRational) -> Status {
        res.clone_from(x);
        Status::SUCCESS
    }

    fn randtest(&self, res: &mut BigRational, state: &mut RandState) -> Status {
        let bits = self
            .size_limit
            .map_or(RANDTEST_BITS, |l| (l / 2).min(RANDTEST_BITS));
        *res = randtest_rational(state, bits);
        Status::SUCCESS
    }

    fn zero(&self, res: &mut BigRational) -> Status {
        res.set_zero();
        Status::SUCCESS
    }

    fn one(&self, res: &mut BigRational) -> Status {
        res.set_one();
        Status::SUCCESS
    }

    fn set_bigint(&self, res: &mut BigRational, v: &BigInt) -> Status {
        self.store(res, BigRational::from_integer(v.clone()))
    }

    fn set_rational(&self, res: &mut BigRational, v: &BigRational) -> Status {
        res.clone_from(v);
        self.check(res)
    }

    fn equal(&self, x: &BigRational, y: &BigRational) -> Truth {
        Truth::from(x == y)
    }

    fn is_zero(&self, x: &BigRational) -> Truth {
        Truth::from(x.is_zero())
    }

    fn is_one(&self, x: &BigRational) -> Truth {
        Truth::from(x.is_one())
    }

    fn neg(&self, res: &mut BigRational, x: &BigRational) -> Status {
        self.store(res, -x)
    }

    fn add(&self, res: &mut BigRational, x: &BigRational, y: &BigRational) -> Status {
        self.store(res, x + y)
    }

    fn sub(&self, res: &mut BigRational, x: &BigRational, y: &BigRational) -> Status {
        self.store(res, x - y)
    }

    fn mul(&self, res: &mut BigRational, x: &BigRational, y: &BigRational) -> Status {
        self.store(res, x * y)
    }

    fn inv(&self, res: &mut BigRational, x: &BigRational) -> Status {
        if x.is_zero() {
            return Status::DOMAIN;
        }
        self.store(res, x.recip())
    }

    fn div(&self, res: &mut BigRational, x: &BigRational, y: &BigRational) -> Status {
        if y.is_zero() {
            return Status::DOMAIN;
        }
        self.store(res, x / y)
    }

    fn pow_ui(&self, res: &mut BigRational, x: &BigRational, e: u64) -> Status {
        // numerator and denominator stay coprime, so each grows to at
        // least e(b-1) + 1 bits
        let limit = self.size_limit.unwrap_or(MAX_POWER_BITS);
        let lower = |b: u64| if b > 1 { e.saturating_mul(b - 1) } else { 0 };
        let predicted = lower(x.numer().bits()).saturating_add(lower(x.denom().bits()));
        if predicted >= limit {
            return Status::UNABLE;
        }
        self.store(res, Pow::pow(x, e))
    }

    fn pow_si(&self, res: &mut BigRational, x: &BigRational, e: i64) -> Status {
        if e >= 0 {
            return self.pow_ui(res, x, e as u64);
        }
        if x.is_zero() {
            return Status::DOMAIN;
        }
        self.pow_ui(res, &x.recip(), e.unsigned_abs())
    }

    fn pow_bigint(&self, res: &mut BigRational, x: &BigRational, e: &BigInt) -> Status {
        if x.is_zero() {
            return match e.sign() {
                Sign::Minus => Status::DOMAIN,
                Sign::NoSign => self.one(res),
                Sign::Plus => self.zero(res),
            };
        }
        if x.is_one() {
            return self.one(res);
        }
        if (-x).is_one() {
            return if e.is_even() {
                self.one(res)
            } else {
                self.set(res, x)
            };
        }
        if let Some(e) = e.to_i32() {
            return self.pow_si(res, x, e as i64);
        }
        // |x| != 0, 1 with an exponent beyond 2^31 does not fit in memory
        Status::UNABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> BigRational {
        BigRational::new(n.into(), d.into())
    }

    #[test]
    fn test_inverse_of_zero() {
        let qq = RationalField::new();
        let mut r = qq.init();
        assert_eq!(qq.inv(&mut r, &q(0, 1)), Status::DOMAIN);
        assert_eq!(qq.div(&mut r, &q(1, 1), &q(0, 1)), Status::DOMAIN);
        assert!(qq.inv(&mut r, &q(-3, 4)).is_success());
        assert_eq!(r, q(-4, 3));
    }

    #[test]
    fn test_exponent_addition_exact() {
        let qq = RationalField::with_size_limit(1000).unwrap();
        let x = q(-3, 2);
        let (mut a, mut b, mut c) = (qq.init(), qq.init(), qq.init());

        let status = qq.pow_ui(&mut a, &x, 56)
            | qq.pow_ui(&mut b, &x, 37)
            | qq.pow_ui(&mut c, &x, 19)
            | qq.binary_assign(BinaryOp::Mul, &mut b, &c);
        assert!(status.is_success());
        assert!(qq.equal(&a, &b).is_true());
    }

    #[test]
    fn test_size_limit_reports_unable() {
        let qq = RationalField::with_size_limit(64).unwrap();
        let mut r = qq.init();
        let x = q(1 << 40, 3);
        assert_eq!(qq.mul(&mut r, &x, &x), Status::UNABLE);
        assert_eq!(qq.pow_ui(&mut r, &x, 3), Status::UNABLE);
        assert!(qq.pow_ui(&mut r, &q(3, 2), 20).is_success());
    }

    #[test]
    fn test_signed_and_big_powers() {
        let qq = RationalField::new();
        let mut r = qq.init();
        assert!(qq.pow_si(&mut r, &q(2, 3), -2).is_success());
        assert_eq!(r, q(9, 4));
        assert_eq!(qq.pow_si(&mut r, &q(0, 1), -1), Status::DOMAIN);

        let huge: BigInt = BigInt::one() << 70u32;
        assert!(qq.pow_bigint(&mut r, &q(-1, 1), &huge).is_success());
        assert!(r.is_one());
        assert_eq!(qq.pow_bigint(&mut r, &q(2, 1), &huge), Status::UNABLE);
        assert!(qq.pow_bigint(&mut r, &q(2, 1), &BigInt::from(-3)).is_success());
        assert_eq!(r, q(1, 8));
    }

    #[test]
    fn test_unlimited_power_too_large() {
        let qq = RationalField::new();
        let mut r = qq.init();

        assert_eq!(qq.pow_ui(&mut r, &q(3, 2), 1u64 << 40), Status::UNABLE);
        assert_eq!(qq.pow_si(&mut r, &q(3, 2), -(1i64 << 40)), Status::UNABLE);
        assert_eq!(qq.pow_si(&mut r, &q(1, 2), i64::MIN), Status::UNABLE);
        assert!(qq.pow_si(&mut r, &q(-1, 1), i64::MIN).is_success());
        assert!(r.is_one());
        assert!(qq.pow_si(&mut r, &q(1, 2), -500).is_success());
        assert_eq!(r, BigRational::from_integer(BigInt::one() << 500u32));
    }

    #[test]
    fn test_scalar_variants() {
        let qq = RationalField::new();
        let mut r = qq.init();
        let third = q(1, 3);
        assert!(qq.add_scalar(&mut r, &q(1, 2), &third).is_success());
        assert_eq!(r, q(5, 6));
        assert!(qq.div_scalar(&mut r, &q(1, 2), -2i64).is_success());
        assert_eq!(r, q(-1, 4));
        assert_eq!(qq.div_scalar(&mut r, &q(1, 2), 0u64), Status::DOMAIN);
    }
}
