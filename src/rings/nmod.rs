use crate::algebra::*;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use std::fmt;

/// Integers modulo a word-sized `n >= 1`.
///
/// Elements are reduced residues `0 <= x < n`.  The ring is a field
/// exactly when `n` is prime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NmodRing {
    n: u64,
    flags: RingFlags,
}

impl NmodRing {
    pub fn new(n: u64) -> Result<Self, ContextError> {
        if n == 0 {
            return Err(ContextError::ZeroModulus);
        }
        let mut flags = RingFlags::FINITE | RingFlags::COMMUTATIVE;
        if is_prime(n) {
            flags |= RingFlags::FIELD | RingFlags::INTEGRAL_DOMAIN;
        }
        Ok(Self { n, flags })
    }

    pub fn modulus(&self) -> u64 {
        self.n
    }

    fn reduce_i64(&self, v: i64) -> u64 {
        (v as i128).rem_euclid(self.n as i128) as u64
    }

    fn reduce_bigint(&self, v: &BigInt) -> u64 {
        let r = (v.magnitude() % self.n)
            .iter_u64_digits()
            .next()
            .unwrap_or(0);
        match v.sign() {
            Sign::Minus if r != 0 => self.n - r,
            _ => r,
        }
    }

    fn add_mod(&self, a: u64, b: u64) -> u64 {
        let (s, overflow) = a.overflowing_add(b);
        if overflow || s >= self.n {
            s.wrapping_sub(self.n)
        } else {
            s
        }
    }

    fn sub_mod(&self, a: u64, b: u64) -> u64 {
        if a >= b {
            a - b
        } else {
            a.wrapping_sub(b).wrapping_add(self.n)
        }
    }

    fn mul_mod(&self, a: u64, b: u64) -> u64 {
        mulmod(a, b, self.n)
    }

    /// Inverse by the extended Euclidean algorithm, if `a` is a unit.
    fn inv_mod(&self, a: u64) -> Option<u64> {
        let n = self.n as i128;
        let egcd = (a as i128).extended_gcd(&n);
        if egcd.gcd != 1 {
            return None;
        }
        Some(egcd.x.rem_euclid(n) as u64)
    }
}

impl Ring for NmodRing {
    type Element = u64;

    fn flags(&self) -> RingFlags {
        self.flags
    }

    fn write_context(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integers mod {} (nmod)", self.n)
    }

    fn write_element(&self, f: &mut fmt::Formatter<'_>, x: &u64) -> fmt::Result {
        write!(f, "{}", x)
    }

    fn init(&self) -> u64 {
        0
    }

    fn set(&self, res: &mut u64, x: &u64) -> Status {
        *res = *x;
        Status::SUCCESS
    }

    fn randtest(&self, res: &mut u64, state: &mut RandState) -> Status {
        *res = match randint(state, 4) {
            0 => randtest_u64(state) % self.n,
            1 => self.n - 1 - randint(state, self.n.min(4)),
            _ => randint(state, self.n),
        };
        Status::SUCCESS
    }

    fn zero(&self, res: &mut u64) -> Status {
        *res = 0;
        Status::SUCCESS
    }

    fn one(&self, res: &mut u64) -> Status {
        *res = 1 % self.n;
        Status::SUCCESS
    }

    fn set_ui(&self, res: &mut u64, v: u64) -> Status {
        *res = v % self.n;
        Status::SUCCESS
    }

    fn set_si(&self, res: &mut u64, v: i64) -> Status {
        *res = self.reduce_i64(v);
        Status::SUCCESS
    }

    fn set_bigint(&self, res: &mut u64, v: &BigInt) -> Status {
        *res = self.reduce_bigint(v);
        Status::SUCCESS
    }

    fn equal(&self, x: &u64, y: &u64) -> Truth {
        Truth::from(x == y)
    }

    fn is_zero(&self, x: &u64) -> Truth {
        Truth::from(*x == 0)
    }

    fn is_one(&self, x: &u64) -> Truth {
        Truth::from(*x == 1 % self.n)
    }

    fn neg(&self, res: &mut u64, x: &u64) -> Status {
        *res = self.sub_mod(0, *x);
        Status::SUCCESS
    }

    fn add(&self, res: &mut u64, x: &u64, y: &u64) -> Status {
        *res = self.add_mod(*x, *y);
        Status::SUCCESS
    }

    fn sub(&self, res: &mut u64, x: &u64, y: &u64) -> Status {
        *res = self.sub_mod(*x, *y);
        Status::SUCCESS
    }

    fn mul(&self, res: &mut u64, x: &u64, y: &u64) -> Status {
        *res = self.mul_mod(*x, *y);
        Status::SUCCESS
    }

    fn inv(&self, res: &mut u64, x: &u64) -> Status {
        match self.inv_mod(*x) {
            Some(v) => {
                *res = v;
                Status::SUCCESS
            }
            None => Status::DOMAIN,
        }
    }

    fn pow_ui(&self, res: &mut u64, x: &u64, e: u64) -> Status {
        *res = powmod(*x, e, self.n);
        Status::SUCCESS
    }

    // Integer scalars are reduced directly instead of going through an
    // intermediate element.
    fn binary_scalar(&self, op: BinaryOp, res: &mut u64, x: &u64, s: Scalar<'_>) -> Status {
        let c = match s {
            Scalar::Ui(v) => v % self.n,
            Scalar::Si(v) => self.reduce_i64(v),
            Scalar::Int(v) => self.reduce_bigint(v),
            Scalar::Rat(_) => {
                let mut t = 0;
                let status = self.set_scalar(&mut t, s);
                if !status.is_success() {
                    return status;
                }
                t
            }
        };
        self.binary(op, res, x, &c)
    }
}

fn mulmod(a: u64, b: u64, n: u64) -> u64 {
    ((a as u128 * b as u128) % n as u128) as u64
}

fn powmod(mut b: u64, mut e: u64, n: u64) -> u64 {
    let mut r = 1 % n;
    b %= n;
    while e > 0 {
        if e & 1 == 1 {
            r = mulmod(r, b, n);
        }
        b = mulmod(b, b, n);
        e >>= 1;
    }
    r
}

/// Deterministic Miller–Rabin for 64-bit integers.
fn is_prime(n: u64) -> bool {
    const BASES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    if n < 2 {
        return false;
    }
    for p in BASES {
        if n % p == 0 {
            return n == p;
        }
    }

    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;

    'witness: for a in BASES {
        let mut x = powmod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mulmod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::BigRational;

    #[test]
    fn test_zero_modulus() {
        assert_eq!(NmodRing::new(0), Err(ContextError::ZeroModulus));
    }

    #[test]
    fn test_flags() {
        let zp = NmodRing::new(107).unwrap();
        assert!(zp.flags().is_finite());
        assert!(zp.flags().is_field());

        let z8 = NmodRing::new(8).unwrap();
        assert!(z8.flags().is_commutative());
        assert!(!z8.flags().is_field());
        assert!(!z8.flags().is_integral_domain());
    }

    #[test]
    fn test_is_prime() {
        let primes = [2u64, 3, 5, 107, 65537, 1_000_000_007, 18446744073709551557];
        let composites = [0u64, 1, 4, 91, 561, 1_000_000_007 * 3, u64::MAX];
        assert!(primes.iter().all(|&p| is_prime(p)));
        assert!(composites.iter().all(|&c| !is_prime(c)));
    }

    #[test]
    fn test_random_triples_z107() {
        let ring = NmodRing::new(107).unwrap();
        let mut state = rand_state(1);
        let (mut x, mut y, mut z) = (0, 0, 0);
        let (mut a, mut b) = (0, 0);

        for _ in 0..1000 {
            let mut status = ring.randtest(&mut x, &mut state);
            status |= ring.randtest(&mut y, &mut state);
            status |= ring.randtest(&mut z, &mut state);

            // (x + y) + z == x + (y + z)
            status |= ring.add(&mut a, &x, &y);
            status |= ring.binary_assign(BinaryOp::Add, &mut a, &z);
            status |= ring.add(&mut b, &y, &z);
            status |= ring.binary_assign_rev(BinaryOp::Add, &x, &mut b);
            assert!(status.is_success());
            assert!(ring.equal(&a, &b).is_true());

            // x * y == y * x
            let status = ring.mul(&mut a, &x, &y) | ring.mul(&mut b, &y, &x);
            assert!(status.is_success());
            assert!(ring.equal(&a, &b).is_true());
        }
    }

    #[test]
    fn test_negative_conversions() {
        let ring = NmodRing::new(107).unwrap();
        let mut x = 0;
        assert!(ring.set_si(&mut x, -1).is_success());
        assert_eq!(x, 106);
        assert!(ring.set_si(&mut x, i64::MIN).is_success());
        assert_eq!(x as i128, (i64::MIN as i128).rem_euclid(107));
        assert!(ring.set_bigint(&mut x, &BigInt::from(-215)).is_success());
        assert_eq!(x, 106);
    }

    #[test]
    fn test_non_units() {
        let ring = NmodRing::new(8).unwrap();
        let mut x = 0;
        assert_eq!(ring.inv(&mut x, &2), Status::DOMAIN);
        assert!(ring.inv(&mut x, &3).is_success());
        assert_eq!(x, 3);

        let half = BigRational::new(1.into(), 2.into());
        assert_eq!(ring.set_rational(&mut x, &half), Status::DOMAIN);
        assert_eq!(ring.div_scalar(&mut x, &5, 2u64), Status::DOMAIN);
        let third = BigRational::new(1.into(), 3.into());
        assert!(ring.set_rational(&mut x, &third).is_success());
        assert_eq!(x, 3);
    }

    #[test]
    fn test_zero_ring() {
        // Z/1 has 0 == 1 and 0 is a unit
        let ring = NmodRing::new(1).unwrap();
        let mut x = 0;
        assert!(ring.one(&mut x).is_success());
        assert!(ring.is_zero(&x).is_true());
        assert!(ring.inv(&mut x, &0).is_success());
        assert_eq!(x, 0);
    }

    #[test]
    fn test_large_modulus() {
        let n = u64::MAX - 58; // largest 64-bit prime
        let ring = NmodRing::new(n).unwrap();
        let mut x = 0;
        assert!(ring.add(&mut x, &(n - 1), &(n - 2)).is_success());
        assert_eq!(x, n - 3);
        assert!(ring.mul(&mut x, &(n - 1), &(n - 1)).is_success());
        assert_eq!(x, 1);

        let mut y = 0;
        assert!(ring.inv(&mut y, &12345).is_success());
        assert!(ring.mul(&mut x, &y, &12345).is_success());
        assert_eq!(x, 1);
    }

    #[test]
    fn test_scalar_fast_path_matches_generic() {
        let ring = NmodRing::new(107).unwrap();
        let big = BigInt::from(-1_000_000_007i64);
        let (mut fast, mut slow, mut c) = (0, 0, 0);
        for op in BinaryOp::ALL {
            let s1 = ring.binary_scalar(op, &mut fast, &17, Scalar::Int(&big));
            let s2 = ring.set_bigint(&mut c, &big) | ring.binary(op, &mut slow, &17, &c);
            assert_eq!(s1, s2);
            assert_eq!(fast, slow);
        }
    }
}
