use crate::algebra::*;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{FromPrimitive, ToPrimitive, Zero};
use std::fmt;

/// Real interval `[mid - rad, mid + rad]` in double precision.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ball {
    pub mid: f64,
    pub rad: f64,
}

impl Ball {
    pub fn exact(mid: f64) -> Self {
        Ball { mid, rad: 0.0 }
    }

    pub fn is_exact(&self) -> bool {
        self.rad == 0.0
    }

    pub fn contains_zero(&self) -> bool {
        self.mid.abs() <= self.rad
    }

    fn is_finite(&self) -> bool {
        self.mid.is_finite() && self.rad.is_finite()
    }
}

// Radii are computed in round-to-nearest; inflating by a few ulps and
// the smallest subnormal keeps them upper bounds.
fn rad_up(r: f64) -> f64 {
    r * (1.0 + 8.0 * f64::EPSILON) + f64::from_bits(1)
}

/// `a + b = s + e` exactly.
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let e = (a - (s - bb)) + (b - bb);
    (s, e)
}

/// `a * b = p + e` exactly, barring underflow.
fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let e = a.mul_add(b, -p);
    (p, e)
}

// below this the product error may itself be rounded away
const TWO_PROD_UNSAFE: f64 = f64::MIN_POSITIVE * (1u64 << 54) as f64;

/// Approximate real numbers as midpoint-radius balls.
///
/// Arithmetic is exact whenever the floating-point result is, and
/// otherwise widens the radius.  Equality is only decided when it can be
/// certified, so most comparisons of inexact values are `Unknown`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RealBallField;

impl RealBallField {
    pub fn new() -> Self {
        RealBallField
    }

    fn store(&self, res: &mut Ball, b: Ball) -> Status {
        *res = b;
        if res.is_finite() {
            Status::SUCCESS
        } else {
            Status::UNABLE
        }
    }

    fn disjoint(&self, x: &Ball, y: &Ball) -> bool {
        let (d, e) = two_sum(x.mid, -y.mid);
        d.abs() - e.abs() > rad_up(x.rad + y.rad)
    }
}

impl Ring for RealBallField {
    type Element = Ball;

    fn flags(&self) -> RingFlags {
        RingFlags::COMMUTATIVE | RingFlags::FIELD | RingFlags::INTEGRAL_DOMAIN
    }

    fn write_context(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Real numbers (arb, double precision balls)")
    }

    fn write_element(&self, f: &mut fmt::Formatter<'_>, x: &Ball) -> fmt::Result {
        if x.is_exact() {
            write!(f, "{:e}", x.mid)
        } else {
            write!(f, "[{:e} +/- {:.3e}]", x.mid, x.rad)
        }
    }

    fn init(&self) -> Ball {
        Ball::default()
    }

    fn set(&self, res: &mut Ball, x: &Ball) -> Status {
        *res = *x;
        Status::SUCCESS
    }

    fn randtest(&self, res: &mut Ball, state: &mut RandState) -> Status {
        // small dyadic midpoints keep many results exact
        let num = randtest_i64(state) >> randint(state, 64) as u32;
        let mid = num as f64 / (1u64 << randint(state, 16)) as f64;
        let rad = match randint(state, 4) {
            0 => mid.abs() * f64::EPSILON * randint(state, 16) as f64,
            _ => 0.0,
        };
        *res = Ball { mid, rad };
        Status::SUCCESS
    }

    fn zero(&self, res: &mut Ball) -> Status {
        *res = Ball::exact(0.0);
        Status::SUCCESS
    }

    fn one(&self, res: &mut Ball) -> Status {
        *res = Ball::exact(1.0);
        Status::SUCCESS
    }

    fn set_bigint(&self, res: &mut Ball, v: &BigInt) -> Status {
        let mid = v.to_f64().unwrap_or(f64::NAN);
        let exact = BigInt::from_f64(mid).map_or(false, |m| &m == v);
        let rad = if exact {
            0.0
        } else {
            rad_up(mid.abs() * f64::EPSILON)
        };
        self.store(res, Ball { mid, rad })
    }

    fn set_rational(&self, res: &mut Ball, v: &BigRational) -> Status {
        let mid = v.to_f64().unwrap_or(f64::NAN);
        let exact = BigRational::from_float(mid).map_or(false, |m| &m == v);
        let rad = if exact {
            0.0
        } else {
            // the nearest double may still be one ulp out after the
            // numerator and denominator were rounded separately
            rad_up(mid.abs() * 2.0 * f64::EPSILON + f64::MIN_POSITIVE)
        };
        self.store(res, Ball { mid, rad })
    }

    /// `True` only for identical exact balls, `False` for disjoint balls.
    fn equal(&self, x: &Ball, y: &Ball) -> Truth {
        if x.is_exact() && y.is_exact() && x.mid == y.mid {
            Truth::True
        } else if self.disjoint(x, y) {
            Truth::False
        } else {
            Truth::Unknown
        }
    }

    fn neg(&self, res: &mut Ball, x: &Ball) -> Status {
        self.store(
            res,
            Ball {
                mid: -x.mid,
                rad: x.rad,
            },
        )
    }

    fn add(&self, res: &mut Ball, x: &Ball, y: &Ball) -> Status {
        let (mid, err) = two_sum(x.mid, y.mid);
        let rad = x.rad + y.rad + err.abs();
        let rad = if rad == 0.0 { 0.0 } else { rad_up(rad) };
        self.store(res, Ball { mid, rad })
    }

    fn mul(&self, res: &mut Ball, x: &Ball, y: &Ball) -> Status {
        let (mid, err) = two_prod(x.mid, y.mid);
        let mut rad = x.mid.abs() * y.rad + y.mid.abs() * x.rad + x.rad * y.rad + err.abs();
        if x.mid != 0.0 && y.mid != 0.0 && mid.abs() < TWO_PROD_UNSAFE {
            rad += f64::MIN_POSITIVE;
        }
        let rad = if rad == 0.0 { 0.0 } else { rad_up(rad) };
        self.store(res, Ball { mid, rad })
    }

    /// `DOMAIN` for an exact zero; `UNABLE` when the ball merely contains
    /// zero.
    fn inv(&self, res: &mut Ball, x: &Ball) -> Status {
        if x.is_exact() && x.mid == 0.0 {
            return Status::DOMAIN;
        }
        if x.contains_zero() {
            return Status::UNABLE;
        }
        let m = x.mid;
        let q = 1.0 / m;
        let err = q.mul_add(m, -1.0);
        let rad = if x.is_exact() && err == 0.0 {
            0.0
        } else {
            // |1/t - 1/m| <= r / (|m| (|m| - r)) for |t - m| <= r
            let lo = m.abs() - x.rad;
            rad_up(x.rad / (m.abs() * lo) + q.abs() * f64::EPSILON)
        };
        self.store(res, Ball { mid: q, rad })
    }

    fn is_zero(&self, x: &Ball) -> Truth {
        if x.is_exact() && x.mid.is_zero() {
            Truth::True
        } else if !x.contains_zero() {
            Truth::False
        } else {
            Truth::Unknown
        }
    }
}
