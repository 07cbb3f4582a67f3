use super::{BinaryOp, RandState, RingFlags, Scalar, Status, Truth};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive};
use std::fmt;

// All generic algorithms (vectors, matrices, the law harness) go
// through this trait.  Each concrete structure supplies one
// implementation, which plays the role of its operation table.

/// Operation table of one algebraic structure.
///
/// Every operation writes into a caller-owned output element and returns a
/// [`Status`].  Elements must only ever be passed to the context that
/// created them; this is a caller precondition and is not reported through
/// the status.
///
/// Output/input aliasing is expressed through the `*_assign` family of
/// methods, whose default implementations move the aliased operand out of
/// the output slot with an O(1) [`swap`](Ring::swap) instead of copying it.
pub trait Ring: Sized {
    /// Element representation.  Its layout is defined entirely by the
    /// context; elements are not self-describing.
    type Element;

    /// Capability flags consulted by generic algorithms.
    fn flags(&self) -> RingFlags;

    /// Size in bytes of one element slot.
    fn element_size(&self) -> usize {
        std::mem::size_of::<Self::Element>()
    }

    /// Diagnostic description of the context.
    fn write_context(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Diagnostic rendering of an element.  No parse-back guarantee.
    fn write_element(&self, f: &mut fmt::Formatter<'_>, x: &Self::Element) -> fmt::Result;

    // ---------------------------------------------------------
    // element lifecycle
    // ---------------------------------------------------------

    /// Initialise a new element.  The value is the additive identity.
    fn init(&self) -> Self::Element;

    /// Exchange two elements without allocating.
    fn swap(&self, a: &mut Self::Element, b: &mut Self::Element) {
        std::mem::swap(a, b);
    }

    /// Explicit copy, `res = x`.
    fn set(&self, res: &mut Self::Element, x: &Self::Element) -> Status;

    /// Overwrite `res` with a random element suitable for testing.
    fn randtest(&self, res: &mut Self::Element, state: &mut RandState) -> Status;

    // ---------------------------------------------------------
    // constants and conversions
    // ---------------------------------------------------------

    fn zero(&self, res: &mut Self::Element) -> Status;

    fn one(&self, res: &mut Self::Element) -> Status;

    fn set_ui(&self, res: &mut Self::Element, v: u64) -> Status {
        self.set_bigint(res, &BigInt::from(v))
    }

    fn set_si(&self, res: &mut Self::Element, v: i64) -> Status {
        self.set_bigint(res, &BigInt::from(v))
    }

    fn set_bigint(&self, res: &mut Self::Element, v: &BigInt) -> Status;

    /// Image of a rational number.  `DOMAIN` when the denominator is not
    /// invertible in the context.
    fn set_rational(&self, res: &mut Self::Element, v: &BigRational) -> Status {
        let mut num = self.init();
        let mut den = self.init();
        let status = self.set_bigint(&mut num, v.numer()) | self.set_bigint(&mut den, v.denom());
        if !status.is_success() {
            return status;
        }
        self.div(res, &num, &den)
    }

    fn set_scalar(&self, res: &mut Self::Element, s: Scalar<'_>) -> Status {
        match s {
            Scalar::Ui(v) => self.set_ui(res, v),
            Scalar::Si(v) => self.set_si(res, v),
            Scalar::Int(v) => self.set_bigint(res, v),
            Scalar::Rat(v) => self.set_rational(res, v),
        }
    }

    // ---------------------------------------------------------
    // predicates
    // ---------------------------------------------------------

    fn equal(&self, x: &Self::Element, y: &Self::Element) -> Truth;

    fn is_zero(&self, x: &Self::Element) -> Truth {
        let mut t = self.init();
        if !self.zero(&mut t).is_success() {
            return Truth::Unknown;
        }
        self.equal(x, &t)
    }

    fn is_one(&self, x: &Self::Element) -> Truth {
        let mut t = self.init();
        if !self.one(&mut t).is_success() {
            return Truth::Unknown;
        }
        self.equal(x, &t)
    }

    // ---------------------------------------------------------
    // arithmetic
    // ---------------------------------------------------------

    fn neg(&self, res: &mut Self::Element, x: &Self::Element) -> Status;

    fn add(&self, res: &mut Self::Element, x: &Self::Element, y: &Self::Element) -> Status;

    fn sub(&self, res: &mut Self::Element, x: &Self::Element, y: &Self::Element) -> Status {
        let mut t = self.init();
        let status = self.neg(&mut t, y);
        if !status.is_success() {
            return status;
        }
        self.add(res, x, &t)
    }

    fn mul(&self, res: &mut Self::Element, x: &Self::Element, y: &Self::Element) -> Status;

    /// Multiplicative inverse.  `DOMAIN` for non-units.
    fn inv(&self, res: &mut Self::Element, x: &Self::Element) -> Status;

    /// `res = x * inv(y)`.
    fn div(&self, res: &mut Self::Element, x: &Self::Element, y: &Self::Element) -> Status {
        let mut t = self.init();
        let status = self.inv(&mut t, y);
        if !status.is_success() {
            return status;
        }
        self.mul(res, x, &t)
    }

    /// Square-and-multiply through [`mul`](Ring::mul).  Stops at the first
    /// step that does not succeed and returns its status.
    fn pow_ui(&self, res: &mut Self::Element, x: &Self::Element, e: u64) -> Status {
        pow_ui_binexp(self, res, x, e)
    }

    /// Signed exponent.  Negative exponents invert first.
    fn pow_si(&self, res: &mut Self::Element, x: &Self::Element, e: i64) -> Status {
        if e >= 0 {
            return self.pow_ui(res, x, e as u64);
        }
        let mut t = self.init();
        let status = self.inv(&mut t, x);
        if !status.is_success() {
            return status;
        }
        self.pow_ui(res, &t, e.unsigned_abs())
    }

    /// Arbitrary precision exponent.
    fn pow_bigint(&self, res: &mut Self::Element, x: &Self::Element, e: &BigInt) -> Status {
        if let Some(u) = e.to_u64() {
            return self.pow_ui(res, x, u);
        }
        if let Some(s) = e.to_i64() {
            return self.pow_si(res, x, s);
        }

        let mut base = self.init();
        let status = if e.is_negative() {
            self.inv(&mut base, x)
        } else {
            self.set(&mut base, x)
        };
        if !status.is_success() {
            return status;
        }

        // |e| > 2^63 here, so the leading digit is a one
        let digits = e.magnitude().to_radix_be(2);
        let status = self.set(res, &base);
        if !status.is_success() {
            return status;
        }
        for &bit in &digits[1..] {
            let status = self.binary_square(BinaryOp::Mul, res);
            if !status.is_success() {
                return status;
            }
            if bit == 1 {
                let status = self.binary_assign(BinaryOp::Mul, res, &base);
                if !status.is_success() {
                    return status;
                }
            }
        }
        Status::SUCCESS
    }

    // ---------------------------------------------------------
    // generic dispatch over operation tags
    // ---------------------------------------------------------

    fn binary(
        &self,
        op: BinaryOp,
        res: &mut Self::Element,
        x: &Self::Element,
        y: &Self::Element,
    ) -> Status {
        match op {
            BinaryOp::Add => self.add(res, x, y),
            BinaryOp::Sub => self.sub(res, x, y),
            BinaryOp::Mul => self.mul(res, x, y),
            BinaryOp::Div => self.div(res, x, y),
        }
    }

    /// Typed-operand variant, `res = x op s`.  Contexts may override this
    /// with a fast path, but the result must match converting `s` with
    /// [`set_scalar`](Ring::set_scalar) and calling [`binary`](Ring::binary).
    fn binary_scalar(
        &self,
        op: BinaryOp,
        res: &mut Self::Element,
        x: &Self::Element,
        s: Scalar<'_>,
    ) -> Status {
        let mut t = self.init();
        let status = self.set_scalar(&mut t, s);
        if !status.is_success() {
            return status;
        }
        self.binary(op, res, x, &t)
    }

    fn add_scalar<'a>(
        &self,
        res: &mut Self::Element,
        x: &Self::Element,
        s: impl Into<Scalar<'a>>,
    ) -> Status {
        self.binary_scalar(BinaryOp::Add, res, x, s.into())
    }

    fn sub_scalar<'a>(
        &self,
        res: &mut Self::Element,
        x: &Self::Element,
        s: impl Into<Scalar<'a>>,
    ) -> Status {
        self.binary_scalar(BinaryOp::Sub, res, x, s.into())
    }

    fn mul_scalar<'a>(
        &self,
        res: &mut Self::Element,
        x: &Self::Element,
        s: impl Into<Scalar<'a>>,
    ) -> Status {
        self.binary_scalar(BinaryOp::Mul, res, x, s.into())
    }

    fn div_scalar<'a>(
        &self,
        res: &mut Self::Element,
        x: &Self::Element,
        s: impl Into<Scalar<'a>>,
    ) -> Status {
        self.binary_scalar(BinaryOp::Div, res, x, s.into())
    }

    // ---------------------------------------------------------
    // aliased forms
    // ---------------------------------------------------------

    /// `res = res op y`
    fn binary_assign(&self, op: BinaryOp, res: &mut Self::Element, y: &Self::Element) -> Status {
        let mut x = self.init();
        self.swap(res, &mut x);
        self.binary(op, res, &x, y)
    }

    /// `res = x op res`
    fn binary_assign_rev(
        &self,
        op: BinaryOp,
        x: &Self::Element,
        res: &mut Self::Element,
    ) -> Status {
        let mut y = self.init();
        self.swap(res, &mut y);
        self.binary(op, res, x, &y)
    }

    /// `res = res op res`
    fn binary_square(&self, op: BinaryOp, res: &mut Self::Element) -> Status {
        let mut x = self.init();
        self.swap(res, &mut x);
        self.binary(op, res, &x, &x)
    }

    /// `res = res op s`
    fn binary_scalar_assign(&self, op: BinaryOp, res: &mut Self::Element, s: Scalar<'_>) -> Status {
        let mut x = self.init();
        self.swap(res, &mut x);
        self.binary_scalar(op, res, &x, s)
    }

    fn neg_assign(&self, res: &mut Self::Element) -> Status {
        let mut x = self.init();
        self.swap(res, &mut x);
        self.neg(res, &x)
    }

    fn inv_assign(&self, res: &mut Self::Element) -> Status {
        let mut x = self.init();
        self.swap(res, &mut x);
        self.inv(res, &x)
    }

    fn pow_ui_assign(&self, res: &mut Self::Element, e: u64) -> Status {
        let mut x = self.init();
        self.swap(res, &mut x);
        self.pow_ui(res, &x, e)
    }

    fn pow_si_assign(&self, res: &mut Self::Element, e: i64) -> Status {
        let mut x = self.init();
        self.swap(res, &mut x);
        self.pow_si(res, &x, e)
    }

    // ---------------------------------------------------------
    // diagnostics
    // ---------------------------------------------------------

    /// `Display` adaptor for an element of this context.
    fn display<'a>(&'a self, x: &'a Self::Element) -> ElementDisplay<'a, Self> {
        ElementDisplay { ring: self, x }
    }

    /// `Display` adaptor for the context itself.
    fn describe(&self) -> ContextDisplay<'_, Self> {
        ContextDisplay { ring: self }
    }
}

/// Left-to-right binary exponentiation through the dispatch layer.
///
/// Contexts that override [`Ring::pow_ui`] to add a cheap precheck call
/// this for the actual computation.
pub fn pow_ui_binexp<R: Ring>(ring: &R, res: &mut R::Element, x: &R::Element, e: u64) -> Status {
    if e == 0 {
        return ring.one(res);
    }
    let status = ring.set(res, x);
    if !status.is_success() {
        return status;
    }
    let top = 63 - e.leading_zeros();
    for i in (0..top).rev() {
        let status = ring.binary_square(BinaryOp::Mul, res);
        if !status.is_success() {
            return status;
        }
        if (e >> i) & 1 == 1 {
            let status = ring.binary_assign(BinaryOp::Mul, res, x);
            if !status.is_success() {
                return status;
            }
        }
    }
    Status::SUCCESS
}

/// Renders an element through [`Ring::write_element`].
pub struct ElementDisplay<'a, R: Ring> {
    ring: &'a R,
    x: &'a R::Element,
}

impl<R: Ring> fmt::Display for ElementDisplay<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ring.write_element(f, self.x)
    }
}

/// Renders a context through [`Ring::write_context`].
pub struct ContextDisplay<'a, R: Ring> {
    ring: &'a R,
}

impl<R: Ring> fmt::Display for ContextDisplay<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ring.write_context(f)
    }
}
