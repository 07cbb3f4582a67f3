use crate::algebra::*;
use num_bigint::BigInt;
use num_rational::BigRational;
use std::fmt;

/// Maximum length of a random polynomial.
const RANDTEST_LEN: u64 = 6;

/// Dense univariate polynomials over a base ring.
///
/// Elements are coefficient vectors, constant term first, with no
/// trailing coefficient the base certifies to be zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolynomialRing<R: Ring> {
    base: R,
    degree_limit: Option<usize>,
}

impl<R: Ring> PolynomialRing<R> {
    pub fn new(base: R) -> Self {
        Self {
            base,
            degree_limit: None,
        }
    }

    /// Results of degree above `limit` are reported as `UNABLE`.
    pub fn with_degree_limit(base: R, limit: usize) -> Self {
        Self {
            base,
            degree_limit: Some(limit),
        }
    }

    pub fn base(&self) -> &R {
        &self.base
    }

    pub fn degree_limit(&self) -> Option<usize> {
        self.degree_limit
    }

    /// Degree, or `None` for the zero polynomial.
    pub fn degree(&self, x: &[R::Element]) -> Option<usize> {
        x.len().checked_sub(1)
    }

    fn normalise(&self, x: &mut Vec<R::Element>) {
        while let Some(c) = x.last() {
            if !self.base.is_zero(c).is_true() {
                break;
            }
            x.pop();
        }
    }

    fn check(&self, x: &[R::Element]) -> Status {
        match (self.degree_limit, self.degree(x)) {
            (Some(limit), Some(d)) if d > limit => Status::UNABLE,
            _ => Status::SUCCESS,
        }
    }

    /// Constant polynomial computed by `f` on a fresh coefficient.
    fn set_constant<F>(&self, res: &mut Vec<R::Element>, f: F) -> Status
    where
        F: FnOnce(&mut R::Element) -> Status,
    {
        res.clear();
        let mut c = self.base.init();
        let status = f(&mut c);
        res.push(c);
        self.normalise(res);
        status
    }

    /// `res = x op y` coefficientwise for `op` in `{Add, Sub}`.
    fn add_sub(
        &self,
        op: BinaryOp,
        res: &mut Vec<R::Element>,
        x: &[R::Element],
        y: &[R::Element],
    ) -> Status {
        let base = &self.base;
        let len = x.len().max(y.len());
        let zero = base.init();
        let mut out = Vec::with_capacity(len);
        let mut status = Status::SUCCESS;

        for i in 0..len {
            let mut c = base.init();
            let xi = x.get(i).unwrap_or(&zero);
            let yi = y.get(i).unwrap_or(&zero);
            status |= base.binary(op, &mut c, xi, yi);
            out.push(c);
        }
        self.normalise(&mut out);
        *res = out;
        status | self.check(res)
    }
}

impl<R: Ring> Ring for PolynomialRing<R> {
    type Element = Vec<R::Element>;

    fn flags(&self) -> RingFlags {
        let bflags = self.base.flags();
        let mut flags = bflags & (RingFlags::COMMUTATIVE | RingFlags::INTEGRAL_DOMAIN);
        if bflags.is_size_limited() || self.degree_limit.is_some() {
            flags |= RingFlags::SIZE_LIMITED;
        }
        flags
    }

    fn write_context(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ring of polynomials over ")?;
        self.base.write_context(f)?;
        if let Some(limit) = self.degree_limit {
            write!(f, " with degree limit {}", limit)?;
        }
        Ok(())
    }

    fn write_element(&self, f: &mut fmt::Formatter<'_>, x: &Vec<R::Element>) -> fmt::Result {
        write!(f, "{}", self.base.vec_display(x))
    }

    fn init(&self) -> Vec<R::Element> {
        Vec::new()
    }

    fn set(&self, res: &mut Vec<R::Element>, x: &Vec<R::Element>) -> Status {
        res.truncate(x.len());
        while res.len() < x.len() {
            res.push(self.base.init());
        }
        self.base.vec_set(res, x)
    }

    fn randtest(&self, res: &mut Vec<R::Element>, state: &mut RandState) -> Status {
        let mut len = randint(state, RANDTEST_LEN) as usize;
        if let Some(limit) = self.degree_limit {
            len = len.min(limit + 1);
        }
        let mut v = storage::init_elements(&self.base, len);
        let status = self.base.vec_randtest(&mut v, state);
        self.normalise(&mut v);
        *res = v;
        status
    }

    fn zero(&self, res: &mut Vec<R::Element>) -> Status {
        res.clear();
        Status::SUCCESS
    }

    fn one(&self, res: &mut Vec<R::Element>) -> Status {
        self.set_constant(res, |c| self.base.one(c))
    }

    fn set_ui(&self, res: &mut Vec<R::Element>, v: u64) -> Status {
        self.set_constant(res, |c| self.base.set_ui(c, v))
    }

    fn set_si(&self, res: &mut Vec<R::Element>, v: i64) -> Status {
        self.set_constant(res, |c| self.base.set_si(c, v))
    }

    fn set_bigint(&self, res: &mut Vec<R::Element>, v: &BigInt) -> Status {
        self.set_constant(res, |c| self.base.set_bigint(c, v))
    }

    fn set_rational(&self, res: &mut Vec<R::Element>, v: &BigRational) -> Status {
        self.set_constant(res, |c| self.base.set_rational(c, v))
    }

    fn equal(&self, x: &Vec<R::Element>, y: &Vec<R::Element>) -> Truth {
        let zero = self.base.init();
        let len = x.len().max(y.len());
        Truth::all((0..len).map(|i| {
            let xi = x.get(i).unwrap_or(&zero);
            let yi = y.get(i).unwrap_or(&zero);
            self.base.equal(xi, yi)
        }))
    }

    fn is_zero(&self, x: &Vec<R::Element>) -> Truth {
        self.base.vec_is_zero(x)
    }

    fn neg(&self, res: &mut Vec<R::Element>, x: &Vec<R::Element>) -> Status {
        let mut out = storage::init_elements(&self.base, x.len());
        let status = self.base.vec_neg(&mut out, x);
        self.normalise(&mut out);
        *res = out;
        status
    }

    fn add(&self, res: &mut Vec<R::Element>, x: &Vec<R::Element>, y: &Vec<R::Element>) -> Status {
        self.add_sub(BinaryOp::Add, res, x, y)
    }

    fn sub(&self, res: &mut Vec<R::Element>, x: &Vec<R::Element>, y: &Vec<R::Element>) -> Status {
        self.add_sub(BinaryOp::Sub, res, x, y)
    }

    /// Schoolbook product.
    fn mul(&self, res: &mut Vec<R::Element>, x: &Vec<R::Element>, y: &Vec<R::Element>) -> Status {
        if x.is_empty() || y.is_empty() {
            res.clear();
            return Status::SUCCESS;
        }
        let base = &self.base;
        let mut out = storage::init_elements(base, x.len() + y.len() - 1);
        let mut t = base.init();
        let mut status = Status::SUCCESS;

        for (i, xi) in x.iter().enumerate() {
            for (j, yj) in y.iter().enumerate() {
                status |= base.mul(&mut t, xi, yj);
                status |= base.binary_assign(BinaryOp::Add, &mut out[i + j], &t);
            }
        }
        self.normalise(&mut out);
        *res = out;
        status | self.check(res)
    }

    /// Units are recognised among constants only.  A non-constant over an
    /// integral domain with certified leading coefficient is `DOMAIN`.
    fn inv(&self, res: &mut Vec<R::Element>, x: &Vec<R::Element>) -> Status {
        let base = &self.base;
        match x.len() {
            0 => {
                // the zero polynomial is a unit only in the zero ring
                let zero = base.init();
                self.set_constant(res, |c| base.inv(c, &zero))
            }
            1 => self.set_constant(res, |c| base.inv(c, &x[0])),
            _ => {
                let lead = &x[x.len() - 1];
                if base.flags().is_integral_domain() && base.is_zero(lead).is_false() {
                    Status::DOMAIN
                } else {
                    Status::UNABLE
                }
            }
        }
    }

    /// Over an integral domain the degree of `x^e` is exactly `e deg(x)`,
    /// so an oversized result is reported without computing it.  Otherwise
    /// leading terms may vanish and the product chain decides.
    fn pow_ui(&self, res: &mut Vec<R::Element>, x: &Vec<R::Element>, e: u64) -> Status {
        if let (Some(limit), Some(d)) = (self.degree_limit, self.degree(x)) {
            let predicted = (d as u64).saturating_mul(e);
            if self.base.flags().is_integral_domain() && predicted > limit as u64 {
                return Status::UNABLE;
            }
        }
        pow_ui_binexp(self, res, x, e)
    }
}
