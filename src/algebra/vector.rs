use super::{storage, BinaryOp, RandState, Ring, Status, Truth};
use itertools::izip;
use std::fmt;
use std::iter::zip;
use std::ops::{Deref, DerefMut};

/// Fixed-length owned sequence of elements of one context.
///
/// The length is set at construction and cannot change.  Elements are
/// initialised on construction and finalised on drop.
pub struct RingVector<R: Ring> {
    data: Box<[R::Element]>,
}

impl<R: Ring> RingVector<R> {
    /// New vector of `len` zero elements.
    pub fn new(ring: &R, len: usize) -> Self {
        Self {
            data: storage::init_elements(ring, len).into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[R::Element] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [R::Element] {
        &mut self.data
    }
}

impl<R: Ring> Deref for RingVector<R> {
    type Target = [R::Element];
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<R: Ring> DerefMut for RingVector<R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Vector operations are built only from per-position dispatch calls.
// The blanket implementation below means no context can replace them
// with structure-specific versions.

/// Elementwise operations on slices of elements of a context.
///
/// Length mismatches are precondition violations and panic.  Empty
/// slices are valid: every operation is then a no-op returning
/// `SUCCESS`, and predicates return `True`.
pub trait VectorOps: Ring {
    /// New zero vector of length `len`.
    fn vec_init(&self, len: usize) -> RingVector<Self> {
        RingVector::new(self, len)
    }

    /// Explicit copy, `res = src`.
    fn vec_set(&self, res: &mut [Self::Element], src: &[Self::Element]) -> Status {
        assert_eq!(res.len(), src.len());
        zip(res, src).fold(Status::SUCCESS, |s, (r, x)| s | self.set(r, x))
    }

    fn vec_zero(&self, res: &mut [Self::Element]) -> Status {
        res.iter_mut()
            .fold(Status::SUCCESS, |s, r| s | self.zero(r))
    }

    fn vec_randtest(&self, res: &mut [Self::Element], state: &mut RandState) -> Status {
        res.iter_mut()
            .fold(Status::SUCCESS, |s, r| s | self.randtest(r, state))
    }

    /// Positionwise swap of two vectors of equal length.
    fn vec_swap(&self, a: &mut [Self::Element], b: &mut [Self::Element]) {
        assert_eq!(a.len(), b.len());
        zip(a, b).for_each(|(a, b)| self.swap(a, b));
    }

    fn vec_equal(&self, x: &[Self::Element], y: &[Self::Element]) -> Truth {
        assert_eq!(x.len(), y.len());
        Truth::all(zip(x, y).map(|(x, y)| self.equal(x, y)))
    }

    fn vec_is_zero(&self, x: &[Self::Element]) -> Truth {
        Truth::all(x.iter().map(|x| self.is_zero(x)))
    }

    fn vec_neg(&self, res: &mut [Self::Element], x: &[Self::Element]) -> Status {
        assert_eq!(res.len(), x.len());
        zip(res, x).fold(Status::SUCCESS, |s, (r, x)| s | self.neg(r, x))
    }

    fn vec_add(
        &self,
        res: &mut [Self::Element],
        x: &[Self::Element],
        y: &[Self::Element],
    ) -> Status {
        self.vec_binary(BinaryOp::Add, res, x, y)
    }

    fn vec_sub(
        &self,
        res: &mut [Self::Element],
        x: &[Self::Element],
        y: &[Self::Element],
    ) -> Status {
        self.vec_binary(BinaryOp::Sub, res, x, y)
    }

    /// `res = x op y` positionwise.
    fn vec_binary(
        &self,
        op: BinaryOp,
        res: &mut [Self::Element],
        x: &[Self::Element],
        y: &[Self::Element],
    ) -> Status {
        assert_eq!(res.len(), x.len());
        assert_eq!(res.len(), y.len());
        izip!(res, x, y).fold(Status::SUCCESS, |s, (r, x, y)| {
            s | self.binary(op, r, x, y)
        })
    }

    /// `res = res + y`
    fn vec_add_assign(&self, res: &mut [Self::Element], y: &[Self::Element]) -> Status {
        assert_eq!(res.len(), y.len());
        zip(res, y).fold(Status::SUCCESS, |s, (r, y)| {
            s | self.binary_assign(BinaryOp::Add, r, y)
        })
    }

    /// `res = x + res`
    fn vec_add_assign_rev(&self, x: &[Self::Element], res: &mut [Self::Element]) -> Status {
        assert_eq!(res.len(), x.len());
        zip(x, res).fold(Status::SUCCESS, |s, (x, r)| {
            s | self.binary_assign_rev(BinaryOp::Add, x, r)
        })
    }

    /// `res = res + res`
    fn vec_double(&self, res: &mut [Self::Element]) -> Status {
        res.iter_mut().fold(Status::SUCCESS, |s, r| {
            s | self.binary_square(BinaryOp::Add, r)
        })
    }

    /// `res = x * c` positionwise, with `c` on the right.
    fn vec_mul_scalar(
        &self,
        res: &mut [Self::Element],
        x: &[Self::Element],
        c: &Self::Element,
    ) -> Status {
        assert_eq!(res.len(), x.len());
        zip(res, x).fold(Status::SUCCESS, |s, (r, x)| s | self.mul(r, x, c))
    }

    /// `res = res * c`
    fn vec_mul_scalar_assign(&self, res: &mut [Self::Element], c: &Self::Element) -> Status {
        res.iter_mut().fold(Status::SUCCESS, |s, r| {
            s | self.binary_assign(BinaryOp::Mul, r, c)
        })
    }

    /// `res = sum_i x[i] * y[i]`, accumulated in index order from zero.
    fn vec_dot(
        &self,
        res: &mut Self::Element,
        x: &[Self::Element],
        y: &[Self::Element],
    ) -> Status {
        assert_eq!(x.len(), y.len());
        let mut status = self.zero(res);
        let mut t = self.init();
        for (x, y) in zip(x, y) {
            status |= self.mul(&mut t, x, y);
            status |= self.binary_assign(BinaryOp::Add, res, &t);
        }
        status
    }

    /// `Display` adaptor for a slice of elements.
    fn vec_display<'a>(&'a self, x: &'a [Self::Element]) -> VectorDisplay<'a, Self> {
        VectorDisplay { ring: self, x }
    }
}

impl<R: Ring> VectorOps for R {}

/// Renders a slice of elements as `[a, b, c]`.
pub struct VectorDisplay<'a, R: Ring> {
    ring: &'a R,
    x: &'a [R::Element],
}

impl<R: Ring> fmt::Display for VectorDisplay<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.x.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            self.ring.write_element(f, x)?;
        }
        write!(f, "]")
    }
}
