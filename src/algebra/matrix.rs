use super::{storage, BinaryOp, RandState, Ring, Status, Truth, VectorOps};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Dense row-major matrix of elements of one context.
///
/// The shape is fixed at construction.  Entries are initialised on
/// construction and finalised on drop.
pub struct RingMatrix<R: Ring> {
    nrows: usize,
    ncols: usize,
    data: Box<[R::Element]>,
}

impl<R: Ring> RingMatrix<R> {
    /// New `nrows × ncols` matrix of zeros.
    pub fn new(ring: &R, nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            data: storage::init_elements(ring, nrows * ncols).into_boxed_slice(),
        }
    }

    /// New `n × n` identity matrix.
    pub fn identity(ring: &R, n: usize) -> (Self, Status) {
        let mut mat = Self::new(ring, n, n);
        let status = ring.mat_one(&mut mat);
        (mat, status)
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn size(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// True if the matrix has no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entries in row-major order.
    pub fn data(&self) -> &[R::Element] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [R::Element] {
        &mut self.data
    }

    pub fn row(&self, r: usize) -> &[R::Element] {
        assert!(r < self.nrows);
        &self.data[(r * self.ncols)..(r + 1) * self.ncols]
    }

    pub fn row_mut(&mut self, r: usize) -> &mut [R::Element] {
        assert!(r < self.nrows);
        &mut self.data[(r * self.ncols)..(r + 1) * self.ncols]
    }

    /// Exchange two rows without copying any entry.
    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        assert!(r1 < self.nrows && r2 < self.nrows);
        if r1 == r2 {
            return;
        }
        let (lo, hi) = if r1 < r2 { (r1, r2) } else { (r2, r1) };
        let n = self.ncols;
        let (head, tail) = self.data.split_at_mut(hi * n);
        head[(lo * n)..(lo + 1) * n].swap_with_slice(&mut tail[..n]);
    }

    fn index_linear(&self, idx: (usize, usize)) -> usize {
        assert!(idx.0 < self.nrows && idx.1 < self.ncols);
        idx.0 * self.ncols + idx.1
    }
}

impl<R: Ring> Index<(usize, usize)> for RingMatrix<R> {
    type Output = R::Element;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data[self.index_linear(idx)]
    }
}

impl<R: Ring> IndexMut<(usize, usize)> for RingMatrix<R> {
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

/// Matrix operations built from the dispatch layer and the vector engine.
///
/// Shape mismatches are precondition violations and panic; they are
/// never reported as `DOMAIN`.
pub trait MatrixOps: Ring {
    fn mat_init(&self, nrows: usize, ncols: usize) -> RingMatrix<Self> {
        RingMatrix::new(self, nrows, ncols)
    }

    /// Explicit copy, `res = a`.
    fn mat_set(&self, res: &mut RingMatrix<Self>, a: &RingMatrix<Self>) -> Status {
        assert!(res.size() == a.size());
        self.vec_set(res.data_mut(), a.data())
    }

    fn mat_zero(&self, res: &mut RingMatrix<Self>) -> Status {
        self.vec_zero(res.data_mut())
    }

    /// Ones on the main diagonal, zeros elsewhere.
    fn mat_one(&self, res: &mut RingMatrix<Self>) -> Status {
        let mut status = self.mat_zero(res);
        for i in 0..usize::min(res.nrows(), res.ncols()) {
            status |= self.one(&mut res[(i, i)]);
        }
        status
    }

    fn mat_randtest(&self, res: &mut RingMatrix<Self>, state: &mut RandState) -> Status {
        self.vec_randtest(res.data_mut(), state)
    }

    /// Matrices of different shapes compare `False`.
    fn mat_equal(&self, a: &RingMatrix<Self>, b: &RingMatrix<Self>) -> Truth {
        if a.size() != b.size() {
            return Truth::False;
        }
        self.vec_equal(a.data(), b.data())
    }

    fn mat_is_zero(&self, a: &RingMatrix<Self>) -> Truth {
        self.vec_is_zero(a.data())
    }

    fn mat_is_one(&self, a: &RingMatrix<Self>) -> Truth {
        let mut out = Truth::True;
        for i in 0..a.nrows() {
            for j in 0..a.ncols() {
                let t = if i == j {
                    self.is_one(&a[(i, j)])
                } else {
                    self.is_zero(&a[(i, j)])
                };
                out = out & t;
                if out.is_false() {
                    return out;
                }
            }
        }
        out
    }

    fn mat_neg(&self, res: &mut RingMatrix<Self>, a: &RingMatrix<Self>) -> Status {
        assert!(res.size() == a.size());
        self.vec_neg(res.data_mut(), a.data())
    }

    fn mat_add(
        &self,
        res: &mut RingMatrix<Self>,
        a: &RingMatrix<Self>,
        b: &RingMatrix<Self>,
    ) -> Status {
        assert!(res.size() == a.size() && a.size() == b.size());
        self.vec_add(res.data_mut(), a.data(), b.data())
    }

    fn mat_sub(
        &self,
        res: &mut RingMatrix<Self>,
        a: &RingMatrix<Self>,
        b: &RingMatrix<Self>,
    ) -> Status {
        assert!(res.size() == a.size() && a.size() == b.size());
        self.vec_sub(res.data_mut(), a.data(), b.data())
    }

    /// Classical product `res = a * b`.
    ///
    /// Each entry is accumulated from the context's zero over the shared
    /// dimension in index order, using only `add` and `mul`.  The status
    /// of every step is accumulated.
    fn mat_mul_classical(
        &self,
        res: &mut RingMatrix<Self>,
        a: &RingMatrix<Self>,
        b: &RingMatrix<Self>,
    ) -> Status {
        assert!(
            a.ncols() == b.nrows() && res.nrows() == a.nrows() && res.ncols() == b.ncols()
        );

        let mut status = Status::SUCCESS;
        let mut t = self.init();

        for i in 0..a.nrows() {
            for j in 0..b.ncols() {
                let r = &mut res[(i, j)];
                status |= self.zero(r);
                for k in 0..a.ncols() {
                    status |= self.mul(&mut t, &a[(i, k)], &b[(k, j)]);
                    status |= self.binary_assign(BinaryOp::Add, r, &t);
                }
            }
        }
        status
    }

    /// Diagnostic rendering, one bracketed row per line.
    fn mat_write(&self, f: &mut fmt::Formatter<'_>, a: &RingMatrix<Self>) -> fmt::Result {
        if a.nrows() == 0 {
            return write!(f, "[{} x {} matrix]", a.nrows(), a.ncols());
        }
        write!(f, "[")?;
        for i in 0..a.nrows() {
            if i > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "{}", self.vec_display(a.row(i)))?;
        }
        write!(f, "]")
    }

    /// `Display` adaptor for a matrix of elements of this context.
    fn mat_display<'a>(&'a self, a: &'a RingMatrix<Self>) -> MatrixDisplay<'a, Self> {
        MatrixDisplay { ring: self, a }
    }
}

impl<R: Ring> MatrixOps for R {}

/// Renders a matrix one bracketed row per line.
pub struct MatrixDisplay<'a, R: Ring> {
    ring: &'a R,
    a: &'a RingMatrix<R>,
}

impl<R: Ring> fmt::Display for MatrixDisplay<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ring.mat_write(f, self.a)
    }
}
