use crate::algebra::*;
use num_bigint::BigInt;
use num_rational::BigRational;
use std::fmt;

/// Ring of `n × n` matrices over a base ring.
///
/// Arithmetic is delegated to the generic matrix engine, so every
/// operation goes through the dispatch layer of the base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixRing<R: Ring> {
    base: R,
    n: usize,
}

impl<R: Ring> MatrixRing<R> {
    pub fn new(base: R, n: usize) -> Self {
        Self { base, n }
    }

    pub fn base(&self) -> &R {
        &self.base
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    /// Zero matrix with `f` applied to every diagonal entry.
    fn set_diagonal<F>(&self, res: &mut RingMatrix<R>, f: F) -> Status
    where
        F: Fn(&mut R::Element) -> Status,
    {
        let mut status = self.base.mat_zero(res);
        for i in 0..self.n {
            status |= f(&mut res[(i, i)]);
        }
        status
    }

    /// Scalar matrix `s I`.
    fn scalar_matrix(&self, res: &mut RingMatrix<R>, s: Scalar<'_>) -> Status {
        self.set_diagonal(res, |d| self.base.set_scalar(d, s))
    }

    // Finds an invertible pivot in `col` at or below the diagonal.
    // Returns the row and the pivot's inverse, or the status explaining
    // why there is none.
    fn find_pivot(
        &self,
        a: &RingMatrix<R>,
        col: usize,
    ) -> Result<(usize, R::Element), Status> {
        let base = &self.base;
        let is_field = base.flags().is_field();
        let mut undecided = false;
        let mut pinv = base.init();

        for r in col..self.n {
            let p = &a[(r, col)];
            if base.is_zero(p).is_true() {
                continue;
            }
            let status = base.inv(&mut pinv, p);
            if status.is_success() {
                return Ok((r, pinv));
            }
            // over a field a non-invertible entry is zero
            if !(is_field && status == Status::DOMAIN) {
                undecided = true;
            }
        }
        if undecided {
            Err(Status::UNABLE)
        } else {
            Err(Status::DOMAIN)
        }
    }

    /// Gauss–Jordan elimination applying the same row operations to the
    /// identity.  Stops at the first step that does not succeed.
    fn gauss_jordan_inverse(&self, res: &mut RingMatrix<R>, x: &RingMatrix<R>) -> Status {
        let base = &self.base;
        let n = self.n;
        let mut a = base.mat_init(n, n);
        let mut b = base.mat_init(n, n);
        let mut t = base.init();
        let mut f = base.init();

        let status = base.mat_set(&mut a, x) | base.mat_one(&mut b);
        if !status.is_success() {
            return status;
        }

        for col in 0..n {
            let (prow, pinv) = match self.find_pivot(&a, col) {
                Ok(p) => p,
                Err(status) => return status,
            };
            a.swap_rows(col, prow);
            b.swap_rows(col, prow);

            // scale the pivot row from the left
            let mut status = Status::SUCCESS;
            for j in 0..n {
                status |= base.binary_assign_rev(BinaryOp::Mul, &pinv, &mut a[(col, j)]);
                status |= base.binary_assign_rev(BinaryOp::Mul, &pinv, &mut b[(col, j)]);
            }
            if !status.is_success() {
                return status;
            }

            for i in (0..n).filter(|&i| i != col) {
                let status = base.set(&mut f, &a[(i, col)]);
                if !status.is_success() {
                    return status;
                }
                if base.is_zero(&f).is_true() {
                    continue;
                }
                let mut status = Status::SUCCESS;
                for j in 0..n {
                    status |= base.mul(&mut t, &f, &a[(col, j)]);
                    status |= base.binary_assign(BinaryOp::Sub, &mut a[(i, j)], &t);
                    status |= base.mul(&mut t, &f, &b[(col, j)]);
                    status |= base.binary_assign(BinaryOp::Sub, &mut b[(i, j)], &t);
                }
                if !status.is_success() {
                    return status;
                }
            }
        }

        std::mem::swap(res, &mut b);
        Status::SUCCESS
    }
}

impl<R: Ring> Ring for MatrixRing<R> {
    type Element = RingMatrix<R>;

    fn flags(&self) -> RingFlags {
        let bflags = self.base.flags();
        let mut flags = RingFlags::empty();
        if bflags.is_finite() {
            flags |= RingFlags::FINITE;
        }
        if bflags.is_size_limited() {
            flags |= RingFlags::SIZE_LIMITED;
        }
        if self.n <= 1 && bflags.is_commutative() {
            flags |= RingFlags::COMMUTATIVE;
        }
        if self.n == 1 {
            flags |= bflags & (RingFlags::FIELD | RingFlags::INTEGRAL_DOMAIN);
        }
        flags
    }

    fn element_size(&self) -> usize {
        std::mem::size_of::<RingMatrix<R>>() + self.n * self.n * self.base.element_size()
    }

    fn write_context(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ring of {} x {} matrices over ", self.n, self.n)?;
        self.base.write_context(f)
    }

    fn write_element(&self, f: &mut fmt::Formatter<'_>, x: &RingMatrix<R>) -> fmt::Result {
        self.base.mat_write(f, x)
    }

    fn init(&self) -> RingMatrix<R> {
        RingMatrix::new(&self.base, self.n, self.n)
    }

    fn set(&self, res: &mut RingMatrix<R>, x: &RingMatrix<R>) -> Status {
        self.base.mat_set(res, x)
    }

    fn randtest(&self, res: &mut RingMatrix<R>, state: &mut RandState) -> Status {
        self.base.mat_randtest(res, state)
    }

    fn zero(&self, res: &mut RingMatrix<R>) -> Status {
        self.base.mat_zero(res)
    }

    fn one(&self, res: &mut RingMatrix<R>) -> Status {
        self.base.mat_one(res)
    }

    fn set_ui(&self, res: &mut RingMatrix<R>, v: u64) -> Status {
        self.scalar_matrix(res, Scalar::Ui(v))
    }

    fn set_si(&self, res: &mut RingMatrix<R>, v: i64) -> Status {
        self.scalar_matrix(res, Scalar::Si(v))
    }

    fn set_bigint(&self, res: &mut RingMatrix<R>, v: &BigInt) -> Status {
        self.scalar_matrix(res, Scalar::Int(v))
    }

    fn set_rational(&self, res: &mut RingMatrix<R>, v: &BigRational) -> Status {
        self.scalar_matrix(res, Scalar::Rat(v))
    }

    fn equal(&self, x: &RingMatrix<R>, y: &RingMatrix<R>) -> Truth {
        self.base.mat_equal(x, y)
    }

    fn is_zero(&self, x: &RingMatrix<R>) -> Truth {
        self.base.mat_is_zero(x)
    }

    fn is_one(&self, x: &RingMatrix<R>) -> Truth {
        self.base.mat_is_one(x)
    }

    fn neg(&self, res: &mut RingMatrix<R>, x: &RingMatrix<R>) -> Status {
        self.base.mat_neg(res, x)
    }

    fn add(&self, res: &mut RingMatrix<R>, x: &RingMatrix<R>, y: &RingMatrix<R>) -> Status {
        self.base.mat_add(res, x, y)
    }

    fn sub(&self, res: &mut RingMatrix<R>, x: &RingMatrix<R>, y: &RingMatrix<R>) -> Status {
        self.base.mat_sub(res, x, y)
    }

    fn mul(&self, res: &mut RingMatrix<R>, x: &RingMatrix<R>, y: &RingMatrix<R>) -> Status {
        self.base.mat_mul_classical(res, x, y)
    }

    /// Gauss–Jordan inverse.  `DOMAIN` for a matrix shown to be singular,
    /// `UNABLE` when the base cannot supply an invertible pivot although
    /// one might exist.
    fn inv(&self, res: &mut RingMatrix<R>, x: &RingMatrix<R>) -> Status {
        // over the zero ring every matrix is zero, and zero is a unit
        let mut one = self.base.init();
        let status = self.base.one(&mut one);
        if !status.is_success() {
            return status;
        }
        if self.base.is_zero(&one).is_true() {
            return self.base.mat_one(res);
        }
        self.gauss_jordan_inverse(res, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::{NmodRing, RationalField};

    fn qmat(ring: &MatrixRing<RationalField>, entries: &[i64]) -> RingMatrix<RationalField> {
        let mut m = ring.init();
        for (x, &v) in m.data_mut().iter_mut().zip(entries) {
            *x = BigRational::from_integer(v.into());
        }
        m
    }

    #[test]
    fn test_flags_forwarding() {
        let zn = NmodRing::new(107).unwrap();
        let m4 = MatrixRing::new(zn.clone(), 4);
        assert!(m4.flags().is_finite());
        assert!(!m4.flags().is_commutative());
        assert!(!m4.flags().is_field());

        let m1 = MatrixRing::new(zn, 1);
        assert!(m1.flags().is_commutative());

        let q = MatrixRing::new(RationalField::with_size_limit(1000).unwrap(), 2);
        assert!(!q.flags().is_finite());
        assert!(q.flags().is_size_limited());
    }

    #[test]
    fn test_non_commutative_product() {
        let ring = MatrixRing::new(RationalField::new(), 2);
        let a = qmat(&ring, &[1, 1, 0, 1]);
        let b = qmat(&ring, &[1, 0, 1, 1]);
        let (mut ab, mut ba) = (ring.init(), ring.init());
        assert!((ring.mul(&mut ab, &a, &b) | ring.mul(&mut ba, &b, &a)).is_success());
        assert_eq!(ring.equal(&ab, &ba), Truth::False);
        assert!(ring.equal(&ab, &qmat(&ring, &[2, 1, 1, 1])).is_true());
    }

    #[test]
    fn test_inverse_over_field() {
        let ring = MatrixRing::new(RationalField::new(), 3);
        let a = qmat(&ring, &[0, 2, 1, 1, 1, 0, 3, 0, 1]);
        let mut ainv = ring.init();
        let mut p = ring.init();
        assert!(ring.inv(&mut ainv, &a).is_success());
        assert!(ring.mul(&mut p, &a, &ainv).is_success());
        assert!(ring.is_one(&p).is_true());

        let singular = qmat(&ring, &[1, 2, 3, 2, 4, 6, 0, 0, 1]);
        assert_eq!(ring.inv(&mut ainv, &singular), Status::DOMAIN);
    }

    #[test]
    fn test_inverse_over_non_field() {
        let z8 = NmodRing::new(8).unwrap();
        let ring = MatrixRing::new(z8, 2);
        let mut a = ring.init();
        let mut ainv = ring.init();

        // [[3, 1], [0, 5]] has unit determinant 15 = 7 mod 8
        a.data_mut().copy_from_slice(&[3, 1, 0, 5]);
        assert!(ring.inv(&mut ainv, &a).is_success());
        let mut p = ring.init();
        assert!(ring.mul(&mut p, &ainv, &a).is_success());
        assert!(ring.is_one(&p).is_true());

        // no entry of the first column is a unit
        a.data_mut().copy_from_slice(&[2, 1, 4, 1]);
        assert_eq!(ring.inv(&mut ainv, &a), Status::UNABLE);

        a.data_mut().copy_from_slice(&[0, 1, 0, 1]);
        assert_eq!(ring.inv(&mut ainv, &a), Status::DOMAIN);
    }

    #[test]
    fn test_scalar_matrices() {
        let ring = MatrixRing::new(RationalField::new(), 2);
        let a = qmat(&ring, &[1, 2, 3, 4]);
        let mut r = ring.init();

        assert!(ring.mul_scalar(&mut r, &a, 3i64).is_success());
        assert!(ring.equal(&r, &qmat(&ring, &[3, 6, 9, 12])).is_true());

        assert!(ring.add_scalar(&mut r, &a, 1u64).is_success());
        assert!(ring.equal(&r, &qmat(&ring, &[2, 2, 3, 5])).is_true());

        assert_eq!(ring.div_scalar(&mut r, &a, 0u64), Status::DOMAIN);
    }

    #[test]
    fn test_inverse_over_zero_ring() {
        let z1 = NmodRing::new(1).unwrap();
        let mut e = z1.init();
        assert!(z1.inv(&mut e, &0).is_success());

        for n in 1..4 {
            let ring = MatrixRing::new(z1.clone(), n);
            let x = ring.init();
            let mut xinv = ring.init();
            let mut p = ring.init();
            assert!(ring.inv(&mut xinv, &x).is_success());
            assert!(ring.mul(&mut p, &x, &xinv).is_success());
            assert!(ring.is_one(&p).is_true());
        }
    }

    #[test]
    fn test_empty_matrix_ring() {
        let ring = MatrixRing::new(RationalField::new(), 0);
        let mut x = ring.init();
        assert!(ring.one(&mut x).is_success());
        assert!(ring.is_zero(&x).is_true());
        assert!(ring.inv(&mut x, &ring.init()).is_success());
    }
}
