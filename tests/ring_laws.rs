use gring::{algebra::*, harness::*, rings::*};
use num_bigint::BigInt;
use std::fmt;

// the full law catalogue on every shipped context

#[test]
fn test_integer_ring() {
    assert_ring_laws(&IntegerRing::new(), 30);
    assert_ring_laws(&IntegerRing::with_size_limit(200).unwrap(), 30);
}

#[test]
fn test_rational_field() {
    assert_ring_laws(&RationalField::new(), 20);
    let report = assert_ring_laws(&RationalField::with_size_limit(1000).unwrap(), 100);
    assert!(report.law("inv: multiplication").unwrap().is_conclusive());
}

#[test]
fn test_nmod_ring() {
    for n in [1, 2, 8, 107, 1 << 32, u64::MAX - 58, u64::MAX] {
        assert_ring_laws(&NmodRing::new(n).unwrap(), 100);
    }
}

#[test]
fn test_real_ball_field() {
    let report = assert_ring_laws(&RealBallField::new(), 100);
    // balls cannot certify most equalities, but exact small values can
    assert!(report.law("zero_one").unwrap().is_conclusive());
}

#[test]
fn test_matrix_rings() {
    assert_ring_laws(&MatrixRing::new(NmodRing::new(107).unwrap(), 3), 30);
    assert_ring_laws(&MatrixRing::new(NmodRing::new(6).unwrap(), 2), 30);
    assert_ring_laws(
        &MatrixRing::new(RationalField::with_size_limit(1000).unwrap(), 2),
        10,
    );
    assert_ring_laws(&MatrixRing::new(IntegerRing::with_size_limit(300).unwrap(), 2), 10);
    assert_ring_laws(&MatrixRing::new(NmodRing::new(5).unwrap(), 0), 10);
    assert_ring_laws(&MatrixRing::new(NmodRing::new(5).unwrap(), 1), 10);
}

#[test]
fn test_polynomial_rings() {
    assert_ring_laws(&PolynomialRing::with_degree_limit(NmodRing::new(7).unwrap(), 12), 30);
    assert_ring_laws(
        &PolynomialRing::with_degree_limit(IntegerRing::with_size_limit(500).unwrap(), 12),
        10,
    );
    assert_ring_laws(
        &PolynomialRing::with_degree_limit(RationalField::with_size_limit(500).unwrap(), 8),
        10,
    );
}

#[test]
fn test_nested_constructions() {
    let base = PolynomialRing::with_degree_limit(NmodRing::new(5).unwrap(), 6);
    assert_ring_laws(&MatrixRing::new(base, 2), 5);
}

#[test]
fn test_z107_triples() {
    let ring = NmodRing::new(107).unwrap();
    let mut state = rand_state(0);
    let (mut x, mut y, mut z) = (ring.init(), ring.init(), ring.init());
    let (mut xy, mut yz, mut lhs, mut rhs) = (ring.init(), ring.init(), ring.init(), ring.init());

    for _ in 0..1000 {
        let mut status = ring.randtest(&mut x, &mut state);
        status |= ring.randtest(&mut y, &mut state);
        status |= ring.randtest(&mut z, &mut state);

        status |= ring.add(&mut xy, &x, &y);
        status |= ring.add(&mut lhs, &xy, &z);
        status |= ring.add(&mut yz, &y, &z);
        status |= ring.add(&mut rhs, &x, &yz);
        assert!(status.is_success());
        assert!(ring.equal(&lhs, &rhs).is_true());

        let status = ring.mul(&mut lhs, &x, &y) | ring.mul(&mut rhs, &y, &x);
        assert!(status.is_success());
        assert!(ring.equal(&lhs, &rhs).is_true());
    }
}

#[test]
fn test_rational_power_split() {
    let ring = RationalField::with_size_limit(1000).unwrap();
    let (mut x56, mut x37, mut x19, mut prod) = (ring.init(), ring.init(), ring.init(), ring.init());
    let mut x = ring.init();
    let mut decided = 0;

    for seed in 0..10 {
        let mut state = rand_state(seed);
        for _ in 0..100 {
            assert!(ring.randtest(&mut x, &mut state).is_success());
            let status = ring.pow_ui(&mut x56, &x, 56)
                | ring.pow_ui(&mut x37, &x, 37)
                | ring.pow_ui(&mut x19, &x, 19)
                | ring.mul(&mut prod, &x37, &x19);
            if status.is_success() {
                assert_eq!(x56, prod, "x = {}", x);
                decided += 1;
            } else {
                assert_eq!(status, Status::UNABLE, "x = {}", x);
            }
        }
    }
    assert!(decided > 0);
}

/// Z/n with a multiplication that is off by one for nonzero operands.
struct BrokenMul(NmodRing);

impl Ring for BrokenMul {
    type Element = u64;

    fn flags(&self) -> RingFlags {
        self.0.flags()
    }
    fn write_context(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Broken ")?;
        self.0.write_context(f)
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
        self.0.randtest(res, state)
    }
    fn zero(&self, res: &mut u64) -> Status {
        self.0.zero(res)
    }
    fn one(&self, res: &mut u64) -> Status {
        self.0.one(res)
    }
    fn set_bigint(&self, res: &mut u64, v: &BigInt) -> Status {
        self.0.set_bigint(res, v)
    }
    fn equal(&self, x: &u64, y: &u64) -> Truth {
        self.0.equal(x, y)
    }
    fn neg(&self, res: &mut u64, x: &u64) -> Status {
        self.0.neg(res, x)
    }
    fn add(&self, res: &mut u64, x: &u64, y: &u64) -> Status {
        self.0.add(res, x, y)
    }
    fn mul(&self, res: &mut u64, x: &u64, y: &u64) -> Status {
        let status = self.0.mul(res, x, y);
        if *x != 0 && *y != 0 {
            *res = (*res + 1) % self.0.modulus();
        }
        status
    }
    fn inv(&self, res: &mut u64, x: &u64) -> Status {
        self.0.inv(res, x)
    }
}

#[test]
fn test_violation_is_reported() {
    let ring = BrokenMul(NmodRing::new(1009).unwrap());
    let settings = HarnessSettingsBuilder::default()
        .iterations(100)
        .build()
        .unwrap();
    let mut tester = RingTester::new(settings).unwrap();
    gring::io::ConfigurablePrintTarget::print_to_buffer(&mut tester);

    match tester.test_ring(&ring) {
        Err(HarnessError::LawViolation { ring, law, dump, .. }) => {
            assert_eq!(ring, "Broken Integers mod 1009 (nmod)");
            assert_eq!(law, "mul: associativity");
            assert!(dump.contains("(x * y) * z = "));
        }
        other => panic!("expected a law violation, got {:?}", other.map(|r| r.ring)),
    }

    let output = gring::io::ConfigurablePrintTarget::get_print_buffer(&mut tester).unwrap();
    assert!(output.contains("mul: associativity ... FAIL"));
}

#[test]
#[should_panic(expected = "mul: associativity")]
fn test_assert_ring_laws_panics() {
    assert_ring_laws(&BrokenMul(NmodRing::new(1009).unwrap()), 100);
}
