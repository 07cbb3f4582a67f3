use crate::algebra::*;
use crate::rings::{IntegerRing, NmodRing, RealBallField};
use num_bigint::BigInt;

fn zvec(ring: &IntegerRing, vals: &[i64]) -> RingVector<IntegerRing> {
    let mut v = ring.vec_init(vals.len());
    for (x, &val) in v.iter_mut().zip(vals) {
        *x = BigInt::from(val);
    }
    v
}

#[test]
fn test_init_is_zero() {
    let ring = NmodRing::new(13).unwrap();
    let v = ring.vec_init(5);
    assert_eq!(v.len(), 5);
    assert!(ring.vec_is_zero(&v).is_true());

    let empty = ring.vec_init(0);
    assert!(empty.is_empty());
    assert!(ring.vec_is_zero(&empty).is_true());
}

#[test]
fn test_add_sub_neg() {
    let ring = IntegerRing::new();
    let x = zvec(&ring, &[1, -2, 3]);
    let y = zvec(&ring, &[4, 5, -6]);
    let mut r = ring.vec_init(3);

    assert!(ring.vec_add(&mut r, &x, &y).is_success());
    assert!(ring.vec_equal(&r, &zvec(&ring, &[5, 3, -3])).is_true());

    assert!(ring.vec_sub(&mut r, &x, &y).is_success());
    assert!(ring.vec_equal(&r, &zvec(&ring, &[-3, -7, 9])).is_true());

    assert!(ring.vec_neg(&mut r, &x).is_success());
    assert!(ring.vec_equal(&r, &zvec(&ring, &[-1, 2, -3])).is_true());
}

#[test]
fn test_aliased_forms() {
    let ring = IntegerRing::new();
    let x = zvec(&ring, &[1, 2, 3]);
    let y = zvec(&ring, &[10, 20, 30]);

    let mut r = zvec(&ring, &[1, 2, 3]);
    assert!(ring.vec_add_assign(&mut r, &y).is_success());
    assert!(ring.vec_equal(&r, &zvec(&ring, &[11, 22, 33])).is_true());

    let mut r = zvec(&ring, &[10, 20, 30]);
    assert!(ring.vec_add_assign_rev(&x, &mut r).is_success());
    assert!(ring.vec_equal(&r, &zvec(&ring, &[11, 22, 33])).is_true());

    let mut r = zvec(&ring, &[1, 2, 3]);
    assert!(ring.vec_double(&mut r).is_success());
    assert!(ring.vec_equal(&r, &zvec(&ring, &[2, 4, 6])).is_true());
}

#[test]
fn test_scalar_and_dot() {
    let ring = NmodRing::new(7).unwrap();
    let mut x = ring.vec_init(3);
    x.as_mut_slice().copy_from_slice(&[1, 2, 3]);
    let mut r = ring.vec_init(3);

    assert!(ring.vec_mul_scalar(&mut r, &x, &3).is_success());
    assert_eq!(r.as_slice(), &[3, 6, 2]);

    assert!(ring.vec_mul_scalar_assign(&mut r, &5).is_success());
    assert_eq!(r.as_slice(), &[1, 2, 3]);

    let mut d = ring.init();
    assert!(ring.vec_dot(&mut d, &x, &x).is_success());
    // 1 + 4 + 9 = 14 = 0 mod 7
    assert_eq!(d, 0);
}

#[test]
fn test_status_accumulates() {
    let ring = NmodRing::new(6).unwrap();
    let mut x = ring.vec_init(3);
    x.as_mut_slice().copy_from_slice(&[1, 2, 5]);
    let mut y = ring.vec_init(3);
    y.as_mut_slice().copy_from_slice(&[1, 3, 5]);
    let mut r = ring.vec_init(3);

    // 3 is not a unit mod 6, the other positions still get computed
    let status = ring.vec_binary(BinaryOp::Div, &mut r, &x, &y);
    assert_eq!(status, Status::DOMAIN);
    assert_eq!(r[0], 1);
    assert_eq!(r[2], 1);
}

#[test]
fn test_unknown_equality() {
    let ring = RealBallField::new();
    let mut x = ring.vec_init(2);
    let mut third = ring.init();
    assert!(ring.set_ui(&mut third, 1).is_success());
    let status = ring.div_scalar(&mut x[1], &third, 3u64);
    assert!(status.is_success());
    let y = ring.vec_init(2);

    // exact zeros agree, an inexact third cannot be certified
    let mut z = ring.vec_init(2);
    assert!(ring.vec_set(&mut z, &x).is_success());
    assert!(ring.vec_equal(&x, &z).is_unknown());
    assert!(ring.vec_equal(&x, &y).is_false());
}

#[test]
#[should_panic]
fn test_length_mismatch_panics() {
    let ring = NmodRing::new(5).unwrap();
    let x = ring.vec_init(2);
    let y = ring.vec_init(3);
    let mut r = ring.vec_init(2);
    ring.vec_add(&mut r, &x, &y);
}

#[test]
fn test_display() {
    let ring = IntegerRing::new();
    let x = zvec(&ring, &[1, -2, 3]);
    assert_eq!(ring.vec_display(&x).to_string(), "[1, -2, 3]");
    assert_eq!(ring.vec_display(&[]).to_string(), "[]");
}
