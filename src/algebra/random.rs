//! Pseudo-random generation for randomised testing.
//!
//! The generator is always an explicit value owned by the caller and passed
//! by `&mut` into every randomised operation.  There is no process-wide
//! generator; threads that test concurrently each own their own state.

use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use num_rational::BigRational;
use num_traits::{One, Zero};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Random state threaded through all randomised operations.
pub type RandState = ChaCha20Rng;

/// Deterministic random state from a seed.
pub fn rand_state(seed: u64) -> RandState {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Uniform integer in `0..n`.  For `n == 0` the full `u64` range is used.
pub fn randint(state: &mut RandState, n: u64) -> u64 {
    if n == 0 {
        state.gen()
    } else {
        state.gen_range(0..n)
    }
}

/// Random word biased towards values that exercise edge cases: small
/// values, all-ones patterns and sparse bit patterns are all likely.
pub fn randtest_u64(state: &mut RandState) -> u64 {
    let bits = state.gen_range(0..=64u32);
    if bits == 0 {
        return 0;
    }
    let mask = u64::MAX >> (64 - bits);
    match state.gen_range(0..8u32) {
        0 => mask,
        1 => {
            // one or two set bits
            let a = 1u64 << state.gen_range(0..bits);
            let b = 1u64 << state.gen_range(0..bits);
            a | b
        }
        2 => mask.wrapping_sub(state.gen_range(0..16u64)) & mask,
        _ => state.gen::<u64>() & mask,
    }
}

/// Signed counterpart of [`randtest_u64`], covering the full `i64` range.
pub fn randtest_i64(state: &mut RandState) -> i64 {
    let v = randtest_u64(state) as i64;
    if state.gen_bool(0.5) {
        v.wrapping_neg()
    } else {
        v
    }
}

/// Nonzero variant of [`randtest_u64`].
pub fn randtest_u64_not_zero(state: &mut RandState) -> u64 {
    loop {
        let v = randtest_u64(state);
        if v != 0 {
            return v;
        }
    }
}

/// Random signed integer of at most `bits` bits, biased like
/// [`randtest_u64`].
pub fn randtest_bigint(state: &mut RandState, bits: u64) -> BigInt {
    let mag = randtest_biguint(state, bits);
    if mag.is_zero() {
        return BigInt::zero();
    }
    let sign = if state.gen_bool(0.5) {
        Sign::Minus
    } else {
        Sign::Plus
    };
    BigInt::from_biguint(sign, mag)
}

/// Random rational with numerator and denominator of at most `bits` bits.
pub fn randtest_rational(state: &mut RandState, bits: u64) -> BigRational {
    let num = randtest_bigint(state, bits);
    let den = loop {
        let d = randtest_biguint(state, bits.max(1));
        if !d.is_zero() {
            break d;
        }
    };
    BigRational::new(num, BigInt::from(den))
}

fn randtest_biguint(state: &mut RandState, bits: u64) -> BigUint {
    if bits == 0 {
        return BigUint::zero();
    }
    let nbits = state.gen_range(0..=bits);
    if nbits == 0 {
        return BigUint::zero();
    }
    match state.gen_range(0..4u32) {
        // 2^nbits - 1
        0 => (BigUint::one() << nbits) - BigUint::one(),
        // single power of two
        1 => BigUint::one() << state.gen_range(0..nbits),
        _ => state.gen_biguint(nbits),
    }
}
