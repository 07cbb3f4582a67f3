//! The ring-axiom law catalogue.
//!
//! Every law draws random operands, computes the same value along two
//! independent paths and compares the results with the context's own
//! `equal`.  Statuses from both paths are accumulated.  A law that
//! succeeded but found the two paths unequal reports `WRONG`.

use super::HarnessSettings;
use crate::algebra::*;
use num_bigint::BigInt;
use std::fmt::Write;

/// Per-iteration state handed to a law.
pub struct LawEnv<'a> {
    pub state: &'a mut RandState,
    pub settings: &'a HarnessSettings,
    /// Operand dump of the current iteration.  Filled when verbose, or
    /// when the law reports `WRONG`.
    pub dump: String,
}

impl<'a> LawEnv<'a> {
    pub fn new(state: &'a mut RandState, settings: &'a HarnessSettings) -> Self {
        Self {
            state,
            settings,
            dump: String::new(),
        }
    }

    fn wants_dump(&self, status: Status) -> bool {
        self.settings.verbose || status.is_wrong()
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        // writing into a String cannot fail
        let _ = self.dump.write_fmt(args);
        self.dump.push('\n');
    }
}

macro_rules! dump {
    ($env:expr, $status:expr, $($fmt:tt)*) => {
        if $env.wants_dump($status) {
            $env.line(format_args!($($fmt)*));
        }
    };
}

/// Law check function.
pub type LawFn<R> = fn(&R, &mut LawEnv<'_>) -> Status;

/// One named law of the catalogue.
pub struct Law<R: Ring> {
    pub name: &'static str,
    pub check: LawFn<R>,
    /// Only run on commutative contexts.
    pub commutative_only: bool,
}

impl<R: Ring> Clone for Law<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            check: self.check,
            commutative_only: self.commutative_only,
        }
    }
}

impl<R: Ring> std::fmt::Debug for Law<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Law")
            .field("name", &self.name)
            .field("commutative_only", &self.commutative_only)
            .finish()
    }
}

impl<R: Ring> Law<R> {
    fn new(name: &'static str, check: LawFn<R>) -> Self {
        Self {
            name,
            check,
            commutative_only: false,
        }
    }

    fn commutative(name: &'static str, check: LawFn<R>) -> Self {
        Self {
            name,
            check,
            commutative_only: true,
        }
    }

    /// Whether the law holds in every context with these flags.
    pub fn applies(&self, flags: RingFlags) -> bool {
        !self.commutative_only || flags.is_commutative()
    }
}

/// Every law, in run order.
pub fn catalogue<R: Ring>() -> Vec<Law<R>> {
    vec![
        Law::new("init/clear", init_clear),
        Law::new("swap", swap),
        Law::new("zero_one", zero_one),
        Law::new("neg", neg),
        Law::new("add: associativity", add_associativity),
        Law::new("add: commutativity", add_commutativity),
        Law::new("add: aliasing", |r, env| binary_aliasing(r, env, BinaryOp::Add)),
        Law::new("sub: equal neg add", sub_equal_neg_add),
        Law::new("sub: aliasing", |r, env| binary_aliasing(r, env, BinaryOp::Sub)),
        Law::new("add: ui/si/bigint/rational", |r, env| {
            scalar_variants(r, env, BinaryOp::Add)
        }),
        Law::new("sub: ui/si/bigint/rational", |r, env| {
            scalar_variants(r, env, BinaryOp::Sub)
        }),
        Law::new("mul: ui/si/bigint/rational", |r, env| {
            scalar_variants(r, env, BinaryOp::Mul)
        }),
        Law::new("div: ui/si/bigint/rational", |r, env| {
            scalar_variants(r, env, BinaryOp::Div)
        }),
        Law::new("mul: associativity", mul_associativity),
        Law::commutative("mul: commutativity", mul_commutativity),
        Law::new("mul: aliasing", |r, env| binary_aliasing(r, env, BinaryOp::Mul)),
        Law::new("div: aliasing", |r, env| binary_aliasing(r, env, BinaryOp::Div)),
        Law::new("inv: multiplication", inv_multiplication),
        Law::new("inv: involution", inv_involution),
        Law::new("pow_ui: exponent addition", pow_ui_exponent_addition),
        Law::new("pow_ui: base scalar multiplication", pow_ui_base_scalar_multiplication),
        Law::commutative("pow_ui: base multiplication", pow_ui_base_multiplication),
        Law::new("pow_ui: aliasing", pow_ui_aliasing),
        Law::new("pow_si: exponent addition", pow_si_exponent_addition),
        Law::new("pow_bigint: exponent addition", pow_bigint_exponent_addition),
        Law::new("vec_add", vec_add),
        Law::new("vec_mul_scalar: distributivity", vec_mul_scalar_distributivity),
        Law::new("mat_mul_classical: associativity", mat_mul_associativity),
    ]
}

/// Folds a predicate into the accumulated status of a law.
///
/// `Unknown` is incapability.  A law that succeeded with a `False`
/// predicate is `WRONG`.
pub fn conclude(status: Status, holds: Truth) -> Status {
    let status = status | holds.status();
    if status.is_success() && holds.is_false() {
        Status::WRONG
    } else {
        status
    }
}

fn random_element<R: Ring>(ring: &R, env: &mut LawEnv<'_>, status: &mut Status) -> R::Element {
    let mut x = ring.init();
    *status |= ring.randtest(&mut x, env.state);
    x
}

// ---------------------------------------------------------
// element lifecycle
// ---------------------------------------------------------

fn init_clear<R: Ring>(ring: &R, env: &mut LawEnv<'_>) -> Status {
    let n = 1 + randint(env.state, 5) as usize;
    let mut v = storage::init_elements(ring, n);
    let status = ring.vec_randtest(&mut v, env.state);
    dump!(env, status, "x = {}", ring.vec_display(&v));
    status
}

fn swap<R: Ring>(ring: &R, env: &mut LawEnv<'_>) -> Status {
    let mut status = Status::SUCCESS;
    let mut a = random_element(ring, env, &mut status);
    let mut b = random_element(ring, env, &mut status);
    let mut c = ring.init();
    let mut d = ring.init();
    status |= ring.set(&mut c, &a);
    status |= ring.set(&mut d, &b);

    ring.swap(&mut a, &mut b);
    let swapped = ring.equal(&a, &d) & ring.equal(&b, &c);
    ring.swap(&mut a, &mut b);
    let restored = ring.equal(&a, &c) & ring.equal(&b, &d);

    let status = conclude(status, swapped & restored);
    dump!(env, status, "a = {}", ring.display(&a));
    dump!(env, status, "b = {}", ring.display(&b));
    status
}

fn zero_one<R: Ring>(ring: &R, env: &mut LawEnv<'_>) -> Status {
    let mut status = Status::SUCCESS;
    let mut a = random_element(ring, env, &mut status);
    status |= ring.zero(&mut a);
    let is_zero = ring.is_zero(&a);
    status |= ring.randtest(&mut a, env.state);
    status |= ring.one(&mut a);
    let is_one = ring.is_one(&a);

    let status = conclude(status, is_zero & is_one);
    dump!(env, status, "is_zero(0) = {}, is_one(1) = {}", is_zero, is_one);
    status
}

// ---------------------------------------------------------
// additive laws
// ---------------------------------------------------------

fn neg<R: Ring>(ring: &R, env: &mut LawEnv<'_>) -> Status {
    let mut status = Status::SUCCESS;
    let x = random_element(ring, env, &mut status);
    let mut y = random_element(ring, env, &mut status);
    let mut xy = random_element(ring, env, &mut status);

    status |= ring.neg(&mut y, &x);
    status |= ring.add(&mut xy, &x, &y);
    let cancels = ring.is_zero(&xy);
    status |= ring.neg_assign(&mut y);
    let involutive = ring.equal(&x, &y);

    let status = conclude(status, cancels & involutive);
    dump!(env, status, "x = {}", ring.display(&x));
    dump!(env, status, "-(-x) = {}", ring.display(&y));
    dump!(env, status, "x + (-x) = {}", ring.display(&xy));
    status
}

/// `(x op y) op z == x op (y op z)`
fn associativity<R: Ring>(ring: &R, env: &mut LawEnv<'_>, op: BinaryOp) -> Status {
    let mut status = Status::SUCCESS;
    let x = random_element(ring, env, &mut status);
    let y = random_element(ring, env, &mut status);
    let z = random_element(ring, env, &mut status);
    let mut xy = ring.init();
    let mut yz = ring.init();
    let mut xy_z = ring.init();
    let mut x_yz = ring.init();

    status |= ring.binary(op, &mut xy, &x, &y);
    status |= ring.binary(op, &mut yz, &y, &z);
    status |= ring.binary(op, &mut xy_z, &xy, &z);
    status |= ring.binary(op, &mut x_yz, &x, &yz);

    let status = conclude(status, ring.equal(&xy_z, &x_yz));
    dump!(env, status, "x = {}", ring.display(&x));
    dump!(env, status, "y = {}", ring.display(&y));
    dump!(env, status, "z = {}", ring.display(&z));
    dump!(env, status, "(x {op} y) {op} z = {}", ring.display(&xy_z));
    dump!(env, status, "x {op} (y {op} z) = {}", ring.display(&x_yz));
    status
}

/// `x op y == y op x`
fn commutativity<R: Ring>(ring: &R, env: &mut LawEnv<'_>, op: BinaryOp) -> Status {
    let mut status = Status::SUCCESS;
    let x = random_element(ring, env, &mut status);
    let y = random_element(ring, env, &mut status);
    let mut xy = ring.init();
    let mut yx = ring.init();

    status |= ring.binary(op, &mut xy, &x, &y);
    status |= ring.binary(op, &mut yx, &y, &x);

    let status = conclude(status, ring.equal(&xy, &yx));
    dump!(env, status, "x = {}", ring.display(&x));
    dump!(env, status, "y = {}", ring.display(&y));
    dump!(env, status, "x {op} y = {}", ring.display(&xy));
    dump!(env, status, "y {op} x = {}", ring.display(&yx));
    status
}

fn add_associativity<R: Ring>(ring: &R, env: &mut LawEnv<'_>) -> Status {
    associativity(ring, env, BinaryOp::Add)
}

fn add_commutativity<R: Ring>(ring: &R, env: &mut LawEnv<'_>) -> Status {
    commutativity(ring, env, BinaryOp::Add)
}

fn mul_associativity<R: Ring>(ring: &R, env: &mut LawEnv<'_>) -> Status {
    associativity(ring, env, BinaryOp::Mul)
}

fn mul_commutativity<R: Ring>(ring: &R, env: &mut LawEnv<'_>) -> Status {
    commutativity(ring, env, BinaryOp::Mul)
}

fn sub_equal_neg_add<R: Ring>(ring: &R, env: &mut LawEnv<'_>) -> Status {
    let mut status = Status::SUCCESS;
    let x = random_element(ring, env, &mut status);
    let y = random_element(ring, env, &mut status);
    let mut neg_y = ring.init();
    let mut x_sub_y = ring.init();
    let mut x_neg_y = ring.init();

    status |= ring.sub(&mut x_sub_y, &x, &y);
    status |= ring.neg(&mut neg_y, &y);
    status |= ring.add(&mut x_neg_y, &x, &neg_y);

    let status = conclude(status, ring.equal(&x_sub_y, &x_neg_y));
    dump!(env, status, "x = {}", ring.display(&x));
    dump!(env, status, "y = {}", ring.display(&y));
    dump!(env, status, "x - y = {}", ring.display(&x_sub_y));
    dump!(env, status, "x + (-y) = {}", ring.display(&x_neg_y));
    status
}

// ---------------------------------------------------------
// aliasing and typed operands
// ---------------------------------------------------------

/// Compares `x op y` with one randomly chosen aliased form.
fn binary_aliasing<R: Ring>(ring: &R, env: &mut LawEnv<'_>, op: BinaryOp) -> Status {
    let mut status = Status::SUCCESS;
    let x = random_element(ring, env, &mut status);
    let mut y = random_element(ring, env, &mut status);
    let mut xy1 = random_element(ring, env, &mut status);
    let mut xy2 = random_element(ring, env, &mut status);

    let alias = randint(env.state, 4);
    match alias {
        0 => {
            // res = x; res = res op y
            status |= ring.binary(op, &mut xy1, &x, &y);
            status |= ring.set(&mut xy2, &x);
            status |= ring.binary_assign(op, &mut xy2, &y);
        }
        1 => {
            // res = y; res = x op res
            status |= ring.binary(op, &mut xy1, &x, &y);
            status |= ring.set(&mut xy2, &y);
            status |= ring.binary_assign_rev(op, &x, &mut xy2);
        }
        2 => {
            // y = x; x op x with both inputs shared
            status |= ring.set(&mut y, &x);
            status |= ring.binary(op, &mut xy1, &x, &y);
            status |= ring.binary(op, &mut xy2, &x, &x);
        }
        _ => {
            // y = x; res = x; res = res op res
            status |= ring.set(&mut y, &x);
            status |= ring.set(&mut xy2, &x);
            status |= ring.binary(op, &mut xy1, &x, &y);
            status |= ring.binary_square(op, &mut xy2);
        }
    }

    let status = conclude(status, ring.equal(&xy1, &xy2));
    dump!(env, status, "alias: {}", alias);
    dump!(env, status, "x = {}", ring.display(&x));
    dump!(env, status, "y = {}", ring.display(&y));
    dump!(env, status, "x {op} y = {}", ring.display(&xy1));
    dump!(env, status, "aliased = {}", ring.display(&xy2));
    status
}

/// Compares each typed-operand form of `op` with converting the operand
/// first, values and statuses both: when neither path is `UNABLE` they must
/// agree on `DOMAIN`.  Stops at the first `WRONG`.
fn scalar_variants<R: Ring>(ring: &R, env: &mut LawEnv<'_>, op: BinaryOp) -> Status {
    let bits = env.settings.scalar_bits;
    let uy = randtest_u64(env.state);
    let sy = randtest_i64(env.state);
    let zy = randtest_bigint(env.state, bits);
    let qy = randtest_rational(env.state, bits);
    let scalars = [
        Scalar::Ui(uy),
        Scalar::Si(sy),
        Scalar::Int(&zy),
        Scalar::Rat(&qy),
    ];

    let mut total = Status::SUCCESS;
    for s in scalars {
        let mut status = Status::SUCCESS;
        let x = random_element(ring, env, &mut status);
        let mut y = random_element(ring, env, &mut status);
        let mut xy1 = random_element(ring, env, &mut status);
        let mut xy2 = random_element(ring, env, &mut status);

        let alias = randint(env.state, 2) == 1;
        let typed = if alias {
            ring.set(&mut xy1, &x) | ring.binary_scalar_assign(op, &mut xy1, s)
        } else {
            ring.binary_scalar(op, &mut xy1, &x, s)
        };
        let converted = ring.set_scalar(&mut y, s) | ring.binary(op, &mut xy2, &x, &y);
        status |= typed | converted;

        let mut status = conclude(status, ring.equal(&xy1, &xy2));
        if !(typed | converted).has_unable() && typed.has_domain() != converted.has_domain() {
            status |= Status::WRONG;
        }
        dump!(env, status, "{} operand, aliased: {}", s.kind(), alias);
        dump!(env, status, "x = {}", ring.display(&x));
        dump!(env, status, "y = {}", s);
        dump!(env, status, "x {op} y (typed, {}) = {}", typed, ring.display(&xy1));
        dump!(env, status, "x {op} y (converted, {}) = {}", converted, ring.display(&xy2));

        total |= status;
        if status.is_wrong() {
            break;
        }
    }
    total
}

// ---------------------------------------------------------
// inverses
// ---------------------------------------------------------

fn inv_multiplication<R: Ring>(ring: &R, env: &mut LawEnv<'_>) -> Status {
    let mut status = Status::SUCCESS;
    let x = random_element(ring, env, &mut status);
    let mut x_inv = ring.init();
    let mut left = ring.init();
    let mut right = ring.init();

    status |= ring.inv(&mut x_inv, &x);
    if status.has_domain() {
        dump!(env, status, "x = {} is not a unit", ring.display(&x));
        return status;
    }
    status |= ring.mul(&mut left, &x_inv, &x);
    status |= ring.mul(&mut right, &x, &x_inv);

    let status = conclude(status, ring.is_one(&left) & ring.is_one(&right));
    dump!(env, status, "x = {}", ring.display(&x));
    dump!(env, status, "x^-1 = {}", ring.display(&x_inv));
    dump!(env, status, "x^-1 * x = {}", ring.display(&left));
    dump!(env, status, "x * x^-1 = {}", ring.display(&right));
    status
}

fn inv_involution<R: Ring>(ring: &R, env: &mut LawEnv<'_>) -> Status {
    let mut status = Status::SUCCESS;
    let x = random_element(ring, env, &mut status);
    let mut y = ring.init();

    status |= ring.inv(&mut y, &x);
    if status.has_domain() {
        dump!(env, status, "x = {} is not a unit", ring.display(&x));
        return status;
    }
    status |= ring.inv_assign(&mut y);

    let status = conclude(status, ring.equal(&x, &y));
    dump!(env, status, "x = {}", ring.display(&x));
    dump!(env, status, "(x^-1)^-1 = {}", ring.display(&y));
    status
}

// ---------------------------------------------------------
// powers
// ---------------------------------------------------------

/// Random machine-word exponent, full width for finite contexts.
fn random_exponent_ui(env: &mut LawEnv<'_>, finite: bool) -> u64 {
    match env.settings.exponent_bound(finite) {
        Some(bound) => randtest_u64(env.state) % bound,
        None => randtest_u64(env.state),
    }
}

fn random_exponent_si(env: &mut LawEnv<'_>, finite: bool) -> i64 {
    match env.settings.exponent_bound(finite) {
        Some(bound) => randtest_i64(env.state) % (bound as i64),
        None => randtest_i64(env.state),
    }
}

fn pow_ui_exponent_addition<R: Ring>(ring: &R, env: &mut LawEnv<'_>) -> Status {
    let finite = ring.flags().is_finite();
    let (a, b) = loop {
        let a = random_exponent_ui(env, finite);
        let b = random_exponent_ui(env, finite);
        if a.checked_add(b).is_some() {
            break (a, b);
        }
    };

    let mut status = Status::SUCCESS;
    let x = random_element(ring, env, &mut status);
    let mut xa = ring.init();
    let mut xb = ring.init();
    let mut xab = ring.init();
    let mut xaxb = ring.init();

    status |= ring.pow_ui(&mut xa, &x, a);
    status |= ring.pow_ui(&mut xb, &x, b);
    status |= ring.pow_ui(&mut xab, &x, a + b);
    status |= ring.mul(&mut xaxb, &xa, &xb);

    let status = conclude(status, ring.equal(&xab, &xaxb));
    dump!(env, status, "x = {}", ring.display(&x));
    dump!(env, status, "a = {}, b = {}", a, b);
    dump!(env, status, "x^(a+b) = {}", ring.display(&xab));
    dump!(env, status, "x^a * x^b = {}", ring.display(&xaxb));
    status
}

/// `(x*y)^a == x^a * y^a` for an integer `y`, which is central.
fn pow_ui_base_scalar_multiplication<R: Ring>(ring: &R, env: &mut LawEnv<'_>) -> Status {
    let finite = ring.flags().is_finite();
    let a = random_exponent_ui(env, finite);
    let y = randtest_i64(env.state);

    let mut status = Status::SUCCESS;
    let x = random_element(ring, env, &mut status);
    let mut xa = ring.init();
    let mut ya = ring.init();
    let mut xy = ring.init();
    let mut xaya = ring.init();

    status |= ring.pow_ui(&mut xa, &x, a);
    status |= ring.set_si(&mut ya, y);
    status |= ring.pow_ui_assign(&mut ya, a);
    status |= ring.set_si(&mut xy, y);
    status |= ring.binary_assign_rev(BinaryOp::Mul, &x, &mut xy);
    status |= ring.pow_ui_assign(&mut xy, a);
    status |= ring.mul(&mut xaya, &xa, &ya);

    let status = conclude(status, ring.equal(&xy, &xaya));
    dump!(env, status, "x = {}", ring.display(&x));
    dump!(env, status, "y = {}, a = {}", y, a);
    dump!(env, status, "(x*y)^a = {}", ring.display(&xy));
    dump!(env, status, "x^a * y^a = {}", ring.display(&xaya));
    status
}

fn pow_ui_base_multiplication<R: Ring>(ring: &R, env: &mut LawEnv<'_>) -> Status {
    let finite = ring.flags().is_finite();
    let a = random_exponent_ui(env, finite);

    let mut status = Status::SUCCESS;
    let x = random_element(ring, env, &mut status);
    let y = random_element(ring, env, &mut status);
    let mut xa = ring.init();
    let mut ya = ring.init();
    let mut xy = ring.init();
    let mut xya = ring.init();
    let mut xaya = ring.init();

    status |= ring.pow_ui(&mut xa, &x, a);
    status |= ring.pow_ui(&mut ya, &y, a);
    status |= ring.mul(&mut xy, &x, &y);
    status |= ring.pow_ui(&mut xya, &xy, a);
    status |= ring.mul(&mut xaya, &xa, &ya);

    let status = conclude(status, ring.equal(&xya, &xaya));
    dump!(env, status, "x = {}", ring.display(&x));
    dump!(env, status, "y = {}", ring.display(&y));
    dump!(env, status, "a = {}", a);
    dump!(env, status, "(x*y)^a = {}", ring.display(&xya));
    dump!(env, status, "x^a * y^a = {}", ring.display(&xaya));
    status
}

fn pow_ui_aliasing<R: Ring>(ring: &R, env: &mut LawEnv<'_>) -> Status {
    let finite = ring.flags().is_finite();
    let a = random_exponent_ui(env, finite);

    let mut status = Status::SUCCESS;
    let x = random_element(ring, env, &mut status);
    let mut xa1 = ring.init();
    let mut xa2 = ring.init();

    status |= ring.pow_ui(&mut xa1, &x, a);
    status |= ring.set(&mut xa2, &x);
    status |= ring.pow_ui_assign(&mut xa2, a);

    let status = conclude(status, ring.equal(&xa1, &xa2));
    dump!(env, status, "x = {}", ring.display(&x));
    dump!(env, status, "a = {}", a);
    dump!(env, status, "x^a = {}", ring.display(&xa1));
    dump!(env, status, "x^a (in place) = {}", ring.display(&xa2));
    status
}

fn pow_si_exponent_addition<R: Ring>(ring: &R, env: &mut LawEnv<'_>) -> Status {
    let finite = ring.flags().is_finite();
    let (a, b, ab) = loop {
        let a = random_exponent_si(env, finite);
        let b = random_exponent_si(env, finite);
        if let Some(ab) = a.checked_add(b) {
            break (a, b, ab);
        }
    };

    let mut status = Status::SUCCESS;
    let x = random_element(ring, env, &mut status);
    let mut xa = ring.init();
    let mut xb = ring.init();
    let mut xab = ring.init();
    let mut xaxb = ring.init();

    status |= ring.pow_si(&mut xa, &x, a);
    status |= ring.pow_si(&mut xb, &x, b);
    status |= ring.pow_si(&mut xab, &x, ab);
    if status.has_domain() {
        dump!(env, status, "x = {} with a = {}, b = {}: not a unit", ring.display(&x), a, b);
        return status;
    }
    status |= ring.mul(&mut xaxb, &xa, &xb);

    let status = conclude(status, ring.equal(&xab, &xaxb));
    dump!(env, status, "x = {}", ring.display(&x));
    dump!(env, status, "a = {}, b = {}", a, b);
    dump!(env, status, "x^(a+b) = {}", ring.display(&xab));
    dump!(env, status, "x^a * x^b = {}", ring.display(&xaxb));
    status
}

fn pow_bigint_exponent_addition<R: Ring>(ring: &R, env: &mut LawEnv<'_>) -> Status {
    let bits = env
        .settings
        .bigint_exponent_bits(ring.flags().is_finite());
    let a = randtest_bigint(env.state, bits);
    let b = randtest_bigint(env.state, bits);
    let ab: BigInt = &a + &b;

    let mut status = Status::SUCCESS;
    let x = random_element(ring, env, &mut status);
    let mut xa = ring.init();
    let mut xb = ring.init();
    let mut xab = ring.init();
    let mut xaxb = ring.init();

    status |= ring.pow_bigint(&mut xa, &x, &a);
    status |= ring.pow_bigint(&mut xb, &x, &b);
    status |= ring.pow_bigint(&mut xab, &x, &ab);
    if status.has_domain() {
        dump!(env, status, "x = {} with a = {}, b = {}: not a unit", ring.display(&x), a, b);
        return status;
    }
    status |= ring.mul(&mut xaxb, &xa, &xb);

    let status = conclude(status, ring.equal(&xab, &xaxb));
    dump!(env, status, "x = {}", ring.display(&x));
    dump!(env, status, "a = {}, b = {}", a, b);
    dump!(env, status, "x^(a+b) = {}", ring.display(&xab));
    dump!(env, status, "x^a * x^b = {}", ring.display(&xaxb));
    status
}

// ---------------------------------------------------------
// vectors and matrices
// ---------------------------------------------------------

fn vec_add<R: Ring>(ring: &R, env: &mut LawEnv<'_>) -> Status {
    let len = randint(env.state, env.settings.vector_max_len) as usize;
    let mut x = ring.vec_init(len);
    let mut y = ring.vec_init(len);
    let mut xy1 = ring.vec_init(len);
    let mut xy2 = ring.vec_init(len);

    let mut status = ring.vec_randtest(&mut x, env.state);
    status |= ring.vec_randtest(&mut y, env.state);
    status |= ring.vec_randtest(&mut xy1, env.state);
    status |= ring.vec_randtest(&mut xy2, env.state);

    let alias = randint(env.state, 4);
    match alias {
        0 => {
            status |= ring.vec_set(&mut xy1, &x);
            status |= ring.vec_add_assign(&mut xy1, &y);
        }
        1 => {
            status |= ring.vec_set(&mut xy1, &y);
            status |= ring.vec_add_assign_rev(&x, &mut xy1);
        }
        2 => {
            status |= ring.vec_set(&mut y, &x);
            status |= ring.vec_set(&mut xy1, &x);
            status |= ring.vec_double(&mut xy1);
        }
        _ => {
            status |= ring.vec_add(&mut xy1, &x, &y);
        }
    }

    for i in 0..len {
        status |= ring.add(&mut xy2[i], &x[i], &y[i]);
    }

    let status = conclude(status, ring.vec_equal(&xy1, &xy2));
    dump!(env, status, "alias: {}", alias);
    dump!(env, status, "x = {}", ring.vec_display(&x));
    dump!(env, status, "y = {}", ring.vec_display(&y));
    dump!(env, status, "vec_add = {}", ring.vec_display(&xy1));
    dump!(env, status, "per position = {}", ring.vec_display(&xy2));
    status
}

/// `(a + b)*c == a*c + b*c` positionwise.
fn vec_mul_scalar_distributivity<R: Ring>(ring: &R, env: &mut LawEnv<'_>) -> Status {
    let len = randint(env.state, env.settings.vector_max_len) as usize;
    let mut a = ring.vec_init(len);
    let mut b = ring.vec_init(len);
    let mut ab = ring.vec_init(len);
    let mut ac = ring.vec_init(len);
    let mut bc = ring.vec_init(len);
    let mut lhs = ring.vec_init(len);
    let mut rhs = ring.vec_init(len);

    let mut status = ring.vec_randtest(&mut a, env.state);
    status |= ring.vec_randtest(&mut b, env.state);
    let c = random_element(ring, env, &mut status);

    status |= ring.vec_add(&mut ab, &a, &b);
    status |= ring.vec_mul_scalar(&mut lhs, &ab, &c);
    status |= ring.vec_mul_scalar(&mut ac, &a, &c);
    status |= ring.vec_set(&mut bc, &b);
    status |= ring.vec_mul_scalar_assign(&mut bc, &c);
    status |= ring.vec_add(&mut rhs, &ac, &bc);

    let status = conclude(status, ring.vec_equal(&lhs, &rhs));
    dump!(env, status, "a = {}", ring.vec_display(&a));
    dump!(env, status, "b = {}", ring.vec_display(&b));
    dump!(env, status, "c = {}", ring.display(&c));
    dump!(env, status, "(a + b)*c = {}", ring.vec_display(&lhs));
    dump!(env, status, "a*c + b*c = {}", ring.vec_display(&rhs));
    status
}

fn mat_mul_associativity<R: Ring>(ring: &R, env: &mut LawEnv<'_>) -> Status {
    let bound = env.settings.matrix_max_dim(ring.flags().is_finite());
    let m = randint(env.state, bound) as usize;
    let n = randint(env.state, bound) as usize;
    let p = randint(env.state, bound) as usize;
    let q = randint(env.state, bound) as usize;

    let mut a = ring.mat_init(m, n);
    let mut b = ring.mat_init(n, p);
    let mut c = ring.mat_init(p, q);
    let mut ab = ring.mat_init(m, p);
    let mut bc = ring.mat_init(n, q);
    let mut ab_c = ring.mat_init(m, q);
    let mut a_bc = ring.mat_init(m, q);

    let mut status = ring.mat_randtest(&mut a, env.state);
    status |= ring.mat_randtest(&mut b, env.state);
    status |= ring.mat_randtest(&mut c, env.state);
    status |= ring.mat_randtest(&mut ab_c, env.state);
    status |= ring.mat_randtest(&mut a_bc, env.state);

    status |= ring.mat_mul_classical(&mut ab, &a, &b);
    status |= ring.mat_mul_classical(&mut ab_c, &ab, &c);
    status |= ring.mat_mul_classical(&mut bc, &b, &c);
    status |= ring.mat_mul_classical(&mut a_bc, &a, &bc);

    let status = conclude(status, ring.mat_equal(&ab_c, &a_bc));
    dump!(env, status, "m = {}, n = {}, p = {}, q = {}", m, n, p, q);
    dump!(env, status, "A = {}", ring.mat_display(&a));
    dump!(env, status, "B = {}", ring.mat_display(&b));
    dump!(env, status, "C = {}", ring.mat_display(&c));
    dump!(env, status, "(AB)C = {}", ring.mat_display(&ab_c));
    dump!(env, status, "A(BC) = {}", ring.mat_display(&a_bc));
    status
}
