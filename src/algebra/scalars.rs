use num_bigint::BigInt;
use num_rational::BigRational;

/// Binary arithmetic operations available through generic dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Every operation, in catalogue order.
    pub const ALL: [BinaryOp; 4] = [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div];

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Div => "div",
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Typed second operand for the scalar variants of binary operations.
///
/// A scalar operand must behave exactly as if it were first converted into
/// an element of the context with the matching `set_*` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    /// small unsigned integer
    Ui(u64),
    /// small signed integer
    Si(i64),
    /// arbitrary precision integer
    Int(&'a BigInt),
    /// arbitrary precision rational
    Rat(&'a BigRational),
}

impl From<u64> for Scalar<'_> {
    fn from(v: u64) -> Self {
        Scalar::Ui(v)
    }
}

impl From<i64> for Scalar<'_> {
    fn from(v: i64) -> Self {
        Scalar::Si(v)
    }
}

impl<'a> From<&'a BigInt> for Scalar<'a> {
    fn from(v: &'a BigInt) -> Self {
        Scalar::Int(v)
    }
}

impl<'a> From<&'a BigRational> for Scalar<'a> {
    fn from(v: &'a BigRational) -> Self {
        Scalar::Rat(v)
    }
}

impl Scalar<'_> {
    /// Short type tag used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Ui(_) => "ui",
            Scalar::Si(_) => "si",
            Scalar::Int(_) => "bigint",
            Scalar::Rat(_) => "rational",
        }
    }

    /// Exact value as a big rational.
    pub fn to_rational(&self) -> BigRational {
        match self {
            Scalar::Ui(v) => BigRational::from_integer(BigInt::from(*v)),
            Scalar::Si(v) => BigRational::from_integer(BigInt::from(*v)),
            Scalar::Int(v) => BigRational::from_integer((*v).clone()),
            Scalar::Rat(v) => (*v).clone(),
        }
    }
}

impl std::fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Ui(v) => write!(f, "{}", v),
            Scalar::Si(v) => write!(f, "{}", v),
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Rat(v) => write!(f, "{}", v),
        }
    }
}
