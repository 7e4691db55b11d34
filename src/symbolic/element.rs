//! # Algebraic elements
//!
//! Values that can live inside a square matrix.
//!
//! ## Main Structures
//!
//! ### `IntElement`
//! A plain signed integer. It is the only element kind with in-place compound
//! operators (`+=`, `-=`, `*=`), which the concrete matrix arithmetic uses as an
//! accumulator.
//!
//! ### `Element` Enum
//! The symbolic element:
//! - **Constants**: `Const(i64)` - integer literal
//! - **Variables**: `Var(char)` - single character variable, resolved through a [`Valuation`]
//! - **Composite**: `Composite { left, right, op }` - binary operation over two owned sub-elements
//!
//! Elements are immutable once built: combining two elements always produces a new tree
//! with deep copies of both operands.
//!
//! ## Equality
//! Two elements are equal when their canonical strings are equal, so `(a+b)` and `(b+a)`
//! are different elements.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use log::trace;
use strum_macros::{Display, EnumIter};

/// variable bindings used for evaluation: character -> integer value
pub type Valuation = BTreeMap<char, i64>;

/// Errors produced by element construction and evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    /// composite construction with a symbol outside `+`, `-`, `*`
    InvalidOperatorSymbol(char),
    /// evaluation met a variable that has no value in the valuation
    UnboundVariable(char),
}

impl fmt::Display for ElementError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ElementError::InvalidOperatorSymbol(symbol) => {
                write!(f, "Invalid operator symbol '{}', expected one of +, -, *", symbol)
            }
            ElementError::UnboundVariable(name) => {
                write!(f, "Variable '{}' has no value", name)
            }
        }
    }
}

impl std::error::Error for ElementError {}

/// Binary integer operator of a composite element. Display gives the one-character symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Operator {
    #[strum(to_string = "+")]
    Add,
    #[strum(to_string = "-")]
    Sub,
    #[strum(to_string = "*")]
    Mul,
}

impl Operator {
    /// one-character display symbol
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
        }
    }

    /// apply the operator to two integers (wrapping on overflow)
    pub fn apply(&self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Operator::Add => lhs.wrapping_add(rhs),
            Operator::Sub => lhs.wrapping_sub(rhs),
            Operator::Mul => lhs.wrapping_mul(rhs),
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = ElementError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '*' => Ok(Operator::Mul),
            other => Err(ElementError::InvalidOperatorSymbol(other)),
        }
    }
}

/// Capability shared by every element kind: reduce to an integer under a valuation
pub trait Evaluate {
    fn evaluate(&self, valuation: &Valuation) -> Result<i64, ElementError>;
}

////////////////////////////////////////////////////////////////
//           INTEGER ELEMENT
////////////////////////////////////////////////////////////////

/// Integer literal element, the cell type of concrete matrices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntElement(i64);

impl IntElement {
    pub fn new(value: i64) -> Self {
        IntElement(value)
    }

    pub fn get_val(&self) -> i64 {
        self.0
    }

    pub fn set_val(&mut self, value: i64) {
        self.0 = value;
    }
}

impl From<i64> for IntElement {
    fn from(value: i64) -> Self {
        IntElement(value)
    }
}

impl fmt::Display for IntElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Evaluate for IntElement {
    fn evaluate(&self, _valuation: &Valuation) -> Result<i64, ElementError> {
        Ok(self.0)
    }
}

impl AddAssign for IntElement {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = Operator::Add.apply(self.0, rhs.0);
    }
}

impl SubAssign for IntElement {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = Operator::Sub.apply(self.0, rhs.0);
    }
}

impl MulAssign for IntElement {
    fn mul_assign(&mut self, rhs: Self) {
        self.0 = Operator::Mul.apply(self.0, rhs.0);
    }
}

impl Add for IntElement {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl Sub for IntElement {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Mul for IntElement {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self *= rhs;
        self
    }
}

////////////////////////////////////////////////////////////////
//           SYMBOLIC ELEMENT
////////////////////////////////////////////////////////////////

/// Symbolic element: an expression tree with integer and single-character leaves.
///
/// # Examples
/// ```
/// use RustedSquareMatrix::symbolic::element::{Element, Valuation};
/// let sum = Element::composite(&Element::Const(20), &Element::Var('x'), '+').unwrap();
/// assert_eq!(sum.to_string(), "(20+x)");
/// let mut valuation = Valuation::new();
/// valuation.insert('x', 15);
/// assert_eq!(sum.eval(&valuation), Ok(35));
/// ```
#[derive(Clone, Debug)]
pub enum Element {
    /// integer literal
    Const(i64),
    /// variable named by a single character
    Var(char),
    /// left <op> right
    Composite {
        left: Box<Element>,
        right: Box<Element>,
        op: Operator,
    },
}

impl Element {
    /// Builds `(left<symbol>right)` from copies of both operands.
    /// Fails with `InvalidOperatorSymbol` unless the symbol is `+`, `-` or `*`.
    pub fn composite(left: &Element, right: &Element, symbol: char) -> Result<Element, ElementError> {
        let op = Operator::try_from(symbol)?;
        Ok(Element::combine(left, right, op))
    }

    /// infallible form of [`Element::composite`] for an already known operator
    pub fn combine(left: &Element, right: &Element, op: Operator) -> Element {
        Element::Composite {
            left: Box::new(left.clone()),
            right: Box::new(right.clone()),
            op,
        }
    }

    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Element::Composite { .. })
    }

    /// Recursive evaluation. The first unbound variable met (left subtree first) is returned as the error.
    pub fn eval(&self, valuation: &Valuation) -> Result<i64, ElementError> {
        match self {
            Element::Const(value) => Ok(*value),
            Element::Var(name) => match valuation.get(name) {
                Some(value) => Ok(*value),
                None => {
                    trace!("variable {} is not bound", name);
                    Err(ElementError::UnboundVariable(*name))
                }
            },
            Element::Composite { left, right, op } => {
                let lhs = left.eval(valuation)?;
                let rhs = right.eval(valuation)?;
                Ok(op.apply(lhs, rhs))
            }
        }
    }
}

impl Evaluate for Element {
    fn evaluate(&self, valuation: &Valuation) -> Result<i64, ElementError> {
        self.eval(valuation)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Element::Const(value) => write!(f, "{}", value),
            Element::Var(name) => write!(f, "{}", name),
            Element::Composite { left, right, op } => write!(f, "({}{}{})", left, op, right),
        }
    }
}

// equality of canonical strings, not of values
impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Element {}

impl From<IntElement> for Element {
    fn from(value: IntElement) -> Self {
        Element::Const(value.get_val())
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Const(value)
    }
}

impl From<char> for Element {
    fn from(name: char) -> Self {
        Element::Var(name)
    }
}

impl Add for Element {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Element::Composite {
            left: self.boxed(),
            right: rhs.boxed(),
            op: Operator::Add,
        }
    }
}

impl Sub for Element {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Element::Composite {
            left: self.boxed(),
            right: rhs.boxed(),
            op: Operator::Sub,
        }
    }
}

impl Mul for Element {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Element::Composite {
            left: self.boxed(),
            right: rhs.boxed(),
            op: Operator::Mul,
        }
    }
}
