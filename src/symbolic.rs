/// # Algebraic elements
/// integer literals, single-character variables and binary composites over them,
/// plus the variable bindings used to evaluate them
///# Example
/// ```
/// use RustedSquareMatrix::symbolic::element::{Element, IntElement, Valuation};
/// let product = Element::Var('x') * Element::Const(3);
/// println!("product {}", product);
/// let mut valuation = Valuation::new();
/// valuation.insert('x', 7);
/// assert_eq!(product.eval(&valuation), Ok(21));
/// let mut acc = IntElement::new(0);
/// acc += IntElement::new(5);
/// assert_eq!(acc.get_val(), 5);
/// ```
pub mod element;
mod element_tests;
