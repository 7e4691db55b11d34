/// # Matrix grammar parser/validator
/// turns `[[a11,...,a1n]...[an1,...,ann]]` into rows of elements, or explains why it can't
///# Example
/// ```
/// use RustedSquareMatrix::matrix::matrix_parser::is_square_matrix;
/// use RustedSquareMatrix::symbolic::element::{Element, IntElement};
/// assert!(is_square_matrix::<IntElement>("[[1,2][3,4]]"));
/// assert!(!is_square_matrix::<IntElement>("[[1,x][3,4]]"));
/// assert!(is_square_matrix::<Element>("[[1,x][3,4]]"));
/// ```
pub mod matrix_parser;
/// errors of parsing, arithmetic and evaluation
pub mod matrix_errors;
///______________________________________________________________________________________________
/// # Square matrix container
/// concrete and symbolic square matrices: transpose, arithmetic, evaluation
///# Example
/// ```
/// use RustedSquareMatrix::matrix::square_matrix::SymbolicSquareMatrix;
/// use RustedSquareMatrix::symbolic::element::Valuation;
/// let a = SymbolicSquareMatrix::from_text("[[1,x][y,2]]").unwrap();
/// let b = SymbolicSquareMatrix::from_text("[[3,4][5,z]]").unwrap();
/// let sum = (&a + &b).unwrap();
/// assert_eq!(sum.to_string(), "[[(1+3),(x+4)][(y+5),(2+z)]]");
/// let mut valuation = Valuation::new();
/// valuation.insert('x', 10);
/// valuation.insert('y', 20);
/// valuation.insert('z', 30);
/// assert_eq!(sum.evaluate(&valuation).unwrap().to_string(), "[[4,14][25,32]]");
/// ```
pub mod square_matrix;
/// one trait and one enum over both matrix kinds, for code that stores them together
pub mod matrix_traits;
