////////////////////////////////////////////////////////////////
//  SQUAREMATRIXLIKE - common face of concrete and symbolic matrices
////////////////////////////////////////////////////////////////
/*
The calculator keeps matrices of both kinds on one stack. It only needs to print them,
evaluate them and know their size, so both kinds are wrapped into AnyMatrix and the
trait methods are dispatched by enum_dispatch without a manual match:

    let m: AnyMatrix = SymbolicSquareMatrix::from_text("[[x]]")?.into();
    m.render();            // "[[x]]"
    m.evaluate_matrix(&v); // ConcreteSquareMatrix
*/
use crate::matrix::matrix_errors::MatrixError;
use crate::matrix::square_matrix::{
    ConcreteSquareMatrix, MatrixElement, SquareMatrix, SymbolicSquareMatrix,
};
use crate::symbolic::element::Valuation;

use enum_dispatch::enum_dispatch;
use log::trace;
use std::fmt;

#[enum_dispatch]
pub trait SquareMatrixLike {
    /// canonical text
    fn render(&self) -> String;
    /// concrete result of evaluation against the valuation
    fn evaluate_matrix(&self, valuation: &Valuation) -> Result<ConcreteSquareMatrix, MatrixError>;
    /// n of the n x n matrix
    fn size(&self) -> usize;
}

impl<T: MatrixElement> SquareMatrixLike for SquareMatrix<T> {
    fn render(&self) -> String {
        self.to_string()
    }

    fn evaluate_matrix(&self, valuation: &Valuation) -> Result<ConcreteSquareMatrix, MatrixError> {
        self.evaluate(valuation)
    }

    fn size(&self) -> usize {
        self.dimension()
    }
}

#[enum_dispatch(SquareMatrixLike)]
#[derive(Clone, Debug, PartialEq)]
pub enum AnyMatrix {
    Concrete(ConcreteSquareMatrix),
    Symbolic(SymbolicSquareMatrix),
}

impl AnyMatrix {
    pub fn kind(&self) -> &'static str {
        match self {
            AnyMatrix::Concrete(_) => "concrete",
            AnyMatrix::Symbolic(_) => "symbolic",
        }
    }

    /// Symbolic operand for further arithmetic: the canonical text is parsed again as a
    /// symbolic matrix; when that fails (composite cells), the matrix is evaluated against
    /// the valuation and the integers are lifted back to literals.
    pub fn to_symbolic(&self, valuation: &Valuation) -> Result<SymbolicSquareMatrix, MatrixError> {
        let text = self.render();
        match SymbolicSquareMatrix::from_text(&text) {
            Ok(matrix) => Ok(matrix),
            Err(_) => {
                trace!("{} is not plain symbolic text, evaluating it", text);
                let concrete = self.evaluate_matrix(valuation)?;
                Ok(SymbolicSquareMatrix::from(&concrete))
            }
        }
    }
}

impl fmt::Display for AnyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
