//! # Square matrices
//!
//! `SquareMatrix<T>` is an `n x n` row-major grid that owns its elements. Two kinds are used:
//! - [`ConcreteSquareMatrix`] - cells are [`IntElement`]s; arithmetic computes values
//! - [`SymbolicSquareMatrix`] - cells are [`Element`]s; arithmetic builds new composite
//!   elements and values appear only after [`SquareMatrix::evaluate`]
//!
//! `n == 0` is the empty matrix, rendered as `[]`; it can only be made by `Default`/`new`,
//! never parsed.
//!
//! ## Example
//! ```
//! use RustedSquareMatrix::matrix::square_matrix::{ConcreteSquareMatrix, SymbolicSquareMatrix};
//! use RustedSquareMatrix::symbolic::element::Valuation;
//! let a = ConcreteSquareMatrix::from_text("[[13,4,7][2,51,12][11,30,9]]").unwrap();
//! let sum = (&a + &a.transpose()).unwrap();
//! assert_eq!(sum.to_string(), "[[26,6,18][6,102,42][18,42,18]]");
//!
//! let s = SymbolicSquareMatrix::from_text("[[10,x][y,5]]").unwrap();
//! let mut valuation = Valuation::new();
//! valuation.insert('x', 1);
//! valuation.insert('y', 2);
//! assert_eq!(s.evaluate(&valuation).unwrap().to_string(), "[[10,1][2,5]]");
//! ```
use crate::matrix::matrix_errors::MatrixError;
use crate::matrix::matrix_parser::{ElementToken, parse_matrix};
use crate::symbolic::element::{Element, Evaluate, IntElement, Operator, Valuation};

use itertools::Itertools;
use log::debug;
use std::fmt;
use std::ops::{Add, Index, Mul, Sub};
use std::str::FromStr;

/// Everything a matrix cell has to support: parse, evaluate, copy, print
pub trait MatrixElement: ElementToken + Evaluate + Clone + fmt::Display {}

impl<T: ElementToken + Evaluate + Clone + fmt::Display> MatrixElement for T {}

#[derive(Clone, Debug)]
pub struct SquareMatrix<T> {
    n: usize,
    elements: Vec<Vec<T>>,
}

/// square matrix of integers
pub type ConcreteSquareMatrix = SquareMatrix<IntElement>;
/// square matrix of symbolic elements
pub type SymbolicSquareMatrix = SquareMatrix<Element>;

impl<T> Default for SquareMatrix<T> {
    fn default() -> Self {
        Self {
            n: 0,
            elements: Vec::new(),
        }
    }
}

impl<T> SquareMatrix<T> {
    /// empty matrix, `n == 0`
    pub fn new() -> Self {
        Self::default()
    }

    // callers guarantee the grid is square
    pub(crate) fn from_grid(elements: Vec<Vec<T>>) -> Self {
        let n = elements.len();
        debug_assert!(elements.iter().all(|row| row.len() == n));
        Self { n, elements }
    }

    pub fn dimension(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Get element at (i, j)
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        self.elements.get(i)?.get(j)
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.elements
    }

    /// Move the contents out, leaving `self` as the empty matrix
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    pub fn map<U, F>(&self, mut f: F) -> SquareMatrix<U>
    where
        F: FnMut(&T) -> U,
    {
        SquareMatrix {
            n: self.n,
            elements: self
                .elements
                .iter()
                .map(|row| row.iter().map(&mut f).collect())
                .collect(),
        }
    }

    fn check_dimension<U>(&self, other: &SquareMatrix<U>) -> Result<(), MatrixError> {
        if self.n != other.n {
            debug!("dimension mismatch: {} and {}", self.n, other.n);
            return Err(MatrixError::DimensionMismatch {
                left: self.n,
                right: other.n,
            });
        }
        Ok(())
    }

    /// cellwise combination of two matrices of equal size
    pub fn zip_with<U, F>(&self, other: &SquareMatrix<T>, mut f: F) -> Result<SquareMatrix<U>, MatrixError>
    where
        F: FnMut(&T, &T) -> U,
    {
        self.check_dimension(other)?;
        let elements = self
            .elements
            .iter()
            .zip(&other.elements)
            .map(|(row, other_row)| row.iter().zip(other_row).map(|(a, b)| f(a, b)).collect())
            .collect();
        Ok(SquareMatrix::from_grid(elements))
    }
}

impl<T: Clone> SquareMatrix<T> {
    /// Transpose: result[i][j] = self[j][i]
    pub fn transpose(&self) -> Self {
        let mut data: Vec<Vec<T>> = (0..self.n).map(|_| Vec::with_capacity(self.n)).collect();
        for row in &self.elements {
            for (j, element) in row.iter().enumerate() {
                data[j].push(element.clone());
            }
        }
        Self::from_grid(data)
    }
}

impl<T: MatrixElement> SquareMatrix<T> {
    /// Parse `[[a11,...,a1n]...[an1,...,ann]]`; fails with `MalformedMatrixText`
    pub fn from_text(text: &str) -> Result<Self, MatrixError> {
        let (n, elements) = parse_matrix::<T>(text)?;
        Ok(Self { n, elements })
    }

    /// Evaluate every cell against the valuation. The first failing cell in row-major order
    /// aborts the whole evaluation with `EvaluationFailed`.
    pub fn evaluate(&self, valuation: &Valuation) -> Result<ConcreteSquareMatrix, MatrixError> {
        let mut data = Vec::with_capacity(self.n);
        for (i, row) in self.elements.iter().enumerate() {
            let mut evaluated = Vec::with_capacity(self.n);
            for (j, cell) in row.iter().enumerate() {
                let value = cell.evaluate(valuation).map_err(|source| {
                    debug!("evaluation of cell ({}, {}) = {} failed: {}", i, j, cell, source);
                    MatrixError::EvaluationFailed {
                        row: i,
                        column: j,
                        source,
                    }
                })?;
                evaluated.push(IntElement::new(value));
            }
            data.push(evaluated);
        }
        Ok(SquareMatrix::from_grid(data))
    }
}

impl<T: MatrixElement> FromStr for SquareMatrix<T> {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl<T: fmt::Display> fmt::Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for row in &self.elements {
            write!(f, "[{}]", row.iter().join(","))?;
        }
        write!(f, "]")
    }
}

// matrices are equal when their canonical strings are equal
impl<T: fmt::Display> PartialEq for SquareMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.elements[i][j] // i - row, j - column
    }
}

////////////////////////////////////////////////////////////////
//           CONCRETE ARITHMETIC
////////////////////////////////////////////////////////////////

impl ConcreteSquareMatrix {
    /// elementwise `self += other`
    pub fn try_add_assign(&mut self, other: &Self) -> Result<(), MatrixError> {
        self.check_dimension(other)?;
        for (row, other_row) in self.elements.iter_mut().zip(&other.elements) {
            for (cell, other_cell) in row.iter_mut().zip(other_row) {
                *cell += *other_cell;
            }
        }
        Ok(())
    }

    /// elementwise `self -= other`
    pub fn try_sub_assign(&mut self, other: &Self) -> Result<(), MatrixError> {
        self.check_dimension(other)?;
        for (row, other_row) in self.elements.iter_mut().zip(&other.elements) {
            for (cell, other_cell) in row.iter_mut().zip(other_row) {
                *cell -= *other_cell;
            }
        }
        Ok(())
    }

    /// matrix product `self = self * other`
    pub fn try_mul_assign(&mut self, other: &Self) -> Result<(), MatrixError> {
        self.check_dimension(other)?;
        // rows of the transpose are the columns of `other`
        let columns = other.transpose();
        let mut product = Vec::with_capacity(self.n);
        for row in &self.elements {
            let mut product_row = Vec::with_capacity(self.n);
            for column in &columns.elements {
                let mut acc = IntElement::new(0);
                for (a, b) in row.iter().zip(column) {
                    acc += *a * *b;
                }
                product_row.push(acc);
            }
            product.push(product_row);
        }
        self.elements = product;
        Ok(())
    }
}

impl Add<&ConcreteSquareMatrix> for &ConcreteSquareMatrix {
    type Output = Result<ConcreteSquareMatrix, MatrixError>;

    fn add(self, other: &ConcreteSquareMatrix) -> Self::Output {
        let mut result = self.clone();
        result.try_add_assign(other)?;
        Ok(result)
    }
}

impl Sub<&ConcreteSquareMatrix> for &ConcreteSquareMatrix {
    type Output = Result<ConcreteSquareMatrix, MatrixError>;

    fn sub(self, other: &ConcreteSquareMatrix) -> Self::Output {
        let mut result = self.clone();
        result.try_sub_assign(other)?;
        Ok(result)
    }
}

impl Mul<&ConcreteSquareMatrix> for &ConcreteSquareMatrix {
    type Output = Result<ConcreteSquareMatrix, MatrixError>;

    fn mul(self, other: &ConcreteSquareMatrix) -> Self::Output {
        let mut result = self.clone();
        result.try_mul_assign(other)?;
        Ok(result)
    }
}

////////////////////////////////////////////////////////////////
//           SYMBOLIC ARITHMETIC
////////////////////////////////////////////////////////////////

impl SymbolicSquareMatrix {
    fn combine_cells(&self, other: &Self, op: Operator) -> Result<Self, MatrixError> {
        self.zip_with(other, |a, b| Element::combine(a, b, op))
    }

    /// Row-times-column product. Each cell is the left-nested sum of the products,
    /// e.g. for n = 3: `(((a*b)+(c*d))+(e*f))`.
    fn symbolic_product(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_dimension(other)?;
        let columns = other.transpose();
        let elements = self
            .elements
            .iter()
            .map(|row| {
                columns
                    .elements
                    .iter()
                    .map(|column| {
                        row.iter()
                            .zip(column)
                            .map(|(a, b)| Element::combine(a, b, Operator::Mul))
                            .reduce(|sum, product| sum + product)
                            .unwrap_or(Element::Const(0))
                    })
                    .collect()
            })
            .collect();
        Ok(Self::from_grid(elements))
    }
}

impl Add<&SymbolicSquareMatrix> for &SymbolicSquareMatrix {
    type Output = Result<SymbolicSquareMatrix, MatrixError>;

    fn add(self, other: &SymbolicSquareMatrix) -> Self::Output {
        self.combine_cells(other, Operator::Add)
    }
}

impl Sub<&SymbolicSquareMatrix> for &SymbolicSquareMatrix {
    type Output = Result<SymbolicSquareMatrix, MatrixError>;

    fn sub(self, other: &SymbolicSquareMatrix) -> Self::Output {
        self.combine_cells(other, Operator::Sub)
    }
}

impl Mul<&SymbolicSquareMatrix> for &SymbolicSquareMatrix {
    type Output = Result<SymbolicSquareMatrix, MatrixError>;

    fn mul(self, other: &SymbolicSquareMatrix) -> Self::Output {
        self.symbolic_product(other)
    }
}

/// integers become `Const` literals
impl From<&ConcreteSquareMatrix> for SymbolicSquareMatrix {
    fn from(matrix: &ConcreteSquareMatrix) -> Self {
        matrix.map(|element| Element::from(*element))
    }
}
