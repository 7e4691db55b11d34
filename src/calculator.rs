//! # Stack calculator
//!
//! An interactive front end over the matrix library. Input tokens push symbolic matrices,
//! combine the two top matrices, evaluate the top one or give values to variables.
//!
//! ## Example
//! ```
//! use RustedSquareMatrix::calculator::stack_calculator::{CommandOutcome, StackCalculator};
//! let mut calculator = StackCalculator::new();
//! let outcomes = calculator.execute_line("[[1,x][2,3]] [[4,5][6,7]] + x=10 =");
//! assert_eq!(
//!     outcomes[2],
//!     CommandOutcome::Done("Added result of addition: [[(4+1),(5+x)][(6+2),(7+3)]] to the stack".to_string())
//! );
//! assert_eq!(outcomes[4], CommandOutcome::Done("[[5,15][8,10]]".to_string()));
//! ```
/// recognition of input tokens
pub mod commands;
/// the stack, the variables and the command handlers
pub mod stack_calculator;
