////////////////////////////////////////////////////////////////
//  STACK CALCULATOR
////////////////////////////////////////////////////////////////
/*
A session keeps a stack of matrices and a table of variable values. Every input token is
one command (see commands.rs). Binary operators pop the top matrix (first operand) and the
one below it (second operand), turn both into symbolic matrices and push
first (+|-|*) second. Whenever the operation fails both operands go back where they were.
*/
use crate::calculator::commands::{Command, parse_command};
use crate::matrix::matrix_errors::MatrixError;
use crate::matrix::matrix_traits::{AnyMatrix, SquareMatrixLike};
use crate::matrix::square_matrix::SymbolicSquareMatrix;
use crate::symbolic::element::{Operator, Valuation};

use log::{info, warn};
use tabled::settings::Style;
use tabled::{Table, Tabled};

pub const STACK_IS_EMPTY: &str = "Stack is empty";
pub const ONLY_ONE_MATRIX: &str = "Stack only has one matrix";
pub const COULD_NOT_EVALUATE: &str = "Couldn't do evaluation, please declare values to variables";
pub const NOT_SAME_SIZE: &str = "Matrices are not the same size";
pub const INVALID_INPUT: &str = "Invalid input";
pub const NEEDS_INTEGER: &str = "You must give an integer value to the character";
pub const MATRIX_ADDED: &str = "Added matrix to stack";
pub const NO_VARIABLES: &str = "No variables declared";

/// What the caller should do after a command
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// command succeeded, show the message
    Done(String),
    /// command was rejected, state unchanged, show the message
    Rejected(String),
    Quit,
}

impl CommandOutcome {
    pub fn message(&self) -> Option<&str> {
        match self {
            CommandOutcome::Done(message) | CommandOutcome::Rejected(message) => Some(message),
            CommandOutcome::Quit => None,
        }
    }
}

#[derive(Tabled)]
struct StackRow {
    position: usize,
    kind: &'static str,
    size: usize,
    matrix: String,
}

#[derive(Tabled)]
struct VariableRow {
    variable: char,
    value: i64,
}

fn operation_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "addition",
        Operator::Sub => "subtraction",
        Operator::Mul => "multiplication",
    }
}

fn apply_operator(
    op: Operator,
    first: &SymbolicSquareMatrix,
    second: &SymbolicSquareMatrix,
) -> Result<SymbolicSquareMatrix, MatrixError> {
    match op {
        Operator::Add => first + second,
        Operator::Sub => first - second,
        Operator::Mul => first * second,
    }
}

fn failure_message(error: &MatrixError) -> &'static str {
    match error {
        MatrixError::EvaluationFailed { .. } => COULD_NOT_EVALUATE,
        MatrixError::DimensionMismatch { .. } => NOT_SAME_SIZE,
        MatrixError::MalformedMatrixText { .. } => INVALID_INPUT,
    }
}

#[derive(Debug, Clone, Default)]
pub struct StackCalculator {
    stack: Vec<AnyMatrix>,
    valuation: Valuation,
}

impl StackCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// start with preloaded variable values
    pub fn with_valuation(valuation: Valuation) -> Self {
        Self {
            stack: Vec::new(),
            valuation,
        }
    }

    /// bottom first, top last
    pub fn stack(&self) -> &[AnyMatrix] {
        &self.stack
    }

    pub fn top(&self) -> Option<&AnyMatrix> {
        self.stack.last()
    }

    pub fn valuation(&self) -> &Valuation {
        &self.valuation
    }

    pub fn push(&mut self, matrix: impl Into<AnyMatrix>) {
        self.stack.push(matrix.into());
    }

    /// Run every whitespace separated token of the line. Tokens after `quit` are ignored.
    pub fn execute_line(&mut self, line: &str) -> Vec<CommandOutcome> {
        let mut outcomes = Vec::new();
        for token in line.split_whitespace() {
            let outcome = self.execute(token);
            let quit = outcome == CommandOutcome::Quit;
            outcomes.push(outcome);
            if quit {
                break;
            }
        }
        outcomes
    }

    pub fn execute(&mut self, token: &str) -> CommandOutcome {
        let outcome = match parse_command(token) {
            Command::Quit => CommandOutcome::Quit,
            Command::Assign { name, value } => self.assign(name, value),
            Command::InvalidAssignment(_) => CommandOutcome::Rejected(NEEDS_INTEGER.to_string()),
            Command::Operator(op) => self.binary_operation(op),
            Command::Evaluate => self.evaluate_top(),
            Command::ShowStack => self.show_stack(),
            Command::ShowVariables => self.show_variables(),
            Command::Matrix(text) => self.push_text(&text),
        };
        match &outcome {
            CommandOutcome::Done(message) => info!("{} -> {}", token, message),
            CommandOutcome::Rejected(message) => warn!("{} -> {}", token, message),
            CommandOutcome::Quit => info!("session ended"),
        }
        outcome
    }

    fn assign(&mut self, name: char, value: i64) -> CommandOutcome {
        self.valuation.insert(name, value);
        CommandOutcome::Done(format!("Gave character {} the value of {}", name, value))
    }

    fn binary_operation(&mut self, op: Operator) -> CommandOutcome {
        match self.stack.len() {
            0 => return CommandOutcome::Rejected(STACK_IS_EMPTY.to_string()),
            1 => return CommandOutcome::Rejected(ONLY_ONE_MATRIX.to_string()),
            _ => {}
        }
        // [second, first]
        let operands = self.stack.split_off(self.stack.len() - 2);
        let (second, first) = (&operands[0], &operands[1]);
        let result = first.to_symbolic(&self.valuation).and_then(|lhs| {
            let rhs = second.to_symbolic(&self.valuation)?;
            apply_operator(op, &lhs, &rhs)
        });
        match result {
            Ok(matrix) => {
                let message = format!("Added result of {}: {} to the stack", operation_name(op), matrix);
                self.stack.push(AnyMatrix::Symbolic(matrix));
                CommandOutcome::Done(message)
            }
            Err(error) => {
                self.stack.extend(operands);
                CommandOutcome::Rejected(failure_message(&error).to_string())
            }
        }
    }

    fn evaluate_top(&self) -> CommandOutcome {
        let Some(top) = self.stack.last() else {
            return CommandOutcome::Rejected(STACK_IS_EMPTY.to_string());
        };
        match top.evaluate_matrix(&self.valuation) {
            Ok(matrix) => CommandOutcome::Done(matrix.to_string()),
            Err(error) => CommandOutcome::Rejected(failure_message(&error).to_string()),
        }
    }

    fn push_text(&mut self, text: &str) -> CommandOutcome {
        match SymbolicSquareMatrix::from_text(text) {
            Ok(matrix) => {
                self.stack.push(AnyMatrix::Symbolic(matrix));
                CommandOutcome::Done(MATRIX_ADDED.to_string())
            }
            Err(_) => CommandOutcome::Rejected(INVALID_INPUT.to_string()),
        }
    }

    /// table of the stack, top row is the top of the stack (position 0)
    fn show_stack(&self) -> CommandOutcome {
        if self.stack.is_empty() {
            return CommandOutcome::Rejected(STACK_IS_EMPTY.to_string());
        }
        let rows: Vec<StackRow> = self
            .stack
            .iter()
            .rev()
            .enumerate()
            .map(|(position, matrix)| StackRow {
                position,
                kind: matrix.kind(),
                size: matrix.size(),
                matrix: matrix.render(),
            })
            .collect();
        let mut table = Table::new(&rows);
        table.with(Style::modern_rounded());
        CommandOutcome::Done(table.to_string())
    }

    fn show_variables(&self) -> CommandOutcome {
        if self.valuation.is_empty() {
            return CommandOutcome::Rejected(NO_VARIABLES.to_string());
        }
        let rows: Vec<VariableRow> = self
            .valuation
            .iter()
            .map(|(&variable, &value)| VariableRow { variable, value })
            .collect();
        let mut table = Table::new(&rows);
        table.with(Style::modern_rounded());
        CommandOutcome::Done(table.to_string())
    }
}
