//! Recognition of calculator input tokens.
//!
//! One whitespace-free token is one command:
//!
//! | token            | command                                 |
//! |------------------|-----------------------------------------|
//! | `quit`           | end of session                          |
//! | `x=12`, `y=-3`   | give a variable a value                 |
//! | `+` `-` `*`      | combine the two matrices on top         |
//! | `=`              | evaluate the top matrix                 |
//! | `stack`, `vars`  | show the stack / the variables          |
//! | anything else    | a symbolic matrix to push               |
use crate::matrix::matrix_parser::parse_signed_integer;
use crate::symbolic::element::Operator;

use nom::{
    IResult, Parser,
    character::complete::{anychar, char},
    combinator::{all_consuming, rest},
    sequence::separated_pair,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    /// valid `<letter>=<integer>`
    Assign { name: char, value: i64 },
    /// token has `=` as its second character but is not a valid assignment
    InvalidAssignment(String),
    Operator(Operator),
    Evaluate,
    ShowStack,
    ShowVariables,
    /// any other token, expected to be a symbolic matrix
    Matrix(String),
}

/// `<any char>=<rest>`
fn assignment(input: &str) -> IResult<&str, (char, &str)> {
    let mut parser = all_consuming(separated_pair(anychar, char('='), rest));
    parser.parse(input)
}

pub fn parse_command(token: &str) -> Command {
    match token {
        "quit" => return Command::Quit,
        "stack" => return Command::ShowStack,
        "vars" => return Command::ShowVariables,
        "=" => return Command::Evaluate,
        "+" => return Command::Operator(Operator::Add),
        "-" => return Command::Operator(Operator::Sub),
        "*" => return Command::Operator(Operator::Mul),
        _ => {}
    }
    if let Ok((_, (name, value))) = assignment(token) {
        return match parse_signed_integer(value) {
            Some(value) if name.is_ascii_alphabetic() => Command::Assign { name, value },
            _ => Command::InvalidAssignment(token.to_string()),
        };
    }
    Command::Matrix(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("stack"), Command::ShowStack);
        assert_eq!(parse_command("vars"), Command::ShowVariables);
        assert_eq!(parse_command("="), Command::Evaluate);
        assert_eq!(parse_command("+"), Command::Operator(Operator::Add));
        assert_eq!(parse_command("-"), Command::Operator(Operator::Sub));
        assert_eq!(parse_command("*"), Command::Operator(Operator::Mul));
    }

    #[test]
    fn test_assignment() {
        assert_eq!(parse_command("x=13"), Command::Assign { name: 'x', value: 13 });
        assert_eq!(parse_command("Z=-4"), Command::Assign { name: 'Z', value: -4 });
        assert_eq!(
            parse_command("x=abc"),
            Command::InvalidAssignment("x=abc".to_string())
        );
        assert_eq!(parse_command("x="), Command::InvalidAssignment("x=".to_string()));
        assert_eq!(parse_command("x=1a"), Command::InvalidAssignment("x=1a".to_string()));
        assert_eq!(parse_command("5=3"), Command::InvalidAssignment("5=3".to_string()));
        assert_eq!(parse_command("=="), Command::InvalidAssignment("==".to_string()));
    }

    #[test]
    fn test_everything_else_is_a_matrix() {
        assert_eq!(
            parse_command("[[1,x][y,2]]"),
            Command::Matrix("[[1,x][y,2]]".to_string())
        );
        assert_eq!(parse_command("+x"), Command::Matrix("+x".to_string()));
        assert_eq!(parse_command("xy=3"), Command::Matrix("xy=3".to_string()));
    }
}
