#![allow(non_snake_case)]
use RustedSquareMatrix::Utils::logger::init_logger;
use RustedSquareMatrix::Utils::settings::CalculatorSettings;
use RustedSquareMatrix::calculator::stack_calculator::{CommandOutcome, StackCalculator};

use log::error;
use std::io::{self, BufRead};
use std::process::ExitCode;

/// usage: RustedSquareMatrix [settings file]
fn main() -> ExitCode {
    let settings = match std::env::args().nth(1) {
        Some(path) => match CalculatorSettings::from_file(&path) {
            Ok(settings) => settings,
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            }
        },
        None => CalculatorSettings::default(),
    };
    if let Err(err) = init_logger(settings.loglevel.as_deref(), settings.log_to_file) {
        eprintln!("logging disabled: {}", err);
    }

    let mut calculator = StackCalculator::with_valuation(settings.valuation.clone());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("{}", settings.prompt);
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => {
                error!("cannot read input: {}", err);
                return ExitCode::FAILURE;
            }
            None => return ExitCode::SUCCESS,
        };
        for outcome in calculator.execute_line(&line) {
            match outcome.message() {
                Some(message) => println!("{}", message),
                None => return ExitCode::SUCCESS,
            }
        }
    }
}
