//! Reading equation coefficients from text.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::errors::*;
use crate::solver::Coefficients;

pub const REPROMPT_MESSAGE: &str = "Incorrect input format. Note that you are supposed to type in 3 numbers, e.g. \"1 2 3\". Please try again.";

fn parse_number(token: &str) -> Result<f64, InputError> {
    token
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber(token.to_string()))
}

/// Parses exactly three whitespace separated numbers.
pub fn parse_coefficients(text: &str) -> Result<Coefficients> {
    let values = text
        .split_whitespace()
        .map(parse_number)
        .collect::<Result<Vec<_>, _>>()?;

    if values.len() != 3 {
        return Err(InputError::WrongCount(values.len()).into());
    }

    Ok(Coefficients::new(values[0], values[1], values[2]))
}

/// Parses coefficients given as separate command line arguments.
///
/// Either all three must be present or none (in which case None is returned
/// and the caller should prompt for them instead).
pub fn coefficients_from_args(args: &[&str]) -> Result<Option<Coefficients>> {
    match args.len() {
        0 => Ok(None),
        3 => parse_coefficients(&args.join(" ")).map(Some),
        n => Err(format_err!(
            "Expected either 0 or 3 coefficients on the command line, got {}",
            n
        )),
    }
}

/// Parses a user supplied comparison tolerance which must be a finite positive
/// number.
pub fn parse_precision(text: &str) -> Result<f64> {
    let precision = text
        .trim()
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber(text.to_string()))?;
    if !precision.is_finite() || precision <= 0.0 {
        return Err(err_msg("Precision must be a finite positive number"));
    }

    Ok(precision)
}

/// Interactively reads coefficients from a line based input stream.
///
/// Numbers may be spread over multiple lines. When a token fails to parse, the
/// remainder of that line is thrown away along with any numbers collected so
/// far and the user is asked again.
pub struct CoefficientReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> CoefficientReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn read(&mut self) -> Result<Coefficients> {
        let mut values = vec![];
        let mut buffer = vec![];

        loop {
            buffer.clear();
            if self.input.read_until(b'\n', &mut buffer)? == 0 {
                return Err(InputError::EndOfInput.into());
            }

            // Invalid UTF-8 turns into replacement characters which then fail
            // to parse like any other bad token.
            let line = String::from_utf8_lossy(&buffer);
            let mut tokens = line.split_whitespace().collect::<VecDeque<_>>();
            while values.len() < 3 {
                let token = match tokens.pop_front() {
                    Some(t) => t,
                    None => break,
                };

                match parse_number(token) {
                    Ok(v) => values.push(v),
                    Err(e) => {
                        debug!("Rejected input line: {}", e);
                        values.clear();
                        writeln!(self.output, "{}", REPROMPT_MESSAGE)?;
                        self.output.flush()?;
                        break;
                    }
                }
            }

            if values.len() == 3 {
                if !tokens.is_empty() {
                    debug!("Ignoring {} trailing tokens", tokens.len());
                }

                return Ok(Coefficients::new(values[0], values[1], values[2]));
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
