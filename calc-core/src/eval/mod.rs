pub mod format;
pub mod options;

pub mod prelude {
    pub use super::{
        format::*,
        options::*,
        evaluate,
        evaluate_with,
        eval_file
    };
}

use std::path::PathBuf;

use crate::{
    lexer::prelude::Lexer,
    parser::prelude::{ParseError, Parser},
    utils::prelude::Error
};
use options::EvalOptions;

/// Evaluates one expression with the default tolerances.
///
/// Pure: the same bytes always give the same value or the same first error.
pub fn evaluate(src: &[u8]) -> Result<f64, ParseError> {
    evaluate_with(src, &EvalOptions::default())
}

pub fn evaluate_with(src: &[u8], options: &EvalOptions) -> Result<f64, ParseError> {
    let mut parser = Parser::with_options(Lexer::new(src), *options);
    let outcome = parser.parse();

    match &outcome {
        Ok(value) => log::debug!("evaluated to {value}"),
        Err(err) => log::debug!("evaluation failed: {err}"),
    }

    outcome
}

/// Reads `path` and evaluates its whole content as one expression.
pub fn eval_file(path: PathBuf, options: &EvalOptions) -> Result<f64, Error> {
    let src = match std::fs::read(&path) {
        Ok(src) => src,
        Err(err) => {
            let error = Error::StdIo { path, err: err.kind() };
            return Err(error)
        }
    };

    match evaluate_with(&src, options) {
        Ok(value) => Ok(value),
        Err(error) => Err(Error::Parse { path, src, error })
    }
}

#[cfg(test)]
mod tests;
