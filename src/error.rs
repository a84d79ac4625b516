use thiserror::Error;

use crate::analyzer::ParseError;
use crate::eval::EvalError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Eval error: {0}")]
    Eval(#[from] EvalError),

    #[error("Input too long: {length} characters, limit is {limit}")]
    InputTooLong { length: usize, limit: usize },

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CalcResult<T> = Result<T, CalcError>;

impl CalcError {
    pub fn internal<S: Into<String>>(message: S) -> Self {
        CalcError::Internal(message.into())
    }
}
