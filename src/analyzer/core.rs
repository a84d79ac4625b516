use thiserror::Error;

pub type ParseResult<O> = Result<O, ParseError>;

/// Structural failures found while building the expression tree.
///
/// Missing operands are not reported here: an operator node may legally wait for
/// its right operand until the end of input, and the evaluator reports the gap.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Empty expression")]
    EmptyExpression,
    #[error("Assignment without a variable name")]
    LeadingAssignment,
    #[error("Cannot assign to `{0}`")]
    InvalidAssignmentTarget(String),
    #[error("Unmatched parenthesis")]
    UnmatchedParen,
    #[error("Unexpected operand `{0}`, expected an operator")]
    UnexpectedOperand(String),
}
