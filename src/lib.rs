//! # tcalc: an integer desk calculator
//!
//! tcalc evaluates one line of arithmetic and bitwise expression at a time under
//! 64-bit signed integer semantics, remembering the last answer and any assigned
//! variables across calls.
//!
//! ## Language
//!
//! * Operators: `+ - * / % & | ^`, shifts `<< >>`, power `**`, complement `~`,
//!   negation (a `-` with nothing on its left) and assignment `name = expr`.
//! * No precedence: operators apply strictly left to right, so `1 + 2 * 3` is
//!   `9`. Parentheses are the only grouping.
//! * `_ans_` ([`ANSWER_MARKER`]) reads the last answer; unset variables read as
//!   zero.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Input line → Tokenizer → Parser → Evaluator → Interpreter state
//! ```
//!
//! * [`tokenizer`]: splits the line into [`Token`]s; never fails.
//! * [`analyzer`]: builds the [`Expr`](ast::Expr) tree by left-to-right
//!   accumulation.
//! * [`eval`]: computes the value, staging assignments.
//! * [`Interpreter`]: owns the session state and is the single place where
//!   failures are recorded.
//!
//! [`Session`] wraps an interpreter with the front-end conveniences (implicit
//! answer prefix, history) and [`display`] renders answers.
//!
//! ```
//! use tcalc::Interpreter;
//!
//! let mut calc = Interpreter::new();
//! assert_eq!(calc.exec("1 * (3 + 2) * (5 + 6)"), Ok(55));
//! assert!(calc.exec("1 / 0").is_err());
//! assert_eq!(calc.answer(), 55);
//! ```

pub mod analyzer;
pub mod ast;
pub mod config;
pub mod display;
pub mod error;
pub mod eval;
pub mod interpreter;
pub mod session;
pub mod tokenizer;

// Re-exports
pub use config::CalcConfig;
pub use error::*;
pub use interpreter::Interpreter;
pub use session::{HistoryRecord, Session};
pub use tokenizer::{tokenize, Token, ANSWER_MARKER};
