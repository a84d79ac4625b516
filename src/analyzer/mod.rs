//! Syntactic analysis: token sequence to [`Expr`](crate::ast::Expr) tree.
//!
//! See [`parser`] for the left-to-right accumulation rule.

pub mod core;
pub mod parser;

pub use core::ParseError;
pub use core::ParseResult;
pub use parser::parse;

pub use crate::ast;
