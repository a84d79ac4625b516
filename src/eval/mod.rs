//! Evaluation of expression trees.
//!
//! # Core Components
//!
//! ## Evaluator
//! Walks an [`Expr`](crate::ast::Expr) tree and computes its 64-bit signed
//! value, resolving operands in a fixed order: integer literal, answer marker,
//! then variable (unset variables read as zero).
//!
//! ## Scope
//! Variable access for one evaluation. Assignments are staged in the scope and
//! only committed by the [`Interpreter`](crate::Interpreter) when the whole
//! evaluation succeeds.

pub mod context;
pub mod evaluator;

pub use context::Scope;
pub use evaluator::{EvalError, EvalResult, Evaluator};
