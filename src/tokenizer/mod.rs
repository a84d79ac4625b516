//! # Tokenizer Component
//!
//! Lexical analysis of one line of calculator input.
//!
//! ## Design Principles
//!
//! * **No lexical errors**: every character is accepted. Malformed operands
//!   (`1abc`, `1.5`) pass through untouched and only surface at evaluation time.
//! * **No positions**: errors downstream are not positioned, so tokens carry only
//!   their text.
//! * **Longest match for doubled symbols**: `*`, `<` and `>` combine with an
//!   identical neighbour into `**`, `<<`, `>>`.
//!
//! ## Component Structure
//!
//! * [`token`]: the [`Token`] type, operand parsing and the answer marker
//! * [`symbol`]: operators and parentheses
//! * [`tokenizer`](mod@tokenizer): the [`tokenize`] driver loop
//!
//! ## Usage Example
//!
//! ```
//! use tcalc::tokenizer::{tokenize, Operator, Token};
//!
//! let tokens = tokenize("1 << 5");
//! assert_eq!(tokens[1], Token::Operator(Operator::ShiftLeft));
//! ```

pub mod symbol;
pub mod token;
#[allow(clippy::module_inception)]
pub mod tokenizer;

pub use symbol::{Operator, Paren};
pub use token::{Token, ANSWER_MARKER};
pub use tokenizer::tokenize;
