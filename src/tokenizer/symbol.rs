//! # Symbol Token Handling
//!
//! This module defines the operators and parentheses recognized by the calculator
//! language and provides the nom parsers for them.
//!
//! ## Parsing Strategy
//!
//! Symbols are parsed using a longest-match approach: the two-character operators
//! (`<<`, `>>`, `**`) are tried before any single character, so `**` is never split
//! into two multiplications. A `<` or `>` that is not doubled has no meaning as an
//! operator; it starts a new operand instead, and the operand characters that
//! follow it accumulate into that same token (`a<b` gives `a` and `<b`).
//!
//! ## Precedence
//!
//! There is none. The tokenizer only separates symbols; the parser applies every
//! operator strictly left to right.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::one_of,
    combinator::{map, recognize, value},
    error::context,
    sequence::pair,
};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::token::{is_operand_char, ParserResult, Token};

/// Characters that combine with an identical neighbour into a two-character operator.
pub const DOUBLING_CHARS: [char; 3] = ['*', '<', '>'];

/// Single characters that always form a token of their own.
pub const SINGLE_CHAR_SYMBOLS: [char; 11] = ['+', '-', '/', '^', '&', '|', '%', '=', '~', '(', ')'];

/// Represents the operators of the calculator language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum Operator {
    /// Left shift (`<<`)
    #[strum(serialize = "<<")]
    ShiftLeft,
    /// Arithmetic right shift (`>>`)
    #[strum(serialize = ">>")]
    ShiftRight,
    /// Exponentiation (`**`), computed in floating point and truncated
    #[strum(serialize = "**")]
    Power,

    /// Addition (`+`)
    #[strum(serialize = "+")]
    Plus,
    /// Subtraction, or negation when there is no left operand (`-`)
    #[strum(serialize = "-")]
    Minus,
    /// Multiplication (`*`)
    #[strum(serialize = "*")]
    Multiply,
    /// Truncating division (`/`)
    #[strum(serialize = "/")]
    Divide,
    /// Truncating remainder (`%`)
    #[strum(serialize = "%")]
    Remainder,
    /// Bitwise AND (`&`)
    #[strum(serialize = "&")]
    BitAnd,
    /// Bitwise OR (`|`)
    #[strum(serialize = "|")]
    BitOr,
    /// Bitwise XOR (`^`)
    #[strum(serialize = "^")]
    BitXor,
    /// Bitwise complement, prefix only (`~`)
    #[strum(serialize = "~")]
    Not,
    /// Variable assignment (`=`)
    #[strum(serialize = "=")]
    Assign,
}

impl Operator {
    /// `<<`, `>>` and `**`.
    pub fn is_two_char(&self) -> bool {
        matches!(
            self,
            Operator::ShiftLeft | Operator::ShiftRight | Operator::Power
        )
    }

    /// Single-character operators written between two operands. `=` and `~` are excluded.
    pub fn is_infix(&self) -> bool {
        matches!(
            self,
            Operator::Plus
                | Operator::Minus
                | Operator::Multiply
                | Operator::Divide
                | Operator::Remainder
                | Operator::BitAnd
                | Operator::BitOr
                | Operator::BitXor
        )
    }
}

/// Parentheses, the only grouping mechanism of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIter)]
pub enum Paren {
    #[strum(serialize = "(")]
    Open,
    #[strum(serialize = ")")]
    Close,
}

/// Parses an operator token from the input string.
///
/// # Examples
///
/// ```
/// # use tcalc::tokenizer::symbol::{parse_operator, Operator};
/// # use tcalc::tokenizer::token::Token;
/// let (rest, token) = parse_operator("<<5").unwrap();
/// assert_eq!(token, Token::Operator(Operator::ShiftLeft));
/// assert_eq!(rest, "5");
/// ```
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_operator(input: &str) -> ParserResult<Token> {
    context(
        "operator",
        map(
            alt((
                // Two-character operators (matched first for longest-match)
                value(Operator::ShiftLeft, tag("<<")),
                value(Operator::ShiftRight, tag(">>")),
                value(Operator::Power, tag("**")),
                // Single-character operators
                value(Operator::Plus, tag("+")),
                value(Operator::Minus, tag("-")),
                value(Operator::Multiply, tag("*")),
                value(Operator::Divide, tag("/")),
                value(Operator::Remainder, tag("%")),
                value(Operator::BitAnd, tag("&")),
                value(Operator::BitOr, tag("|")),
                value(Operator::BitXor, tag("^")),
                value(Operator::Not, tag("~")),
                value(Operator::Assign, tag("=")),
            )),
            Token::Operator,
        ),
    )(input)
}

/// Parses a parenthesis token.
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_paren(input: &str) -> ParserResult<Token> {
    context(
        "parenthesis",
        map(
            alt((value(Paren::Open, tag("(")), value(Paren::Close, tag(")")))),
            Token::Paren,
        ),
    )(input)
}

/// Parses a lone `<` or `>` that did not double into a shift, together with the
/// operand characters after it.
///
/// The result is an operand token; the evaluator later resolves it like any
/// other unknown name.
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_stray_symbol(input: &str) -> ParserResult<Token> {
    context(
        "stray symbol",
        map(
            recognize(pair(one_of("<>"), take_while(is_operand_char))),
            |text: &str| Token::Operand(text.to_string()),
        ),
    )(input)
}
