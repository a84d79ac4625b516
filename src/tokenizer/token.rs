use std::fmt;

use nom::{
    bytes::complete::take_while1,
    combinator::map,
    error::{context, VerboseError},
    IResult,
};

use super::symbol::{Operator, Paren, DOUBLING_CHARS, SINGLE_CHAR_SYMBOLS};

/// Reserved operand text that stands for the last answer.
///
/// It is not a valid variable name: assigning to it is rejected by the parser.
pub const ANSWER_MARKER: &str = "_ans_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Integer literal, variable name or the answer marker; not told apart until evaluation
    Operand(String),
    // Symbols
    Operator(Operator),
    Paren(Paren),
}

impl Token {
    /// The exact input text this token was cut from.
    pub fn as_str(&self) -> &str {
        match self {
            Token::Operand(text) => text,
            Token::Operator(op) => op.as_ref(),
            Token::Paren(paren) => paren.as_ref(),
        }
    }

    /// True for tokens that need an operand on their left: the infix
    /// single-character operators and the two-character operators.
    pub fn expects_left_operand(&self) -> bool {
        matches!(self, Token::Operator(op) if op.is_infix() || op.is_two_char())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// Input whitespace: only space, carriage return and newline separate tokens.
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\r' | '\n')
}

/// Characters that accumulate into a multi-character operand.
pub fn is_operand_char(c: char) -> bool {
    !is_separator(c) && !SINGLE_CHAR_SYMBOLS.contains(&c) && !DOUBLING_CHARS.contains(&c)
}

/// Parses a run of operand characters (digits, letters and anything else without
/// a symbol meaning).
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_operand(input: &str) -> ParserResult<Token> {
    context(
        "operand",
        map(take_while1(is_operand_char), |text: &str| {
            Token::Operand(text.to_string())
        }),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand() {
        let (rest, token) = parse_operand("my_var123 other").unwrap();
        assert_eq!(token, Token::Operand("my_var123".to_string()));
        assert_eq!(rest, " other");
    }

    #[test]
    fn test_operand_stops_at_symbols() {
        let test_cases = [("12+3", "+3"), ("x*2", "*2"), ("a<<1", "<<1"), ("n)", ")")];

        for (input, expected_rest) in test_cases.iter() {
            let (rest, _) = parse_operand(input).unwrap();
            assert_eq!(rest, *expected_rest);
        }
    }

    #[test]
    fn test_operand_keeps_tabs_and_unicode() {
        let (rest, token) = parse_operand("a\tb λ").unwrap();
        assert_eq!(token, Token::Operand("a\tb".to_string()));
        assert_eq!(rest, " λ");
    }

    #[test]
    fn test_token_text() {
        assert_eq!(Token::Operator(Operator::Power).to_string(), "**");
        assert_eq!(Token::Paren(Paren::Close).as_str(), ")");
        assert_eq!(Token::Operand(ANSWER_MARKER.to_string()).as_str(), "_ans_");
    }

    #[test]
    fn test_expects_left_operand() {
        assert!(Token::Operator(Operator::Minus).expects_left_operand());
        assert!(Token::Operator(Operator::ShiftRight).expects_left_operand());
        assert!(!Token::Operator(Operator::Not).expects_left_operand());
        assert!(!Token::Operator(Operator::Assign).expects_left_operand());
        assert!(!Token::Paren(Paren::Open).expects_left_operand());
    }
}
