//! # Left-to-right expression parser
//!
//! The calculator language has no operator precedence. The parser walks the
//! token slice once, carrying a single accumulator: every operator wraps the
//! accumulated tree as its left operand, and the following operand (or
//! parenthesized group) fills the right slot. `1 + 2 * 3` therefore groups as
//! `(1 + 2) * 3`, and parentheses are the only way to group differently.
//!
//! Two tokens interrupt the loop:
//!
//! * `(` parses the slice up to its matching `)` as an independent
//!   sub-expression.
//! * `=` takes the accumulated reference as the variable name and parses the
//!   whole rest of the slice as the assigned value.

use tracing::{debug, trace};

use super::core::{ParseError, ParseResult};
use crate::ast::Expr;
use crate::tokenizer::{Operator, Paren, Token, ANSWER_MARKER};

/// Builds the expression tree for a complete token sequence.
///
/// Fails on an empty sequence, a leading `=`, an unmatched `(` and the other
/// structural errors of [`ParseError`].
#[tracing::instrument(level = "debug", skip(tokens), fields(count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    let expr = parse_sequence(tokens)?.ok_or(ParseError::EmptyExpression)?;
    debug!(%expr, "parsed");
    Ok(expr)
}

fn parse_sequence(tokens: &[Token]) -> ParseResult<Option<Expr>> {
    let mut current: Option<Expr> = None;
    let mut index = 0;

    while index < tokens.len() {
        match &tokens[index] {
            Token::Operator(Operator::Assign) => {
                return parse_assignment(current, &tokens[index + 1..]).map(Some);
            }
            Token::Operator(Operator::Not) => {
                // a complement only reads its operand; a left side would be ignored anyway
                if let Some(dropped) = current.take() {
                    trace!(%dropped, "left operand of `~` discarded");
                }
                current = Some(Expr::UnaryOp {
                    op: Operator::Not,
                    operand: None,
                });
            }
            Token::Operator(op) => {
                current = Some(Expr::BinaryOp {
                    op: *op,
                    left: current.take().map(Box::new),
                    right: None,
                });
            }
            Token::Paren(Paren::Open) => {
                let close = matching_paren(tokens, index)?;
                let group = parse_sequence(&tokens[index + 1..close])?
                    .ok_or(ParseError::EmptyExpression)?;
                current = Some(attach(current, group)?);
                index = close + 1;
                continue;
            }
            Token::Paren(Paren::Close) => {
                trace!("stray `)` ignored");
            }
            Token::Operand(text) => {
                current = Some(attach(current, Expr::Reference(text.clone()))?);
            }
        }
        index += 1;
    }

    Ok(current)
}

fn parse_assignment(target: Option<Expr>, rest: &[Token]) -> ParseResult<Expr> {
    let name = match target {
        None => return Err(ParseError::LeadingAssignment),
        Some(Expr::Reference(name)) => name,
        Some(other) => return Err(ParseError::InvalidAssignmentTarget(other.to_string())),
    };
    if name == ANSWER_MARKER || name.parse::<i64>().is_ok() {
        return Err(ParseError::InvalidAssignmentTarget(name));
    }

    let value = parse_sequence(rest)?.ok_or(ParseError::EmptyExpression)?;
    Ok(Expr::Assign {
        name,
        value: Box::new(value),
    })
}

/// Places an operand into the accumulator: it becomes the accumulator when there
/// is none, otherwise it fills the accumulator's empty right slot.
fn attach(current: Option<Expr>, operand: Expr) -> ParseResult<Expr> {
    let Some(mut node) = current else {
        return Ok(operand);
    };
    match node.vacant_operand() {
        Some(slot) => *slot = Some(Box::new(operand)),
        None => return Err(ParseError::UnexpectedOperand(operand.to_string())),
    }
    Ok(node)
}

/// Index of the `)` closing the `(` at `open`, skipping nested pairs.
fn matching_paren(tokens: &[Token], open: usize) -> ParseResult<usize> {
    let mut depth = 0usize;
    for (offset, token) in tokens[open + 1..].iter().enumerate() {
        match token {
            Token::Paren(Paren::Open) => depth += 1,
            Token::Paren(Paren::Close) if depth == 0 => return Ok(open + 1 + offset),
            Token::Paren(Paren::Close) => depth -= 1,
            _ => {}
        }
    }
    Err(ParseError::UnmatchedParen)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tokenizer::tokenize;

    fn parse_str(input: &str) -> ParseResult<Expr> {
        parse(&tokenize(input))
    }

    fn shape(input: &str) -> String {
        parse_str(input).unwrap().to_string()
    }

    #[test]
    fn test_left_to_right_grouping() {
        assert_eq!(shape("1 + 2 * 3"), "((1 + 2) * 3)");
        assert_eq!(shape("8 - 2 - 1"), "((8 - 2) - 1)");
        assert_eq!(shape("1 << 2 + 1"), "((1 << 2) + 1)");
        assert_eq!(shape("2 ** 3 * 2"), "((2 ** 3) * 2)");
    }

    #[test]
    fn test_parens_fill_right_slot() {
        assert_eq!(shape("1 * (3 + 2) * (5 + 6)"), "((1 * (3 + 2)) * (5 + 6))");
        assert_eq!(
            shape("(2 * (3 + 2) - 1)+ 1 / 1"),
            "((((2 * (3 + 2)) - 1) + 1) / 1)"
        );
        assert_eq!(shape("((7))"), "7");
    }

    #[test]
    fn test_paren_group_as_left_operand() {
        let expr = parse_str("(1 + 2) * 3").unwrap();
        assert_eq!(
            expr,
            Expr::binary(
                Operator::Multiply,
                Expr::binary(Operator::Plus, Expr::reference("1"), Expr::reference("2")),
                Expr::reference("3"),
            )
        );
    }

    #[test]
    fn test_prefix_operators() {
        assert_eq!(
            parse_str("~1").unwrap(),
            Expr::unary(Operator::Not, Expr::reference("1"))
        );
        // `-` is not rewritten; the evaluator reads the empty left slot as negation
        assert_eq!(
            parse_str("-5").unwrap(),
            Expr::BinaryOp {
                op: Operator::Minus,
                left: None,
                right: Some(Box::new(Expr::reference("5"))),
            }
        );
        assert_eq!(shape("1 + ~2"), "(~2)");
    }

    #[test]
    fn test_dangling_operator_is_kept() {
        assert_eq!(shape("0+-1"), "((0 + ?) - 1)");
        assert_eq!(shape("3 *"), "(3 * ?)");
    }

    #[test]
    fn test_assignment() {
        assert_eq!(
            parse_str("x = 1 + 2").unwrap(),
            Expr::assign(
                "x",
                Expr::binary(Operator::Plus, Expr::reference("1"), Expr::reference("2"))
            )
        );
        assert_eq!(shape("a = b = 3"), "a = b = 3");
        assert_eq!(shape("(y = 4) * 2"), "(y = 4 * 2)");
    }

    #[test]
    fn test_assignment_errors() {
        assert_eq!(parse_str("=5"), Err(ParseError::LeadingAssignment));
        assert_eq!(parse_str("x ="), Err(ParseError::EmptyExpression));
        assert_eq!(
            parse_str("1 + 2 = 3"),
            Err(ParseError::InvalidAssignmentTarget("(1 + 2)".to_string()))
        );
        assert_eq!(
            parse_str("_ans_ = 3"),
            Err(ParseError::InvalidAssignmentTarget("_ans_".to_string()))
        );
        assert_eq!(
            parse_str("5 = 3"),
            Err(ParseError::InvalidAssignmentTarget("5".to_string()))
        );
    }

    #[test]
    fn test_structural_errors() {
        assert_eq!(parse(&[]), Err(ParseError::EmptyExpression));
        assert_eq!(parse_str("   "), Err(ParseError::EmptyExpression));
        assert_eq!(parse_str("(1 + 2"), Err(ParseError::UnmatchedParen));
        assert_eq!(parse_str("((1 + 2)"), Err(ParseError::UnmatchedParen));
        assert_eq!(parse_str("1 + ()"), Err(ParseError::EmptyExpression));
        assert_eq!(
            parse_str("1 2"),
            Err(ParseError::UnexpectedOperand("2".to_string()))
        );
        assert_eq!(
            parse_str("1 + 2 (3)"),
            Err(ParseError::UnexpectedOperand("3".to_string()))
        );
    }

    #[test]
    fn test_stray_close_paren_ignored() {
        assert_eq!(shape("1 + 2)"), "(1 + 2)");
        assert_eq!(shape(")5"), "5");
    }

    #[test]
    fn test_matching_paren_skips_nested_pairs() {
        let tokens = tokenize("(1 * (2 + 3)) + 4");
        assert_eq!(matching_paren(&tokens, 0), Ok(8));
        assert_eq!(matching_paren(&tokens, 3), Ok(7));
    }
}
