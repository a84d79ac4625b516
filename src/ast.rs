//! Expression tree built by the [`analyzer`](crate::analyzer) and walked by the
//! [`eval`](crate::eval) module.
//!
//! The tree is strict: every child is owned by exactly one parent, there is no
//! sharing and no cycles. Operator nodes keep their children in `Option` slots
//! because the left-to-right accumulation fills them one token at a time; a
//! slot still empty at evaluation time is reported as a malformed expression.

use std::fmt;

use crate::tokenizer::Operator;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Integer literal, variable name or the answer marker, kept as its token text.
    Reference(String),
    /// Any operator written between operands. A `-` without a left operand
    /// evaluates as negation.
    BinaryOp {
        op: Operator,
        left: Option<Box<Expr>>,
        right: Option<Box<Expr>>,
    },
    /// Prefix operator; only the operand slot exists.
    UnaryOp {
        op: Operator,
        operand: Option<Box<Expr>>,
    },
    Assign {
        name: String,
        value: Box<Expr>,
    },
}

impl Expr {
    pub fn reference(text: impl Into<String>) -> Self {
        Expr::Reference(text.into())
    }

    pub fn binary(op: Operator, left: Expr, right: Expr) -> Self {
        Expr::BinaryOp {
            op,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    pub fn unary(op: Operator, operand: Expr) -> Self {
        Expr::UnaryOp {
            op,
            operand: Some(Box::new(operand)),
        }
    }

    pub fn assign(name: impl Into<String>, value: Expr) -> Self {
        Expr::Assign {
            name: name.into(),
            value: Box::new(value),
        }
    }

    /// The slot the next operand goes into, if this node is still waiting for one.
    pub fn vacant_operand(&mut self) -> Option<&mut Option<Box<Expr>>> {
        match self {
            Expr::BinaryOp { right, .. } if right.is_none() => Some(right),
            Expr::UnaryOp { operand, .. } if operand.is_none() => Some(operand),
            _ => None,
        }
    }
}

struct Slot<'a>(&'a Option<Box<Expr>>);

impl fmt::Display for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(expr) => write!(f, "{}", expr),
            None => f.write_str("?"),
        }
    }
}

/// Fully parenthesized rendering; empty slots print as `?`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Reference(text) => f.write_str(text),
            Expr::BinaryOp {
                op,
                left: None,
                right,
            } => write!(f, "({}{})", op, Slot(right)),
            Expr::BinaryOp { op, left, right } => {
                write!(f, "({} {} {})", Slot(left), op, Slot(right))
            }
            Expr::UnaryOp { op, operand } => write!(f, "({}{})", op, Slot(operand)),
            Expr::Assign { name, value } => write!(f, "{} = {}", name, value),
        }
    }
}
