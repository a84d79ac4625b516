use thiserror::Error;
use tracing::{debug, trace};

use super::context::Scope;
use crate::ast::Expr;
use crate::tokenizer::{Operator, ANSWER_MARKER};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// An operator slot was never filled; the parser left a gap.
    #[error("Malformed expression: {0}")]
    MalformedExpression(String),
    /// An operator tag reached a node kind that cannot apply it.
    #[error("Invalid operator: {0}")]
    InvalidOperator(Operator),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Remainder by zero")]
    RemainderByZero,
}

pub type EvalResult<T> = Result<T, EvalError>;

/// Computes the 64-bit signed value of an expression tree.
///
/// Arithmetic wraps on overflow. Assignments write into the [`Scope`]; nothing
/// else has side effects.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Top level entry point for one expression tree.
    #[tracing::instrument(level = "debug", skip(self, expr, scope), fields(expr = %expr))]
    pub fn eval(&self, expr: &Expr, scope: &mut Scope<'_>) -> EvalResult<i64> {
        let value = self.eval_expression(expr, scope)?;
        debug!(value, "evaluated");
        Ok(value)
    }

    fn eval_expression(&self, expr: &Expr, scope: &mut Scope<'_>) -> EvalResult<i64> {
        match expr {
            Expr::Reference(text) => Ok(Self::eval_reference(text, scope)),
            // `-` with nothing on its left is a negation
            Expr::BinaryOp {
                op: Operator::Minus,
                left: None,
                right,
            } => self.eval_unary_op(Operator::Minus, right.as_deref(), scope),
            Expr::BinaryOp { op, left, right } => {
                self.eval_binary_op(*op, left.as_deref(), right.as_deref(), scope)
            }
            Expr::UnaryOp { op, operand } => self.eval_unary_op(*op, operand.as_deref(), scope),
            Expr::Assign { name, value } => {
                let value = self.eval_expression(value, scope)?;
                scope.set(name, value);
                Ok(value)
            }
        }
    }

    fn eval_binary_op(
        &self,
        op: Operator,
        left: Option<&Expr>,
        right: Option<&Expr>,
        scope: &mut Scope<'_>,
    ) -> EvalResult<i64> {
        let left = left.ok_or_else(|| missing_operand(op, "left"))?;
        let left_val = self.eval_expression(left, scope)?;
        let right = right.ok_or_else(|| missing_operand(op, "right"))?;
        let right_val = self.eval_expression(right, scope)?;

        match op {
            Operator::Plus => Ok(left_val.wrapping_add(right_val)),
            Operator::Minus => Ok(left_val.wrapping_sub(right_val)),
            Operator::Multiply => Ok(left_val.wrapping_mul(right_val)),
            Operator::Divide => Self::eval_divide(left_val, right_val),
            Operator::Remainder => Self::eval_remainder(left_val, right_val),
            Operator::BitAnd => Ok(left_val & right_val),
            Operator::BitOr => Ok(left_val | right_val),
            Operator::BitXor => Ok(left_val ^ right_val),
            Operator::ShiftLeft => Ok(left_val.wrapping_shl(shift_amount(right_val))),
            Operator::ShiftRight => Ok(left_val.wrapping_shr(shift_amount(right_val))),
            Operator::Power => Ok(Self::eval_power(left_val, right_val)),
            Operator::Not | Operator::Assign => Err(EvalError::InvalidOperator(op)),
        }
    }

    fn eval_unary_op(
        &self,
        op: Operator,
        operand: Option<&Expr>,
        scope: &mut Scope<'_>,
    ) -> EvalResult<i64> {
        let operand = operand.ok_or_else(|| missing_operand(op, "right"))?;
        let value = self.eval_expression(operand, scope)?;
        match op {
            Operator::Minus => Ok(value.wrapping_neg()),
            Operator::Not => Ok(!value),
            _ => Err(EvalError::InvalidOperator(op)),
        }
    }

    // integer literal, then the answer marker, then a variable (zero when unset)
    fn eval_reference(text: &str, scope: &Scope<'_>) -> i64 {
        if let Ok(number) = text.parse::<i64>() {
            return number;
        }
        if text == ANSWER_MARKER {
            return scope.answer();
        }
        let value = scope.get(text);
        trace!(name = text, value, "variable lookup");
        value
    }

    fn eval_divide(left: i64, right: i64) -> EvalResult<i64> {
        if right == 0 {
            return Err(EvalError::DivisionByZero);
        }
        Ok(left.wrapping_div(right))
    }

    fn eval_remainder(left: i64, right: i64) -> EvalResult<i64> {
        if right == 0 {
            return Err(EvalError::RemainderByZero);
        }
        Ok(left.wrapping_rem(right))
    }

    /// Floating-point power truncated toward zero. Results beyond 2^53 lose
    /// precision and out-of-range results saturate.
    fn eval_power(base: i64, exponent: i64) -> i64 {
        (base as f64).powf(exponent as f64) as i64
    }
}

fn shift_amount(value: i64) -> u32 {
    (value & 63) as u32
}

fn missing_operand(op: Operator, side: &str) -> EvalError {
    EvalError::MalformedExpression(format!("`{}` is missing its {} operand", op, side))
}
