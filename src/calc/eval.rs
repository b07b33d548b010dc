use crate::calc::EvalError;
use crate::calc::ast::{BinaryOp, Expr, UnaryOp};

/// Every intermediate value is finite, so the result is too.
pub fn eval(expr: &Expr) -> Result<f64, EvalError> {
    match expr {
        // A literal with too many digits parses to infinity
        Expr::Number(n) => finite(*n),
        Expr::Unary { op, operand } => {
            let value = eval(operand)?;
            Ok(match op {
                UnaryOp::Plus => value,
                UnaryOp::Minus => -value,
            })
        }
        Expr::Binary { op, lhs, rhs } => {
            let l = eval(lhs)?;
            let r = eval(rhs)?;
            apply(*op, l, r)
        }
    }
}

fn finite(value: f64) -> Result<f64, EvalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::Overflow)
    }
}

fn apply(op: BinaryOp, l: f64, r: f64) -> Result<f64, EvalError> {
    let value = match op {
        BinaryOp::Add => l + r,
        BinaryOp::Sub => l - r,
        BinaryOp::Mul => l * r,
        BinaryOp::Div => {
            if r == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            l / r
        }
        BinaryOp::Pow => l.powf(r),
    };
    finite(value)
}
