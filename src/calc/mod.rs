//! Restricted arithmetic evaluator behind the `calc` built-in.
//!
//! Only decimal literals, unary sign and `+ - * / ^` are accepted. There are no
//! names, calls or groupings, so nothing in an input line can reach the host.

pub mod ast;
pub mod eval;
pub mod lexer;
pub mod parser;

use thiserror::Error;


#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),
    #[error("unsupported literal '{0}'")]
    UnsupportedLiteral(String),
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("expression is longer than {0} tokens")]
    TooLong(usize),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is out of range")]
    Overflow,
}

pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    let expr = parser::parse_expression(input)?;
    eval::eval(&expr)
}

/// Whole numbers print without a fraction ("14", not "14.0").
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
