use crate::calc::ParseError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Caret => write!(f, "^"),
        }
    }
}

/// Splits an expression into tokens. Anything that is not a plain decimal
/// literal or one of `+ - * / ^` is rejected here, before parsing starts.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let simple = match c {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Minus),
            '*' => Some(Token::Star),
            '/' => Some(Token::Slash),
            '^' => Some(Token::Caret),
            _ => None,
        };
        if let Some(tok) = simple {
            tokens.push(tok);
            chars.next();
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let mut literal = String::new();
            while let Some(&(_, d)) = chars.peek() {
                // Keep eating word characters so "1e3" or "0x1f" is reported whole
                if d.is_ascii_digit() || d == '.' || d.is_alphanumeric() || d == '_' {
                    literal.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push(Token::Number(parse_literal(&literal)?));
            continue;
        }

        if c.is_alphabetic() || c == '_' {
            let mut name = String::new();
            while let Some(&(_, d)) = chars.peek() {
                if d.is_alphanumeric() || d == '_' {
                    name.push(d);
                    chars.next();
                } else {
                    break;
                }
            }
            return Err(ParseError::UnknownIdentifier(name));
        }

        return Err(ParseError::UnexpectedChar { ch: c, pos });
    }

    Ok(tokens)
}

fn parse_literal(literal: &str) -> Result<f64, ParseError> {
    let dots = literal.chars().filter(|&c| c == '.').count();
    let digits = literal.chars().filter(|c| c.is_ascii_digit()).count();
    let well_formed = dots <= 1
        && digits > 0
        && literal.chars().all(|c| c.is_ascii_digit() || c == '.');

    if !well_formed {
        return Err(ParseError::UnsupportedLiteral(literal.to_string()));
    }

    literal
        .parse::<f64>()
        .map_err(|_| ParseError::UnsupportedLiteral(literal.to_string()))
}
