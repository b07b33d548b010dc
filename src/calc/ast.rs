#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,  // +x
    Minus, // -x
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
    Pow, // ^ (right-associative)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // Literal: "3", "2.5", ".5"
    Number(f64),
    // Sign applied to an operand: "-5"
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    // "2 + 3", "2 ^ 3"
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}
