use thiserror::Error;

/// Errors raised while re-evaluating expression text under game rules
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedCharacter { found: char, position: usize },
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Unexpected token '{found}' at position {position}")]
    UnexpectedToken { found: String, position: usize },
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division does not come out exact: {dividend} / {divisor}")]
    InexactDivision { dividend: u32, divisor: u32 },
    #[error("Negative intermediate result: {left} - {right}")]
    NegativeResult { left: u32, right: u32 },
    #[error("Arithmetic overflow")]
    Overflow,
    #[error("Parentheses nested deeper than {max} levels")]
    TooDeep { max: usize },
}
