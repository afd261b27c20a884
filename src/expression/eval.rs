use std::str::FromStr;

use log::debug;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

/// Solver output nests at most five levels; typed answers get some slack
const MAX_NESTING: usize = 64;

/// Result of re-evaluating expression text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub value: u32,
    /// Number literals in the order they appear
    pub operands: Vec<u32>,
    pub operations: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Number(u32),
    Op(Operator),
    Open,
    Close,
}

impl Token {
    fn describe(self) -> String {
        match self {
            Token::Number(n) => n.to_string(),
            Token::Op(op) => op.symbol().to_string(),
            Token::Open => "(".to_string(),
            Token::Close => ")".to_string(),
        }
    }
}

fn tokenize(text: &str) -> Result<Vec<(usize, Token)>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        let token = match c {
            c if c.is_whitespace() => continue,
            '0'..='9' => {
                let mut literal = String::from(c);
                while let Some(&(_, next)) = chars.peek() {
                    if !next.is_ascii_digit() {
                        break;
                    }
                    literal.push(next);
                    chars.next();
                }
                let n = literal
                    .parse::<u32>()
                    .map_err(|_| ExpressionError::InvalidNumber(literal.clone()))?;
                Token::Number(n)
            }
            '+' => Token::Op(Operator::Add),
            '-' => Token::Op(Operator::Sub),
            '*' | 'x' | '×' => Token::Op(Operator::Mul),
            '/' | '÷' => Token::Op(Operator::Div),
            '(' => Token::Open,
            ')' => Token::Close,
            found => return Err(ExpressionError::UnexpectedCharacter { found, position }),
        };
        tokens.push((position, token));
    }

    Ok(tokens)
}

fn apply_checked(op: Operator, left: u32, right: u32) -> Result<u32, ExpressionError> {
    match op {
        Operator::Add => left.checked_add(right).ok_or(ExpressionError::Overflow),
        Operator::Sub => left
            .checked_sub(right)
            .ok_or(ExpressionError::NegativeResult { left, right }),
        Operator::Mul => left.checked_mul(right).ok_or(ExpressionError::Overflow),
        Operator::Div => {
            if right == 0 {
                Err(ExpressionError::DivisionByZero)
            } else if left % right != 0 {
                Err(ExpressionError::InexactDivision {
                    dividend: left,
                    divisor: right,
                })
            } else {
                Ok(left / right)
            }
        }
    }
}

struct Parser {
    tokens: Vec<(usize, Token)>,
    pos: usize,
    operands: Vec<u32>,
    operations: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|&(_, token)| token)
    }

    fn advance(&mut self) -> Option<(usize, Token)> {
        let item = self.tokens.get(self.pos).copied();
        if item.is_some() {
            self.pos += 1;
        }
        item
    }

    fn unexpected(&self) -> ExpressionError {
        match self.tokens.get(self.pos) {
            Some(&(position, token)) => ExpressionError::UnexpectedToken {
                found: token.describe(),
                position,
            },
            None => ExpressionError::UnexpectedEnd,
        }
    }

    fn binary(
        &mut self,
        accepts: fn(Operator) -> bool,
        operand: fn(&mut Self) -> Result<u32, ExpressionError>,
    ) -> Result<u32, ExpressionError> {
        let mut acc = operand(self)?;
        while let Some(Token::Op(op)) = self.peek() {
            if !accepts(op) {
                break;
            }
            self.pos += 1;
            let right = operand(self)?;
            acc = apply_checked(op, acc, right)?;
            self.operations += 1;
        }
        Ok(acc)
    }

    fn sum(&mut self) -> Result<u32, ExpressionError> {
        self.binary(|op| matches!(op, Operator::Add | Operator::Sub), Self::product)
    }

    fn product(&mut self) -> Result<u32, ExpressionError> {
        self.binary(|op| matches!(op, Operator::Mul | Operator::Div), Self::atom)
    }

    fn atom(&mut self) -> Result<u32, ExpressionError> {
        match self.peek() {
            Some(Token::Number(n)) => {
                self.pos += 1;
                self.operands.push(n);
                Ok(n)
            }
            Some(Token::Open) => {
                if self.depth >= MAX_NESTING {
                    return Err(ExpressionError::TooDeep { max: MAX_NESTING });
                }
                self.pos += 1;
                self.depth += 1;
                let value = self.sum()?;
                self.depth -= 1;
                match self.advance() {
                    Some((_, Token::Close)) => Ok(value),
                    Some(_) => {
                        self.pos -= 1;
                        Err(self.unexpected())
                    }
                    None => Err(ExpressionError::UnexpectedEnd),
                }
            }
            _ => Err(self.unexpected()),
        }
    }
}

/// Evaluate infix expression text under game rules.
///
/// # Errors
///
/// Returns an error for malformed text, and for any step the game forbids:
/// a negative intermediate, division by zero or an inexact division.
/// Parentheses nested more than 64 deep are rejected rather than recursed into.
pub fn evaluate(text: &str) -> Result<Evaluation, ExpressionError> {
    debug!("Evaluating expression: {}", text);

    let mut parser = Parser {
        tokens: tokenize(text)?,
        pos: 0,
        operands: Vec::new(),
        operations: 0,
        depth: 0,
    };

    let value = parser.sum()?;
    if parser.peek().is_some() {
        return Err(parser.unexpected());
    }

    debug!("Expression evaluated to: {}", value);
    Ok(Evaluation {
        value,
        operands: parser.operands,
        operations: parser.operations,
    })
}

impl Expression {
    /// # Errors
    ///
    /// Fails only if the text was not produced by the solver and breaks a game rule.
    pub fn evaluate(&self) -> Result<u32, ExpressionError> {
        evaluate(&self.text).map(|evaluation| evaluation.value)
    }

    /// Source numbers mentioned in the text, left to right
    pub fn operands(&self) -> Vec<u32> {
        evaluate(&self.text)
            .map(|evaluation| evaluation.operands)
            .unwrap_or_default()
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let evaluation = evaluate(s)?;
        Ok(Expression {
            value: evaluation.value,
            text: s.trim().to_string(),
            operations: evaluation.operations,
        })
    }
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::{Token, apply_checked, tokenize};
    use crate::expression::ast::Operator;
    use crate::expression::errors::ExpressionError;

    #[test]
    fn test_tokenize_aliases() {
        let tokens: Vec<Token> = tokenize("2 x 3 ÷ 1")
            .unwrap_or_default()
            .into_iter()
            .map(|(_, token)| token)
            .collect();
        assert_eq!(
            tokens,
            vec![
                Token::Number(2),
                Token::Op(Operator::Mul),
                Token::Number(3),
                Token::Op(Operator::Div),
                Token::Number(1),
            ]
        );
    }

    #[test]
    fn test_tokenize_rejects_letters() {
        assert_eq!(
            tokenize("2 + a"),
            Err(ExpressionError::UnexpectedCharacter {
                found: 'a',
                position: 4
            })
        );
    }

    #[test]
    fn test_apply_checked() {
        assert_eq!(apply_checked(Operator::Sub, 7, 3), Ok(4));
        assert_eq!(
            apply_checked(Operator::Sub, 3, 7),
            Err(ExpressionError::NegativeResult { left: 3, right: 7 })
        );
        assert_eq!(
            apply_checked(Operator::Div, 7, 0),
            Err(ExpressionError::DivisionByZero)
        );
        assert_eq!(
            apply_checked(Operator::Div, 7, 2),
            Err(ExpressionError::InexactDivision {
                dividend: 7,
                divisor: 2
            })
        );
        assert_eq!(
            apply_checked(Operator::Mul, u32::MAX, 2),
            Err(ExpressionError::Overflow)
        );
    }
}
