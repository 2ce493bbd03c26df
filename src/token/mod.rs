use crate::error::EvalError;
use std::fmt;

mod normalizer;
mod tokenizer;

pub use normalizer::{normalize, strip_whitespace};
pub use tokenizer::{tokenize, tokenize_strict};

/// Precedence carried by tokens that are not operators.
pub const NO_PRECEDENCE: i32 = -1;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Unknown,
    Number,
    Operator,
    LeftParen,
    RightParen,
    Dot,
}

/// One lexical unit of an arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub precedence: i32,
    pub right_associative: bool,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            precedence: NO_PRECEDENCE,
            right_associative: false,
        }
    }

    pub fn number(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Number, text)
    }

    pub fn operator(operator: Operator) -> Self {
        Self {
            kind: TokenKind::Operator,
            text: operator.symbol().to_string(),
            precedence: operator.precedence(),
            right_associative: operator.is_right_associative(),
        }
    }

    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Number
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Renders a token sequence as space separated text, e.g. `3 4 2 * +`.
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Power,
    Multiply,
    Divide,
    Add,
    Subtract,
}

impl Operator {
    pub fn precedence(&self) -> i32 {
        match self {
            Operator::Power => 4,
            Operator::Multiply | Operator::Divide => 3,
            Operator::Add | Operator::Subtract => 2,
        }
    }

    pub fn is_right_associative(&self) -> bool {
        matches!(self, Operator::Power)
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Power => '^',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Add => '+',
            Operator::Subtract => '-',
        }
    }

    /// Applies the operator. Division by zero follows IEEE-754 and is not an error.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Power => lhs.powf(rhs),
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '^' => Some(Operator::Power),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            _ => None,
        }
    }
}

impl TryFrom<&str> for Operator {
    type Error = EvalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Operator::from_char(c).ok_or_else(|| EvalError::UnknownOperator(value.to_string()))
            }
            _ => Err(EvalError::UnknownOperator(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_table() {
        assert_eq!(Operator::Power.precedence(), 4);
        assert_eq!(Operator::Multiply.precedence(), 3);
        assert_eq!(Operator::Divide.precedence(), 3);
        assert_eq!(Operator::Add.precedence(), 2);
        assert_eq!(Operator::Subtract.precedence(), 2);
        assert!(Operator::Power.is_right_associative());
        assert!(!Operator::Subtract.is_right_associative());
    }

    #[test]
    fn test_operator_try_from() {
        assert_eq!(Operator::try_from("^"), Ok(Operator::Power));
        assert_eq!(Operator::try_from("-"), Ok(Operator::Subtract));
        assert_eq!(
            Operator::try_from("%"),
            Err(EvalError::UnknownOperator("%".to_string()))
        );
        assert_eq!(
            Operator::try_from("**"),
            Err(EvalError::UnknownOperator("**".to_string()))
        );
        assert!(Operator::try_from("").is_err());
    }

    #[test]
    fn test_operator_token_carries_table() {
        let token = Token::operator(Operator::Power);
        assert_eq!(token.kind, TokenKind::Operator);
        assert_eq!(token.text, "^");
        assert_eq!(token.precedence, 4);
        assert!(token.right_associative);

        let paren = Token::new(TokenKind::LeftParen, "(");
        assert_eq!(paren.precedence, NO_PRECEDENCE);
    }

    #[test]
    fn test_apply_division_by_zero() {
        assert_eq!(Operator::Divide.apply(1.0, 0.0), f64::INFINITY);
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
        assert_eq!(Operator::Power.apply(2.0, 10.0), 1024.0);
    }

    #[test]
    fn test_join_tokens() {
        let tokens = vec![
            Token::number("3"),
            Token::number("4"),
            Token::operator(Operator::Add),
        ];
        assert_eq!(join_tokens(&tokens), "3 4 +");
        assert_eq!(join_tokens(&[]), "");
        assert_eq!(Token::operator(Operator::Power).to_string(), "^");
    }
}
