use crate::error::{EvalError, Result};
use crate::token::{Operator, Token, TokenKind};
use log::debug;

/// Splits a normalized expression into tokens.
///
/// Characters outside the grammar become [`TokenKind::Unknown`] tokens and are
/// rejected later by the converter.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_ascii_digit() {
            let mut end = start + c.len_utf8();
            while let Some(&(index, next)) = chars.peek() {
                if !next.is_ascii_digit() {
                    break;
                }
                end = index + next.len_utf8();
                chars.next();
            }
            tokens.push(Token::number(&input[start..end]));
            continue;
        }

        let token = match c {
            '.' => Token::new(TokenKind::Dot, "."),
            '(' => Token::new(TokenKind::LeftParen, "("),
            ')' => Token::new(TokenKind::RightParen, ")"),
            _ => match Operator::from_char(c) {
                Some(operator) => Token::operator(operator),
                None => Token::new(TokenKind::Unknown, c.to_string()),
            },
        };
        tokens.push(token);
    }

    debug!("Tokenized {:?} into {} tokens", input, tokens.len());
    tokens
}

/// Like [`tokenize`], but fails on the first unrecognized character.
pub fn tokenize_strict(input: &str) -> Result<Vec<Token>> {
    let tokens = tokenize(input);
    match tokens.iter().find(|token| token.kind == TokenKind::Unknown) {
        Some(unknown) => Err(EvalError::Token(unknown.text.clone())),
        None => Ok(tokens),
    }
}
