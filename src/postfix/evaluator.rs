use crate::error::{EvalError, Result};
use crate::token::{join_tokens, Operator, Token, TokenKind};
use log::{debug, trace};

/// Evaluates a postfix token sequence with a value stack.
pub fn evaluate(postfix: &[Token]) -> Result<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for (index, token) in postfix.iter().enumerate() {
        match token.kind {
            TokenKind::Number => {
                let value = token
                    .text
                    .parse::<f64>()
                    .map_err(|_| EvalError::NumberParse {
                        text: token.text.clone(),
                    })?;
                stack.push(value);
            }

            TokenKind::Dot => {}

            TokenKind::Operator => {
                let (rhs, lhs) = match (stack.pop(), stack.pop()) {
                    (Some(rhs), Some(lhs)) => (rhs, lhs),
                    _ => {
                        return Err(EvalError::StackUnderflow {
                            operator: token.text.clone(),
                        })
                    }
                };
                let operator = Operator::try_from(token.text.as_str())?;
                let result = operator.apply(lhs, rhs);
                trace!("{} {} {} = {}", lhs, token.text, rhs, result);
                stack.push(result);
            }

            TokenKind::LeftParen | TokenKind::RightParen | TokenKind::Unknown => {
                return Err(EvalError::Token(token.text.clone()))
            }
        }

        trace!(
            "|{:<3}|{:<32}|{:?}",
            token.text,
            join_tokens(&postfix[index + 1..]),
            stack
        );
    }

    match stack.as_slice() {
        [result] => {
            debug!("Result: {}", result);
            Ok(*result)
        }
        _ => Err(EvalError::Malformed {
            remaining: stack.len(),
        }),
    }
}
