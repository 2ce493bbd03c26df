use crate::error::{EvalError, Result};
use crate::token::{join_tokens, Operator, Token, TokenKind};
use log::{debug, trace};

/// Precedence given to a prefix sign so it binds tighter than `*` and `/`
/// but still lets `^` bind first: `-2^2` is `-(2^2)`.
const SIGN_PRECEDENCE: i32 = 4;

/// Reorders infix tokens into postfix (reverse Polish) order.
///
/// Digit runs separated by a dot are glued back into one number, and a
/// leading `-` or `+` is rewritten as `0 -` / `0 +`.
pub fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();
    let mut saw_operator = false;
    let mut previous: Option<TokenKind> = None;

    for token in tokens {
        let kind = token.kind;
        trace_step(&token, &output, &stack);

        match kind {
            TokenKind::Number => {
                let continues_fraction = !saw_operator
                    && previous == Some(TokenKind::Dot)
                    && output
                        .last()
                        .is_some_and(|last| last.is_number() && last.text.contains('.'));
                match output.last_mut() {
                    Some(last) if continues_fraction => last.text.push_str(&token.text),
                    _ => {
                        output.push(token);
                        saw_operator = false;
                    }
                }
            }

            TokenKind::Dot => {
                let after_digits = previous == Some(TokenKind::Number);
                match output.last_mut() {
                    Some(last) if after_digits && last.is_number() => last.text.push('.'),
                    _ => {
                        output.push(Token::number("."));
                        saw_operator = false;
                    }
                }
            }

            TokenKind::Operator => {
                let mut o1 = token;
                saw_operator = true;

                if is_prefix_position(previous) && is_sign(&o1) {
                    output.push(Token::number("0"));
                    o1.precedence = SIGN_PRECEDENCE;
                    o1.right_associative = true;
                }

                while let Some(o2) = stack.last() {
                    let pops = if o1.right_associative {
                        o1.precedence < o2.precedence
                    } else {
                        o1.precedence <= o2.precedence
                    };
                    if !pops {
                        break;
                    }
                    if let Some(o2) = stack.pop() {
                        output.push(o2);
                    }
                }

                stack.push(o1);
            }

            TokenKind::LeftParen => stack.push(token),

            TokenKind::RightParen => loop {
                match stack.pop() {
                    Some(top) if top.kind == TokenKind::LeftParen => break,
                    Some(top) => output.push(top),
                    None => return Err(EvalError::ParenMismatch),
                }
            },

            TokenKind::Unknown => return Err(EvalError::Token(token.text)),
        }

        previous = Some(kind);
    }

    while let Some(top) = stack.pop() {
        if top.kind == TokenKind::LeftParen {
            return Err(EvalError::ParenMismatch);
        }
        output.push(top);
    }

    debug!("Postfix: {}", join_tokens(&output));
    Ok(output)
}

fn is_prefix_position(previous: Option<TokenKind>) -> bool {
    matches!(
        previous,
        None | Some(TokenKind::Operator) | Some(TokenKind::LeftParen)
    )
}

fn is_sign(token: &Token) -> bool {
    matches!(
        Operator::try_from(token.text.as_str()),
        Ok(Operator::Add) | Ok(Operator::Subtract)
    )
}

fn trace_step(token: &Token, output: &[Token], stack: &[Token]) {
    trace!(
        "|{:<3}|{:<32}|{:>10}|",
        token.text,
        join_tokens(output),
        join_tokens(stack)
    );
}
