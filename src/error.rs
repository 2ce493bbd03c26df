/// Errors raised while evaluating a single expression.
///
/// Every variant aborts the current expression only; the next call starts clean.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("mismatched parentheses")]
    ParenMismatch,

    #[error("unexpected token: {0}")]
    Token(String),

    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    #[error("stack underflow on operator {operator}")]
    StackUnderflow { operator: String },

    #[error("invalid number: {text}")]
    NumberParse { text: String },

    #[error("malformed expression: {remaining} values left on the stack")]
    Malformed { remaining: usize },
}

pub type Result<T> = std::result::Result<T, EvalError>;
