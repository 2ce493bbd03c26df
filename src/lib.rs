pub mod error;
pub mod postfix;
pub mod token;

pub use error::{EvalError, Result};

use log::debug;
use postfix::{evaluate, to_postfix};
use rayon::prelude::*;
use token::{normalize, strip_whitespace, tokenize, tokenize_strict};

/// Evaluates an arithmetic expression with the default configuration.
///
/// ```
/// assert_eq!(calcyard_rs::calculator("2^3^2"), Ok(512.0));
/// ```
pub fn calculator(expression: &str) -> Result<f64> {
    Calculator::default().evaluate(expression)
}

/// Formats a result with two fixed decimals, e.g. `3.00`.
pub fn format_result(value: f64) -> String {
    format!("{:.2}", value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Accept `,` as a decimal separator.
    pub decimal_comma: bool,
    /// Reject unknown characters while tokenizing instead of during conversion.
    pub strict_tokens: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            decimal_comma: true,
            strict_tokens: false,
        }
    }
}

/// Stateless expression evaluator. Holds only its configuration, so one
/// instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Runs the full pipeline on one expression.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` with the value of the expression.
    /// * `Err(EvalError)` describing why the expression was rejected.
    pub fn evaluate(&self, expression: &str) -> Result<f64> {
        let normalized = if self.config.decimal_comma {
            normalize(expression)
        } else {
            strip_whitespace(expression)
        };
        debug!("Normalized expression: {}", normalized);

        let tokens = if self.config.strict_tokens {
            tokenize_strict(&normalized)?
        } else {
            tokenize(&normalized)
        };

        let postfix = to_postfix(tokens)?;
        evaluate(&postfix)
    }

    /// Evaluates many expressions in parallel. Results keep the input order and
    /// a failing expression does not affect the others.
    pub fn evaluate_batch<S>(&self, expressions: &[S]) -> Vec<Result<f64>>
    where
        S: AsRef<str> + Sync,
    {
        debug!(
            "Evaluating batch of {} expressions with {:?}",
            expressions.len(),
            self.config()
        );
        expressions
            .par_iter()
            .map(|expression| self.evaluate(expression.as_ref()))
            .collect()
    }
}
