mod converter;
mod evaluator;

pub use converter::to_postfix;
pub use evaluator::evaluate;
