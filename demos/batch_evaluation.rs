use calcyard_rs::{format_result, Calculator, CalculatorConfig};

fn main() {
    pretty_env_logger::init();

    let expressions = vec![
        "2^3^2",
        "(1+2",
        "1,5 * 4",
        "1/0",
        "2 * x",
    ];

    let calculator = Calculator::new(CalculatorConfig {
        strict_tokens: true,
        ..Default::default()
    });

    let results = calculator.evaluate_batch(&expressions);
    for (i, (expression, result)) in expressions.iter().zip(results).enumerate() {
        match result {
            Ok(value) => println!("Result {}: {} = {}", i, expression, format_result(value)),
            Err(err) => println!("Result {}: {} failed: {}", i, expression, err),
        }
    }
}
