use calcyard_rs::postfix::{evaluate, to_postfix};
use calcyard_rs::token::{join_tokens, normalize, tokenize};
use log::debug;

fn main() {
    pretty_env_logger::init();

    let expression = "3 + 4 * 2 / (1 - 5) ^ 2 ^ 3";
    let tokens = tokenize(&normalize(expression));
    debug!("tokens: {}", join_tokens(&tokens));

    let postfix = match to_postfix(tokens) {
        Ok(postfix) => postfix,
        Err(err) => {
            eprintln!("conversion failed: {err}");
            return;
        }
    };
    println!("postfix: {}", join_tokens(&postfix));

    match evaluate(&postfix) {
        Ok(result) => println!("result: {result}"),
        Err(err) => eprintln!("evaluation failed: {err}"),
    }
}
