use calcyard_rs::{calculator, format_result};

fn main() {
    pretty_env_logger::init();

    let expressions = [
        "3+4*2/(1-5)^2^3",
        "20    -30/  3 +4  *2   ^3",
        "-1 + 5 - 3",
        "-10 + (8 * 2.5) - (    3 / 1,5)",
        "1+(2*   (2.5+2,5+  (3-   2)))-(3/1,5)",
        "1.1 + 2.1 + abc",
    ];

    for expression in expressions {
        match calculator(expression) {
            Ok(result) => println!("result = {}", format_result(result)),
            Err(err) => println!("error: {err} [{expression}]"),
        }
    }
}
