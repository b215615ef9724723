// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_calculator::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Decimal Calculator Example ===\n");

    // Two places, negative results rejected
    let config = CalculatorConfig::builder()
        .result_precision(2)
        .allow_negative_results(false)
        .build()
        .unwrap();
    let factory = create_from_config(config).unwrap();

    let observer = Arc::new(RecordingObserver::new());
    let mut context = EvaluationContext::new(observer.clone());

    println!(
        "Precision: {}, negative results allowed: {}\n",
        config.precision(),
        config.allow_negative_results()
    );

    let requests = [
        ("+", "3.001", "4.004"),
        ("*", "2,345", "1"),
        ("/", "1", "8"),
        ("/", "10", "0"),
        ("-", "2", "5"),
        ("%", "1", "1"),
    ];

    for (symbol, first, second) in requests {
        let first = parse_operand(first).unwrap();
        let second = parse_operand(second).unwrap();

        let outcome = factory.create_operation(symbol).and_then(|operation| {
            context.set_input(first, operation);
            context.calculate(second)
        });

        match outcome {
            Ok(result) => println!("  {} {} {} = {}", first, symbol, second, result),
            Err(err) => println!("  {} {} {} -> Error: {}", first, symbol, second, err),
        }
    }

    println!("\n=== Published Results ===");
    for result in observer.results() {
        println!("  {}", result);
    }
}
