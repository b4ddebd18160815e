use std::collections::BTreeMap;

use fermi::{
    Error,
    config::{EvaluationOptions, RateTable},
    error::{ParseError, RuntimeError},
    evaluate_expression_with_steps,
    interpreter::value::outcome::StepsOutcome,
};
use pretty_assertions::assert_eq;

fn options() -> EvaluationOptions {
    EvaluationOptions::default().seeded(42)
}

fn rates(entries: &[(&str, &str, f64)]) -> RateTable {
    let mut table: RateTable = BTreeMap::new();
    for (from, to, rate) in entries {
        table.entry((*from).to_string())
             .or_default()
             .insert((*to).to_string(), *rate);
    }
    table
}

fn assert_success(src: &str, samples: usize, options: &EvaluationOptions) -> StepsOutcome {
    evaluate_expression_with_steps(src, samples, options).unwrap_or_else(|e| panic!("'{src}' failed: {e}"))
}

fn assert_failure(src: &str) -> Error {
    match evaluate_expression_with_steps(src, 64, &options()) {
        Ok(outcome) => panic!("'{src}' succeeded with {outcome:?} but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_type_error(src: &str) {
    let err = assert_failure(src);
    assert!(matches!(err, Error::Runtime(RuntimeError::TypeError { .. })),
            "'{src}' failed with {err:?} instead of a type error");
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn conversion_with_tail() {
    let outcome = assert_success("120eur + 50pln to pln * 2", 100, &options());

    assert!(outcome.is_currency_expression);
    assert_eq!(outcome.currency.as_deref(), Some("pln"));
    assert_eq!(outcome.steps,
               vec!["120eur + 50pln to pln * 2",
                    "131.85eur to pln * 2",
                    "556.41pln * 2",
                    "1112.82pln"]);

    let result = outcome.result.unwrap();
    assert_eq!(result.display, "1112.82pln");
    assert!(result.samples.is_none());
    assert_eq!((result.min, result.max), (result.mean, result.mean));
}

#[test]
fn bridged_conversion_with_custom_rates() {
    let options = EvaluationOptions::with_rates(rates(&[("eur", "usd", 2.0), ("eur", "pln", 4.0)]));
    let outcome = assert_success("1usd + 1pln to eur", 100, &options);

    assert_eq!(outcome.steps, vec!["1usd + 1pln to eur", "1.5usd to eur", "0.75eur"]);
    assert_eq!(outcome.result.unwrap().display, "0.75eur");
}

#[test]
fn caller_rates_replace_both_directions() {
    let options = EvaluationOptions::with_rates(rates(&[("pln", "eur", 0.25)]));
    let outcome = assert_success("1pln to eur", 10, &options);
    assert_eq!(outcome.result.unwrap().display, "0.25eur");

    let outcome = assert_success("1eur to pln", 10, &options);
    assert_eq!(outcome.result.unwrap().display, "4pln");
}

#[test]
fn uncertain_money_conversion() {
    let outcome = assert_success("(60~115)pln to eur", 128, &options());

    assert_eq!(outcome.steps,
               vec!["(60 ~ 115) * 1pln to eur",
                    "87.5 * 1pln to eur",
                    "87.5pln to eur",
                    "20.73eur"]);

    let result = outcome.result.unwrap();
    assert_eq!(result.currency.as_deref(), Some("eur"));
    assert_eq!(result.display, "20.73eur");
    assert!(close(result.min, 14.22), "min {}", result.min);
    assert!(close(result.max, 27.25), "max {}", result.max);

    let samples = result.samples.unwrap();
    assert_eq!(samples.len(), 128);
    // Every sample is rounded to cents.
    assert!(samples.iter().all(|x| close((x * 100.0).round() / 100.0, *x)));
}

#[test]
fn uncertainty_flows_through_the_tail() {
    let outcome = assert_success("(10~20)eur to pln + 1pln", 256, &options());
    let result = outcome.result.unwrap();

    assert_eq!(result.display, "64.3pln");
    assert!(close(result.min, 43.2), "min {}", result.min);
    assert!(close(result.max, 85.4), "max {}", result.max);
    assert_eq!(result.samples.map(|s| s.len()), Some(256));
}

#[test]
fn range_only_in_the_tail() {
    let outcome = assert_success("10eur to pln * (1~2)", 200, &options());
    assert_eq!(outcome.steps,
               vec!["10eur to pln * (1 ~ 2)",
                    "42.2pln * (1 ~ 2)",
                    "42.2pln * 1.5",
                    "63.3pln"]);

    let result = outcome.result.unwrap();
    assert_eq!(result.display, "63.3pln");
    assert!(close(result.min, 42.2), "min {}", result.min);
    assert!(close(result.max, 84.4), "max {}", result.max);
    assert_eq!(result.samples.map(|s| s.len()), Some(200));
}

#[test]
fn missing_rate_path() {
    let err = assert_failure("(1~2)pln to xyz");
    assert!(matches!(err, Error::Runtime(RuntimeError::MissingExchangeRate { .. })));
    assert!(err.to_string()
               .to_lowercase()
               .contains("missing exchange rate path from pln to xyz"));
}

#[test]
fn exact_money_has_no_samples() {
    let outcome = assert_success("120eur * 3", 100, &options());
    assert_eq!(outcome.steps, vec!["120eur * 3", "360eur"]);
    assert_eq!(outcome.result.unwrap().samples, None);

    let outcome = assert_success("2 * 3eur", 100, &options());
    assert_eq!(outcome.result.unwrap().display, "6eur");
}

#[test]
fn spaced_and_uppercase_codes() {
    let outcome = assert_success("10 EUR", 10, &options());
    assert!(outcome.is_currency_expression);
    assert_eq!(outcome.result.unwrap().display, "10eur");

    let outcome = assert_success("120EUR TO PLN", 10, &options());
    assert_eq!(outcome.currency.as_deref(), Some("pln"));
    assert_eq!(outcome.result.unwrap().display, "506.4pln");
}

#[test]
fn money_ratio_is_a_scalar() {
    let outcome = assert_success("100eur / 50eur", 10, &options());
    assert!(outcome.is_currency_expression);
    assert_eq!(outcome.currency, None);
    assert_eq!(outcome.result.unwrap().display, "2");
}

#[test]
fn negative_money() {
    let outcome = assert_success("-5eur + 1eur", 10, &options());
    assert_eq!(outcome.steps, vec!["-5eur + 1eur", "-4eur"]);
    assert_eq!(outcome.result.unwrap().display, "-4eur");

    let outcome = assert_success("-5eur to pln", 10, &options());
    assert_eq!(outcome.steps, vec!["-5eur to pln", "-21.1pln"]);
}

#[test]
fn plain_expressions_fall_back() {
    let outcome = assert_success("1 + 2", 10, &options());
    assert!(!outcome.is_currency_expression);
    assert!(outcome.steps.is_empty());
    assert_eq!(outcome.result.unwrap().display, "3");

    let outcome = assert_success("1~2", 32, &options());
    assert!(!outcome.is_currency_expression);
    assert_eq!(outcome.result.unwrap().samples.map(|s| s.len()), Some(32));

    let outcome = assert_success("", 10, &options());
    assert_eq!(outcome.result, None);
}

#[test]
fn operand_kind_errors() {
    assert_type_error("1eur * 2usd");
    assert_type_error("2 / 1eur");
    assert_type_error("1eur ^ 1eur");
    assert_type_error("1eur + 1");
    assert_type_error("(1eur~2eur)");
    assert_type_error("120 to eur");
}

#[test]
fn malformed_conversions() {
    assert!(matches!(assert_failure("120eur to"),
                     Error::Parse(ParseError::ExpectedCurrency { found: None })));
    assert!(matches!(assert_failure("120eur to 5"),
                     Error::Parse(ParseError::ExpectedCurrency { found: Some(_) })));
    assert!(matches!(assert_failure("(1eur to pln)"), Error::Parse(_)));
    assert!(matches!(assert_failure("1eur +"), Error::Parse(ParseError::UnexpectedEndOfInput)));
}

#[test]
fn outcome_serializes_in_camel_case() {
    let outcome = assert_success("120eur to pln", 10, &options());
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["isCurrencyExpression"], true);
    assert_eq!(json["currency"], "pln");
    assert_eq!(json["result"]["display"], "506.4pln");
}
