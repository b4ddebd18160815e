use fermi::{
    Error,
    config::EvaluationOptions,
    error::{ParseError, RuntimeError},
    evaluate_expression,
    interpreter::{
        evaluator::core::Context,
        lexer::{Token, tokenize},
        parser::shunting_yard::{Operator, RpnToken, to_rpn},
        value::uncertain::UncertainValue,
    },
};
use pretty_assertions::assert_eq;

const SAMPLES: usize = 2_000;

fn eval(src: &str) -> UncertainValue {
    let rpn = to_rpn(&tokenize(src).unwrap_or_else(|e| panic!("{src}: {e}")))
        .unwrap_or_else(|e| panic!("{src}: {e}"));
    let mut context = Context::new(SAMPLES, &EvaluationOptions::default().seeded(7));
    context.eval_rpn(&rpn)
           .unwrap_or_else(|e| panic!("{src}: {e}"))
           .unwrap_or_else(|| panic!("{src}: no value"))
}

fn assert_failure(src: &str) -> Error {
    match evaluate_expression(src, SAMPLES) {
        Ok(v) => panic!("'{src}' succeeded with {v:?} but was expected to fail"),
        Err(e) => e,
    }
}

fn num(x: f64) -> RpnToken {
    RpnToken::Number(x)
}

fn op(o: Operator) -> RpnToken {
    RpnToken::Operator(o)
}

#[test]
fn minus_stays_a_separate_token() {
    assert_eq!(tokenize("1-2").unwrap(),
               vec![Token::Number(1.0), Token::Minus, Token::Number(2.0)]);
    assert_eq!(tokenize("  3.25 *(4) ").unwrap(),
               vec![Token::Number(3.25),
                    Token::Star,
                    Token::LParen,
                    Token::Number(4.0),
                    Token::RParen]);
}

#[test]
fn unrecognized_input_reports_rest_of_expression() {
    let err = tokenize("1 $ 2").unwrap_err();
    assert_eq!(err,
               ParseError::UnrecognizedInput { fragment: "$ 2".to_string(),
                                               input:    "1 $ 2".to_string(), });
    assert!(err.to_string().contains("'1 $ 2'"));
}

#[test]
fn unary_minus_becomes_neg() {
    assert_eq!(to_rpn(&tokenize("-2+5").unwrap()).unwrap(),
               vec![num(2.0), op(Operator::Neg), num(5.0), op(Operator::Add)]);
    assert_eq!(to_rpn(&tokenize("1*-2").unwrap()).unwrap(),
               vec![num(1.0), num(2.0), op(Operator::Neg), op(Operator::Mul)]);
    assert_eq!(to_rpn(&tokenize("(-1)").unwrap()).unwrap(),
               vec![num(1.0), op(Operator::Neg)]);
    assert_eq!(to_rpn(&tokenize("2^-3").unwrap()).unwrap(),
               vec![num(2.0), num(3.0), op(Operator::Neg), op(Operator::Pow)]);
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(to_rpn(&tokenize("1+2*3").unwrap()).unwrap(),
               vec![num(1.0), num(2.0), num(3.0), op(Operator::Mul), op(Operator::Add)]);
    assert_eq!(to_rpn(&tokenize("1~2~3").unwrap()).unwrap(),
               vec![num(1.0), num(2.0), num(3.0), op(Operator::Range), op(Operator::Range)]);
    assert_eq!(to_rpn(&tokenize("2^3^2").unwrap()).unwrap(),
               vec![num(2.0), num(3.0), op(Operator::Pow), num(2.0), op(Operator::Pow)]);

    assert_eq!(eval("3 - 2 - 1").mean, 0.0);
    assert_eq!(eval("2^3^2").mean, 64.0);
    assert_eq!(eval("-2^2").mean, 4.0);
    assert_eq!(eval("2 + 3 * 4").mean, 14.0);
}

#[test]
fn mismatched_parentheses() {
    assert_eq!(to_rpn(&tokenize("(1+2").unwrap()).unwrap_err(),
               ParseError::MismatchedParentheses);
    assert_eq!(to_rpn(&tokenize("1+2)").unwrap()).unwrap_err(),
               ParseError::MismatchedParentheses);
}

#[test]
fn exact_expressions_have_no_samples() {
    for src in ["3*(4-1)/2", "-7", "2^0.5", "10/4 - 1"] {
        let v = eval(src);
        assert!(v.samples.is_none(), "{src} should be exact");
        assert_eq!(v.min, v.mean, "{src}");
        assert_eq!(v.max, v.mean, "{src}");
    }
    assert_eq!(eval("3*(4-1)/2").mean, 4.5);
}

#[test]
fn range_of_computed_bounds() {
    let v = eval("((1-2)~3)");
    assert_eq!((v.min, v.mean, v.max), (-1.0, 1.0, 3.0));
    assert_eq!(v.samples.map(|s| s.len()), Some(SAMPLES));
}

#[test]
fn range_samples_follow_a_normal_distribution() {
    let v = eval("10~20");
    let samples = v.samples.unwrap();
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    assert!((mean - 15.0).abs() < 0.3, "sample mean {mean}");

    let inside = samples.iter().filter(|x| (10.0..=20.0).contains(*x)).count();
    let share = inside as f64 / samples.len() as f64;
    assert!((0.85..0.95).contains(&share), "share inside range {share}");
}

#[test]
fn reversed_range_is_ordered() {
    let v = eval("5~1");
    assert_eq!((v.min, v.mean, v.max), (1.0, 3.0, 5.0));
}

#[test]
fn negation_flips_interval_and_samples() {
    let positive = eval("1~3");
    let negative = eval("-(1~3)");
    assert_eq!((negative.min, negative.mean, negative.max), (-3.0, -2.0, -1.0));
    let (p, n) = (positive.samples.unwrap(), negative.samples.unwrap());
    assert!(p.iter().zip(&n).all(|(a, b)| *a == -*b));
}

#[test]
fn interval_multiplication_uses_corners() {
    let v = eval("(1~2)*-3");
    assert_eq!((v.min, v.mean, v.max), (-6.0, -4.5, -3.0));

    let v = eval("(-1~2)*(-3~1)");
    assert_eq!((v.min, v.max), (-6.0, 3.0));
}

#[test]
fn samples_combine_elementwise() {
    let v = eval("(1~2) + 10");
    let samples = v.samples.unwrap();
    assert_eq!(samples.len(), SAMPLES);
    assert_eq!((v.min, v.max), (11.0, 12.0));
    assert!(samples.iter().all(|x| *x > 5.0));
}

#[test]
fn division_by_zero_is_a_value_not_an_error() {
    let v = eval("1/0");
    assert!(v.mean.is_nan() && v.min.is_nan() && v.max.is_nan());

    let v = eval("1/(-1~1)");
    assert_eq!((v.min, v.max), (f64::NEG_INFINITY, f64::INFINITY));

    let v = eval("0/(-1~1)");
    assert_eq!((v.min, v.max), (0.0, 0.0));
}

#[test]
fn range_bounds_must_be_exact() {
    let err = assert_failure("(1~2)~3");
    assert!(matches!(err, Error::Runtime(RuntimeError::TypeError { .. })));
}

#[test]
fn stack_errors() {
    assert!(matches!(assert_failure("1 +"),
                     Error::Runtime(RuntimeError::NotEnoughOperands { .. })));
    assert!(matches!(assert_failure("*"),
                     Error::Runtime(RuntimeError::NotEnoughOperands { .. })));
    assert_eq!(assert_failure("1 2"),
               Error::Runtime(RuntimeError::OperandsLeftOver { count: 2 }));
    assert!(matches!(assert_failure("1 + x"), Error::Parse(ParseError::UnrecognizedInput { .. })));
}

#[test]
fn empty_expression_has_no_value() {
    assert_eq!(evaluate_expression("", 10).unwrap(), None);
    assert_eq!(evaluate_expression("   ", 10).unwrap(), None);
}

#[test]
fn seeded_contexts_are_reproducible() {
    assert_eq!(eval("(1~5) * (2~3)"), eval("(1~5) * (2~3)"));
}
