use combiparse::prelude::*;
use combiparse::text::{float, lexeme, lexeme_char, lexeme_str};
use combiparse::{
    Assoc, BoxedParser, OperatorTable, StrCursor, choice, defer, eof, recursive,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// Precedence spelled out by hand: sums of products of atoms
fn expr<'code>() -> BoxedParser<'code, StrCursor<'code>, f64> {
    let atom = lexeme(float()).or(lexeme_char('(').then(defer(expr)).skip(lexeme_char(')')));
    let mult = atom
        .joined_by(lexeme_char('*'))
        .map(|factors| factors.into_iter().rev().fold(1.0, |acc, x| x * acc))
        .boxed();
    mult.clone()
        .zip(lexeme_char('+').then(mult).many(), |first, rest| {
            rest.into_iter().fold(first, |acc, x| acc + x)
        })
        .boxed()
}

fn simple(text: &str) -> Option<f64> {
    expr().skip(eof()).parse_str(text).ok().map(|(value, _)| value)
}

fn factorial(x: f64) -> f64 {
    (1..=x.round() as i64).product::<i64>() as f64
}

fn scientific<'code>() -> impl Parser<'code, Cursor = StrCursor<'code>, Output = f64> {
    recursive(|expr| {
        let parens = lexeme_char('(').then(expr).skip(lexeme_char(')')).boxed();
        let function = |name: &'static str, body: fn(f64) -> f64| {
            lexeme_str(name).then(parens.clone()).map(body).boxed()
        };
        let call = choice([
            function("sin", f64::sin),
            function("cos", f64::cos),
            function("sqrt", f64::sqrt),
            lexeme(float()).boxed(),
            parens.clone(),
        ]);
        OperatorTable::new(call)
            .postfix(lexeme_char('!'), 6, factorial)
            .prefix(lexeme_char('-'), 6, |x| -x)
            .binary(lexeme_char('+'), 2, Assoc::Left, |a, b| a + b)
            .binary(lexeme_char('-'), 2, Assoc::Left, |a, b| a - b)
            .binary(lexeme_char('*'), 4, Assoc::Left, |a, b| a * b)
            .binary(lexeme_char('/'), 4, Assoc::Left, |a, b| a / b)
            .build()
            .expect("calculator table is well formed")
    })
    .skip(eof())
}

fn calc(text: &str) -> Option<f64> {
    scientific().parse_str(text).ok().map(|(value, _)| value)
}

#[test]
fn test_simple_calculator_values() {
    assert_eq!(simple("0"), Some(0.0));
    assert_eq!(simple("0.000000"), Some(0.0));
    assert_eq!(simple("3.15"), Some(3.15));
    assert_eq!(simple("-1e10"), Some(-1e10));
    assert_eq!(simple("-1E10"), Some(-1e10));
    assert_eq!(simple(".0"), Some(0.0));
}

#[test]
fn test_simple_calculator_rejects() {
    assert_eq!(simple(""), None);
    assert_eq!(simple("aaa"), None);
    assert_eq!(simple("1e20e20"), None);
}

#[test]
fn test_simple_calculator_precedence_and_parens() {
    assert_eq!(simple("2.0 + 2"), Some(4.0));
    assert_eq!(simple("2.0 + -2"), Some(0.0));
    assert_eq!(simple("2 * 1e10"), Some(2e10));
    assert_eq!(simple("1.0 + (3.0 * 4.0)"), Some(13.0));
    assert_eq!(simple("(3.0 + 4.0) * 1.0"), Some(7.0));
    assert_eq!(simple("1.0 + 3.0 * 4.0 + 1.0"), Some(14.0));
    assert_close(
        simple("1.0 * (3 + (4e1*1)     + 3) + 3.03 + 0.04").unwrap(),
        49.07,
    );
}

#[test]
fn test_operator_table_sanity() {
    assert_eq!(calc("2"), Some(2.0));
    assert_eq!(calc("((2.0))"), Some(2.0));
    assert_eq!(calc("(2"), None);
    assert_eq!(calc("((2)"), None);
    assert_eq!(calc("----3"), Some(3.0));
    assert_eq!(calc("---3"), Some(-3.0));
    assert_eq!(calc("-3!"), Some(-6.0));
    assert_eq!(calc("----2!!!"), Some(2.0));
}

#[test]
fn test_operator_table_precedence() {
    assert_eq!(calc("1 + 2 * 3"), Some(7.0));
    assert_eq!(calc("2 * 3 + 1"), Some(7.0));
    assert_eq!(calc("2 + 3 * 5"), Some(17.0));
    assert_eq!(calc("2! * 3 + 4"), Some(10.0));
    assert_eq!(calc("1 + 2.0   * 6 /  - - - 3   +   5"), Some(2.0));
    assert_eq!(
        calc("(1 + 2 * -4) + 5 * 6 + 18 / ---3 + 2! + 1!!"),
        Some(20.0)
    );
}

#[test]
fn test_operator_table_functions() {
    assert_eq!(calc("sqrt(sqrt(81)) - 3"), Some(0.0));
    assert_eq!(calc("sqrt(80 + 1)"), Some(9.0));
    assert_eq!(calc("sin(3) - sin(2+1)"), Some(0.0));
    let value = calc("2 + -3! * 3 + cos(1)").unwrap();
    assert!((value - -15.45969769413186).abs() < 1e-5);
}

#[test]
fn test_custom_right_associative_operator() {
    let table = OperatorTable::new(lexeme(float()))
        .prefix(lexeme_char('-'), 6, |x| -x)
        .binary(lexeme_char('+'), 2, Assoc::Left, |a, b| a + b)
        .binary(lexeme_char('-'), 2, Assoc::Left, |a, b| a - b)
        .binary(lexeme_str("~-"), 2, Assoc::Right, |a, b| b - a);
    let parser = table.build().unwrap().skip(eof());

    assert_eq!(parser.parse_str("10 ~- 10 ~- 20").unwrap().0, 0.0);
    assert_eq!(parser.parse_str("30 - 10 ~- 10 ~- 20").unwrap().0, 30.0);
}
