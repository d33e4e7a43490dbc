use combiparse::prelude::*;
use combiparse::text::{float, lexeme, lexeme_char};
use combiparse::{BuildError, Grammar, GrammarParser, LineColumn, NoSuccess, StrCursor, choice, eof};

type Calculator<'code> = GrammarParser<'code, StrCursor<'code>, f64>;

fn calculator<'code>(mut grammar: Grammar<'code, StrCursor<'code>>) -> Calculator<'code> {
    let constant = grammar.declare::<f64>("constant").unwrap();
    let atom = grammar.declare::<f64>("atom").unwrap();
    let mult = grammar.declare::<f64>("mult").unwrap();
    let sum = grammar.declare::<f64>("sum").unwrap();
    let expr = grammar.declare::<f64>("expr").unwrap();
    let whole = grammar.declare::<f64>("whole").unwrap();

    grammar.bind(&constant, lexeme(float())).unwrap();
    grammar
        .bind(
            &atom,
            constant
                .clone()
                .or(lexeme_char('(').then(expr.clone()).skip(lexeme_char(')'))),
        )
        .unwrap();
    grammar
        .bind(
            &mult,
            atom.clone()
                .joined_by(lexeme_char('*'))
                .map(|factors| factors.into_iter().rev().fold(1.0, |acc, x| x * acc)),
        )
        .unwrap();
    grammar
        .bind(
            &sum,
            mult.clone()
                .zip(lexeme_char('+').then(mult.clone()).many(), |first, rest| {
                    rest.into_iter().fold(first, |acc, x| acc + x)
                }),
        )
        .unwrap();
    grammar.bind(&expr, sum.clone()).unwrap();
    grammar.bind(&whole, expr.clone().skip(eof())).unwrap();

    grammar.finish(&whole).unwrap()
}

fn both() -> [Calculator<'static>; 2] {
    [calculator(Grammar::new()), calculator(Grammar::packrat())]
}

fn value(parser: &Calculator<'static>, text: &'static str) -> Option<f64> {
    parser.parse_str(text).ok().map(|(value, _)| value)
}

#[test]
fn test_grammar_simple_values() {
    for parser in both() {
        assert_eq!(value(&parser, "0"), Some(0.0));
        assert_eq!(value(&parser, "2"), Some(2.0));
        assert_eq!(value(&parser, "3.15"), Some(3.15));
        assert_eq!(value(&parser, "-1e10"), Some(-1e10));
        assert_eq!(value(&parser, ".0"), Some(0.0));
    }
}

#[test]
fn test_grammar_rejects() {
    for parser in both() {
        assert_eq!(value(&parser, ""), None);
        assert_eq!(value(&parser, "aaa"), None);
        assert_eq!(value(&parser, "1e20e20"), None);
    }
}

#[test]
fn test_grammar_precedence() {
    for parser in both() {
        assert_eq!(value(&parser, "2.0 + -2"), Some(0.0));
        assert_eq!(value(&parser, "1.0 + (3.0 + 4.0)"), Some(8.0));
        assert_eq!(value(&parser, "(3.0 * 4.0) + 1.0"), Some(13.0));
        assert_eq!(value(&parser, "1.0 * 3.0 + 4.0"), Some(7.0));
        assert_eq!(value(&parser, "1.0 + 3.0 * 4.0 + 1.0"), Some(14.0));

        let total = value(&parser, "1.0 * (3 + (4e1*1)     + 3) + 3.03 + 0.04").unwrap();
        assert!((total - 49.07).abs() < 1e-9);
    }
}

#[test]
fn test_packrat_never_serves_results_of_another_input() {
    let parser = calculator(Grammar::packrat());
    assert_eq!(value(&parser, "2"), Some(2.0));
    assert!(parser.memo_len() > 0);
    assert_eq!(value(&parser, "whatever"), None);
    assert_eq!(value(&parser, "2"), Some(2.0));
}

#[test]
fn test_left_recursion_is_an_error() {
    let mut grammar = Grammar::packrat();
    let expr = grammar.declare::<f64>("expr").unwrap();
    grammar
        .bind(&expr, expr.clone().skip(lexeme_char(':')))
        .unwrap();
    let parser = grammar.finish(&expr).unwrap();

    assert_eq!(
        parser.parse_str("2:::").unwrap_err(),
        NoSuccess::error("left recursion detected", LineColumn::new(1, 0))
    );
}

#[test]
fn test_left_recursion_is_not_backtracked() {
    let mut grammar = Grammar::packrat();
    let expr = grammar.declare::<f64>("expr").unwrap();
    grammar
        .bind(
            &expr,
            choice([
                expr.clone().skip(lexeme_char(':')).boxed(),
                lexeme(float()).boxed(),
            ]),
        )
        .unwrap();
    let parser = grammar.finish(&expr).unwrap();

    let err = parser.parse_str("2:::").unwrap_err();
    assert!(err.is_error());
}

#[test]
fn test_unbound_rule_is_a_build_error() {
    let mut grammar = Grammar::<StrCursor>::new();
    let expr = grammar.declare::<f64>("expr").unwrap();
    let _term = grammar.declare::<f64>("term").unwrap();
    grammar.bind(&expr, lexeme(float())).unwrap();

    let err = grammar.finish(&expr).err().unwrap();
    assert!(matches!(err, BuildError::Unbound { ref names } if names == &["term"]));
    assert_eq!(err.to_string(), "non-terminals left unbound: term");
}
