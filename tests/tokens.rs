use combiparse::prelude::*;
use combiparse::text::{decimal, identifier, lexeme, lexeme_char, one_of_chars};
use combiparse::{
    Assoc, Grammar, NoSuccess, Offset, OperatorTable, SliceCursor, StrCursor, choice, eof,
    recursive, satisfy, token,
};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Num(i64),
    Ident(String),
    Op(char),
    LParen,
    RParen,
}

fn lexer<'code>() -> impl Parser<'code, Cursor = StrCursor<'code>, Output = Vec<Token>> {
    choice([
        lexeme(decimal()).map(Token::Num).boxed(),
        lexeme(identifier()).map(Token::Ident).boxed(),
        lexeme_char('(').to(Token::LParen).boxed(),
        lexeme_char(')').to(Token::RParen).boxed(),
        lexeme(one_of_chars("+-*/")).map(Token::Op).boxed(),
    ])
    .many()
    .skip(eof())
}

fn tokenize(text: &str) -> Vec<Token> {
    lexer().parse_str(text).unwrap().0
}

fn number<'code>() -> impl Parser<'code, Cursor = SliceCursor<'code, Token>, Output = i64> {
    satisfy("number", |t: &Token| matches!(t, Token::Num(_))).map(|t| match t {
        Token::Num(n) => n,
        other => unreachable!("satisfy let {other:?} through"),
    })
}

fn variable<'code>() -> impl Parser<'code, Cursor = SliceCursor<'code, Token>, Output = String> {
    satisfy("identifier", |t: &Token| matches!(t, Token::Ident(_))).map(|t| match t {
        Token::Ident(name) => name,
        other => unreachable!("satisfy let {other:?} through"),
    })
}

fn expression<'code>(
    env: &'code HashMap<String, i64>,
) -> impl Parser<'code, Cursor = SliceCursor<'code, Token>, Output = i64> {
    recursive(move |expr| {
        let atom = choice([
            number().boxed(),
            variable()
                .map(move |name| env.get(&name).copied().unwrap_or_default())
                .boxed(),
            token(Token::LParen)
                .then(expr)
                .skip(token(Token::RParen))
                .boxed(),
        ]);
        OperatorTable::new(atom)
            .prefix(token(Token::Op('-')), 6, |x| -x)
            .binary(token(Token::Op('+')), 2, Assoc::Left, |a, b| a + b)
            .binary(token(Token::Op('-')), 2, Assoc::Left, |a, b| a - b)
            .binary(token(Token::Op('*')), 4, Assoc::Left, |a, b| a * b)
            .binary(token(Token::Op('/')), 4, Assoc::Left, |a, b| a / b)
            .build()
            .expect("token table is well formed")
    })
    .skip(eof())
}

#[test]
fn test_lexer_produces_tokens() {
    assert_eq!(
        tokenize(" x1 + (42*y) "),
        vec![
            Token::Ident("x1".into()),
            Token::Op('+'),
            Token::LParen,
            Token::Num(42),
            Token::Op('*'),
            Token::Ident("y".into()),
            Token::RParen,
        ]
    );
}

#[test]
fn test_expression_over_tokens() {
    let env = HashMap::from([("x".to_string(), 4), ("y".to_string(), 10)]);
    let tokens = tokenize("x * (y - 3) + -x / 2");
    let (value, rest) = expression(&env).parse_tokens(&tokens).unwrap();
    assert_eq!(value, 26);
    assert!(rest.is_empty());
}

#[test]
fn test_failure_location_is_token_offset() {
    let env = HashMap::new();
    let tokens = tokenize("1 + ");
    let err = expression(&env).parse_tokens(&tokens).unwrap_err();
    assert_eq!(err.expected, "<EOF>");
    assert_eq!(err.location, Offset(1));
}

#[test]
fn test_left_recursion_over_tokens() {
    let tokens = tokenize("1 + 2");
    let mut grammar = Grammar::packrat();
    let sum = grammar.declare::<i64>("sum").unwrap();
    grammar
        .bind(
            &sum,
            sum.clone()
                .skip(token(Token::Op('+')))
                .zip(number(), |a, b| a + b),
        )
        .unwrap();
    let parser = grammar.finish(&sum).unwrap();
    assert_eq!(
        parser.parse_tokens(&tokens).unwrap_err(),
        NoSuccess::error("left recursion detected", Offset(0))
    );
}

#[test]
fn test_span_over_tokens() {
    let tokens = tokenize("a b c 1");
    let ((names, span), _) = variable().many().with_span().parse_tokens(&tokens).unwrap();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!((span.start, span.end), (Offset(0), Offset(3)));
}
