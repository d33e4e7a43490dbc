use crate::cursor::Cursor;
use crate::error::NoSuccess;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::ops::RangeInclusive;

/// Parser that consumes one token accepted by a predicate
///
/// Works over any cursor whose tokens are `T`; the character parsers in
/// [`crate::text`] are thin wrappers around it.
pub struct Satisfy<C, T, F> {
    description: Cow<'static, str>,
    predicate: F,
    _marker: PhantomData<fn() -> (C, T)>,
}

impl<C, T, F> Satisfy<C, T, F> {
    pub fn new(description: impl Into<Cow<'static, str>>, predicate: F) -> Self {
        Satisfy {
            description: description.into(),
            predicate,
            _marker: PhantomData,
        }
    }
}

impl<'code, C, T, F> Parser<'code> for Satisfy<C, T, F>
where
    C: Cursor<'code, Token = T>,
    T: Clone + fmt::Debug,
    F: Fn(&T) -> bool,
{
    type Cursor = C;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        match cursor.current() {
            Some(token) if (self.predicate)(&token) => Ok((token, cursor.next())),
            _ => Err(NoSuccess::failure(
                self.description.clone(),
                cursor.location().clone(),
            )),
        }
    }

    fn description(&self) -> String {
        self.description.to_string()
    }
}

/// One token matching `predicate`, described as `description` in failures
pub fn satisfy<'code, C, T, F>(
    description: impl Into<Cow<'static, str>>,
    predicate: F,
) -> Satisfy<C, T, F>
where
    C: Cursor<'code, Token = T>,
    F: Fn(&T) -> bool,
{
    Satisfy::new(description, predicate)
}

/// Exactly the token `expected`
pub fn token<'code, C, T>(expected: T) -> Satisfy<C, T, impl Fn(&T) -> bool>
where
    C: Cursor<'code, Token = T>,
    T: PartialEq + fmt::Debug,
{
    Satisfy::new(format!("{expected:?}"), move |t: &T| *t == expected)
}

/// Any single token
pub fn any_token<'code, C, T>() -> Satisfy<C, T, impl Fn(&T) -> bool>
where
    C: Cursor<'code, Token = T>,
{
    Satisfy::new("<any>", |_: &T| true)
}

/// Any one of the listed tokens
pub fn one_of_tokens<'code, C, T>(
    candidates: impl IntoIterator<Item = T>,
) -> Satisfy<C, T, impl Fn(&T) -> bool>
where
    C: Cursor<'code, Token = T>,
    T: PartialEq + fmt::Debug,
{
    let candidates: Vec<T> = candidates.into_iter().collect();
    let description = describe_alternatives(&candidates);
    Satisfy::new(description, move |t: &T| candidates.contains(t))
}

/// A token within the inclusive range
pub fn token_range<'code, C, T>(range: RangeInclusive<T>) -> Satisfy<C, T, impl Fn(&T) -> bool>
where
    C: Cursor<'code, Token = T>,
    T: PartialOrd + fmt::Debug,
{
    let description = format!("{:?}..={:?}", range.start(), range.end());
    Satisfy::new(description, move |t: &T| range.contains(t))
}

pub(crate) fn describe_alternatives<T: fmt::Debug>(candidates: &[T]) -> String {
    let parts: Vec<String> = candidates.iter().map(|c| format!("{c:?}")).collect();
    format!("one of [{}]", parts.join(", "))
}
