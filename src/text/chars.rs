use crate::cursor::Cursor;
use crate::satisfy::{Satisfy, describe_alternatives};
use std::borrow::Cow;
use std::ops::RangeInclusive;

/// Exactly the character `expected`
pub fn char<'code, C>(expected: char) -> Satisfy<C, char, impl Fn(&char) -> bool>
where
    C: Cursor<'code, Token = char>,
{
    Satisfy::new(format!("'{expected}'"), move |c: &char| *c == expected)
}

/// A character accepted by `predicate`
pub fn char_where<'code, C, F>(
    description: impl Into<Cow<'static, str>>,
    predicate: F,
) -> Satisfy<C, char, F>
where
    C: Cursor<'code, Token = char>,
    F: Fn(&char) -> bool,
{
    Satisfy::new(description, predicate)
}

pub fn any_char<'code, C>() -> Satisfy<C, char, impl Fn(&char) -> bool>
where
    C: Cursor<'code, Token = char>,
{
    Satisfy::new("any character", |_: &char| true)
}

pub fn char_range<'code, C>(
    range: RangeInclusive<char>,
) -> Satisfy<C, char, impl Fn(&char) -> bool>
where
    C: Cursor<'code, Token = char>,
{
    let description = format!("'{}'..='{}'", range.start(), range.end());
    Satisfy::new(description, move |c: &char| range.contains(c))
}

/// Any character of `candidates`
pub fn one_of_chars<'code, C>(candidates: &str) -> Satisfy<C, char, impl Fn(&char) -> bool>
where
    C: Cursor<'code, Token = char>,
{
    let candidates: Vec<char> = candidates.chars().collect();
    let description = describe_alternatives(&candidates);
    Satisfy::new(description, move |c: &char| candidates.contains(c))
}
