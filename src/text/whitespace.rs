use super::chars::char;
use super::literal::{Literal, literal};
use crate::cursor::TextCursor;
use crate::parser::{ParseResult, Parser};
use crate::satisfy::Satisfy;
use crate::skip::{Skip, SkipExt};
use crate::then::{Then, ThenExt};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Zero or more whitespace characters; never fails
pub struct Spaces<C> {
    _cursor: PhantomData<fn() -> C>,
}

impl<C> Spaces<C> {
    pub fn new() -> Self {
        Spaces {
            _cursor: PhantomData,
        }
    }
}

impl<C> Default for Spaces<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, C> Parser<'code> for Spaces<C>
where
    C: TextCursor<'code>,
{
    type Cursor = C;
    type Output = &'code str;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let rest = cursor.as_str();
        let len = rest.len() - rest.trim_start().len();
        Ok((&rest[..len], cursor.advance_bytes(len)))
    }

    fn description(&self) -> String {
        "spaces".into()
    }
}

pub fn spaces<'code, C: TextCursor<'code>>() -> Spaces<C> {
    Spaces::new()
}

/// The parser type produced by [`lexeme`]
pub type Lexeme<C, P> = Skip<Then<Spaces<C>, P>, Spaces<C>>;

/// `inner` with any whitespace around it skipped
pub fn lexeme<'code, C, P>(inner: P) -> Lexeme<C, P>
where
    C: TextCursor<'code>,
    P: Parser<'code, Cursor = C>,
{
    spaces().then(inner).skip(spaces())
}

pub fn lexeme_str<'code, C>(inner: impl Into<Cow<'static, str>>) -> Lexeme<C, Literal<C>>
where
    C: TextCursor<'code>,
{
    lexeme(literal(inner))
}

pub fn lexeme_char<'code, C>(
    inner: char,
) -> Lexeme<C, Satisfy<C, char, impl Fn(&char) -> bool>>
where
    C: TextCursor<'code>,
{
    lexeme(char(inner))
}
