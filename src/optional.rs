use crate::parser::{ParseResult, Parser};
use std::fmt;

/// Zero or one occurrence
///
/// A Failure becomes `None` at the original position. An Error is returned
/// as is.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        match self.parser.parse(cursor.clone()) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(err) if err.is_error() => Err(err),
            Err(_) => Ok((None, cursor)),
        }
    }

    fn description(&self) -> String {
        format!("({})?", self.parser.description())
    }
}

/// Falls back to a default value when the parser fails
pub struct OrElse<P, V> {
    parser: P,
    default: V,
}

impl<P, V> OrElse<P, V> {
    pub fn new(parser: P, default: V) -> Self {
        OrElse { parser, default }
    }
}

impl<'code, P, V> Parser<'code> for OrElse<P, V>
where
    P: Parser<'code, Output = V>,
    V: Clone + fmt::Debug,
{
    type Cursor = P::Cursor;
    type Output = V;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        match self.parser.parse(cursor.clone()) {
            Err(err) if err.is_failure() => Ok((self.default.clone(), cursor)),
            result => result,
        }
    }

    fn description(&self) -> String {
        format!("({})? or {:?}", self.parser.description(), self.default)
    }
}

pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    fn or_else(self, default: Self::Output) -> OrElse<Self, Self::Output>
    where
        Self::Output: Clone + fmt::Debug,
    {
        OrElse::new(self, default)
    }
}

impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}
