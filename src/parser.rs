use crate::cursor::Cursor;
use crate::cursors::{SliceCursor, StrCursor};
use crate::error::NoSuccess;
use std::fmt;
use std::rc::Rc;

/// The outcome of one parse step
///
/// `Ok((value, rest))` is a success; `Err` is the non-success category,
/// either a backtrackable failure or an escalated error.
pub type ParseResult<'code, C, O> = Result<(O, C), NoSuccess<<C as Cursor<'code>>::Location>>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Cursor: Cursor<'code>;
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and the advanced cursor on success.
    /// A failed parse reports the location of the innermost mismatch and
    /// consumes nothing observable: the caller still holds its own cursor.
    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output>;

    /// Human readable description used in diagnostics
    fn description(&self) -> String;
}

/// Entry point for parsers over text with line/column locations
pub trait StrParser<'code>: Parser<'code, Cursor = StrCursor<'code>> {
    fn parse_str(&self, input: &'code str) -> ParseResult<'code, StrCursor<'code>, Self::Output> {
        self.parse(StrCursor::new(input))
    }
}

impl<'code, P> StrParser<'code> for P where P: Parser<'code, Cursor = StrCursor<'code>> + ?Sized {}

/// Entry point for parsers over token slices with offset locations
pub trait TokenParser<'code, T>: Parser<'code, Cursor = SliceCursor<'code, T>>
where
    T: Clone + fmt::Debug + 'code,
{
    fn parse_tokens(
        &self,
        input: &'code [T],
    ) -> ParseResult<'code, SliceCursor<'code, T>, Self::Output> {
        self.parse(SliceCursor::new(input))
    }
}

impl<'code, T, P> TokenParser<'code, T> for P
where
    T: Clone + fmt::Debug + 'code,
    P: Parser<'code, Cursor = SliceCursor<'code, T>> + ?Sized,
{
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        (**self).parse(cursor)
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        (**self).parse(cursor)
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

impl<'code, P> Parser<'code> for Rc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        (**self).parse(cursor)
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

/// Inspection helpers on [`ParseResult`]
pub trait ParseResultExt<'code, C: Cursor<'code>, O> {
    /// Transform a success's value, leaving non-successes unchanged
    fn map_value<U, F: FnOnce(O) -> U>(self, f: F) -> ParseResult<'code, C, U>;

    /// The value of a success
    fn value(self) -> Option<O>;

    /// The remaining input of a success
    fn rest(&self) -> Option<&C>;

    fn is_failure(&self) -> bool;

    fn is_error(&self) -> bool;
}

impl<'code, C: Cursor<'code>, O> ParseResultExt<'code, C, O> for ParseResult<'code, C, O> {
    fn map_value<U, F: FnOnce(O) -> U>(self, f: F) -> ParseResult<'code, C, U> {
        self.map(|(value, rest)| (f(value), rest))
    }

    fn value(self) -> Option<O> {
        self.ok().map(|(value, _)| value)
    }

    fn rest(&self) -> Option<&C> {
        self.as_ref().ok().map(|(_, rest)| rest)
    }

    fn is_failure(&self) -> bool {
        matches!(self, Err(e) if e.is_failure())
    }

    fn is_error(&self) -> bool {
        matches!(self, Err(e) if e.is_error())
    }
}
