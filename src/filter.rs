use crate::cursor::Cursor;
use crate::error::NoSuccess;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value is reported as a Failure at the position where the inner
/// parser started, so nothing counts as consumed.
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
    error_message: Cow<'static, str>,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F, error_message: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            error_message,
        }
    }
}

impl<'code, P, F> Parser<'code> for FilterParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let start = cursor.location().clone();
        let (value, new_cursor) = self.parser.parse(cursor)?;

        if (self.predicate)(&value) {
            Ok((value, new_cursor))
        } else {
            Err(NoSuccess::failure(self.error_message.clone(), start))
        }
    }

    fn description(&self) -> String {
        self.error_message.to_string()
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt<'code>: Parser<'code> {
    fn filter<F>(
        self,
        predicate: F,
        error_message: impl Into<Cow<'static, str>>,
    ) -> FilterParser<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate, error_message.into())
    }
}

impl<'code, P: Parser<'code>> FilterExt<'code> for P {}

/// Convenience function to create a filtered parser
pub fn filter<'code, P, F>(
    parser: P,
    predicate: F,
    error_message: impl Into<Cow<'static, str>>,
) -> FilterParser<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate, error_message.into())
}
