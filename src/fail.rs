use crate::cursor::Cursor;
use crate::error::NoSuccess;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that never succeeds, reporting a fixed expectation
pub struct FailParser<C, O> {
    expected: Cow<'static, str>,
    _marker: PhantomData<fn() -> (C, O)>,
}

impl<C, O> FailParser<C, O> {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        FailParser {
            expected: expected.into(),
            _marker: PhantomData,
        }
    }
}

impl<'code, C, O> Parser<'code> for FailParser<C, O>
where
    C: Cursor<'code>,
{
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        Err(NoSuccess::failure(
            self.expected.clone(),
            cursor.location().clone(),
        ))
    }

    fn description(&self) -> String {
        format!("fail({})", self.expected)
    }
}

/// Convenience function to create a FailParser
pub fn fail<C, O>(expected: impl Into<Cow<'static, str>>) -> FailParser<C, O> {
    FailParser::new(expected)
}
