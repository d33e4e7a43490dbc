use crate::cursor::TextCursor;
use crate::error::NoSuccess;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that matches an exact string at the current position
///
/// Returns the matched slice of the input.
pub struct Literal<C> {
    expected: Cow<'static, str>,
    _cursor: PhantomData<fn() -> C>,
}

impl<C> Literal<C> {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Literal {
            expected: expected.into(),
            _cursor: PhantomData,
        }
    }
}

impl<'code, C> Parser<'code> for Literal<C>
where
    C: TextCursor<'code>,
{
    type Cursor = C;
    type Output = &'code str;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let rest = cursor.as_str();
        if rest.starts_with(self.expected.as_ref()) {
            let len = self.expected.len();
            Ok((&rest[..len], cursor.advance_bytes(len)))
        } else {
            Err(NoSuccess::failure(
                self.description(),
                cursor.location().clone(),
            ))
        }
    }

    fn description(&self) -> String {
        format!("\"{}\"", self.expected)
    }
}

/// Convenience function to create a Literal parser
pub fn literal<C>(expected: impl Into<Cow<'static, str>>) -> Literal<C> {
    Literal::new(expected)
}
