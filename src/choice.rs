use crate::cursor::Cursor;
use crate::error::NoSuccess;
use crate::parser::{ParseResult, Parser};

/// Ordered choice over any number of alternatives
///
/// Tries each alternative on the original input, left to right, and returns
/// the first success. This is not longest match: a later alternative that
/// would consume more is never consulted once an earlier one succeeds. When
/// everything fails, the last failure is reported. An Error from any
/// alternative stops the search immediately.
pub struct Choice<P> {
    parsers: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Choice { parsers }
    }
}

impl<'code, P> Parser<'code> for Choice<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let mut last = None;
        for parser in &self.parsers {
            match parser.parse(cursor.clone()) {
                Ok(success) => return Ok(success),
                Err(err) if err.is_error() => return Err(err),
                Err(err) => last = Some(err),
            }
        }
        Err(last.unwrap_or_else(|| {
            NoSuccess::failure("<no alternatives>", cursor.location().clone())
        }))
    }

    fn description(&self) -> String {
        let parts: Vec<String> = self.parsers.iter().map(|p| p.description()).collect();
        format!("({})", parts.join(" | "))
    }
}

pub fn choice<'code, P>(parsers: impl IntoIterator<Item = P>) -> Choice<P>
where
    P: Parser<'code>,
{
    Choice::new(parsers.into_iter().collect())
}
