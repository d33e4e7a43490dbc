use crate::parser::{ParseResult, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Only a Failure of the first parser leads to the second; an Error is
/// returned as is.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor, Output = P1::Output>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        match self.parser1.parse(cursor.clone()) {
            Err(err) if err.is_failure() => self.parser2.parse(cursor),
            result => result,
        }
    }

    fn description(&self) -> String {
        format!("{} | {}", self.parser1.description(), self.parser2.description())
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}
