use crate::parser::{ParseResult, Parser};

/// Sequences two parsers, keeping only the first value
pub struct Skip<P1, P2> {
    parser: P1,
    skipped: P2,
}

impl<P1, P2> Skip<P1, P2> {
    pub fn new(parser: P1, skipped: P2) -> Self {
        Skip { parser, skipped }
    }
}

impl<'code, P1, P2> Parser<'code> for Skip<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let (_, cursor) = self.skipped.parse(cursor)?;
        Ok((value, cursor))
    }

    fn description(&self) -> String {
        format!("{} {}", self.parser.description(), self.skipped.description())
    }
}

pub trait SkipExt<'code>: Parser<'code> + Sized {
    /// Run `other` after this parser and drop its value
    fn skip<P>(self, other: P) -> Skip<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
    {
        Skip::new(self, other)
    }
}

impl<'code, P> SkipExt<'code> for P where P: Parser<'code> {}
