use crate::parser::{ParseResult, Parser};

/// Sequences two parsers, keeping only the second value
pub struct Then<P1, P2> {
    skipped: P1,
    parser: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(skipped: P1, parser: P2) -> Self {
        Then { skipped, parser }
    }
}

impl<'code, P1, P2> Parser<'code> for Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = P2::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let (_, cursor) = self.skipped.parse(cursor)?;
        self.parser.parse(cursor)
    }

    fn description(&self) -> String {
        format!("{} {}", self.skipped.description(), self.parser.description())
    }
}

pub trait ThenExt<'code>: Parser<'code> + Sized {
    /// Drop this parser's value and continue with `other`
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
    {
        Then::new(self, other)
    }
}

impl<'code, P> ThenExt<'code> for P where P: Parser<'code> {}
