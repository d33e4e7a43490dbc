use crate::parser::{ParseResult, Parser};

/// Runs two parsers in sequence and merges their values with a function
pub struct Zip<P1, P2, F> {
    parser1: P1,
    parser2: P2,
    combine: F,
}

impl<P1, P2, F> Zip<P1, P2, F> {
    pub fn new(parser1: P1, parser2: P2, combine: F) -> Self {
        Zip {
            parser1,
            parser2,
            combine,
        }
    }
}

impl<'code, P1, P2, F, R> Parser<'code> for Zip<P1, P2, F>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
    F: Fn(P1::Output, P2::Output) -> R,
{
    type Cursor = P1::Cursor;
    type Output = R;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let (left, cursor) = self.parser1.parse(cursor)?;
        let (right, cursor) = self.parser2.parse(cursor)?;
        Ok(((self.combine)(left, right), cursor))
    }

    fn description(&self) -> String {
        format!("{} {}", self.parser1.description(), self.parser2.description())
    }
}

pub fn zip<'code, P1, P2, F, R>(parser1: P1, parser2: P2, combine: F) -> Zip<P1, P2, F>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
    F: Fn(P1::Output, P2::Output) -> R,
{
    Zip::new(parser1, parser2, combine)
}

pub trait ZipExt<'code>: Parser<'code> + Sized {
    fn zip<P, F, R>(self, other: P, combine: F) -> Zip<Self, P, F>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
        F: Fn(Self::Output, P::Output) -> R,
    {
        Zip::new(self, other, combine)
    }
}

impl<'code, P> ZipExt<'code> for P where P: Parser<'code> {}
