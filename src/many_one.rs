use crate::cursor::Cursor;
use crate::many::repeat_into;
use crate::parser::{ParseResult, Parser};

/// One or more occurrences; fails iff the first attempt fails
///
/// Once the first attempt succeeds the result equals that of
/// [`Many`](crate::many::Many), including when nothing was consumed.
pub struct ManyOne<P> {
    parser: P,
}

impl<P> ManyOne<P> {
    pub fn new(parser: P) -> Self {
        ManyOne { parser }
    }
}

impl<'code, P> Parser<'code> for ManyOne<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let start = cursor.position();
        let (first, cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first];
        if cursor.position() == start {
            return Ok((results, cursor));
        }
        let (_, cursor) = repeat_into(&self.parser, cursor, &mut results, None)?;
        Ok((results, cursor))
    }

    fn description(&self) -> String {
        format!("({})+", self.parser.description())
    }
}

pub fn many_one<'code, P>(parser: P) -> ManyOne<P>
where
    P: Parser<'code>,
{
    ManyOne::new(parser)
}

pub trait ManyOneExt<'code>: Parser<'code> + Sized {
    fn many_one(self) -> ManyOne<Self> {
        ManyOne::new(self)
    }
}

impl<'code, P> ManyOneExt<'code> for P where P: Parser<'code> {}
