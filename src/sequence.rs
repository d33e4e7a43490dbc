use crate::parser::{ParseResult, Parser};

/// Runs a list of parsers strictly in order, collecting their values
///
/// Fails at the first element that fails. All elements must share one type;
/// use [`boxed`](crate::boxed::BoxedExt::boxed) to mix different parsers.
pub struct Sequence<P> {
    parsers: Vec<P>,
}

impl<P> Sequence<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Sequence { parsers }
    }
}

impl<'code, P> Parser<'code> for Sequence<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let mut results = Vec::with_capacity(self.parsers.len());
        for parser in &self.parsers {
            let (value, next_cursor) = parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;
        }
        Ok((results, cursor))
    }

    fn description(&self) -> String {
        let parts: Vec<String> = self.parsers.iter().map(|p| p.description()).collect();
        parts.join(" ")
    }
}

pub fn sequence<'code, P>(parsers: impl IntoIterator<Item = P>) -> Sequence<P>
where
    P: Parser<'code>,
{
    Sequence::new(parsers.into_iter().collect())
}
