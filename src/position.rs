use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Where a successful parse started and ended
///
/// `start` and `end` are the cursor locations, `start_position` and
/// `end_position` the absolute token offsets (end exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<L> {
    pub start: L,
    pub end: L,
    pub start_position: usize,
    pub end_position: usize,
}

impl<L> Span<L> {
    /// Number of tokens covered
    pub fn len(&self) -> usize {
        self.end_position - self.start_position
    }

    pub fn is_empty(&self) -> bool {
        self.start_position == self.end_position
    }
}

/// A parser combinator that captures the span of a successful parse
pub struct WithSpan<P> {
    parser: P,
}

impl<P> WithSpan<P> {
    pub fn new(parser: P) -> Self {
        WithSpan { parser }
    }
}

impl<'code, P> Parser<'code> for WithSpan<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = (P::Output, Span<<P::Cursor as Cursor<'code>>::Location>);

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let start = cursor.location().clone();
        let start_position = cursor.position();
        let (output, cursor) = self.parser.parse(cursor)?;
        let span = Span {
            start,
            end: cursor.location().clone(),
            start_position,
            end_position: cursor.position(),
        };
        Ok(((output, span), cursor))
    }

    fn description(&self) -> String {
        self.parser.description()
    }
}

/// Extension trait to add span tracking to any parser
pub trait WithSpanExt<'code>: Parser<'code> + Sized {
    fn with_span(self) -> WithSpan<Self> {
        WithSpan::new(self)
    }
}

impl<'code, P> WithSpanExt<'code> for P where P: Parser<'code> {}
