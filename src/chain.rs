use crate::parser::{ParseResult, Parser};

/// Monadic bind: the next parser is chosen from the value of the first
///
/// Enables context-sensitive grammars such as a length prefix followed by
/// exactly that many items.
pub struct Chain<P, F> {
    parser: P,
    next: F,
}

impl<P, F> Chain<P, F> {
    pub fn new(parser: P, next: F) -> Self {
        Chain { parser, next }
    }
}

impl<'code, P, F, Q> Parser<'code> for Chain<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code, Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = Q::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.next)(value).parse(cursor)
    }

    fn description(&self) -> String {
        format!("{} >>= ...", self.parser.description())
    }
}

pub fn chain<'code, P, F, Q>(parser: P, next: F) -> Chain<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code, Cursor = P::Cursor>,
{
    Chain::new(parser, next)
}

pub trait ChainExt<'code>: Parser<'code> + Sized {
    fn chain<F, Q>(self, next: F) -> Chain<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code, Cursor = Self::Cursor>,
    {
        Chain::new(self, next)
    }
}

impl<'code, P> ChainExt<'code> for P where P: Parser<'code> {}
