use crate::parser::{ParseResult, Parser};
use std::cell::OnceCell;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
///
/// The factory runs once, on the first parse; the parser it returns is kept
/// and reused afterwards.
pub struct Defer<F, P> {
    factory: F,
    parser: OnceCell<P>,
}

impl<F, P> Defer<F, P>
where
    F: Fn() -> P,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            parser: OnceCell::new(),
        }
    }

    fn resolve(&self) -> &P {
        self.parser.get_or_init(&self.factory)
    }
}

impl<'code, F, P> Parser<'code> for Defer<F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        self.resolve().parse(cursor)
    }

    fn description(&self) -> String {
        "<deferred>".into()
    }
}

/// Create a lazy parser from a factory function
pub fn defer<'code, F, P>(factory: F) -> Defer<F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Defer::new(factory)
}
