use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use std::fmt;
use std::rc::Rc;

/// Type-erased parser behind a reference-counted pointer
///
/// Cloning is cheap and shares the underlying parser, so one definition can
/// be used in several places of a grammar. Also the way to put different
/// parser types into one [`choice`](crate::choice::choice) or
/// [`sequence`](crate::sequence::sequence).
pub struct BoxedParser<'code, C, O> {
    parser: Rc<dyn Parser<'code, Cursor = C, Output = O> + 'code>,
}

impl<C, O> Clone for BoxedParser<'_, C, O> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<'code, C, O> BoxedParser<'code, C, O>
where
    C: Cursor<'code>,
{
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'code, Cursor = C, Output = O> + 'code,
    {
        BoxedParser {
            parser: Rc::new(parser),
        }
    }
}

impl<'code, C, O> Parser<'code> for BoxedParser<'code, C, O>
where
    C: Cursor<'code>,
{
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        self.parser.parse(cursor)
    }

    fn description(&self) -> String {
        self.parser.description()
    }
}

impl<C, O> fmt::Debug for BoxedParser<'_, C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedParser").finish_non_exhaustive()
    }
}

pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Cursor, Self::Output> {
        BoxedParser::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}
