use crate::cursor::Cursor;
use crate::error::NoSuccess;
use crate::parser::{ParseResult, Parser};
use crate::skip::Skip;

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome. An Error from the inner
/// parser is not a mismatch and is returned as is.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'code, P> Parser<'code> for Not<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = ();

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        match self.parser.parse(cursor.clone()) {
            Ok(_) => Err(NoSuccess::failure(
                self.description(),
                cursor.location().clone(),
            )),
            Err(err) if err.is_error() => Err(err),
            Err(_) => Ok(((), cursor)),
        }
    }

    fn description(&self) -> String {
        format!("not {}", self.parser.description())
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<'code, P>(parser: P) -> Not<P>
where
    P: Parser<'code>,
{
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt<'code>: Parser<'code> + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// This parser, provided `next` would not match right after it
    fn not_followed_by<P>(self, next: P) -> Skip<Self, Not<P>>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
    {
        Skip::new(self, Not::new(next))
    }
}

/// Implement NotExt for all parsers
impl<'code, P> NotExt<'code> for P where P: Parser<'code> {}
