use crate::parser::{ParseResult, Parser};
use crate::skip::Skip;

/// Positive lookahead
///
/// Runs the inner parser and, if it succeeds, returns its value together with
/// the cursor it was given. Non-successes pass through unchanged.
pub struct Lookahead<P> {
    parser: P,
}

impl<P> Lookahead<P> {
    pub fn new(parser: P) -> Self {
        Lookahead { parser }
    }
}

impl<'code, P> Parser<'code> for Lookahead<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let (value, _) = self.parser.parse(cursor.clone())?;
        Ok((value, cursor))
    }

    fn description(&self) -> String {
        format!("&{}", self.parser.description())
    }
}

pub fn lookahead<'code, P>(parser: P) -> Lookahead<P>
where
    P: Parser<'code>,
{
    Lookahead::new(parser)
}

pub trait LookaheadExt<'code>: Parser<'code> + Sized {
    fn lookahead(self) -> Lookahead<Self> {
        Lookahead::new(self)
    }

    /// This parser, provided `next` would match right after it
    ///
    /// Only this parser's input is consumed.
    fn followed_by<P>(self, next: P) -> Skip<Self, Lookahead<P>>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
    {
        Skip::new(self, Lookahead::new(next))
    }
}

impl<'code, P> LookaheadExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::location::LineColumn;
    use crate::parser::StrParser;
    use crate::text::{char, decimal, literal};

    #[test]
    fn test_lookahead_does_not_consume() {
        let (value, rest) = lookahead(literal("ab")).parse_str("abc").unwrap();
        assert_eq!(value, "ab");
        assert_eq!(rest.position(), 0);
    }

    #[test]
    fn test_lookahead_failure_passes_through() {
        let err = lookahead(char('x')).parse_str("abc").unwrap_err();
        assert_eq!(err.expected, "'x'");
        assert_eq!(err.location, LineColumn::new(1, 0));
    }

    #[test]
    fn test_followed_by() {
        let number = decimal().followed_by(char(';'));
        let (value, rest) = number.parse_str("12;").unwrap();
        assert_eq!(value, 12);
        assert_eq!(rest.current(), Some(';'));

        let err = number.parse_str("12,").unwrap_err();
        assert_eq!(err.location, LineColumn::new(1, 2));
    }
}
