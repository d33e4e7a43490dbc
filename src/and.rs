use crate::parser::{ParseResult, Parser};

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. Use
/// [`zip`](crate::zip::zip) to combine the two values right away instead.
///
/// Example:
/// ```
/// use combiparse::and::AndExt;
/// use combiparse::parser::StrParser;
/// use combiparse::text::{char, decimal};
///
/// let ((int_part, _), frac_part) = decimal()
///     .and(char('.'))
///     .and(decimal())
///     .parse_str("123.456")
///     .unwrap()
///     .0;
/// assert_eq!(int_part, 123);
/// assert_eq!(frac_part, 456);
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }

    fn description(&self) -> String {
        format!("{} {}", self.parser1.description(), self.parser2.description())
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
