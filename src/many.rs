use crate::cursor::Cursor;
use crate::error::NoSuccess;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Always succeeds. Repetition stops at the first Failure, whose partial
/// progress is discarded, or after an iteration that consumed nothing. An
/// Error from the element parser is returned immediately.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

/// The Failure that ended a repetition, if any
pub(crate) type Stop<'code, C> = Option<NoSuccess<<C as Cursor<'code>>::Location>>;

/// Shared loop for the repetition combinators
///
/// Appends up to `limit` further values to `results`, returning the cursor
/// after the last successful iteration together with the Failure that ended
/// the loop, if any. Without a limit, an iteration that consumes nothing ends
/// the loop.
pub(crate) fn repeat_into<'code, P>(
    parser: &P,
    mut cursor: P::Cursor,
    results: &mut Vec<P::Output>,
    limit: Option<usize>,
) -> ParseResult<'code, P::Cursor, Stop<'code, P::Cursor>>
where
    P: Parser<'code>,
{
    while limit.is_none_or(|limit| results.len() < limit) {
        match parser.parse(cursor.clone()) {
            Ok((value, next_cursor)) => {
                let stalled = next_cursor.position() == cursor.position();
                results.push(value);
                cursor = next_cursor;
                if stalled && limit.is_none() {
                    break;
                }
            }
            Err(err) if err.is_error() => return Err(err),
            Err(err) => return Ok((Some(err), cursor)),
        }
    }
    Ok((None, cursor))
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let mut results = Vec::new();
        let (_, cursor) = repeat_into(&self.parser, cursor, &mut results, None)?;
        Ok((results, cursor))
    }

    fn description(&self) -> String {
        format!("({})*", self.parser.description())
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

pub trait ManyExt<'code>: Parser<'code> + Sized {
    /// Zero or more repetitions
    fn many(self) -> Many<Self> {
        Many::new(self)
    }
}

impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::cursors::StrCursor;
    use crate::parser::StrParser;
    use crate::success::success;
    use crate::text::{any_char, char};

    struct Escalates;

    impl<'code> Parser<'code> for Escalates {
        type Cursor = StrCursor<'code>;
        type Output = char;

        fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
            Err(NoSuccess::error("left recursion detected", *cursor.location()))
        }

        fn description(&self) -> String {
            "escalates".into()
        }
    }

    #[test]
    fn test_many_zero_matches() {
        let parser = many(char('a'));

        let (results, cursor) = parser.parse_str("xyz").unwrap();
        assert_eq!(results, vec![]);
        assert_eq!(cursor.current(), Some('x'));
    }

    #[test]
    fn test_many_one_match() {
        let parser = many(char('a'));

        let (results, cursor) = parser.parse_str("abc").unwrap();
        assert_eq!(results, vec!['a']);
        assert_eq!(cursor.current(), Some('b'));
    }

    #[test]
    fn test_many_multiple_matches() {
        let parser = char('a').many();

        let (results, cursor) = parser.parse_str("aaabcd").unwrap();
        assert_eq!(results, vec!['a', 'a', 'a']);
        assert_eq!(cursor.current(), Some('b'));
    }

    #[test]
    fn test_many_with_any_char() {
        let parser = many(any_char());

        let (results, cursor) = parser.parse_str("hello").unwrap();
        assert_eq!(results, vec!['h', 'e', 'l', 'l', 'o']);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_many_empty_input() {
        let parser = many(char('a'));

        let (results, cursor) = parser.parse_str("").unwrap();
        assert_eq!(results, vec![]);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_many_discards_partial_final_attempt() {
        let parser = char('a').and(char('b')).many();

        let (results, cursor) = parser.parse_str("ababac").unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_many_stops_on_non_consuming_success() {
        let (results, cursor) = success(1).many().parse_str("abc").unwrap();
        assert_eq!(results, vec![1]);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_many_propagates_error() {
        let err = Escalates.many().parse_str("abc").unwrap_err();
        assert!(err.is_error());
    }
}
