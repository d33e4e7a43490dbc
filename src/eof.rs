use crate::cursor::Cursor;
use crate::error::NoSuccess;
use crate::parser::{ParseResult, Parser};
use std::marker::PhantomData;

/// Parser that succeeds only when no input remains
///
/// Never advances the cursor.
pub struct Eof<C> {
    _cursor: PhantomData<fn() -> C>,
}

impl<C> Eof<C> {
    pub fn new() -> Self {
        Eof {
            _cursor: PhantomData,
        }
    }
}

impl<C> Default for Eof<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, C> Parser<'code> for Eof<C>
where
    C: Cursor<'code>,
{
    type Cursor = C;
    type Output = ();

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        if cursor.is_empty() {
            Ok(((), cursor))
        } else {
            Err(NoSuccess::failure("<EOF>", cursor.location().clone()))
        }
    }

    fn description(&self) -> String {
        "<EOF>".into()
    }
}

/// Convenience function to create an Eof parser
pub fn eof<C>() -> Eof<C> {
    Eof::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::StrCursor;
    use crate::location::LineColumn;
    use crate::parser::{StrParser, TokenParser};

    #[test]
    fn test_eof_on_empty_input() {
        let ((), rest) = eof().parse_str("").unwrap();
        assert_eq!(rest.position(), 0);
    }

    #[test]
    fn test_eof_fails_with_input_left() {
        let err = eof().parse_str("x").unwrap_err();
        assert_eq!(err.expected, "<EOF>");
        assert_eq!(err.location, LineColumn::new(1, 0));
    }

    #[test]
    fn test_eof_after_consuming_everything() {
        let cursor = StrCursor::new("ab").skip(2);
        let ((), rest) = eof().parse(cursor).unwrap();
        assert_eq!(rest.position(), 2);
    }

    #[test]
    fn test_eof_over_tokens() {
        let empty: [i32; 0] = [];
        assert!(eof().parse_tokens(&empty).is_ok());
        assert!(eof().parse_tokens(&[1]).is_err());
    }
}
