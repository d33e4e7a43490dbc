use crate::cursor::TextCursor;
use crate::error::NoSuccess;
use crate::parser::{ParseResult, Parser};
use std::marker::PhantomData;

/// Signature of a hand-written lexer: the decoded value and the number of
/// bytes it spans, or `None` if the text does not start with a match
pub type ScanFn<T> = fn(&str) -> Option<(T, usize)>;

/// Parser driven by a plain scanning function over the remaining text
///
/// Used for the fixed lexical forms (numbers, identifiers, whitespace) where
/// a direct scan is simpler than composing single-character parsers.
pub struct Scan<C, T> {
    description: &'static str,
    scan: ScanFn<T>,
    _cursor: PhantomData<fn() -> C>,
}

impl<C, T> Scan<C, T> {
    pub fn new(description: &'static str, scan: ScanFn<T>) -> Self {
        Scan {
            description,
            scan,
            _cursor: PhantomData,
        }
    }
}

impl<'code, C, T> Parser<'code> for Scan<C, T>
where
    C: TextCursor<'code>,
{
    type Cursor = C;
    type Output = T;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        match (self.scan)(cursor.as_str()) {
            Some((value, len)) => Ok((value, cursor.advance_bytes(len))),
            None => Err(NoSuccess::failure(
                self.description,
                cursor.location().clone(),
            )),
        }
    }

    fn description(&self) -> String {
        self.description.to_string()
    }
}

/// Length in bytes of the longest prefix made of characters accepted by `f`
pub(crate) fn prefix_len(text: &str, f: impl Fn(char) -> bool) -> usize {
    text.char_indices()
        .find(|&(_, c)| !f(c))
        .map_or(text.len(), |(i, _)| i)
}
