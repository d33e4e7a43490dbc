use crate::cursor::{Cursor, InputId, TextCursor};
use crate::location::{LineColumn, Location};

/// Cursor over UTF-8 text yielding `char` tokens
///
/// `position()` is the byte offset into the original string.
#[derive(Debug, Copy, Clone)]
pub struct StrCursor<'code, L = LineColumn> {
    text: &'code str,
    offset: usize,
    location: L,
    input: InputId,
}

impl<'code> StrCursor<'code> {
    /// Cursor at the start of `text`, tracking lines and columns
    pub fn new(text: &'code str) -> Self {
        Self::with_location(text, LineColumn::default())
    }
}

impl<'code, L: Location<char>> StrCursor<'code, L> {
    /// Start at a custom location, e.g. `Offset::default()` for plain
    /// character counts or a non-zero line when the text is a slice of a
    /// larger file
    pub fn with_location(text: &'code str, location: L) -> Self {
        StrCursor {
            text,
            offset: 0,
            location,
            input: InputId::fresh(),
        }
    }

    /// The whole input this cursor was created over
    pub fn source(&self) -> &'code str {
        self.text
    }
}

impl<'code, L: Location<char>> Cursor<'code> for StrCursor<'code, L> {
    type Token = char;
    type Location = L;

    fn current(&self) -> Option<char> {
        self.text[self.offset..].chars().next()
    }

    fn next(self) -> Self {
        match self.current() {
            Some(ch) => StrCursor {
                offset: self.offset + ch.len_utf8(),
                location: self.location.advance(&ch),
                ..self
            },
            None => self,
        }
    }

    fn position(&self) -> usize {
        self.offset
    }

    fn location(&self) -> &L {
        &self.location
    }

    fn input_id(&self) -> InputId {
        self.input
    }
}

impl<'code, L: Location<char>> TextCursor<'code> for StrCursor<'code, L> {
    fn as_str(&self) -> &'code str {
        &self.text[self.offset..]
    }

    fn advance_bytes(self, len: usize) -> Self {
        let end = (self.offset + len).min(self.text.len());
        let location = self.text[self.offset..end]
            .chars()
            .fold(self.location.clone(), |loc, ch| loc.advance(&ch));
        StrCursor {
            offset: end,
            location,
            ..self
        }
    }
}
