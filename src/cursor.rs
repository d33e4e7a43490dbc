use crate::location::Location;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of one input buffer
///
/// Every cursor created over a fresh input gets a new id; cursors derived
/// from it by advancing share it. Packrat memo tables key on it so results
/// computed for one input are never served for another.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct InputId(u64);

static NEXT_INPUT_ID: AtomicU64 = AtomicU64::new(0);

impl InputId {
    pub fn fresh() -> Self {
        InputId(NEXT_INPUT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Generic cursor trait for parser combinators
///
/// A cursor is an immutable positioned view over an input sequence. Advancing
/// returns a new cursor and leaves the old one untouched, so any saved cursor
/// can be used to backtrack. The cursor also carries a pluggable
/// [`Location`] that is advanced once for every consumed token.
pub trait Cursor<'code>: Clone {
    /// The type of tokens this cursor iterates over
    type Token: Clone + fmt::Debug;

    /// Location strategy tracked alongside the position
    type Location: Location<Self::Token>;

    /// The token at the current position, `None` at the end of input
    fn current(&self) -> Option<Self::Token>;

    /// Check if the cursor is at the end of the sequence
    fn is_empty(&self) -> bool {
        self.current().is_none()
    }

    /// Advance the cursor by one token
    ///
    /// If already at the end, returns a cursor still positioned at the end
    fn next(self) -> Self;

    /// Advance the cursor by `n` tokens, stopping early at the end of input
    fn skip(self, n: usize) -> Self {
        let mut cursor = self;
        for _ in 0..n {
            if cursor.is_empty() {
                break;
            }
            cursor = cursor.next();
        }
        cursor
    }

    /// Absolute position in the underlying input
    ///
    /// Strictly increases as tokens are consumed. Its unit depends on the
    /// cursor (bytes for text, elements for slices).
    fn position(&self) -> usize;

    /// Location of the current position
    fn location(&self) -> &Self::Location;

    /// Identity of the input this cursor was created over
    fn input_id(&self) -> InputId;
}

/// Cursors over character data that can expose the remaining text
///
/// Literal and regex parsers match against [`TextCursor::as_str`] and then
/// advance by the byte length of the match.
pub trait TextCursor<'code>: Cursor<'code, Token = char> {
    /// The not yet consumed part of the input
    fn as_str(&self) -> &'code str;

    /// Advance over the next `len` bytes of [`TextCursor::as_str`]
    ///
    /// `len` must fall on a character boundary; the location is advanced
    /// once per consumed character.
    fn advance_bytes(self, len: usize) -> Self {
        let count = self.as_str()[..len].chars().count();
        self.skip(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ids_are_distinct() {
        let a = InputId::fresh();
        let b = InputId::fresh();
        assert_ne!(a, b);
    }

    #[test]
    fn test_ids_are_copy_and_comparable() {
        let a = InputId::fresh();
        let copy = a;
        assert_eq!(a, copy);
    }
}
