use crate::cursor::{Cursor, InputId};
use crate::location::{Location, Offset};
use std::fmt;

/// Cursor over an arbitrary token slice
#[derive(Debug)]
pub struct SliceCursor<'code, T, L = Offset> {
    tokens: &'code [T],
    position: usize,
    location: L,
    input: InputId,
}

// Manual impls: deriving would require `T: Clone`/`T: Copy` for a shared slice.
impl<T, L: Clone> Clone for SliceCursor<'_, T, L> {
    fn clone(&self) -> Self {
        SliceCursor {
            tokens: self.tokens,
            position: self.position,
            location: self.location.clone(),
            input: self.input,
        }
    }
}

impl<T, L: Copy> Copy for SliceCursor<'_, T, L> {}

impl<'code, T: Clone + fmt::Debug> SliceCursor<'code, T> {
    /// Cursor at the start of `tokens`, counting consumed tokens
    pub fn new(tokens: &'code [T]) -> Self {
        Self::with_location(tokens, Offset::default())
    }
}

impl<'code, T, L> SliceCursor<'code, T, L>
where
    T: Clone + fmt::Debug,
    L: Location<T>,
{
    pub fn with_location(tokens: &'code [T], location: L) -> Self {
        SliceCursor {
            tokens,
            position: 0,
            location,
            input: InputId::fresh(),
        }
    }

    /// The not yet consumed tokens
    pub fn as_slice(&self) -> &'code [T] {
        &self.tokens[self.position..]
    }

    /// The whole input this cursor was created over
    pub fn source(&self) -> &'code [T] {
        self.tokens
    }
}

impl<'code, T, L> Cursor<'code> for SliceCursor<'code, T, L>
where
    T: Clone + fmt::Debug,
    L: Location<T>,
{
    type Token = T;
    type Location = L;

    fn current(&self) -> Option<T> {
        self.tokens.get(self.position).cloned()
    }

    fn is_empty(&self) -> bool {
        self.position >= self.tokens.len()
    }

    fn next(self) -> Self {
        match self.tokens.get(self.position) {
            Some(token) => SliceCursor {
                position: self.position + 1,
                location: self.location.advance(token),
                ..self
            },
            None => self,
        }
    }

    fn position(&self) -> usize {
        self.position
    }

    fn location(&self) -> &L {
        &self.location
    }

    fn input_id(&self) -> InputId {
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::LineColumn;

    #[test]
    fn test_basic_operations_u32() {
        let data = [1u32, 2, 3, 4, 5];
        let cursor: SliceCursor<u32> = SliceCursor::new(&data);

        assert_eq!(cursor.current(), Some(1));
        let cursor = cursor.next();
        assert_eq!(cursor.current(), Some(2));
        let cursor = cursor.next();
        assert_eq!(cursor.current(), Some(3));
        assert_eq!(*cursor.location(), Offset(2));
    }

    #[test]
    fn test_eof_u32() {
        let data = [10u32, 20];
        let cursor: SliceCursor<u32> = SliceCursor::new(&data);
        let cursor = cursor.next().next();
        assert!(cursor.is_empty());
        assert_eq!(cursor.current(), None);

        let cursor = cursor.next();
        assert_eq!(cursor.position(), 2);
        assert_eq!(*cursor.location(), Offset(2));
    }

    #[test]
    fn test_empty_data() {
        let data: [u32; 0] = [];
        let cursor: SliceCursor<u32> = SliceCursor::new(&data);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_copy_independence() {
        let data = [5u32, 10, 15, 20];
        let cursor: SliceCursor<u32> = SliceCursor::new(&data);
        let saved = cursor;

        let cursor = cursor.skip(2);
        assert_eq!(cursor.current(), Some(15));
        assert_eq!(saved.current(), Some(5));
        assert_eq!(saved.next().current(), Some(10));
    }

    #[test]
    fn test_non_copy_tokens() {
        let data = vec!["let".to_string(), "x".to_string()];
        let cursor: SliceCursor<String> = SliceCursor::new(&data);
        let cloned = cursor.clone();
        assert_eq!(cloned.current().as_deref(), Some("let"));
        assert_eq!(cursor.next().as_slice(), &data[1..]);
    }

    #[test]
    fn test_line_column_over_bytes() {
        let data = b"ab\nc";
        let cursor = SliceCursor::with_location(data, LineColumn::default());
        let cursor = cursor.skip(3);
        assert_eq!(*cursor.location(), LineColumn::new(2, 0));
        assert_eq!(cursor.current(), Some(b'c'));
    }
}
