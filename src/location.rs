use std::fmt;

/// Tokens that can end a line
///
/// Used by [`LineColumn`] to decide when to bump the line counter.
pub trait Newline {
    fn is_newline(&self) -> bool;
}

impl Newline for char {
    fn is_newline(&self) -> bool {
        *self == '\n'
    }
}

impl Newline for u8 {
    fn is_newline(&self) -> bool {
        *self == b'\n'
    }
}

/// A position in the input, advanced once per consumed token
///
/// Locations are pluggable: a cursor is parameterized by the location strategy
/// and calls [`Location::advance`] exactly once for every token it steps over.
/// The starting location of a fresh input is `Default::default()`.
pub trait Location<T>: Clone + Default + PartialEq + fmt::Debug + fmt::Display {
    /// Produce the location that follows this one after consuming `token`
    fn advance(&self, token: &T) -> Self;
}

/// Line/column tracking for character-like streams
///
/// `line` starts at 1, `column` is the element offset within the line and
/// starts at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

impl LineColumn {
    pub fn new(line: usize, column: usize) -> Self {
        LineColumn { line, column }
    }
}

impl Default for LineColumn {
    fn default() -> Self {
        LineColumn { line: 1, column: 0 }
    }
}

impl<T: Newline> Location<T> for LineColumn {
    fn advance(&self, token: &T) -> Self {
        if token.is_newline() {
            LineColumn {
                line: self.line + 1,
                column: 0,
            }
        } else {
            LineColumn {
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl fmt::Display for LineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Number of tokens consumed so far; works for any token type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Offset(pub usize);

impl<T> Location<T> for Offset {
    fn advance(&self, _token: &T) -> Self {
        Offset(self.0 + 1)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "offset {}", self.0)
    }
}
