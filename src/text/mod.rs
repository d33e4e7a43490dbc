//! Parsers specific to character streams
//!
//! Everything here works on cursors whose tokens are `char`. Literal and
//! regex matching additionally need a [`TextCursor`](crate::cursor::TextCursor)
//! to look at the remaining text as a `&str`.

pub mod boolean;
pub mod chars;
pub mod identifier;
pub mod literal;
pub mod number;
pub mod pattern;
pub mod scan;
pub mod string;
pub mod whitespace;

pub use boolean::boolean;
pub use chars::{any_char, char, char_range, char_where, one_of_chars};
pub use identifier::{identifier, java_identifier, kotlin_identifier};
pub use literal::{Literal, literal};
pub use number::{c_integer, decimal, float, hexadecimal, octal};
pub use pattern::{RegexParser, regex};
pub use scan::Scan;
pub use string::json_string;
pub use whitespace::{Spaces, lexeme, lexeme_char, lexeme_str, spaces};
