//! # combiparse - Parser Combinator Library
//!
//! Recursive-descent parsers built by composing small parser values instead
//! of hand-writing mutually recursive parsing functions. Works over any token
//! stream, with a dedicated library for character input.
//!
//! - **Backtracking by value**: cursors are immutable, so a failed branch
//!   never leaves consumed input behind
//! - **Two kinds of non-success**: ordinary `Failure`s drive choice and
//!   repetition, structural `Error`s (left recursion) always surface
//! - **Pluggable locations**: line/column for text, offsets for tokens
//! - **Grammars**: declare rules in any order, opt into packrat memoization
//!   with left-recursion detection, or compile a precedence table into an
//!   expression parser
//!
//! ```
//! use combiparse::prelude::*;
//! use combiparse::text::{decimal, lexeme, lexeme_char};
//!
//! let list = lexeme_char('[')
//!     .then(lexeme(decimal()).joined_by(lexeme_char(',')).optional())
//!     .skip(lexeme_char(']'))
//!     .map(Option::unwrap_or_default);
//!
//! assert_eq!(list.parse_str("[1, 2, 3]").unwrap().0, vec![1, 2, 3]);
//! assert_eq!(list.parse_str("[ ]").unwrap().0, Vec::<i64>::new());
//! ```

pub mod and;
pub mod between;
pub mod boxed;
pub mod chain;
pub mod choice;
pub mod cursor;
pub mod cursors;
pub mod defer;
pub mod eof;
pub mod error;
pub mod fail;
pub mod filter;
pub mod grammar;
pub mod joined_by;
pub mod location;
pub mod lookahead;
pub mod many;
pub mod many_one;
pub mod map;
pub mod named;
pub mod not;
pub mod operator_table;
pub mod optional;
pub mod or;
pub mod parser;
pub mod position;
pub mod recursive;
pub mod repeated;
pub mod satisfy;
pub mod sequence;
pub mod skip;
pub mod success;
pub mod text;
pub mod then;
pub mod zip;

#[cfg(test)]
mod property_tests;

pub use between::between;
pub use boxed::BoxedParser;
pub use choice::choice;
pub use cursor::{Cursor, InputId, TextCursor};
pub use cursors::{SliceCursor, StrCursor};
pub use defer::defer;
pub use eof::eof;
pub use error::{BuildError, NoSuccess, Severity};
pub use fail::fail;
pub use grammar::{Grammar, GrammarParser, Rule};
pub use location::{LineColumn, Location, Offset};
pub use named::named;
pub use operator_table::{Assoc, Combiner, OperatorTable};
pub use parser::{ParseResult, ParseResultExt, Parser, StrParser, TokenParser};
pub use position::{Span, WithSpanExt};
pub use recursive::recursive;
pub use satisfy::{any_token, one_of_tokens, satisfy, token, token_range};
pub use sequence::sequence;
pub use success::success;

/// Every extension trait, for `use combiparse::prelude::*`
pub mod prelude {
    pub use crate::and::AndExt;
    pub use crate::boxed::BoxedExt;
    pub use crate::chain::ChainExt;
    pub use crate::cursor::{Cursor, TextCursor};
    pub use crate::filter::FilterExt;
    pub use crate::joined_by::JoinedByExt;
    pub use crate::lookahead::LookaheadExt;
    pub use crate::many::ManyExt;
    pub use crate::many_one::ManyOneExt;
    pub use crate::map::MapExt;
    pub use crate::named::NamedExt;
    pub use crate::not::NotExt;
    pub use crate::optional::OptionalExt;
    pub use crate::or::OrExt;
    pub use crate::parser::{ParseResultExt, Parser, StrParser, TokenParser};
    pub use crate::position::WithSpanExt;
    pub use crate::repeated::RepeatedExt;
    pub use crate::skip::SkipExt;
    pub use crate::then::ThenExt;
    pub use crate::zip::ZipExt;
}
