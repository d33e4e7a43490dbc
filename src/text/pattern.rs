use crate::cursor::TextCursor;
use crate::error::{BuildError, NoSuccess};
use crate::parser::{ParseResult, Parser};
use regex::Regex;
use std::marker::PhantomData;

/// Parser that matches a regular expression against a prefix of the input
///
/// The pattern is anchored at the current position, so `regex("[0-9]+")`
/// never skips ahead to find digits later in the text.
pub struct RegexParser<C> {
    pattern: String,
    regex: Regex,
    _cursor: PhantomData<fn() -> C>,
}

impl<C> RegexParser<C> {
    pub fn new(pattern: &str) -> Result<Self, BuildError> {
        let regex = Regex::new(&format!("^(?:{pattern})"))?;
        Ok(RegexParser {
            pattern: pattern.to_string(),
            regex,
            _cursor: PhantomData,
        })
    }
}

impl<'code, C> Parser<'code> for RegexParser<C>
where
    C: TextCursor<'code>,
{
    type Cursor = C;
    type Output = &'code str;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let rest = cursor.as_str();
        match self.regex.find(rest) {
            Some(found) => Ok((found.as_str(), cursor.advance_bytes(found.end()))),
            None => Err(NoSuccess::failure(
                self.description(),
                cursor.location().clone(),
            )),
        }
    }

    fn description(&self) -> String {
        format!("/{}/", self.pattern)
    }
}

/// Compile `pattern` into a parser; fails if the pattern is not valid
pub fn regex<C>(pattern: &str) -> Result<RegexParser<C>, BuildError> {
    RegexParser::new(pattern)
}
