use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use std::fmt;
use std::marker::PhantomData;

/// Parser that always succeeds with a fixed value without consuming input
pub struct SuccessParser<C, V> {
    value: V,
    _cursor: PhantomData<fn() -> C>,
}

impl<C, V> SuccessParser<C, V> {
    pub fn new(value: V) -> Self {
        SuccessParser {
            value,
            _cursor: PhantomData,
        }
    }
}

impl<'code, C, V> Parser<'code> for SuccessParser<C, V>
where
    C: Cursor<'code>,
    V: Clone + fmt::Debug,
{
    type Cursor = C;
    type Output = V;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        Ok((self.value.clone(), cursor))
    }

    fn description(&self) -> String {
        format!("success({:?})", self.value)
    }
}

/// Convenience function to create a SuccessParser
pub fn success<C, V>(value: V) -> SuccessParser<C, V> {
    SuccessParser::new(value)
}
