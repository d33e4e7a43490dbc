use crate::parser::{ParseResult, Parser};
use std::fmt;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Cursor = P::Cursor;
    type Output = U;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let mapped_value = (self.mapper)(value);
        Ok((mapped_value, cursor))
    }

    fn description(&self) -> String {
        self.parser.description()
    }
}

/// Replaces a successful value with a constant
pub struct To<P, V> {
    parser: P,
    value: V,
}

impl<P, V> To<P, V> {
    pub fn new(parser: P, value: V) -> Self {
        To { parser, value }
    }
}

impl<'code, P, V> Parser<'code> for To<P, V>
where
    P: Parser<'code>,
    V: Clone + fmt::Debug,
{
    type Cursor = P::Cursor;
    type Output = V;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let (_, cursor) = self.parser.parse(cursor)?;
        Ok((self.value.clone(), cursor))
    }

    fn description(&self) -> String {
        self.parser.description()
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn to<V: Clone + fmt::Debug>(self, value: V) -> To<Self, V> {
        To::new(self, value)
    }

    /// Discard the value, keeping only the consumption
    fn ignore(self) -> To<Self, ()> {
        To::new(self, ())
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
