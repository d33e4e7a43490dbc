use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Gives a parser a readable name for diagnostics
///
/// A Failure of the inner parser is reported as expecting `name`, at the
/// location the inner parser gave up. Errors pass through untouched.
pub struct Named<P> {
    parser: P,
    name: Cow<'static, str>,
}

impl<P> Named<P> {
    pub fn new(parser: P, name: impl Into<Cow<'static, str>>) -> Self {
        Named {
            parser,
            name: name.into(),
        }
    }
}

impl<'code, P> Parser<'code> for Named<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        self.parser.parse(cursor).map_err(|err| {
            if err.is_failure() {
                err.expecting(self.name.clone())
            } else {
                err
            }
        })
    }

    fn description(&self) -> String {
        self.name.to_string()
    }
}

pub fn named<'code, P>(name: impl Into<Cow<'static, str>>, parser: P) -> Named<P>
where
    P: Parser<'code>,
{
    Named::new(parser, name)
}

pub trait NamedExt<'code>: Parser<'code> + Sized {
    fn named(self, name: impl Into<Cow<'static, str>>) -> Named<Self> {
        Named::new(self, name)
    }
}

impl<'code, P> NamedExt<'code> for P where P: Parser<'code> {}
