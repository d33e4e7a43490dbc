use crate::parser::{ParseResult, Parser};

/// Parser that matches content between opening and closing delimiters
///
/// This is a generic combinator that parses: `open + content + close`
/// and returns just the `content` value with the delimiters discarded.
/// Whitespace is not skipped; wrap the delimiters in
/// [`lexeme`](crate::text::lexeme) for that.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
    P3: Parser<'code, Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = P2::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (value, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;
        Ok((value, cursor))
    }

    fn description(&self) -> String {
        format!(
            "{} {} {}",
            self.open.description(),
            self.content.description(),
            self.close.description()
        )
    }
}

/// Convenience function to create a Between parser
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code, Cursor = P1::Cursor>,
    P3: Parser<'code, Cursor = P1::Cursor>,
{
    Between::new(open, content, close)
}
