use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches a list of items separated by a parser
///
/// Parses `element (separator element)*` and returns the elements. At least
/// one element is required. A separator that is not followed by an element
/// is left unconsumed, as is any partial progress of the failed pair. An
/// Error from either parser is returned immediately.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!["a", "b", "c"]`
/// - `"1;2;"` with separator `;` → `vec![1, 2]`, rest `";"`
pub struct JoinedBy<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> JoinedBy<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        JoinedBy { parser, separator }
    }
}

/// Runs `element (separator element)*`, handing every value to `push`
fn parse_joined<'code, P, PS>(
    parser: &P,
    separator: &PS,
    cursor: P::Cursor,
    mut push: impl FnMut(Option<PS::Output>, P::Output),
) -> ParseResult<'code, P::Cursor, ()>
where
    P: Parser<'code>,
    PS: Parser<'code, Cursor = P::Cursor>,
{
    let (first, mut cursor) = parser.parse(cursor)?;
    push(None, first);

    loop {
        let (sep, after_separator) = match separator.parse(cursor.clone()) {
            Ok(success) => success,
            Err(err) if err.is_error() => return Err(err),
            Err(_) => break,
        };
        match parser.parse(after_separator) {
            Ok((value, next_cursor)) => {
                push(Some(sep), value);
                cursor = next_cursor;
            }
            Err(err) if err.is_error() => return Err(err),
            Err(_) => break,
        }
    }

    Ok(((), cursor))
}

impl<'code, P, PS> Parser<'code> for JoinedBy<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code, Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let mut results = Vec::new();
        let ((), cursor) = parse_joined(&self.parser, &self.separator, cursor, |_, value| {
            results.push(value)
        })?;
        Ok((results, cursor))
    }

    fn description(&self) -> String {
        format!(
            "{} ({} {})*",
            self.parser.description(),
            self.separator.description(),
            self.parser.description()
        )
    }
}

/// Like [`JoinedBy`] but keeps the separators, interleaved with the elements
///
/// Element and separator must produce the same type.
pub struct JoinedByKeeping<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> JoinedByKeeping<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        JoinedByKeeping { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for JoinedByKeeping<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code, Cursor = P::Cursor, Output = P::Output>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<'code, Self::Cursor, Self::Output> {
        let mut results = Vec::new();
        let ((), cursor) = parse_joined(&self.parser, &self.separator, cursor, |sep, value| {
            results.extend(sep);
            results.push(value);
        })?;
        Ok((results, cursor))
    }

    fn description(&self) -> String {
        format!(
            "{} ({} {})*",
            self.parser.description(),
            self.separator.description(),
            self.parser.description()
        )
    }
}

/// Creates a parser that matches a list of items separated by the given parser
pub fn joined_by<'code, P, PS>(parser: P, separator: PS) -> JoinedBy<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code, Cursor = P::Cursor>,
{
    JoinedBy::new(parser, separator)
}

pub trait JoinedByExt<'code>: Parser<'code> + Sized {
    fn joined_by<PS>(self, separator: PS) -> JoinedBy<Self, PS>
    where
        PS: Parser<'code, Cursor = Self::Cursor>,
    {
        JoinedBy::new(self, separator)
    }

    fn joined_by_keeping<PS>(self, separator: PS) -> JoinedByKeeping<Self, PS>
    where
        PS: Parser<'code, Cursor = Self::Cursor, Output = Self::Output>,
    {
        JoinedByKeeping::new(self, separator)
    }
}

impl<'code, P> JoinedByExt<'code> for P where P: Parser<'code> {}
