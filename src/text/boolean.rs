use super::literal::literal;
use crate::cursor::TextCursor;
use crate::map::MapExt;
use crate::named::NamedExt;
use crate::or::OrExt;
use crate::parser::Parser;

/// `true` or `false`
pub fn boolean<'code, C>() -> impl Parser<'code, Cursor = C, Output = bool>
where
    C: TextCursor<'code>,
{
    literal("true")
        .to(true)
        .or(literal("false").to(false))
        .named("boolean")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::StrCursor;
    use crate::parser::StrParser;

    #[test]
    fn test_boolean_literals() {
        assert!(boolean::<StrCursor>().parse_str("true").unwrap().0);
        assert!(!boolean::<StrCursor>().parse_str("false").unwrap().0);
    }

    #[test]
    fn test_boolean_rejects_partial_words() {
        assert!(boolean::<StrCursor>().parse_str("").is_err());
        let err = boolean::<StrCursor>().parse_str("tru").unwrap_err();
        assert_eq!(err.expected, "boolean");
    }
}
