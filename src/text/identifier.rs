use super::scan::{Scan, prefix_len};
use crate::cursor::TextCursor;

fn scan_word(
    text: &str,
    start: impl Fn(char) -> bool,
    part: impl Fn(char) -> bool,
) -> Option<(String, usize)> {
    let first = text.chars().next().filter(|&c| start(c))?;
    let len = first.len_utf8() + prefix_len(&text[first.len_utf8()..], part);
    Some((text[..len].to_string(), len))
}

fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_java_word_start(c: char) -> bool {
    is_word_start(c) || c == '$'
}

fn scan_identifier(text: &str) -> Option<(String, usize)> {
    scan_word(text, is_word_start, |c| is_word_start(c) || c.is_ascii_digit())
}

fn scan_java_identifier(text: &str) -> Option<(String, usize)> {
    scan_word(text, is_java_word_start, |c| {
        is_java_word_start(c) || c.is_ascii_digit()
    })
}

/// Java identifiers, or anything but a backtick between backticks
fn scan_kotlin_identifier(text: &str) -> Option<(String, usize)> {
    if let Some(quoted) = text.strip_prefix('`') {
        let close = quoted.find('`')?;
        let len = close + 2;
        return Some((text[..len].to_string(), len));
    }
    scan_java_identifier(text)
}

/// `[a-zA-Z_][a-zA-Z_0-9]*`
pub fn identifier<'code, C: TextCursor<'code>>() -> Scan<C, String> {
    Scan::new("identifier", scan_identifier)
}

/// Like [`identifier`] but also allowing `$`
pub fn java_identifier<'code, C: TextCursor<'code>>() -> Scan<C, String> {
    Scan::new("identifier", scan_java_identifier)
}

pub fn kotlin_identifier<'code, C: TextCursor<'code>>() -> Scan<C, String> {
    Scan::new("identifier", scan_kotlin_identifier)
}
