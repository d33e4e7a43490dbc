use super::scan::Scan;
use crate::cursor::TextCursor;

fn code_point(digits: &str, radix: u32) -> char {
    u32::from_str_radix(digits, radix)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Length of the run of at most `max` leading characters accepted by `f`
fn run_len(text: &str, max: usize, f: impl Fn(char) -> bool) -> usize {
    text.chars().take(max).take_while(|&c| f(c)).count()
}

/// Decode one escape sequence following a backslash
fn scan_escape(text: &str) -> Option<(char, usize)> {
    let simple = match text.chars().next()? {
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        c @ ('\'' | '"' | '\\') => Some(c),
        _ => None,
    };
    if let Some(c) = simple {
        return Some((c, 1));
    }

    for (prefix, width) in [('x', 2), ('u', 4)] {
        if let Some(rest) = text.strip_prefix(prefix) {
            if run_len(rest, width, |c| c.is_ascii_hexdigit()) == width {
                return Some((code_point(&rest[..width], 16), 1 + width));
            }
            return None;
        }
    }

    let len = run_len(text, 3, |c| ('0'..='7').contains(&c));
    (len > 0).then(|| (code_point(&text[..len], 8), len))
}

fn scan_json_string(text: &str) -> Option<(String, usize)> {
    let body = text.strip_prefix('"')?;
    let mut value = String::new();
    let mut end = 0;
    loop {
        let rest = &body[end..];
        let c = rest.chars().next()?;
        match c {
            '"' => return Some((value, end + 2)),
            '\\' => {
                let (decoded, len) = scan_escape(&rest[1..])?;
                value.push(decoded);
                end += 1 + len;
            }
            _ => {
                value.push(c);
                end += c.len_utf8();
            }
        }
    }
}

/// Double-quoted string with C/JSON style escapes
///
/// Understands `\b \f \n \r \t \' \" \\`, two-digit `\xHH`, four-digit
/// `\uHHHH` and one to three digit octal escapes. Code points that are not
/// valid characters decode to U+FFFD. A malformed escape rejects the whole
/// string.
pub fn json_string<'code, C: TextCursor<'code>>() -> Scan<C, String> {
    Scan::new("string", scan_json_string)
}
