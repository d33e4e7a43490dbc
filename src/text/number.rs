use super::scan::{Scan, prefix_len};
use crate::cursor::TextCursor;

fn sign_len(text: &str) -> usize {
    usize::from(text.starts_with(['+', '-']))
}

fn digits_len(text: &str, radix: u32) -> usize {
    prefix_len(text, |c| c.is_digit(radix))
}

/// `[-+]?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?`
fn scan_float(text: &str) -> Option<(f64, usize)> {
    let mut end = sign_len(text);
    let int_digits = digits_len(&text[end..], 10);
    end += int_digits;

    let rest = &text[end..];
    let frac_digits = match rest.strip_prefix('.') {
        Some(after_dot) => digits_len(after_dot, 10),
        None => 0,
    };
    if frac_digits > 0 {
        end += 1 + frac_digits;
    } else if int_digits == 0 {
        return None;
    }

    let rest = &text[end..];
    if let Some(after_e) = rest.strip_prefix(['e', 'E']) {
        let exp_sign = sign_len(after_e);
        let exp_digits = digits_len(&after_e[exp_sign..], 10);
        if exp_digits > 0 {
            end += 1 + exp_sign + exp_digits;
        }
    }

    let value = text[..end].parse::<f64>().ok()?;
    Some((value, end))
}

fn scan_radix(text: &str, radix: u32) -> Option<(i64, usize)> {
    let len = digits_len(text, radix);
    if len == 0 {
        return None;
    }
    let value = i64::from_str_radix(&text[..len], radix).ok()?;
    Some((value, len))
}

fn scan_decimal(text: &str) -> Option<(i64, usize)> {
    scan_radix(text, 10)
}

fn scan_octal(text: &str) -> Option<(i64, usize)> {
    scan_radix(text, 8)
}

fn scan_hexadecimal(text: &str) -> Option<(i64, usize)> {
    scan_radix(text, 16)
}

/// `0[xX][0-9a-fA-F]+`, `0[0-7]*` or `[1-9][0-9]*`, tried in that order
fn scan_c_integer(text: &str) -> Option<(i64, usize)> {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        if let Some((value, len)) = scan_hexadecimal(hex) {
            return Some((value, len + 2));
        }
    }
    if let Some(octal) = text.strip_prefix('0') {
        let len = digits_len(octal, 8);
        if len == 0 {
            return Some((0, 1));
        }
        let value = i64::from_str_radix(&octal[..len], 8).ok()?;
        return Some((value, len + 1));
    }
    scan_decimal(text)
}

/// Floating point literal with optional sign, fraction and exponent
pub fn float<'code, C: TextCursor<'code>>() -> Scan<C, f64> {
    Scan::new("float", scan_float)
}

/// One or more decimal digits
pub fn decimal<'code, C: TextCursor<'code>>() -> Scan<C, i64> {
    Scan::new("decimal", scan_decimal)
}

/// One or more octal digits, no prefix
pub fn octal<'code, C: TextCursor<'code>>() -> Scan<C, i64> {
    Scan::new("octal", scan_octal)
}

/// One or more hexadecimal digits of either case, no prefix
pub fn hexadecimal<'code, C: TextCursor<'code>>() -> Scan<C, i64> {
    Scan::new("hexadecimal", scan_hexadecimal)
}

/// C-style integer: `0x` prefix for hexadecimal, leading `0` for octal
pub fn c_integer<'code, C: TextCursor<'code>>() -> Scan<C, i64> {
    Scan::new("integer", scan_c_integer)
}
