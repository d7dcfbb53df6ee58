//! String escaping and unescaping, including `\uXXXX` decoding.
//!
//! Both directions of the text codec live here: [`escape`] is used by the
//! serializers, the cursor-based [`unescape`] by the parser. Escaping is
//! byte-minimal — multi-byte UTF-8 passes through untouched, and only
//! control characters without a short escape become `\u00XX`. Unescaping
//! is strict: an unrecognized escape, a bad hex digit, or an unpaired
//! surrogate fails the whole parse.

use crate::error::ParseError;

/// Escape `text` as a quoted JSON string literal.
///
/// `\`, `"`, and the five whitespace controls get their two-character
/// escapes; any other control character below `0x20` becomes `\u00XX`.
/// Everything else, including non-ASCII text, is emitted verbatim — valid
/// UTF-8 above `0x7F` is never re-encoded as `\uXXXX`.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    escape_to(text, &mut out);
    out
}

/// Sink-appending form of [`escape`], used by the serializers.
pub(crate) fn escape_to(text: &str, out: &mut String) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            '\u{000C}' => out.push_str("\\f"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Consume a string body from `text`, with `*pos` positioned just after
/// the opening quote. On success `*pos` is left after the closing quote.
///
/// Raw tab/newline/formfeed/backspace/CR bytes inside the string are
/// rejected; they must appear as escapes. Running out of input before the
/// closing quote is [`ParseError::UnclosedString`].
pub(crate) fn unescape(text: &str, pos: &mut usize) -> Result<String, ParseError> {
    let bytes = text.as_bytes();
    let mut out = String::new();
    // Start of the current run of plain bytes, copied wholesale when an
    // escape or the closing quote interrupts it.
    let mut run = *pos;

    loop {
        let Some(&b) = bytes.get(*pos) else {
            return Err(ParseError::UnclosedString);
        };
        match b {
            b'"' => {
                out.push_str(&text[run..*pos]);
                *pos += 1;
                return Ok(out);
            }
            b'\\' => {
                out.push_str(&text[run..*pos]);
                *pos += 1;
                let Some(&esc) = bytes.get(*pos) else {
                    return Err(ParseError::UnclosedString);
                };
                match esc {
                    b'"' => out.push('"'),
                    b'\\' => out.push('\\'),
                    b'/' => out.push('/'),
                    b'n' => out.push('\n'),
                    b'r' => out.push('\r'),
                    b't' => out.push('\t'),
                    b'f' => out.push('\u{000C}'),
                    b'b' => out.push('\u{0008}'),
                    b'u' | b'U' => {
                        out.push(decode_unicode_escape(bytes, pos)?);
                        run = *pos;
                        continue;
                    }
                    _ => return Err(ParseError::IllegalEscape),
                }
                *pos += 1;
                run = *pos;
            }
            // Raw control bytes that have dedicated escapes are illegal
            // unescaped inside a string.
            0x08 | b'\t' | b'\n' | 0x0C | b'\r' => return Err(ParseError::IllegalEscape),
            _ => *pos += 1,
        }
    }
}

/// Decode a `\uXXXX` escape with `*pos` at the `u`. Handles surrogate
/// pairs: a high surrogate must be immediately followed by a `\uXXXX` low
/// surrogate, and the pair combines into a single code point. On success
/// `*pos` is left after the final hex digit.
fn decode_unicode_escape(bytes: &[u8], pos: &mut usize) -> Result<char, ParseError> {
    *pos += 1; // past 'u'
    let hi = read_hex4(bytes, pos)?;

    if (0xDC00..=0xDFFF).contains(&hi) {
        // A lone low surrogate can never start a code point.
        return Err(ParseError::IllegalEscape);
    }

    let code = if (0xD800..=0xDBFF).contains(&hi) {
        // High surrogate: the paired low surrogate escape must follow.
        if bytes.get(*pos) != Some(&b'\\') {
            return Err(ParseError::IllegalEscape);
        }
        *pos += 1;
        match bytes.get(*pos) {
            Some(b'u') | Some(b'U') => *pos += 1,
            _ => return Err(ParseError::IllegalEscape),
        }
        let lo = read_hex4(bytes, pos)?;
        if !(0xDC00..=0xDFFF).contains(&lo) {
            return Err(ParseError::IllegalEscape);
        }
        0x10000 + ((hi - 0xD800) << 10) + (lo - 0xDC00)
    } else {
        hi
    };

    char::from_u32(code).ok_or(ParseError::IllegalEscape)
}

/// Read exactly four case-insensitive hex digits into a code unit.
fn read_hex4(bytes: &[u8], pos: &mut usize) -> Result<u32, ParseError> {
    let mut value: u32 = 0;
    for _ in 0..4 {
        let Some(&b) = bytes.get(*pos) else {
            return Err(ParseError::IllegalEscape);
        };
        let digit = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            b'A'..=b'F' => b - b'A' + 10,
            _ => return Err(ParseError::IllegalEscape),
        };
        value = (value << 4) | digit as u32;
        *pos += 1;
    }
    Ok(value)
}
