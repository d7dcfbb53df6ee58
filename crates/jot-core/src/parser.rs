//! Recursive-descent JSON parser.
//!
//! One function per production, all driven by a byte cursor over the input
//! and a remaining-depth counter. The parser is total: every failure path
//! returns a [`ParseError`] variant, nothing unwinds, and a failed parse
//! yields no partial value.
//!
//! # Key design decisions
//!
//! - **Explicit depth budget**: the counter starts at `max_depth - 1` and
//!   drops by one per compound descent; a compound value seen with a
//!   negative budget fails with `DepthExceeded` before any of its input is
//!   consumed. This bounds stack usage on adversarial input instead of
//!   relying on the host stack limit.
//! - **Strict numbers**: the maximal run of number characters is handed to
//!   `f64::from_str` whole, so junk like `123.456.789` or `1-2` fails as
//!   one `InvalidNumber` instead of silently splitting. Literals that
//!   overflow to infinity are rejected too — a parsed tree never holds a
//!   non-finite number.
//! - **Strict tail**: after the top-level value, anything but whitespace is
//!   `RedundantText`.

use std::str::FromStr;

use crate::error::ParseError;
use crate::escape;
use crate::value::{Map, Value};

/// Depth budget used by [`parse`]. Deep enough for any sane document,
/// shallow enough to shrug off nesting bombs.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Parse a complete JSON document with the default depth budget.
///
/// ```
/// use jot_core::{parse, Value};
///
/// let doc = parse(r#"[1,false,null,{"Hello":"World"}]"#).unwrap();
/// assert_eq!(doc.serialize(), r#"[1,false,null,{"Hello":"World"}]"#);
/// ```
pub fn parse(text: &str) -> Result<Value, ParseError> {
    parse_with_depth(text, DEFAULT_MAX_DEPTH)
}

/// Parse with a caller-supplied depth budget. Input nested exactly
/// `max_depth` compound levels deep succeeds; one level deeper fails with
/// [`ParseError::DepthExceeded`].
pub fn parse_with_depth(text: &str, max_depth: usize) -> Result<Value, ParseError> {
    let mut parser = Parser::new(text);
    parser.skip_whitespace();
    if parser.at_end() {
        return Err(ParseError::EmptyData);
    }
    let value = parser.parse_value(max_depth as i64 - 1)?;
    parser.skip_whitespace();
    if !parser.at_end() {
        return Err(ParseError::RedundantText);
    }
    Ok(value)
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Value, ParseError> {
        parse(s)
    }
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Parser { text, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek() {
            self.advance();
        }
    }

    /// Parse one value of any kind. `depth` is the remaining compound
    /// nesting budget for this value's children.
    fn parse_value(&mut self, depth: i64) -> Result<Value, ParseError> {
        self.skip_whitespace();
        let Some(b) = self.peek() else {
            return Err(ParseError::EmptyData);
        };
        match b {
            b'{' => {
                if depth < 0 {
                    return Err(ParseError::DepthExceeded);
                }
                self.parse_object(depth)
            }
            b'[' => {
                if depth < 0 {
                    return Err(ParseError::DepthExceeded);
                }
                self.parse_array(depth)
            }
            b'"' => {
                self.advance();
                let s = escape::unescape(self.text, &mut self.pos)?;
                Ok(Value::String(s))
            }
            b't' => self.parse_literal("true", Value::Bool(true)),
            b'f' => self.parse_literal("false", Value::Bool(false)),
            b'n' => self.parse_literal("null", Value::Null),
            b'0'..=b'9' | b'-' | b'.' => self.parse_number(),
            _ => Err(ParseError::UnknownFormat),
        }
    }

    fn parse_object(&mut self, depth: i64) -> Result<Value, ParseError> {
        self.advance(); // '{'
        let mut map = Map::new();

        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.advance();
            return Ok(Value::Object(map));
        }

        loop {
            // Key: must be a quoted string.
            self.skip_whitespace();
            match self.peek() {
                None => return Err(ParseError::UnclosedObject),
                Some(b'"') => self.advance(),
                Some(_) => return Err(ParseError::UnknownFormat),
            }
            let key = escape::unescape(self.text, &mut self.pos)?;

            self.skip_whitespace();
            match self.peek() {
                None => return Err(ParseError::UnclosedObject),
                Some(b':') => self.advance(),
                Some(_) => return Err(ParseError::UnknownFormat),
            }

            self.skip_whitespace();
            if self.at_end() {
                return Err(ParseError::UnclosedObject);
            }
            let value = self.parse_value(depth - 1)?;
            // Duplicate keys overwrite, matching programmatic insertion.
            map.insert(key, value);

            self.skip_whitespace();
            match self.peek() {
                None => return Err(ParseError::UnclosedObject),
                Some(b',') => {
                    self.advance();
                    self.skip_whitespace();
                    if self.peek() == Some(b'}') {
                        // Trailing commas are not JSON.
                        return Err(ParseError::UnknownFormat);
                    }
                }
                Some(b'}') => {
                    self.advance();
                    return Ok(Value::Object(map));
                }
                Some(_) => return Err(ParseError::UnknownFormat),
            }
        }
    }

    fn parse_array(&mut self, depth: i64) -> Result<Value, ParseError> {
        self.advance(); // '['
        let mut items = Vec::new();

        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.advance();
            return Ok(Value::Array(items));
        }

        loop {
            self.skip_whitespace();
            if self.at_end() {
                return Err(ParseError::UnclosedArray);
            }
            items.push(self.parse_value(depth - 1)?);

            self.skip_whitespace();
            match self.peek() {
                None => return Err(ParseError::UnclosedArray),
                Some(b',') => {
                    self.advance();
                    self.skip_whitespace();
                    if self.peek() == Some(b']') {
                        return Err(ParseError::UnknownFormat);
                    }
                }
                Some(b']') => {
                    self.advance();
                    return Ok(Value::Array(items));
                }
                Some(_) => return Err(ParseError::UnknownFormat),
            }
        }
    }

    /// Match a literal letter by letter; any mismatch or truncation is a
    /// structural error, not a prefix match.
    fn parse_literal(&mut self, literal: &str, value: Value) -> Result<Value, ParseError> {
        for &b in literal.as_bytes() {
            if self.peek() != Some(b) {
                return Err(ParseError::UnknownFormat);
            }
            self.advance();
        }
        Ok(value)
    }

    /// Consume the maximal run of number characters and convert it whole.
    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        while let Some(b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-') = self.peek() {
            self.advance();
        }
        let run = &self.text[start..self.pos];
        let n: f64 = run.parse().map_err(|_| ParseError::InvalidNumber)?;
        if !n.is_finite() {
            return Err(ParseError::InvalidNumber);
        }
        Ok(Value::Number(n))
    }
}
