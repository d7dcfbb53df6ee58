//! Error types for parsing and typed access.
//!
//! Parsing and value access fail in different ways and get different types:
//! [`ParseError`] is the closed taxonomy returned by the parser, and
//! [`AccessError`] covers everything the conversion layer and structural
//! accessors can report. Neither is ever panicked or thrown; both travel
//! by value through `Result`.

use thiserror::Error;

use crate::value::Kind;

/// Why a parse failed. One value per failed parse, describing the first
/// structural problem encountered; a failed parse never yields a partial
/// [`Value`](crate::Value).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no value (empty or whitespace only).
    #[error("input contains no JSON value")]
    EmptyData,

    /// Non-whitespace content remained after a complete top-level value.
    #[error("trailing content after the top-level value")]
    RedundantText,

    /// Nesting exceeded the depth budget before the value was complete.
    #[error("nesting depth limit exceeded")]
    DepthExceeded,

    /// A malformed escape sequence, a bad `\uXXXX` / surrogate pair, or a
    /// raw control byte inside a string.
    #[error("illegal escape sequence in string")]
    IllegalEscape,

    /// A number token that does not convert cleanly to a double.
    #[error("malformed number literal")]
    InvalidNumber,

    /// Input ended inside a string literal.
    #[error("unterminated string")]
    UnclosedString,

    /// Input ended inside an object.
    #[error("unterminated object")]
    UnclosedObject,

    /// Input ended inside an array.
    #[error("unterminated array")]
    UnclosedArray,

    /// Catch-all for structural mismatches: bad literal, missing `:` or
    /// `,`, unquoted key, trailing comma, stray token.
    #[error("unrecognized or misplaced token")]
    UnknownFormat,
}

/// Why a typed access or conversion failed.
///
/// `KindMismatch` comes from the exact-kind `get` family, `NoConversion`
/// from the coercing `to`/`take` families, and the remaining two from
/// structural indexing. The `_if`/`_or` access variants swallow these;
/// the plain variants surface them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccessError {
    /// The value's active kind is not the kind the caller asked for.
    #[error("value is {actual}, expected {expected}")]
    KindMismatch { expected: Kind, actual: Kind },

    /// No conversion rule maps the active kind to the requested type.
    #[error("no conversion from {from} to {to}")]
    NoConversion { from: Kind, to: &'static str },

    /// Array index past the end.
    #[error("index {index} out of bounds for array of length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// Object key not present.
    #[error("key {key:?} not found in object")]
    MissingKey { key: String },
}
