//! # jot-core
//!
//! A self-contained JSON value model: a six-kind [`Value`] tree, a strict
//! recursive-descent parser with an explicit depth budget, compact and
//! pretty serializers, and a typed conversion layer for moving between
//! JSON values and host types.
//!
//! ## Quick start
//!
//! ```rust
//! use jot_core::parse;
//!
//! let doc = parse(r#"{"name":"Ada","scores":[95,87,92]}"#).unwrap();
//! assert_eq!(doc.at("name").unwrap().as_str(), Some("Ada"));
//! assert_eq!(doc.at("scores").unwrap().at(1).unwrap().to::<i32>().unwrap(), 87);
//!
//! // Compact round-trip
//! assert_eq!(doc.serialize(), r#"{"name":"Ada","scores":[95,87,92]}"#);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` sum type, structural access, and mutation
//! - [`parser`] — text → `Value`, every failure a [`ParseError`]
//! - [`ser`] — `Value` → text, compact (infallible) and pretty (budgeted)
//! - [`escape`] — string escape/unescape and `\uXXXX` decoding
//! - [`convert`] — the `get`/`to`/`take` families and the [`JsonModel`]
//!   contract for user types
//! - [`error`] — [`ParseError`] and [`AccessError`]

pub mod convert;
pub mod error;
pub mod escape;
pub mod parser;
pub mod ser;
pub mod value;

pub use convert::{Convert, JsonModel, Payload, Take};
pub use error::{AccessError, ParseError};
pub use escape::escape;
pub use parser::{parse, parse_with_depth, DEFAULT_MAX_DEPTH};
pub use ser::{DEFAULT_INDENT, DEFAULT_MAX_WIDTH};
pub use value::{Kind, Map, Value, ValueIndex};
