//! The `Value` tree — the runtime representation of a JSON document.
//!
//! A [`Value`] is a closed sum over the six JSON kinds. The whole model is
//! a tree with exclusive ownership: arrays and objects own their children,
//! there is no sharing and no cycles, and copying a `Value` deep-copies the
//! subtree.
//!
//! # Key design decisions
//!
//! - **Object representation**: `BTreeMap<String, Value>`, so object keys
//!   are unique and iterate in lexicographic order. Inserting a duplicate
//!   key overwrites the previous entry.
//! - **Numbers**: a single `f64` payload. Integer literals parse into it
//!   and serialize back without a fractional part when they fit `i64`.
//! - **Equality is strict**: two values compare equal only when the active
//!   kinds match and the payloads are equal, recursively for containers.
//!   `Value::Bool(true) != Value::Number(1.0)` even though the conversion
//!   layer maps between them; callers who want the coercing view use
//!   [`Value::to`] instead of `==`.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::AccessError;

/// Object payload: keys are unique, iteration order is lexicographic.
pub type Map = BTreeMap<String, Value>;

/// A JSON value. The active variant and its payload always agree; there is
/// no separate tag to keep in sync.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// The default: a fresh `Value` is `Null`.
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

/// The six kinds a [`Value`] can take, for type queries and retyping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Construct the kind-appropriate default: `Null`, `false`, `0.0`, or
    /// an empty string/array/object.
    pub fn new(kind: Kind) -> Value {
        match kind {
            Kind::Null => Value::Null,
            Kind::Bool => Value::Bool(false),
            Kind::Number => Value::Number(0.0),
            Kind::String => Value::String(String::new()),
            Kind::Array => Value::Array(Vec::new()),
            Kind::Object => Value::Object(Map::new()),
        }
    }

    /// The currently active kind.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Change the active kind. If `kind` differs from the current kind the
    /// old payload is discarded and the kind-appropriate default installed;
    /// retyping to the current kind keeps the payload.
    ///
    /// Any reference previously obtained through
    /// [`get_ref`](Value::get_ref)/[`get_mut`](Value::get_mut) or an `as_*`
    /// accessor no longer aliases this value's storage afterwards — the
    /// borrow checker enforces what the kind change would otherwise leave
    /// dangling.
    pub fn retype(&mut self, kind: Kind) {
        if self.kind() != kind {
            *self = Value::new(kind);
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Borrow the payload if the active kind is `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow the payload if the active kind is `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Borrow the string payload. This is the non-owning view into the
    /// value's own storage; it lives as long as the value's kind does.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Structural access by array index or object key.
    ///
    /// Distinguishes the three failure modes: wrong kind
    /// ([`AccessError::KindMismatch`]), index past the end
    /// ([`AccessError::OutOfBounds`]), and absent key
    /// ([`AccessError::MissingKey`]).
    ///
    /// ```
    /// use jot_core::parse;
    ///
    /// let doc = parse(r#"{"users":[{"name":"ada"}]}"#).unwrap();
    /// let name = doc.at("users")?.at(0)?.at("name")?;
    /// assert_eq!(name.as_str(), Some("ada"));
    /// # Ok::<(), jot_core::AccessError>(())
    /// ```
    pub fn at<I: ValueIndex>(&self, index: I) -> Result<&Value, AccessError> {
        index.index_into(self)
    }

    /// Mutable counterpart of [`at`](Value::at).
    pub fn at_mut<I: ValueIndex>(&mut self, index: I) -> Result<&mut Value, AccessError> {
        index.index_into_mut(self)
    }

    /// Insert into an object, overwriting and returning any previous entry
    /// under the same key. Fails with `KindMismatch` on non-objects.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, AccessError> {
        match self {
            Value::Object(map) => Ok(map.insert(key.into(), value.into())),
            other => Err(AccessError::KindMismatch {
                expected: Kind::Object,
                actual: other.kind(),
            }),
        }
    }

    /// Append to an array. Fails with `KindMismatch` on non-arrays.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<(), AccessError> {
        match self {
            Value::Array(items) => {
                items.push(value.into());
                Ok(())
            }
            other => Err(AccessError::KindMismatch {
                expected: Kind::Array,
                actual: other.kind(),
            }),
        }
    }

    /// Remove an object entry, returning it if the key was present.
    pub fn remove(&mut self, key: &str) -> Result<Option<Value>, AccessError> {
        match self {
            Value::Object(map) => Ok(map.remove(key)),
            other => Err(AccessError::KindMismatch {
                expected: Kind::Object,
                actual: other.kind(),
            }),
        }
    }

    /// Remove and return the array element at `index`.
    pub fn remove_index(&mut self, index: usize) -> Result<Value, AccessError> {
        match self {
            Value::Array(items) => {
                if index < items.len() {
                    Ok(items.remove(index))
                } else {
                    Err(AccessError::OutOfBounds {
                        index,
                        len: items.len(),
                    })
                }
            }
            other => Err(AccessError::KindMismatch {
                expected: Kind::Array,
                actual: other.kind(),
            }),
        }
    }
}

/// A type usable with [`Value::at`]: `usize` indexes arrays, `&str` keys
/// objects. Also powers the `value[...]` sugar.
pub trait ValueIndex {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value, AccessError>;
    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value, AccessError>;
    /// Fetch-or-create for `IndexMut`: missing object keys are filled with
    /// `Null`, and a `Null` owner is retyped to an object first. Panics on
    /// any other mismatch, like slice indexing does.
    fn index_or_insert<'v>(&self, value: &'v mut Value) -> &'v mut Value;
}

impl ValueIndex for usize {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value, AccessError> {
        match value {
            Value::Array(items) => items.get(*self).ok_or(AccessError::OutOfBounds {
                index: *self,
                len: items.len(),
            }),
            other => Err(AccessError::KindMismatch {
                expected: Kind::Array,
                actual: other.kind(),
            }),
        }
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value, AccessError> {
        match value {
            Value::Array(items) => {
                let len = items.len();
                items.get_mut(*self).ok_or(AccessError::OutOfBounds {
                    index: *self,
                    len,
                })
            }
            other => Err(AccessError::KindMismatch {
                expected: Kind::Array,
                actual: other.kind(),
            }),
        }
    }

    fn index_or_insert<'v>(&self, value: &'v mut Value) -> &'v mut Value {
        match value.at_mut(*self) {
            Ok(v) => v,
            Err(e) => panic!("cannot index into value: {e}"),
        }
    }
}

impl ValueIndex for &str {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value, AccessError> {
        match value {
            Value::Object(map) => map.get(*self).ok_or_else(|| AccessError::MissingKey {
                key: (*self).to_string(),
            }),
            other => Err(AccessError::KindMismatch {
                expected: Kind::Object,
                actual: other.kind(),
            }),
        }
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value, AccessError> {
        match value {
            Value::Object(map) => map.get_mut(*self).ok_or_else(|| AccessError::MissingKey {
                key: (*self).to_string(),
            }),
            other => Err(AccessError::KindMismatch {
                expected: Kind::Object,
                actual: other.kind(),
            }),
        }
    }

    fn index_or_insert<'v>(&self, value: &'v mut Value) -> &'v mut Value {
        if value.is_null() {
            *value = Value::Object(Map::new());
        }
        match value {
            Value::Object(map) => map.entry((*self).to_string()).or_insert(Value::Null),
            other => panic!("cannot index {} with a key", other.kind()),
        }
    }
}

impl ValueIndex for String {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value, AccessError> {
        self.as_str().index_into(value)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value, AccessError> {
        self.as_str().index_into_mut(value)
    }

    fn index_or_insert<'v>(&self, value: &'v mut Value) -> &'v mut Value {
        self.as_str().index_or_insert(value)
    }
}

impl<I: ValueIndex> std::ops::Index<I> for Value {
    type Output = Value;

    /// Panicking sugar over [`Value::at`]. Use `at` when the failure is
    /// expected and should be handled.
    fn index(&self, index: I) -> &Value {
        match self.at(index) {
            Ok(v) => v,
            Err(e) => panic!("cannot index into value: {e}"),
        }
    }
}

impl<I: ValueIndex> std::ops::IndexMut<I> for Value {
    fn index_mut(&mut self, index: I) -> &mut Value {
        index.index_or_insert(self)
    }
}

// ---------------------------------------------------------------------------
// Construction from host primitives and containers
// ---------------------------------------------------------------------------

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Value {
        Value::Number(n as f64)
    }
}

macro_rules! value_from_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for Value {
            fn from(n: $ty) -> Value {
                Value::Number(n as f64)
            }
        }
    )*};
}

value_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Value {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Value {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Value {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Value {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Value {
        Value::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// ---------------------------------------------------------------------------
// Strict equality against host primitives
// ---------------------------------------------------------------------------
//
// `Value == primitive` follows the same strict policy as `Value == Value`:
// a Bool never equals a number, and only the matching kind can compare
// equal. Each impl comes with its mirror so comparisons read both ways.

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(b) if b == other)
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::String(s) if s == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Value::String(s) if s == other)
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        matches!(self, Value::String(s) if s == other)
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

macro_rules! value_eq_number {
    ($($ty:ty),* $(,)?) => {$(
        impl PartialEq<$ty> for Value {
            fn eq(&self, other: &$ty) -> bool {
                matches!(self, Value::Number(n) if *n == *other as f64)
            }
        }

        impl PartialEq<Value> for $ty {
            fn eq(&self, other: &Value) -> bool {
                other == self
            }
        }
    )*};
}

value_eq_number!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
