//! Typed access and conversion between `Value` and host types.
//!
//! Three escalating families, each backed by a trait:
//!
//! - [`Payload`] drives `get`/`get_ref`/`get_mut`: the target must be the
//!   *exact* active kind, otherwise [`AccessError::KindMismatch`].
//! - [`Convert`] drives `to`/`to_if`/`to_or`: exact kinds plus a fixed set
//!   of arithmetic coercions — `Bool ⇄ Number` (`true ↔ 1.0`), `Number →`
//!   integer with round-half-away-from-zero (`2.5 → 3`, `-2.5 → -3`), and
//!   `Null → Option<T>` as `None`. Everything else is
//!   [`AccessError::NoConversion`].
//! - [`Take`] drives `take`/`take_if`/`take_or`: like `Convert`, but a
//!   successful take of a string, array, or object moves the payload out
//!   and leaves the source holding the kind-appropriate empty payload.
//!   Scalar kinds are trivially copied and the source is untouched.
//!
//! Borrowed string views come from [`Value::as_str`] rather than a
//! `Convert` impl — the conversion traits hand out owned values.
//!
//! [`JsonModel`] is the boundary contract for user-defined types: an
//! external derive or codegen layer produces the per-struct boilerplate,
//! and the impls here for primitives, `Vec<T>`, and `BTreeMap<String, T>`
//! let such types nest arbitrarily.

use std::any::type_name;
use std::collections::BTreeMap;
use std::mem;

use crate::error::AccessError;
use crate::value::{Kind, Map, Value};

/// Exact-kind payload access. Implemented for the five payload types the
/// kinds carry; `Null` has no payload to borrow.
pub trait Payload: Sized {
    /// The kind whose payload this type is.
    const KIND: Kind;

    fn payload(value: &Value) -> Option<&Self>;
    fn payload_mut(value: &mut Value) -> Option<&mut Self>;
}

macro_rules! payload {
    ($ty:ty, $kind:expr, $variant:ident) => {
        impl Payload for $ty {
            const KIND: Kind = $kind;

            fn payload(value: &Value) -> Option<&Self> {
                match value {
                    Value::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn payload_mut(value: &mut Value) -> Option<&mut Self> {
                match value {
                    Value::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

payload!(bool, Kind::Bool, Bool);
payload!(f64, Kind::Number, Number);
payload!(String, Kind::String, String);
payload!(Vec<Value>, Kind::Array, Array);
payload!(Map, Kind::Object, Object);

/// Conversion into an owned host value under the arithmetic coercion
/// rules. See the module docs for the full rule table.
pub trait Convert: Sized {
    fn convert(value: &Value) -> Result<Self, AccessError>;
}

/// Ownership-transferring conversion; containers are left empty on
/// success.
pub trait Take: Sized {
    fn take(value: &mut Value) -> Result<Self, AccessError>;
}

fn no_conversion<T>(value: &Value) -> AccessError {
    AccessError::NoConversion {
        from: value.kind(),
        to: type_name::<T>(),
    }
}

impl Value {
    /// Copy out the payload if `T` is the exact active kind.
    pub fn get<T: Payload + Clone>(&self) -> Result<T, AccessError> {
        self.get_ref::<T>().cloned()
    }

    /// Borrow the payload if `T` is the exact active kind. The reference
    /// aliases this value's own storage; retyping the value ends the
    /// borrow (enforced by the borrow checker, not at runtime).
    pub fn get_ref<T: Payload>(&self) -> Result<&T, AccessError> {
        let actual = self.kind();
        T::payload(self).ok_or(AccessError::KindMismatch {
            expected: T::KIND,
            actual,
        })
    }

    /// Mutable counterpart of [`get_ref`](Value::get_ref).
    pub fn get_mut<T: Payload>(&mut self) -> Result<&mut T, AccessError> {
        let actual = self.kind();
        T::payload_mut(self).ok_or(AccessError::KindMismatch {
            expected: T::KIND,
            actual,
        })
    }

    /// Convert to `T`, applying the arithmetic coercion rules.
    ///
    /// ```
    /// use jot_core::Value;
    ///
    /// assert_eq!(Value::Number(2.5).to::<i32>().unwrap(), 3);
    /// assert_eq!(Value::Number(-2.5).to::<i32>().unwrap(), -3);
    /// assert_eq!(Value::Bool(true).to::<f64>().unwrap(), 1.0);
    /// assert!(Value::Null.to::<String>().is_err());
    /// ```
    pub fn to<T: Convert>(&self) -> Result<T, AccessError> {
        T::convert(self)
    }

    /// Like [`to`](Value::to) but quiet: `None` instead of an error.
    pub fn to_if<T: Convert>(&self) -> Option<T> {
        T::convert(self).ok()
    }

    /// Like [`to`](Value::to) but total: `default` instead of an error.
    pub fn to_or<T: Convert>(&self, default: T) -> T {
        T::convert(self).unwrap_or(default)
    }

    /// Move the payload out as `T`. A successful take of a string, array,
    /// or object leaves this value holding the empty payload of the same
    /// kind; scalar kinds are copied and unaffected.
    pub fn take<T: Take>(&mut self) -> Result<T, AccessError> {
        T::take(self)
    }

    /// Quiet form of [`take`](Value::take).
    pub fn take_if<T: Take>(&mut self) -> Option<T> {
        T::take(self).ok()
    }

    /// Defaulting form of [`take`](Value::take).
    pub fn take_or<T: Take>(&mut self, default: T) -> T {
        T::take(self).unwrap_or(default)
    }
}

impl Convert for Value {
    fn convert(value: &Value) -> Result<Self, AccessError> {
        Ok(value.clone())
    }
}

impl Convert for () {
    fn convert(value: &Value) -> Result<Self, AccessError> {
        match value {
            Value::Null => Ok(()),
            other => Err(no_conversion::<()>(other)),
        }
    }
}

impl Convert for bool {
    fn convert(value: &Value) -> Result<Self, AccessError> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::Number(n) => Ok(*n != 0.0),
            other => Err(no_conversion::<bool>(other)),
        }
    }
}

impl Convert for f64 {
    fn convert(value: &Value) -> Result<Self, AccessError> {
        match value {
            Value::Number(n) => Ok(*n),
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            other => Err(no_conversion::<f64>(other)),
        }
    }
}

impl Convert for f32 {
    fn convert(value: &Value) -> Result<Self, AccessError> {
        match value {
            Value::Number(n) => Ok(*n as f32),
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            other => Err(no_conversion::<f32>(other)),
        }
    }
}

macro_rules! convert_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl Convert for $ty {
            fn convert(value: &Value) -> Result<Self, AccessError> {
                let n = match value {
                    Value::Number(n) => *n,
                    Value::Bool(b) => return Ok(if *b { 1 } else { 0 }),
                    other => return Err(no_conversion::<$ty>(other)),
                };
                // `f64::round` rounds half away from zero, the rule this
                // model specifies: 2.5 -> 3, -2.5 -> -3.
                let rounded = n.round();
                if rounded >= <$ty>::MIN as f64 && rounded <= <$ty>::MAX as f64 {
                    Ok(rounded as $ty)
                } else {
                    Err(no_conversion::<$ty>(value))
                }
            }
        }
    )*};
}

convert_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Convert for String {
    fn convert(value: &Value) -> Result<Self, AccessError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(no_conversion::<String>(other)),
        }
    }
}

impl Convert for Vec<Value> {
    fn convert(value: &Value) -> Result<Self, AccessError> {
        match value {
            Value::Array(items) => Ok(items.clone()),
            other => Err(no_conversion::<Vec<Value>>(other)),
        }
    }
}

impl Convert for Map {
    fn convert(value: &Value) -> Result<Self, AccessError> {
        match value {
            Value::Object(map) => Ok(map.clone()),
            other => Err(no_conversion::<Map>(other)),
        }
    }
}

/// `Null` converts to `None`; any other kind converts the inner type.
/// This is the model's rendering of "only null converts to a pointer":
/// the nullable target type in Rust is `Option`.
impl<T: Convert> Convert for Option<T> {
    fn convert(value: &Value) -> Result<Self, AccessError> {
        match value {
            Value::Null => Ok(None),
            other => T::convert(other).map(Some),
        }
    }
}

impl Take for Value {
    fn take(value: &mut Value) -> Result<Self, AccessError> {
        match value {
            Value::String(_) | Value::Array(_) | Value::Object(_) => {
                let placeholder = Value::new(value.kind());
                Ok(mem::replace(value, placeholder))
            }
            scalar => Ok(scalar.clone()),
        }
    }
}

impl Take for String {
    fn take(value: &mut Value) -> Result<Self, AccessError> {
        match value {
            Value::String(s) => Ok(mem::take(s)),
            other => Err(no_conversion::<String>(other)),
        }
    }
}

impl Take for Vec<Value> {
    fn take(value: &mut Value) -> Result<Self, AccessError> {
        match value {
            Value::Array(items) => Ok(mem::take(items)),
            other => Err(no_conversion::<Vec<Value>>(other)),
        }
    }
}

impl Take for Map {
    fn take(value: &mut Value) -> Result<Self, AccessError> {
        match value {
            Value::Object(map) => Ok(mem::take(map)),
            other => Err(no_conversion::<Map>(other)),
        }
    }
}

impl<T: Take> Take for Option<T> {
    fn take(value: &mut Value) -> Result<Self, AccessError> {
        match value {
            Value::Null => Ok(None),
            other => T::take(other).map(Some),
        }
    }
}

macro_rules! take_by_copy {
    ($($ty:ty),* $(,)?) => {$(
        impl Take for $ty {
            fn take(value: &mut Value) -> Result<Self, AccessError> {
                <$ty as Convert>::convert(value)
            }
        }
    )*};
}

take_by_copy!(
    (),
    bool,
    f32,
    f64,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
);

/// The bidirectional contract between `Value` and user-defined types.
///
/// `to_value` builds the JSON representation; `from_value` rebuilds the
/// type, substituting defaults for missing or mismatched fields instead
/// of failing. Per-struct impls are expected to come from an external
/// derive/codegen layer; the core only guarantees that anything honoring
/// this contract nests through the container impls below.
///
/// ```
/// use jot_core::{JsonModel, Value};
///
/// #[derive(Default, PartialEq, Debug)]
/// struct Server {
///     host: String,
///     port: i64,
/// }
///
/// impl JsonModel for Server {
///     fn to_value(&self) -> Value {
///         let mut v = Value::new(jot_core::Kind::Object);
///         v.insert("host", self.host.clone()).unwrap();
///         v.insert("port", self.port).unwrap();
///         v
///     }
///
///     fn from_value(value: &Value) -> Self {
///         Server {
///             host: value.at("host").map(String::from_value).unwrap_or_default(),
///             port: value.at("port").map(i64::from_value).unwrap_or_default(),
///         }
///     }
/// }
///
/// let v = Server { host: "db1".into(), port: 5432 }.to_value();
/// assert_eq!(Server::from_value(&v), Server { host: "db1".into(), port: 5432 });
/// // Missing fields come back as defaults, not errors.
/// assert_eq!(Server::from_value(&Value::Null), Server::default());
/// ```
pub trait JsonModel: Sized {
    fn to_value(&self) -> Value;
    fn from_value(value: &Value) -> Self;
}

macro_rules! json_model_primitive {
    ($($ty:ty),* $(,)?) => {$(
        impl JsonModel for $ty {
            fn to_value(&self) -> Value {
                Value::from(*self)
            }

            fn from_value(value: &Value) -> Self {
                value.to_if().unwrap_or_default()
            }
        }
    )*};
}

json_model_primitive!(bool, f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

impl JsonModel for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: &Value) -> Self {
        value.to_if().unwrap_or_default()
    }
}

impl<T: JsonModel> JsonModel for Vec<T> {
    fn to_value(&self) -> Value {
        self.iter().map(T::to_value).collect()
    }

    fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) => items.iter().map(T::from_value).collect(),
            _ => Vec::new(),
        }
    }
}

impl<T: JsonModel> JsonModel for BTreeMap<String, T> {
    fn to_value(&self) -> Value {
        self.iter()
            .map(|(k, v)| (k.clone(), v.to_value()))
            .collect()
    }

    fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| (k.clone(), T::from_value(v)))
                .collect(),
            _ => BTreeMap::new(),
        }
    }
}

impl<T: JsonModel> JsonModel for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => None,
            other => Some(T::from_value(other)),
        }
    }
}
