//! Compact and pretty serializers.
//!
//! Both writers append straight into a growable `String` sink rather than
//! building intermediate strings per layer. Compact serialization never
//! fails; pretty serialization carries an indentation budget and refuses to
//! produce output when a deeply nested tree would blow past it — the sink
//! is left exactly as it was.
//!
//! Number formatting uses the shortest representation that parses back to
//! the same double, with integral values in `i64` range written without a
//! fractional part. Round-trip fidelity therefore holds for every finite
//! number the model can hold.

use std::fmt;

use crate::escape::escape_to;
use crate::value::Value;

/// Indent width used by [`Value::serialize_pretty`].
pub const DEFAULT_INDENT: usize = 4;

/// Indentation budget used by [`Value::serialize_pretty`]: the default
/// depth budget's worth of default-width indents.
pub const DEFAULT_MAX_WIDTH: usize = crate::parser::DEFAULT_MAX_DEPTH * DEFAULT_INDENT;

impl Value {
    /// Serialize to compact JSON text. Never fails.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.serialize_to(&mut out);
        out
    }

    /// Compact serialization appended to an existing sink.
    pub fn serialize_to(&self, out: &mut String) {
        write_compact(self, out);
    }

    /// Pretty-print with the default indent width and indentation budget.
    /// Returns `None` if the tree nests deep enough that a child's
    /// indentation would exceed the budget.
    pub fn serialize_pretty(&self) -> Option<String> {
        self.serialize_pretty_with(DEFAULT_INDENT, 0, DEFAULT_MAX_WIDTH)
    }

    /// Pretty-print with explicit indent width, starting depth, and
    /// indentation budget.
    pub fn serialize_pretty_with(
        &self,
        indent: usize,
        start_depth: usize,
        max_width: usize,
    ) -> Option<String> {
        let mut out = String::new();
        if self.serialize_pretty_to(&mut out, indent, start_depth, max_width) {
            Some(out)
        } else {
            None
        }
    }

    /// Pretty-print into an existing sink. On failure the sink is restored
    /// to its original content and `false` is returned — a failed pretty
    /// print produces no output at all.
    pub fn serialize_pretty_to(
        &self,
        out: &mut String,
        indent: usize,
        start_depth: usize,
        max_width: usize,
    ) -> bool {
        let mark = out.len();
        if write_pretty(self, out, indent, start_depth, max_width) {
            true
        } else {
            out.truncate(mark);
            false
        }
    }
}

/// Compact serialization doubles as the `Display` form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

fn write_compact(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => write_number(*n, out),
        Value::String(s) => escape_to(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_compact(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                escape_to(key, out);
                out.push(':');
                write_compact(item, out);
            }
            out.push('}');
        }
    }
}

/// Integral doubles inside the exactly-representable range print without a
/// fractional part, so `1.0` serializes as `1`. The bound is 2^53, past
/// which `f64` cannot distinguish adjacent integers anyway.
const INTEGRAL_LIMIT: f64 = 9_007_199_254_740_992.0;

fn write_number(n: f64, out: &mut String) {
    // The parser never produces these, but programmatic trees can.
    if !n.is_finite() {
        out.push_str("null");
        return;
    }
    if n == n.trunc() && n.abs() < INTEGRAL_LIMIT {
        out.push_str(&(n as i64).to_string());
    } else {
        out.push_str(&n.to_string());
    }
}

/// Recursive pretty writer. Emits a newline plus `depth * indent` spaces
/// before every child element and before each closing bracket. Returns
/// `false` as soon as a child's indentation would exceed `max_width`.
fn write_pretty(
    value: &Value,
    out: &mut String,
    indent: usize,
    depth: usize,
    max_width: usize,
) -> bool {
    match value {
        Value::Array(items) if !items.is_empty() => {
            let pad = (depth + 1) * indent;
            if pad > max_width {
                return false;
            }
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('\n');
                push_spaces(out, pad);
                if !write_pretty(item, out, indent, depth + 1, max_width) {
                    return false;
                }
            }
            out.push('\n');
            push_spaces(out, depth * indent);
            out.push(']');
            true
        }
        Value::Object(map) if !map.is_empty() => {
            let pad = (depth + 1) * indent;
            if pad > max_width {
                return false;
            }
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('\n');
                push_spaces(out, pad);
                escape_to(key, out);
                out.push_str(": ");
                if !write_pretty(item, out, indent, depth + 1, max_width) {
                    return false;
                }
            }
            out.push('\n');
            push_spaces(out, depth * indent);
            out.push('}');
            true
        }
        // Scalars and empty containers render in their compact form.
        other => {
            write_compact(other, out);
            true
        }
    }
}

fn push_spaces(out: &mut String, count: usize) {
    for _ in 0..count {
        out.push(' ');
    }
}
