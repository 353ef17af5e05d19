// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Numeric coercion for `increase` and `decrease`.
//!
//! A value counts as numeric when it is a JSON number or a string that
//! reads as a decimal integer or float (`"12"`, `" 1.5"`, `"-3e2"`).
//! Arithmetic keeps integers as integers until a float shows up or the
//! integer result would overflow, at which point it promotes to `f64`.

use std::ops::Add;
use std::ops::Sub;

use serde_json::Value;

/// A number pulled out of a store value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    /// Coerce a value, returning `None` if it is not numeric.
    pub fn coerce(value: &Value) -> Option<Numeric> {
        return match value {
            Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Some(Numeric::Int(int))
                } else {
                    number.as_f64().map(Numeric::Float)
                }
            }
            Value::String(text) => parse(text),
            _ => None,
        };
    }

    /// The value as a float, for mixed arithmetic.
    pub fn as_f64(self) -> f64 {
        return match self {
            Numeric::Int(int) => int as f64,
            Numeric::Float(float) => float,
        };
    }

    /// Convert back into a JSON value.
    ///
    /// Returns `None` for infinities and NaN, which JSON cannot hold.
    pub fn into_value(self) -> Option<Value> {
        return match self {
            Numeric::Int(int) => Some(Value::from(int)),
            Numeric::Float(float) => serde_json::Number::from_f64(float).map(Value::Number),
        };
    }
}

impl Add for Numeric {
    type Output = Numeric;

    fn add(self, rhs: Numeric) -> Numeric {
        if let (Numeric::Int(a), Numeric::Int(b)) = (self, rhs) {
            if let Some(sum) = a.checked_add(b) {
                return Numeric::Int(sum);
            }
        }
        return Numeric::Float(self.as_f64() + rhs.as_f64());
    }
}

impl Sub for Numeric {
    type Output = Numeric;

    fn sub(self, rhs: Numeric) -> Numeric {
        if let (Numeric::Int(a), Numeric::Int(b)) = (self, rhs) {
            if let Some(difference) = a.checked_sub(b) {
                return Numeric::Int(difference);
            }
        }
        return Numeric::Float(self.as_f64() - rhs.as_f64());
    }
}

/// Parse a numeric string.
///
/// Surrounding whitespace is allowed. Words like `inf` and `NaN`, which
/// `f64::from_str` would accept, are not.
fn parse(text: &str) -> Option<Numeric> {
    let text = text.trim();
    let plain = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !plain || !text.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    let integral = !text.contains(['.', 'e', 'E']);
    if integral {
        if let Ok(int) = text.parse::<i64>() {
            return Some(Numeric::Int(int));
        }
    }

    return text.parse::<f64>().ok().filter(|f| f.is_finite()).map(Numeric::Float);
}
