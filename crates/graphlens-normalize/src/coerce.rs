//! Value coercion
//!
//! Drivers box 64-bit integers as a `{low, high}` pair of signed 32-bit
//! halves, because the values have to survive consumers whose only number type
//! is a double. Coercion unboxes them into plain JSON integers when they fit the
//! safe-integer range and applies a [`LargeIntegerPolicy`] when they do not.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use tracing::{debug, warn};

/// Largest integer a double represents exactly (2^53 - 1)
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// What to do with integers outside ±[`MAX_SAFE_INTEGER`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LargeIntegerPolicy {
    /// Render the exact decimal value as a string
    #[default]
    String,
    /// Convert to a float, accepting precision loss
    LossyFloat,
}

/// Decode a boxed integer
///
/// The value must be an object with exactly the keys `low` and `high`. `high`
/// must fit an i32; `low` may be given signed or unsigned, only its 32 bits
/// are used.
pub fn boxed_integer(value: &Value) -> Option<i64> {
    let obj = value.as_object()?;
    if obj.len() != 2 {
        return None;
    }

    let high = i32::try_from(obj.get("high")?.as_i64()?).ok()?;
    let low = obj.get("low")?.as_i64()?;
    let low_bits = match i32::try_from(low) {
        Ok(signed) => signed as u32,
        Err(_) => u32::try_from(low).ok()?,
    };

    Some(((high as i64) << 32) | low_bits as i64)
}

/// Converts scalar values into portable representations
#[derive(Debug, Clone, Copy, Default)]
pub struct Coercer {
    policy: LargeIntegerPolicy,
}

impl Coercer {
    pub fn new(policy: LargeIntegerPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> LargeIntegerPolicy {
        self.policy
    }

    /// Coerce one scalar value
    ///
    /// Lists recurse element-wise; maps pass through unchanged.
    pub fn coerce(&self, value: Value) -> Value {
        if let Some(n) = boxed_integer(&value) {
            return self.integer(n);
        }

        match value {
            Value::Array(items) => {
                Value::Array(items.into_iter().map(|item| self.coerce(item)).collect())
            }
            Value::Number(n) => self.number(n),
            other => other,
        }
    }

    /// Portable form of a native integer
    pub fn integer(&self, n: i64) -> Value {
        if (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&n) {
            Value::from(n)
        } else {
            self.out_of_range(n.to_string(), n as f64)
        }
    }

    fn number(&self, n: Number) -> Value {
        if let Some(i) = n.as_i64() {
            return self.integer(i);
        }
        match n.as_u64() {
            Some(u) => self.out_of_range(u.to_string(), u as f64),
            None => Value::Number(n),
        }
    }

    fn out_of_range(&self, exact: String, approx: f64) -> Value {
        match self.policy {
            LargeIntegerPolicy::String => {
                debug!(value = %exact, "Integer outside safe range rendered as string");
                Value::String(exact)
            }
            LargeIntegerPolicy::LossyFloat => {
                warn!(
                    value = %exact,
                    approx,
                    "Integer outside safe range converted to float with precision loss"
                );
                Number::from_f64(approx).map_or(Value::String(exact), Value::Number)
            }
        }
    }
}
