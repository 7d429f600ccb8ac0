//! Operand and result type.

use std::cmp::Ordering;
use std::fmt;

/// A numeric operand or result.
///
/// Integers stay integers as long as the exact result fits in `i64`;
/// everything else is carried as `f64`. Equality and ordering are numeric, so
/// `Int(3) == Float(3.0)`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// The value as `f64`. Integers beyond 2^53 lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// True for `Int(0)` and for both signed floating zeros.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(v) => v == 0,
            Self::Float(v) => v == 0.0,
        }
    }

    /// True for the `Int` variant, whatever its value.
    #[must_use]
    pub const fn is_int(self) -> bool {
        matches!(self, Self::Int(_))
    }
}

/// Exact ordering of an integer against a float, without rounding the integer.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn cmp_int_float(i: i64, x: f64) -> Option<Ordering> {
    // 2^63, the first float above every i64
    const I64_END: f64 = 9_223_372_036_854_775_808.0;

    if x.is_nan() {
        return None;
    }
    if x >= I64_END {
        return Some(Ordering::Less);
    }
    if x < -I64_END {
        return Some(Ordering::Greater);
    }

    // In [-2^63, 2^63) the floor is an exact i64.
    let floor = x.floor();
    match i.cmp(&(floor as i64)) {
        Ordering::Equal if x == floor => Some(Ordering::Equal),
        Ordering::Equal => Some(Ordering::Less),
        ord => Some(ord),
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(&b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(&b),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(a, b),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) if v.is_finite() && *v != 0.0 && !(1e-6..1e16).contains(&v.abs()) => {
                write!(f, "{v:e}")
            }
            // keep a trailing ".0" so whole floats are distinguishable from ints
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}
