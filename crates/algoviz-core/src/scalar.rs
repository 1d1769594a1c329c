//! Numeric element type for searched and sorted arrays.
//!
//! Clients send plain JSON numbers. [`Scalar`] keeps integers as integers and
//! floats as floats so a snapshot serializes back exactly as it was received,
//! while comparisons between the two forms are exact.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A JSON number: either an integer or a float.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Scalar::Int(a), Scalar::Int(b)) => Some(a.cmp(&b)),
            (Scalar::Float(a), Scalar::Float(b)) => a.partial_cmp(&b),
            (Scalar::Int(a), Scalar::Float(b)) => cmp_int_float(a, b),
            (Scalar::Float(a), Scalar::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

/// Exact ordering of an integer against a float, without rounding the
/// integer through `f64`.
fn cmp_int_float(a: i64, b: f64) -> Option<Ordering> {
    // 2^63: the first float above every i64.
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

    if b.is_nan() {
        return None;
    }
    if b.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&b) {
        return Some(a.cmp(&(b as i64)));
    }
    // `b` is fractional or outside i64 range, so the two are never equal.
    // `a as f64` can only round onto `b` when `b` is the upper bound.
    match (a as f64).partial_cmp(&b)? {
        Ordering::Equal => Some(Ordering::Less),
        ord => Some(ord),
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{}", v),
        }
    }
}
