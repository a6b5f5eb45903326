//! The conversion matrix behind the typed getters.
//!
//! A one-element array is unwrapped before anything else, so `[5_u16]` reads
//! exactly like `5_u16`. After that, each target type decides which scalars it
//! accepts in [`FromTypedValue::from_scalar`].

use imgmeta_types::{Rational, TypedValue, ValueArray};

/// A type a stored value can be read as.
pub(crate) trait FromTypedValue: Sized {
    /// Name of the target, used in errors.
    const NAME: &'static str;

    /// Converts a non-array value.
    fn from_scalar(value: &TypedValue) -> Option<Self>;

    /// Converts an array that isn't exactly one element long.
    fn from_array(_array: &ValueArray) -> Option<Self> {
        None
    }
}

/// Reads `value` as a `T`.
pub(crate) fn convert<T: FromTypedValue>(value: &TypedValue) -> Option<T> {
    match value {
        TypedValue::Array(array) => match array.single() {
            Some(only) => T::from_scalar(&only),
            None => T::from_array(array),
        },
        scalar => T::from_scalar(scalar),
    }
}

/// Reads `value` as a list of `T`.
///
/// Scalars come back as a one-element list. Every element has to convert.
pub(crate) fn convert_array<T: FromTypedValue>(value: &TypedValue) -> Option<Vec<T>> {
    match value {
        TypedValue::Array(array) => array.iter().map(|e| T::from_scalar(&e)).collect(),
        scalar => T::from_scalar(scalar).map(|v| vec![v]),
    }
}

macro_rules! impl_numeric {
    ($($ty:ty => $r:ident => $from_rational:expr),+ $(,)?) => {
        $(
            impl FromTypedValue for $ty {
                const NAME: &'static str = stringify!($ty);

                fn from_scalar(value: &TypedValue) -> Option<Self> {
                    match value {
                        TypedValue::Int8(v) => Some(*v as $ty),
                        TypedValue::UInt8(v) => Some(*v as $ty),
                        TypedValue::Int16(v) => Some(*v as $ty),
                        TypedValue::UInt16(v) => Some(*v as $ty),
                        TypedValue::Int32(v) => Some(*v as $ty),
                        TypedValue::UInt32(v) => Some(*v as $ty),
                        TypedValue::Int64(v) => Some(*v as $ty),
                        TypedValue::UInt64(v) => Some(*v as $ty),
                        TypedValue::Float32(v) => Some(*v as $ty),
                        TypedValue::Float64(v) => Some(*v as $ty),
                        TypedValue::Rational($r) => Some($from_rational),
                        TypedValue::Text(s) => s.parse::<$ty>().ok(),
                        TypedValue::Array(_) => None,
                    }
                }
            }
        )+
    };
}

// the quotient narrows like any other integer, but a quotient that doesn't
// exist saturates from the IEEE value in the target's own range
impl_numeric!(
    u8 => r => r.numerator.checked_div(r.denominator).map_or_else(|| r.to_f64() as u8, |q| q as u8),
    i32 => r => r.numerator.checked_div(r.denominator).map_or_else(|| r.to_f64() as i32, |q| q as i32),
    i64 => r => r.to_i64(),
    f32 => r => r.to_f32(),
    f64 => r => r.to_f64(),
);

/// Text must say `true` or `false`. Numbers are true unless they're zero
/// (or NaN, which `0/0` is).
impl FromTypedValue for bool {
    const NAME: &'static str = "bool";

    fn from_scalar(value: &TypedValue) -> Option<Self> {
        match value {
            TypedValue::Text(s) if s.eq_ignore_ascii_case("true") => Some(true),
            TypedValue::Text(s) if s.eq_ignore_ascii_case("false") => Some(false),
            TypedValue::Text(_) | TypedValue::Array(_) => None,
            number => f64::from_scalar(number).map(|v| v != 0.0 && !v.is_nan()),
        }
    }
}

/// Anything renders as text. Longer arrays join their elements with spaces.
impl FromTypedValue for String {
    const NAME: &'static str = "String";

    fn from_scalar(value: &TypedValue) -> Option<Self> {
        Some(value.to_string())
    }

    fn from_array(array: &ValueArray) -> Option<Self> {
        Some(array.to_string())
    }
}

/// Integers become `n/1`. Floats have no exact fraction, so they don't
/// convert; text has to look like `n/d` or `n`.
impl FromTypedValue for Rational {
    const NAME: &'static str = "Rational";

    fn from_scalar(value: &TypedValue) -> Option<Self> {
        match value {
            TypedValue::Rational(r) => Some(*r),
            TypedValue::Int8(_)
            | TypedValue::UInt8(_)
            | TypedValue::Int16(_)
            | TypedValue::UInt16(_)
            | TypedValue::Int32(_)
            | TypedValue::UInt32(_)
            | TypedValue::Int64(_)
            | TypedValue::UInt64(_) => i64::from_scalar(value).map(|n| Rational::new(n, 1)),
            TypedValue::Text(s) => s.parse().ok(),
            TypedValue::Float32(_) | TypedValue::Float64(_) | TypedValue::Array(_) => None,
        }
    }
}
