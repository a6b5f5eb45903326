//! Values stored under a directory's tags.
//!
//! Readers decode all sorts of primitives - bytes, shorts, signed longs,
//! fractions, strings - and each one lands in a [`TypedValue`]. The set of
//! variants is closed, so anything consuming values can match on all of them.

use crate::rational::Rational;

/// A value held by one tag.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub enum TypedValue {
    Int8(i8),
    UInt8(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Rational(Rational),
    Text(String),

    /// A list of scalars, all of one kind.
    Array(ValueArray),
}

/// A homogeneous list of scalar values.
///
/// There's no variant holding other arrays, so an array can never nest.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub enum ValueArray {
    Int8(Vec<i8>),
    UInt8(Vec<u8>),
    Int16(Vec<i16>),
    UInt16(Vec<u16>),
    Int32(Vec<i32>),
    UInt32(Vec<u32>),
    Int64(Vec<i64>),
    UInt64(Vec<u64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    Rational(Vec<Rational>),
    Text(Vec<String>),
}

/// Runs `$body` with `$v` bound to the inner `Vec`, whatever its type.
macro_rules! with_vec {
    ($array:expr, $v:ident => $body:expr) => {
        match $array {
            ValueArray::Int8($v) => $body,
            ValueArray::UInt8($v) => $body,
            ValueArray::Int16($v) => $body,
            ValueArray::UInt16($v) => $body,
            ValueArray::Int32($v) => $body,
            ValueArray::UInt32($v) => $body,
            ValueArray::Int64($v) => $body,
            ValueArray::UInt64($v) => $body,
            ValueArray::Float32($v) => $body,
            ValueArray::Float64($v) => $body,
            ValueArray::Rational($v) => $body,
            ValueArray::Text($v) => $body,
        }
    };
}

impl ValueArray {
    pub fn len(&self) -> usize {
        with_vec!(self, v => v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grabs element `index` as a scalar value.
    pub fn get(&self, index: usize) -> Option<TypedValue> {
        with_vec!(self, v => v.get(index).cloned().map(TypedValue::from))
    }

    /// The only element of a one-element array.
    ///
    /// Returns `None` for every other length.
    ///
    /// ```
    /// use imgmeta_types::{TypedValue, ValueArray};
    ///
    /// assert_eq!(ValueArray::Int16(vec![3]).single(), Some(TypedValue::Int16(3)));
    /// assert_eq!(ValueArray::Int16(vec![3, 4]).single(), None);
    /// assert_eq!(ValueArray::Int16(vec![]).single(), None);
    /// ```
    pub fn single(&self) -> Option<TypedValue> {
        match self.len() {
            1 => self.get(0),
            _ => None,
        }
    }

    /// Iterates over each element as a scalar value.
    pub fn iter(&self) -> impl Iterator<Item = TypedValue> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }

    /// Names the kind of element stored.
    pub const fn element_kind_name(&self) -> &'static str {
        match self {
            ValueArray::Int8(_) => "Int8",
            ValueArray::UInt8(_) => "UInt8",
            ValueArray::Int16(_) => "Int16",
            ValueArray::UInt16(_) => "UInt16",
            ValueArray::Int32(_) => "Int32",
            ValueArray::UInt32(_) => "UInt32",
            ValueArray::Int64(_) => "Int64",
            ValueArray::UInt64(_) => "UInt64",
            ValueArray::Float32(_) => "Float32",
            ValueArray::Float64(_) => "Float64",
            ValueArray::Rational(_) => "Rational",
            ValueArray::Text(_) => "Text",
        }
    }
}

impl TypedValue {
    /// Names the variant, for logs and error messages.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            TypedValue::Int8(_) => "Int8",
            TypedValue::UInt8(_) => "UInt8",
            TypedValue::Int16(_) => "Int16",
            TypedValue::UInt16(_) => "UInt16",
            TypedValue::Int32(_) => "Int32",
            TypedValue::UInt32(_) => "UInt32",
            TypedValue::Int64(_) => "Int64",
            TypedValue::UInt64(_) => "UInt64",
            TypedValue::Float32(_) => "Float32",
            TypedValue::Float64(_) => "Float64",
            TypedValue::Rational(_) => "Rational",
            TypedValue::Text(_) => "Text",
            TypedValue::Array(_) => "Array",
        }
    }

    pub const fn is_array(&self) -> bool {
        matches!(self, TypedValue::Array(_))
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for TypedValue {
                fn from(value: $ty) -> Self {
                    TypedValue::$variant(value)
                }
            }

            impl From<Vec<$ty>> for ValueArray {
                fn from(value: Vec<$ty>) -> Self {
                    ValueArray::$variant(value)
                }
            }

            impl From<Vec<$ty>> for TypedValue {
                fn from(value: Vec<$ty>) -> Self {
                    TypedValue::Array(ValueArray::$variant(value))
                }
            }
        )+
    };
}

impl_from!(
    i8 => Int8,
    u8 => UInt8,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    Rational => Rational,
    String => Text,
);

impl From<&str> for TypedValue {
    fn from(value: &str) -> Self {
        TypedValue::Text(value.to_owned())
    }
}

impl From<ValueArray> for TypedValue {
    fn from(value: ValueArray) -> Self {
        TypedValue::Array(value)
    }
}

impl core::fmt::Display for TypedValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TypedValue::Int8(v) => write!(f, "{v}"),
            TypedValue::UInt8(v) => write!(f, "{v}"),
            TypedValue::Int16(v) => write!(f, "{v}"),
            TypedValue::UInt16(v) => write!(f, "{v}"),
            TypedValue::Int32(v) => write!(f, "{v}"),
            TypedValue::UInt32(v) => write!(f, "{v}"),
            TypedValue::Int64(v) => write!(f, "{v}"),
            TypedValue::UInt64(v) => write!(f, "{v}"),
            TypedValue::Float32(v) => write!(f, "{v}"),
            TypedValue::Float64(v) => write!(f, "{v}"),
            TypedValue::Rational(v) => write!(f, "{v}"),
            TypedValue::Text(v) => f.write_str(v),
            TypedValue::Array(a) => write!(f, "{a}"),
        }
    }
}

/// Elements separated by single spaces.
impl core::fmt::Display for ValueArray {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{element}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{TypedValue, ValueArray};
    use crate::Rational;

    #[test]
    fn display_is_canonical() {
        assert_eq!(TypedValue::from(-5_i8).to_string(), "-5");
        assert_eq!(TypedValue::from(10_f32).to_string(), "10");
        assert_eq!(TypedValue::from(2.5_f64).to_string(), "2.5");
        assert_eq!(TypedValue::from(Rational::new(12, 1)).to_string(), "12/1");
        assert_eq!(TypedValue::from("hello").to_string(), "hello");
        assert_eq!(TypedValue::from(vec![1_u16, 2, 3]).to_string(), "1 2 3");
        assert_eq!(TypedValue::from(Vec::<u8>::new()).to_string(), "");
    }

    #[test]
    fn array_elements_come_out_as_scalars() {
        let array = ValueArray::from(vec![String::from("a"), String::from("b")]);

        assert_eq!(array.len(), 2);
        assert_eq!(array.get(1), Some(TypedValue::Text("b".into())));
        assert_eq!(array.get(2), None);
        assert_eq!(array.element_kind_name(), "Text");
        assert!(array.iter().all(|v| !v.is_array()));
    }
}
