//! # `imgmeta_types`
//!
//! Plain types shared by `imgmeta` and anything that wants to speak its
//! language without pulling in the parsers: byte orders, tag values,
//! rationals, and the tag tables for the formats `imgmeta` decodes.

#![forbid(unsafe_code)]

pub mod psd;
pub mod rational;
pub mod value;

pub use rational::Rational;
pub use value::{TypedValue, ValueArray};

/// The order in which a multi-byte number is laid out.
///
/// Formats pick one of these for their whole structure (Photoshop is always
/// big-endian), or say which one they use in a marker (TIFF's `II`/`MM`).
#[derive(Clone, Copy, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub enum ByteOrder {
    /// Most significant byte first. Also called "Motorola" order.
    #[doc(alias = "MM")]
    Big,

    /// Least significant byte first. Also called "Intel" order.
    #[doc(alias = "II")]
    Little,
}
