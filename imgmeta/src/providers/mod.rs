//! # Providers
//!
//! Format readers that turn a structural unit of some file format into
//! directories. Each one implements [`FormatReader`](crate::FormatReader).
//!
//! Choosing which reader to run on a file is up to the caller.

pub mod psd;
