//! Fixed-width integer primitives for the runtime
//!
//! This crate provides the integer layer of a small language runtime: ten
//! integer kinds (8 to 128 bits, signed and unsigned) with wrapping
//! arithmetic, cross-width comparison, a truncating conversion matrix,
//! sign-aware shifts, and decoding of raw values into integer-backed enum
//! members.
//!
//! The focus is on **exact, predictable semantics**. Every operation is
//! total: overflow wraps, narrowing truncates, overlong shifts yield zero.
//! Nothing here allocates, locks or blocks, and every value is immutable, so
//! all of it is safe to use from any number of threads.
//!
//! # Module overview
//!
//! - `width`
//!   The ten width classes, both as a runtime descriptor (`WidthClass`) and
//!   as compile-time marker types (`width::I8` .. `width::U128`).
//!
//! - `primitives`
//!   `FixedInt<W>`, the single generic integer type behind all ten kinds,
//!   with one alias per kind (`Int8` .. `UInt128`). Also hosts the
//!   conversion matrix (`convert_raw`), bridges to Rust's primitive
//!   integers, width-exact byte encodings for an external memory layer, and
//!   `DynInt`, a value tagged with its class at run time.
//!
//! - `enums`
//!   Integer-backed enums defined with `int_enum!`, and the decoder that
//!   maps a raw value back to the first member declared with it.
//!
//! - `halt`
//!   The designated unrecoverable failure used when a value that must be an
//!   enum member is not.
//!
//! # Non-goals
//!
//! - No checked, saturating or arbitrary-precision arithmetic
//! - No locale-aware formatting
//! - No bit-flag composition of enum members

pub mod enums;
pub mod error;
pub mod halt;
pub mod primitives;
pub mod width;

pub use error::{Error, Result};
pub use primitives::{
    DynInt, FixedInt, Int8, Int16, Int32, Int64, Int128, Primitive, UInt8, UInt16, UInt32, UInt64,
    UInt128, convert_raw,
};
pub use width::{SignedWidth, Width, WidthClass};
