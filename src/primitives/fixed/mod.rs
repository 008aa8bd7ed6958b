//! Fixed-width integer primitive
//!
//! This module groups the `FixedInt` type with its operations and
//! conversions:
//!
//! - `core`: storage, constants, predicates and formatting
//! - `ops`: wrapping arithmetic, bitwise operators and comparisons
//! - `shift`: sign-aware shifts with any-width counts
//! - `conv`: the truncating conversion matrix, primitive bridges and byte
//!   encodings

mod conv;
mod core;
mod ops;
mod shift;

pub use self::core::FixedInt;
pub use conv::matrix::convert_raw;
pub use conv::primitive::Primitive;

pub(crate) use conv::bytes::{read_be, read_le};
