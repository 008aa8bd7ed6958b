//! Error types
//!
//! Arithmetic, shifts and conversions never fail: they wrap or truncate.
//! The only recoverable failures are byte buffers of the wrong length handed
//! over by an external memory layer, and values that name no enum member
//! when the caller asked for a checked decode.

use thiserror::Error;

use crate::primitives::DynInt;
use crate::width::WidthClass;

/// Errors returned by the fallible surface of the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A byte buffer does not hold exactly one value of the width class.
    #[error("expected {expected} bytes for {class}, got {actual}")]
    ByteLength {
        class: WidthClass,
        expected: usize,
        actual: usize,
    },

    /// A value matches no member of the enum.
    #[error("{value} is not a member of enum {enum_name}")]
    UnknownMember {
        enum_name: &'static str,
        value: DynInt,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
