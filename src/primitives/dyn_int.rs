//! Runtime-tagged integer
//!
//! `DynInt` carries a bit pattern together with its [`WidthClass`] when the
//! width is only known at run time, e.g. when an external memory layer
//! loads a slot whose type is described by data. It converts through the
//! same matrix as [`FixedInt`].

use std::fmt::{self, Display, Formatter};

use crate::error::Result;
use crate::primitives::fixed::{FixedInt, convert_raw, read_be, read_le};
use crate::width::{Width, WidthClass};

/// A bit pattern tagged with its width class.
///
/// Invariant: bits of `raw` above `class.bits()` are zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DynInt {
    class: WidthClass,
    raw: u128,
}

impl DynInt {
    /// Builds a value of `class` from the low bits of `raw`.
    pub const fn new(class: WidthClass, raw: u128) -> Self {
        Self {
            class,
            raw: raw & class.mask(),
        }
    }

    pub fn from_le_bytes(class: WidthClass, bytes: &[u8]) -> Result<Self> {
        read_le(class, bytes).map(|raw| Self::new(class, raw))
    }

    pub fn from_be_bytes(class: WidthClass, bytes: &[u8]) -> Result<Self> {
        read_be(class, bytes).map(|raw| Self::new(class, raw))
    }

    #[inline]
    pub const fn class(self) -> WidthClass {
        self.class
    }

    #[inline]
    pub const fn raw_bits(self) -> u128 {
        self.raw
    }

    pub const fn is_negative(self) -> bool {
        self.class.is_signed() && (self.raw >> (self.class.bits() - 1)) & 1 == 1
    }

    /// Converts into another class per the truncating matrix.
    pub const fn cast(self, to: WidthClass) -> Self {
        Self::new(to, convert_raw(self.raw, self.class, to))
    }

    /// Converts into a statically typed value per the truncating matrix.
    pub fn to_fixed<W: Width>(self) -> FixedInt<W> {
        FixedInt::from_raw_bits(convert_raw(self.raw, self.class, W::CLASS))
    }
}

impl<W: Width> From<FixedInt<W>> for DynInt {
    fn from(value: FixedInt<W>) -> Self {
        Self::new(W::CLASS, value.raw_bits())
    }
}

impl Display for DynInt {
    /// Formats the semantic value followed by the class, e.g. `-5i32`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.class.is_signed() {
            let value = convert_raw(self.raw, self.class, WidthClass::I128) as i128;

            write!(f, "{}{}", value, self.class)
        } else {
            write!(f, "{}{}", self.raw, self.class)
        }
    }
}
