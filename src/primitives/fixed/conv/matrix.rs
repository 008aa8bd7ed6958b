//! Truncating conversion matrix
//!
//! Every pair of width classes, identity included, has a conversion that
//! never fails:
//!
//! - narrowing (or same width) keeps the low `to.bits()` bits,
//! - widening fills the new high bits with the source's sign bit when the
//!   source is signed, with zeros otherwise.
//!
//! The target's signedness never influences the resulting bit pattern; it
//! only changes how that pattern is read afterwards.

use crate::primitives::fixed::FixedInt;
use crate::width::{Width, WidthClass};

/// Converts a bit pattern of class `from` into a bit pattern of class `to`.
///
/// Bits of `raw` above `from.bits()` are ignored.
pub const fn convert_raw(raw: u128, from: WidthClass, to: WidthClass) -> u128 {
    let raw = raw & from.mask();

    if to.bits() <= from.bits() {
        return raw & to.mask();
    }

    let sign_bit = (raw >> (from.bits() - 1)) & 1;

    if from.is_signed() && sign_bit == 1 {
        (raw | !from.mask()) & to.mask()
    } else {
        raw
    }
}

impl<W: Width> FixedInt<W> {
    /// Reinterprets a value of any width as `W`, truncating or extending
    /// per the conversion matrix.
    #[inline]
    pub fn from_truncating<A: Width>(value: FixedInt<A>) -> Self {
        Self::from_raw_bits(convert_raw(value.raw, A::CLASS, W::CLASS))
    }

    /// Converts `self` into width `B`. Same as
    /// `FixedInt::<B>::from_truncating(self)`.
    #[inline]
    pub fn cast<B: Width>(self) -> FixedInt<B> {
        FixedInt::from_truncating(self)
    }
}
