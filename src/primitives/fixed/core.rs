//! Fixed-width integer primitive
//!
//! This module defines [`FixedInt`], the single value type behind the ten
//! integer kinds of the runtime. The width class is a type parameter, so the
//! ten kinds are monomorphizations of one implementation rather than ten
//! copies of it.
//!
//! The value is stored as a `u128` bit pattern of which only the low
//! `W::BITS` bits are ever set. Whether that pattern is read as two's
//! complement or as an unsigned magnitude depends on `W::SIGNED`.
//!
//! Values are immutable. Every operation returns a new value and wraps
//! silently when the result does not fit the width.

use std::fmt::{self, Binary, Debug, Display, Formatter, LowerHex, UpperHex};
use std::marker::PhantomData;

use crate::width::Width;

/// Fixed-width integer tagged with a [`Width`].
///
/// Invariant: bits above `W::BITS` in `raw` are always zero.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct FixedInt<W: Width> {
    pub(crate) raw: u128,
    width: PhantomData<W>,
}

impl<W: Width> FixedInt<W> {
    /// Number of storage bits.
    pub const BITS: u32 = W::BITS;

    /// Number of storage bytes.
    pub const BYTES: usize = W::CLASS.bytes();

    /// The all-zero bit pattern.
    pub const ZERO: Self = Self::from_raw_bits(0);

    /// The value one.
    pub const ONE: Self = Self::from_raw_bits(1);

    /// Largest representable value (`0x7F..` when signed, `0xFF..` otherwise).
    pub const MAX: Self = Self::from_raw_bits(if W::SIGNED {
        W::CLASS.mask() >> 1
    } else {
        W::CLASS.mask()
    });

    /// Smallest representable value (`0x80..` when signed, zero otherwise).
    pub const MIN: Self = Self::from_raw_bits(if W::SIGNED {
        1u128 << (W::BITS - 1)
    } else {
        0
    });

    /// Returns the all-zero value.
    ///
    /// Width-polymorphic algorithms use this as their base case.
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Builds a value from a bit pattern, keeping only the low `W::BITS` bits.
    ///
    /// This is the entry point for external layers that hand over raw
    /// storage.
    #[inline]
    pub const fn from_raw_bits(raw: u128) -> Self {
        Self {
            raw: raw & W::CLASS.mask(),
            width: PhantomData,
        }
    }

    /// Builds a value from an `i128`, keeping its low `W::BITS` bits.
    ///
    /// Usable in constant contexts, e.g. enum member tables.
    #[inline]
    pub const fn from_i128(value: i128) -> Self {
        Self::from_raw_bits(value as u128)
    }

    /// Builds a value from a `u128`, keeping its low `W::BITS` bits.
    #[inline]
    pub const fn from_u128(value: u128) -> Self {
        Self::from_raw_bits(value)
    }

    /// Width-exact bit pattern of the value.
    ///
    /// Bits above `W::BITS` are zero, so the result is stable across
    /// platforms and suitable for storage by a memory layer.
    #[inline]
    pub const fn raw_bits(self) -> u128 {
        self.raw
    }

    /// Two's-complement reading of the bit pattern, sign extended to 128 bits.
    ///
    /// For unsigned widths the pattern is still read as if it were signed;
    /// callers that care about the semantic value go through
    /// [`is_negative`](Self::is_negative) first.
    #[inline]
    pub(crate) const fn sign_extended(self) -> i128 {
        let shift = 128 - W::BITS;

        ((self.raw << shift) as i128) >> shift
    }

    /// Returns `true` if the value is below zero. Always `false` for
    /// unsigned widths.
    #[inline]
    pub const fn is_negative(self) -> bool {
        W::SIGNED && (self.raw >> (W::BITS - 1)) & 1 == 1
    }

    /// Number of leading zero bits within the width.
    pub const fn leading_zeros(self) -> u32 {
        self.raw.leading_zeros() - (128 - W::BITS)
    }

    /// Number of set bits.
    pub const fn count_ones(self) -> u32 {
        self.raw.count_ones()
    }

    /// Returns `true` if every bit set in `mask` is also set in `self`.
    #[inline]
    pub const fn bits_set(self, mask: Self) -> bool {
        self.raw & mask.raw == mask.raw
    }

    /// Absolute value.
    ///
    /// Unsigned values are returned unchanged. For signed widths the most
    /// negative value wraps back to itself, matching
    /// [`wrapping_sub`](Self::wrapping_sub).
    pub fn abs(self) -> Self {
        if self.is_negative() {
            Self::ZERO.wrapping_sub(self)
        } else {
            self
        }
    }

    /// Runs `body` once for every index from zero up to, but excluding,
    /// `self`.
    ///
    /// The counter advances by wrapping addition. Nothing runs when `self`
    /// is zero or negative.
    pub fn times<F>(self, mut body: F)
    where
        F: FnMut(Self),
    {
        let mut index = Self::ZERO;

        while index < self {
            body(index);
            index = index.wrapping_add(Self::ONE);
        }
    }
}

impl<W: Width> Debug for FixedInt<W> {
    /// Formats as `i32(-5)`, naming the width class.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", W::CLASS, self)
    }
}

impl<W: Width> Display for FixedInt<W> {
    /// Formats the semantic value in decimal.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if W::SIGNED {
            Display::fmt(&self.sign_extended(), f)
        } else {
            Display::fmt(&self.raw, f)
        }
    }
}

// Hex and binary print the width-exact bit pattern, so `-1i8` prints `ff`.

impl<W: Width> LowerHex for FixedInt<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(&self.raw, f)
    }
}

impl<W: Width> UpperHex for FixedInt<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        UpperHex::fmt(&self.raw, f)
    }
}

impl<W: Width> Binary for FixedInt<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Binary::fmt(&self.raw, f)
    }
}
