//! Bridges between `FixedInt` and the Rust primitive integers.
//!
//! Each Rust integer maps onto the width class of the same size and
//! signedness. Conversions between a primitive and its own class are
//! lossless `From` impls; conversions to and from any other class go through
//! the truncating matrix.

use crate::primitives::fixed::FixedInt;
use crate::primitives::fixed::conv::matrix::convert_raw;
use crate::width::{self, Width, WidthClass};

mod sealed {
    pub trait Sealed {}
}

/// A Rust primitive integer with a matching width class.
pub trait Primitive: sealed::Sealed + Copy {
    /// Width marker of the same size and signedness.
    type Width: Width;

    /// Width class of the same size and signedness.
    const CLASS: WidthClass = <Self::Width as Width>::CLASS;

    /// Bit pattern of the value. Bits above the width may be set for
    /// negative values and are ignored by the matrix.
    fn to_raw(self) -> u128;

    /// Builds the primitive from the low bits of `raw`.
    fn from_raw(raw: u128) -> Self;
}

macro_rules! primitive_impl {
    ($t:ty, $w:ty) => {
        impl sealed::Sealed for $t {}

        impl Primitive for $t {
            type Width = $w;

            #[inline(always)]
            fn to_raw(self) -> u128 {
                self as u128
            }

            #[inline(always)]
            fn from_raw(raw: u128) -> Self {
                raw as $t
            }
        }

        impl From<$t> for FixedInt<$w> {
            fn from(value: $t) -> Self {
                Self::from_raw_bits(value as u128)
            }
        }

        impl From<FixedInt<$w>> for $t {
            fn from(value: FixedInt<$w>) -> Self {
                value.raw as $t
            }
        }
    };
}

primitive_impl!(i8, width::I8);
primitive_impl!(i16, width::I16);
primitive_impl!(i32, width::I32);
primitive_impl!(i64, width::I64);
primitive_impl!(i128, width::I128);

primitive_impl!(u8, width::U8);
primitive_impl!(u16, width::U16);
primitive_impl!(u32, width::U32);
primitive_impl!(u64, width::U64);
primitive_impl!(u128, width::U128);

impl<W: Width> FixedInt<W> {
    /// Builds a value from any Rust integer, truncating or extending per the
    /// conversion matrix.
    ///
    /// ```rust
    /// # use fixint::UInt8;
    /// assert_eq!(UInt8::from_primitive(0xFFFFu16), UInt8::MAX);
    /// assert_eq!(UInt8::from_primitive(-1i32), UInt8::MAX);
    /// ```
    pub fn from_primitive<P: Primitive>(value: P) -> Self {
        Self::from_raw_bits(convert_raw(value.to_raw(), P::CLASS, W::CLASS))
    }

    /// Converts into any Rust integer, truncating or extending per the
    /// conversion matrix.
    pub fn into_primitive<P: Primitive>(self) -> P {
        P::from_raw(convert_raw(self.raw, W::CLASS, P::CLASS))
    }
}
