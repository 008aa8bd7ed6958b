//! Integer width classes
//!
//! A width class is the pair `(bits, signed)` that identifies one of the ten
//! primitive integer kinds of the runtime:
//!
//! | bits | signed | unsigned |
//! |------|--------|----------|
//! | 8    | `I8`   | `U8`     |
//! | 16   | `I16`  | `U16`    |
//! | 32   | `I32`  | `U32`    |
//! | 64   | `I64`  | `U64`    |
//! | 128  | `I128` | `U128`   |
//!
//! The set is closed. Each kind exists twice: as a runtime descriptor
//! ([`WidthClass`]) used by the conversion matrix and by [`crate::DynInt`],
//! and as a zero-sized marker type implementing [`Width`] that tags
//! [`crate::FixedInt`] at compile time.

use std::fmt::{Display, Formatter, Result};

/// Runtime descriptor of an integer kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WidthClass {
    bits: u32,
    signed: bool,
}

impl WidthClass {
    pub const I8: Self = Self::new(8, true);
    pub const I16: Self = Self::new(16, true);
    pub const I32: Self = Self::new(32, true);
    pub const I64: Self = Self::new(64, true);
    pub const I128: Self = Self::new(128, true);

    pub const U8: Self = Self::new(8, false);
    pub const U16: Self = Self::new(16, false);
    pub const U32: Self = Self::new(32, false);
    pub const U64: Self = Self::new(64, false);
    pub const U128: Self = Self::new(128, false);

    /// Every width class, signed kinds first, narrowest first.
    pub const ALL: [Self; 10] = [
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::I128,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::U128,
    ];

    const fn new(bits: u32, signed: bool) -> Self {
        Self { bits, signed }
    }

    /// Looks up the class for a bit count and signedness.
    ///
    /// Returns `None` for bit counts outside `{8, 16, 32, 64, 128}`.
    pub const fn lookup(bits: u32, signed: bool) -> Option<Self> {
        match bits {
            8 | 16 | 32 | 64 | 128 => Some(Self::new(bits, signed)),
            _ => None,
        }
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    #[inline]
    pub const fn bytes(self) -> usize {
        (self.bits / 8) as usize
    }

    #[inline]
    pub const fn is_signed(self) -> bool {
        self.signed
    }

    /// Mask selecting the low `bits` bits of a `u128`.
    #[inline]
    pub const fn mask(self) -> u128 {
        if self.bits == 128 {
            u128::MAX
        } else {
            (1u128 << self.bits) - 1
        }
    }

    /// The same bit width with the opposite signedness.
    pub const fn flip_sign(self) -> Self {
        Self::new(self.bits, !self.signed)
    }
}

impl Display for WidthClass {
    /// Formats the class the way the runtime spells its type names,
    /// e.g. `i32` or `u128`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let prefix = if self.signed { 'i' } else { 'u' };

        write!(f, "{}{}", prefix, self.bits)
    }
}

/// Compile-time width tag for [`crate::FixedInt`].
///
/// Implemented only by the ten marker types of this module.
pub trait Width: Copy + Clone + Default + Eq + std::hash::Hash + std::fmt::Debug + 'static {
    /// Runtime descriptor of this width.
    const CLASS: WidthClass;

    /// Number of storage bits.
    const BITS: u32 = Self::CLASS.bits();

    /// Whether values are interpreted as two's complement.
    const SIGNED: bool = Self::CLASS.is_signed();
}

/// Marker for signed widths. Negation is only offered on these.
pub trait SignedWidth: Width {}

macro_rules! width_marker {
    ($name:ident, $class:ident, signed) => {
        width_marker!($name, $class);

        impl SignedWidth for $name {}
    };
    ($name:ident, $class:ident) => {
        #[doc = concat!("Width marker for `", stringify!($class), "`.")]
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Width for $name {
            const CLASS: WidthClass = WidthClass::$class;
        }
    };
}

width_marker!(I8, I8, signed);
width_marker!(I16, I16, signed);
width_marker!(I32, I32, signed);
width_marker!(I64, I64, signed);
width_marker!(I128, I128, signed);

width_marker!(U8, U8);
width_marker!(U16, U16);
width_marker!(U32, U32);
width_marker!(U64, U64);
width_marker!(U128, U128);
