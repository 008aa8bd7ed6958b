//! Integer-backed enums
//!
//! An enum here is a named set of values of one width class. Member values
//! are not required to be unique, which rules out plain Rust enums with
//! discriminants: each enum is instead a newtype over [`FixedInt`] with one
//! associated constant per member, plus an explicit member table built once
//! at definition time. Decoding a raw value back to a member scans that
//! table; no reflection is involved.
//!
//! Two members of the same enum are equal iff their underlying values are
//! equal, regardless of their names.
//!
//! ```rust
//! use fixint::enums::IntEnum;
//! use fixint::{UInt8, int_enum, width};
//!
//! int_enum! {
//!     pub enum Color: width::U8 {
//!         Red = 0,
//!         Green = 1,
//!         Blue = 2,
//!     }
//! }
//!
//! assert_eq!(Color::from_value(UInt8::from(2u8)), Some(Color::Blue));
//! assert_eq!(Color::Green.name(), "Green");
//! ```
//!
//! Bit-flag composition of members is not supported.

mod decoder;
mod member;

pub use decoder::{decode, decode_or_panic};
pub use member::Member;

use crate::error::{Error, Result};
use crate::primitives::{DynInt, FixedInt};
use crate::width::Width;

/// An enum backed by a fixed-width integer.
///
/// Usually implemented through [`int_enum!`](crate::int_enum).
pub trait IntEnum: Copy + Eq + 'static {
    /// Width of the underlying values.
    type Width: Width;

    /// Name of the enum, used in diagnostics.
    const NAME: &'static str;

    /// Members in declaration order.
    const MEMBERS: &'static [Member<Self::Width>];

    /// Wraps an underlying value without checking membership.
    ///
    /// Decoding only ever calls this with values taken from
    /// [`MEMBERS`](Self::MEMBERS).
    fn from_member_value(value: FixedInt<Self::Width>) -> Self;

    /// Underlying value.
    fn value(self) -> FixedInt<Self::Width>;

    /// Name of the first member declared with this value.
    fn name(self) -> &'static str {
        decode_or_panic(Self::MEMBERS, self.value()).name()
    }

    /// Decodes `probe` into a member, or `None` if it matches none.
    fn from_value<P: Width>(probe: FixedInt<P>) -> Option<Self> {
        decode(Self::MEMBERS, probe).map(|member| Self::from_member_value(member.value()))
    }

    /// Decodes `probe` into a member, reporting a miss as
    /// [`Error::UnknownMember`].
    fn try_from_value<P: Width>(probe: FixedInt<P>) -> Result<Self> {
        Self::from_value(probe).ok_or(Error::UnknownMember {
            enum_name: Self::NAME,
            value: DynInt::from(probe),
        })
    }

    /// Decodes `probe` into a member and halts on a miss.
    #[track_caller]
    fn from_value_or_panic<P: Width>(probe: FixedInt<P>) -> Self {
        Self::from_member_value(decode_or_panic(Self::MEMBERS, probe).value())
    }

    /// All members in declaration order, duplicates included.
    fn members() -> impl Iterator<Item = Self> {
        Self::MEMBERS
            .iter()
            .map(|member| Self::from_member_value(member.value()))
    }
}

/// Defines an integer-backed enum.
///
/// Expands to a newtype over `FixedInt<$width>` with one associated constant
/// per member and an [`IntEnum`] impl whose member table lists the members
/// in declaration order. Member values are `i128` constant expressions,
/// truncated into the width.
#[macro_export]
macro_rules! int_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $width:ty {
            $(
                $(#[$member_meta:meta])*
                $member:ident = $value:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash)]
        $vis struct $name($crate::FixedInt<$width>);

        #[allow(non_upper_case_globals)]
        impl $name {
            $(
                $(#[$member_meta])*
                pub const $member: Self = Self($crate::FixedInt::<$width>::from_i128($value));
            )+
        }

        impl $crate::enums::IntEnum for $name {
            type Width = $width;

            const NAME: &'static str = stringify!($name);

            const MEMBERS: &'static [$crate::enums::Member<$width>] = &[
                $(
                    $crate::enums::Member::new(
                        stringify!($member),
                        $crate::FixedInt::<$width>::from_i128($value),
                    ),
                )+
            ];

            fn from_member_value(value: $crate::FixedInt<$width>) -> Self {
                Self(value)
            }

            fn value(self) -> $crate::FixedInt<$width> {
                self.0
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                use $crate::enums::IntEnum;

                write!(f, "{}::{}", Self::NAME, self.name())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                use $crate::enums::IntEnum;

                f.write_str(self.name())
            }
        }
    };
}
