//! Sign-aware bit shifts for `FixedInt`
//!
//! The shift count may be an integer of any width. Its semantic value
//! decides the direction and distance:
//!
//! - a negative count shifts the other way by its magnitude,
//! - a count of `W::BITS` or more yields zero,
//! - otherwise the pattern is shifted and truncated to the width.
//!
//! Right shifts are arithmetic (sign filling) for signed widths and logical
//! for unsigned ones. The overshoot rule wins over sign filling: a negative
//! value shifted right by `W::BITS` or more is zero, not `-1`.

use std::ops::{Shl, Shr};

use crate::primitives::fixed::FixedInt;
use crate::width::Width;

/// Direction and magnitude of a shift count.
enum Shift {
    Left(u128),
    Right(u128),
}

impl Shift {
    fn left<C: Width>(count: FixedInt<C>) -> Self {
        if count.is_negative() {
            Shift::Right(count.sign_extended().unsigned_abs())
        } else {
            Shift::Left(count.raw)
        }
    }

    fn right<C: Width>(count: FixedInt<C>) -> Self {
        match Self::left(count) {
            Shift::Left(n) => Shift::Right(n),
            Shift::Right(n) => Shift::Left(n),
        }
    }
}

impl<W: Width> FixedInt<W> {
    /// Shifts left by `count`, or right by `|count|` when `count` is negative.
    pub fn shift_left<C: Width>(self, count: FixedInt<C>) -> Self {
        self.shift_by(Shift::left(count))
    }

    /// Shifts right by `count`, or left by `|count|` when `count` is negative.
    pub fn shift_right<C: Width>(self, count: FixedInt<C>) -> Self {
        self.shift_by(Shift::right(count))
    }

    fn shift_by(self, shift: Shift) -> Self {
        match shift {
            Shift::Left(n) if n < W::BITS as u128 => Self::from_raw_bits(self.raw << n),
            Shift::Right(n) if n < W::BITS as u128 => {
                if W::SIGNED {
                    Self::from_raw_bits((self.sign_extended() >> n) as u128)
                } else {
                    Self::from_raw_bits(self.raw >> n)
                }
            }
            _ => Self::ZERO,
        }
    }
}

/// Sign-aware left shift (`<<`) by a count of any width.
impl<W: Width, C: Width> Shl<FixedInt<C>> for FixedInt<W> {
    type Output = FixedInt<W>;

    fn shl(self, rhs: FixedInt<C>) -> Self::Output {
        self.shift_left(rhs)
    }
}

/// Sign-aware right shift (`>>`) by a count of any width.
impl<W: Width, C: Width> Shr<FixedInt<C>> for FixedInt<W> {
    type Output = FixedInt<W>;

    fn shr(self, rhs: FixedInt<C>) -> Self::Output {
        self.shift_right(rhs)
    }
}
