//! Arithmetic, bitwise and comparison operations for `FixedInt`
//!
//! Arithmetic always wraps modulo `2^W::BITS`. There is deliberately no
//! checked or saturating variant: `+`, `-` and `*` are aliases for the
//! wrapping forms.
//!
//! Arithmetic and comparisons accept an operand of any width. The operand is
//! first truncating-converted into the left-hand side's width, then the two
//! bit patterns are combined. Bitwise operators require both sides to share
//! the same width.
//!
//! Cross-width comparisons are lossy: a wide operand is truncated before it
//! is compared, so two numerically different wide values can compare equal
//! against the same narrow value. They are therefore exposed as the
//! `*_truncating` methods, while `PartialEq` and `Ord` only relate values of
//! the same width.

use std::cmp::Ordering;
use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Neg, Not, Sub};

use crate::primitives::fixed::FixedInt;
use crate::width::{SignedWidth, Width};

impl<W: Width> FixedInt<W> {
    /// Wrapping addition with an operand of any width.
    #[inline]
    pub fn wrapping_add<B: Width>(self, other: FixedInt<B>) -> Self {
        let other = Self::from_truncating(other);

        Self::from_raw_bits(self.raw.wrapping_add(other.raw))
    }

    /// Wrapping subtraction with an operand of any width.
    #[inline]
    pub fn wrapping_sub<B: Width>(self, other: FixedInt<B>) -> Self {
        let other = Self::from_truncating(other);

        Self::from_raw_bits(self.raw.wrapping_sub(other.raw))
    }

    /// Wrapping multiplication with an operand of any width.
    ///
    /// The low 128 bits of a product do not depend on signedness, so the
    /// unsigned product of the patterns is exact after masking.
    #[inline]
    pub fn wrapping_mul<B: Width>(self, other: FixedInt<B>) -> Self {
        let other = Self::from_truncating(other);

        Self::from_raw_bits(self.raw.wrapping_mul(other.raw))
    }

    /// Compares against an operand of any width after truncating it into
    /// `W`.
    pub fn cmp_truncating<B: Width>(self, other: FixedInt<B>) -> Ordering {
        self.cmp(&Self::from_truncating(other))
    }

    pub fn eq_truncating<B: Width>(self, other: FixedInt<B>) -> bool {
        self.cmp_truncating(other) == Ordering::Equal
    }

    pub fn ne_truncating<B: Width>(self, other: FixedInt<B>) -> bool {
        !self.eq_truncating(other)
    }

    pub fn lt_truncating<B: Width>(self, other: FixedInt<B>) -> bool {
        self.cmp_truncating(other) == Ordering::Less
    }

    pub fn le_truncating<B: Width>(self, other: FixedInt<B>) -> bool {
        self.cmp_truncating(other) != Ordering::Greater
    }

    pub fn gt_truncating<B: Width>(self, other: FixedInt<B>) -> bool {
        self.cmp_truncating(other) == Ordering::Greater
    }

    pub fn ge_truncating<B: Width>(self, other: FixedInt<B>) -> bool {
        self.cmp_truncating(other) != Ordering::Less
    }
}

impl<W: SignedWidth> FixedInt<W> {
    /// Two's-complement negation, `zero - self`. The most negative value
    /// negates to itself.
    #[inline]
    pub fn negate(self) -> Self {
        Self::ZERO.wrapping_sub(self)
    }
}

impl<W: Width> Ord for FixedInt<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        if W::SIGNED {
            self.sign_extended().cmp(&other.sign_extended())
        } else {
            self.raw.cmp(&other.raw)
        }
    }
}

impl<W: Width> PartialOrd for FixedInt<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: Width, B: Width> Add<FixedInt<B>> for FixedInt<A> {
    type Output = FixedInt<A>;

    fn add(self, rhs: FixedInt<B>) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

impl<A: Width, B: Width> Sub<FixedInt<B>> for FixedInt<A> {
    type Output = FixedInt<A>;

    fn sub(self, rhs: FixedInt<B>) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}

impl<A: Width, B: Width> Mul<FixedInt<B>> for FixedInt<A> {
    type Output = FixedInt<A>;

    fn mul(self, rhs: FixedInt<B>) -> Self::Output {
        self.wrapping_mul(rhs)
    }
}

impl<W: SignedWidth> Neg for FixedInt<W> {
    type Output = FixedInt<W>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<W: Width> BitAnd for FixedInt<W> {
    type Output = FixedInt<W>;

    fn bitand(self, rhs: FixedInt<W>) -> Self::Output {
        Self::from_raw_bits(self.raw & rhs.raw)
    }
}

impl<W: Width> BitOr for FixedInt<W> {
    type Output = FixedInt<W>;

    fn bitor(self, rhs: FixedInt<W>) -> Self::Output {
        Self::from_raw_bits(self.raw | rhs.raw)
    }
}

impl<W: Width> BitXor for FixedInt<W> {
    type Output = FixedInt<W>;

    fn bitxor(self, rhs: FixedInt<W>) -> Self::Output {
        Self::from_raw_bits(self.raw ^ rhs.raw)
    }
}

impl<W: Width> Not for FixedInt<W> {
    type Output = FixedInt<W>;

    fn not(self) -> Self::Output {
        Self::from_raw_bits(!self.raw)
    }
}
