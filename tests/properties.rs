//! Property tests for the wrapping, shifting and conversion rules.

use fixint::{Int8, Int16, Int32, Int64, UInt8, UInt16, UInt32, UInt64, width};
use proptest::prelude::*;

proptest! {
    #[test]
    fn wrapping_arithmetic_is_modular(a: u16, b: u16) {
        let (x, y) = (UInt16::from(a), UInt16::from(b));

        prop_assert_eq!((x + y).raw_bits(), (a as u128 + b as u128) % (1 << 16));
        prop_assert_eq!((x - y).raw_bits(), (a as u128 + (1 << 16) - b as u128) % (1 << 16));
        prop_assert_eq!((x * y).raw_bits(), (a as u128 * b as u128) % (1 << 16));
    }

    #[test]
    fn wrapping_arithmetic_matches_std(a: i32, b: i32) {
        let (x, y) = (Int32::from(a), Int32::from(b));

        prop_assert_eq!(i32::from(x + y), a.wrapping_add(b));
        prop_assert_eq!(i32::from(x - y), a.wrapping_sub(b));
        prop_assert_eq!(i32::from(x * y), a.wrapping_mul(b));
    }

    #[test]
    fn shift_overshoot_is_zero(a: i64, extra in 0u32..1000) {
        let count = UInt32::from(64 + extra);
        let v = Int64::from(a);

        prop_assert_eq!(v << count, Int64::ZERO);
        prop_assert_eq!(v >> count, Int64::ZERO);
    }

    #[test]
    fn shift_negative_count_mirrors(a: i16, n in 0i32..40) {
        let v = Int16::from(a);
        let forward = Int32::from(n);
        let backward = Int32::from(-n);

        prop_assert_eq!(v << backward, v >> forward);
        prop_assert_eq!(v >> backward, v << forward);
    }

    #[test]
    fn shifts_in_range_match_std(a: u32, signed: i32, n in 0u32..32) {
        let count = UInt8::from(n as u8);

        prop_assert_eq!(u32::from(UInt32::from(a) << count), a << n);
        prop_assert_eq!(u32::from(UInt32::from(a) >> count), a >> n);
        prop_assert_eq!(i32::from(Int32::from(signed) >> count), signed >> n);
    }

    #[test]
    fn widening_round_trip_restores_bits(a: u8, b: i8) {
        let wide = UInt64::from_truncating(UInt8::from(a));
        prop_assert_eq!(UInt8::from_truncating(wide), UInt8::from(a));

        let wide = Int64::from_truncating(Int8::from(b));
        prop_assert_eq!(Int8::from_truncating(wide), Int8::from(b));
        prop_assert_eq!(i64::from(wide), b as i64);
    }

    #[test]
    fn conversion_matches_std_casts(a: i64) {
        let v = Int64::from(a);

        prop_assert_eq!(u8::from(v.cast::<width::U8>()), a as u8);
        prop_assert_eq!(i16::from(v.cast::<width::I16>()), a as i16);
        prop_assert_eq!(u128::from(v.cast::<width::U128>()), a as u128);
    }

    #[test]
    fn abs_is_idempotent(a in (i32::MIN + 1)..=i32::MAX) {
        let v = Int32::from(a);

        prop_assert_eq!(v.abs().abs(), v.abs());
        prop_assert!(v.abs() >= Int32::ZERO);
        prop_assert_eq!(i32::from(v.abs()), a.abs());
    }

    #[test]
    fn cross_width_equality_truncates_first(a: u32, b: u8) {
        let narrow = UInt8::from(b);
        let wide = UInt32::from(a);

        prop_assert_eq!(narrow.eq_truncating(wide), (a as u8) == b);
        prop_assert_eq!(narrow.lt_truncating(wide), b < (a as u8));
    }
}
