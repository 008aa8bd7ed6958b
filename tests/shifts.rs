use fixint::{Int8, Int16, Int32, Int64, Int128, UInt8, UInt16, UInt32, UInt64, UInt128};

#[test]
fn shift_left_basic_and_truncating() {
    let one = UInt8::ONE;

    assert_eq!(one << UInt8::from(3u8), UInt8::from(8u8));
    assert_eq!(UInt8::from(0b1100_0001u8) << Int32::from(2i32), UInt8::from(0b0000_0100u8));
    assert_eq!(Int8::ONE << UInt8::from(7u8), Int8::MIN);
    assert_eq!(UInt128::ONE << UInt8::from(127u8), UInt128::from(1u128 << 127));
}

#[test]
fn shift_right_is_arithmetic_for_signed() {
    assert_eq!(Int8::from(-8i8) >> UInt8::from(1u8), Int8::from(-4i8));
    assert_eq!(Int8::from(-1i8) >> UInt8::from(7u8), Int8::from(-1i8));
    assert_eq!(Int32::from(i32::MIN) >> UInt8::from(31u8), Int32::from(-1i32));
    assert_eq!(Int128::MIN >> UInt8::from(127u8), Int128::from(-1i128));
}

#[test]
fn shift_right_is_logical_for_unsigned() {
    assert_eq!(UInt8::from(0x80u8) >> UInt8::from(7u8), UInt8::ONE);
    assert_eq!(UInt16::MAX >> UInt8::from(8u8), UInt16::from(0xFFu16));
}

#[test]
fn shift_by_zero_is_identity() {
    let v = Int16::from(-1234i16);

    assert_eq!(v << UInt8::ZERO, v);
    assert_eq!(v >> Int64::ZERO, v);
}

#[test]
fn shift_out_of_range_returns_zero() {
    assert_eq!(UInt8::MAX << UInt8::from(8u8), UInt8::ZERO);
    assert_eq!(UInt8::MAX >> UInt8::from(8u8), UInt8::ZERO);
    assert_eq!(UInt32::MAX << UInt64::from(1000u64), UInt32::ZERO);
    assert_eq!(UInt128::MAX << UInt8::from(128u8), UInt128::ZERO);
}

#[test]
fn shift_right_overshoot_is_zero_even_when_negative() {
    assert_eq!(Int8::from(-1i8) >> UInt8::from(8u8), Int8::ZERO);
    assert_eq!(Int32::from(-5i32) >> Int32::from(32i32), Int32::ZERO);
    assert_eq!(Int128::MIN >> UInt16::from(128u16), Int128::ZERO);
}

#[test]
fn shift_negative_count_reverses_direction() {
    let v = Int16::from(-64i16);

    assert_eq!(v << Int8::from(-3i8), v >> Int8::from(3i8));
    assert_eq!(v >> Int8::from(-3i8), v << Int8::from(3i8));
    assert_eq!(v << Int8::from(-3i8), Int16::from(-8i16));
    assert_eq!(UInt8::from(0x10u8) >> Int32::from(-2i32), UInt8::from(0x40u8));
}

#[test]
fn shift_negative_count_beyond_width_returns_zero() {
    assert_eq!(Int8::from(-1i8) << Int8::from(-8i8), Int8::ZERO);
    assert_eq!(UInt8::ONE >> Int16::from(-9i16), UInt8::ZERO);
    assert_eq!(Int64::from(-1i64) << Int128::MIN, Int64::ZERO);
    assert_eq!(Int64::from(-1i64) >> Int128::MIN, Int64::ZERO);
}

#[test]
fn shift_count_is_read_by_its_own_width() {
    // 0xFF is 255 as a UInt8 count but -1 as an Int8 count.
    let v = UInt16::from(0x0100u16);

    assert_eq!(v << UInt8::from(0xFFu8), UInt16::ZERO);
    assert_eq!(v << Int8::from(-1i8), UInt16::from(0x0080u16));
}

#[test]
fn shift_methods_match_operators() {
    let v = Int32::from(0x1234i32);
    let n = UInt8::from(4u8);

    assert_eq!(v.shift_left(n), v << n);
    assert_eq!(v.shift_right(n), v >> n);
}
