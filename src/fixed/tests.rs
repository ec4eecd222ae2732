use super::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type Fix15 = Fixed<i32, 15>;

#[test]
fn test_construction_scales_by_fraction_bits() {
    let one = Fix15::from_f32(1.0);
    assert_eq!(one.raw(), 1 << 15);

    let four = Fix15::from_int(4);
    assert_eq!(four.raw(), 4 << 15);

    let product = one * four;
    assert_eq!(product.raw(), 4 << 15);
    assert_eq!(product.to_f32(), 4.0);
}

#[test]
fn test_float_construction_truncates_toward_zero() {
    // 0.1 is not representable at 7 fractional bits; 0.1 * 128 = 12.8
    let v = FixedLow::from_f32(0.1);
    assert_eq!(v.raw(), 12);

    let v = FixedLow::from_f32(-0.1);
    assert_eq!(v.raw(), -12);

    let v = FixedLow::from_f64(2.999);
    assert_eq!(v.raw(), (2.999f64 * 128.0) as i32);
}

#[test]
fn test_round_trip_exact_for_representable_values() {
    // multiples of 2^-7 are exact in a 24.7 format
    for i in -1000..=1000 {
        let value = i as f32 / 128.0;
        assert_eq!(FixedLow::from_f32(value).to_f32(), value, "value {}", value);
    }

    // multiples of 2^-16 are exact in the unsigned 16.16 format
    for i in 0..=1000 {
        let value = i as f64 / 65536.0;
        assert_eq!(FixedU16_16::from_f64(value).to_f64(), value);
    }
}

#[test]
fn test_add_sub_identity() {
    let mut rng = StdRng::from_seed([11; 32]);
    for _ in 0..1000 {
        let a = Fix15::from_raw(rng.gen_range(-1 << 30..1 << 30));
        let b = Fix15::from_raw(rng.gen_range(-1 << 30..1 << 30));
        assert_eq!((a + b) - b, a);
        assert_eq!((a - b) + b, a);
    }
}

#[test]
fn test_mul_div_identity_within_one_lsb() {
    let mut rng = StdRng::from_seed([13; 32]);
    for _ in 0..1000 {
        // keep the raw product within the 32-bit intermediate
        let a = Fix15::from_raw(rng.gen_range(-1 << 15..1 << 15));
        let b = Fix15::from_raw(rng.gen_range(1 << 10..1 << 15));

        let round_trip = (a * b) / b;
        let error = (round_trip - a).raw().abs();
        assert!(
            error <= (1 << 15) / b.raw() + 2,
            "(a * b) / b drifted by {} raw units for a = {:?}, b = {:?}",
            error,
            a,
            b
        );
    }
}

#[test]
fn test_mul_rescales() {
    let a = FixedLow::from_f32(2.5);
    let b = FixedLow::from_f32(4.0);
    assert_eq!((a * b).to_f32(), 10.0);

    let a = FixedHigh::from_f32(0.5);
    let b = FixedHigh::from_f32(0.25);
    assert_eq!((a * b).to_f32(), 0.125);
}

#[test]
fn test_div_preserves_fractional_precision() {
    let a = Fix15::from_int(1);
    let b = Fix15::from_int(2);
    assert_eq!((a / b).to_f32(), 0.5);

    let a = Fix15::from_int(7);
    let b = Fix15::from_int(8);
    assert_eq!((a / b).to_f32(), 0.875);
}

#[test]
fn test_mul_overflow_wraps() {
    // 2^10 * 2^10 needs 20 integer bits plus 15 fractional, past 32 bits;
    // the intermediate wraps silently by contract
    let big = Fix15::from_int(1 << 10);
    let wrapped = big * big;
    let expected = ((1i32 << 25).wrapping_mul(1 << 25)) >> 15;
    assert_eq!(wrapped.raw(), expected);
}

#[test]
fn test_rem_keeps_scale() {
    let a = FixedLow::from_f32(5.5);
    let b = FixedLow::from_f32(2.0);
    assert_eq!((a % b).to_f32(), 1.5);
}

#[test]
fn test_default_is_zero_through_validated_construction() {
    // Default routes through from_raw, the same validated path as every
    // other constructor, and yields the zero value.
    assert_eq!(Fix15::default().raw(), 0);
    assert_eq!(Fix15::default(), Fix15::from_int(0));
    assert_eq!(FixedU16_16::default().raw(), 0);
    assert_eq!(FixedWide::default().raw(), 0);
}

#[test]
#[should_panic(expected = "divide by zero")]
fn test_div_by_zero_inherits_integer_fault() {
    let a = Fix15::from_int(1);
    let zero = Fix15::default();
    let _ = a / zero;
}

#[test]
fn test_bitwise_operates_on_raw_field() {
    let a = Fix15::from_raw(0b1100);
    let b = Fix15::from_raw(0b1010);
    assert_eq!((a & b).raw(), 0b1000);
    assert_eq!((a | b).raw(), 0b1110);
    assert_eq!((a ^ b).raw(), 0b0110);
    assert_eq!((!a).raw(), !0b1100);
}

#[test]
fn test_shift_moves_fractional_bits_too() {
    // shifting left by one doubles the value, fractional bits included
    let v = FixedLow::from_f32(1.5);
    assert_eq!((v << 1).to_f32(), 3.0);
    assert_eq!((v >> 1).to_f32(), 0.75);

    // shifting right past the fractional bits discards precision
    let v = FixedLow::from_f32(0.5);
    assert_eq!((v >> 7).raw(), 0);
}

#[test]
fn test_assign_operators() {
    let mut v = Fix15::from_int(10);
    v += Fix15::from_int(5);
    assert_eq!(v.to_int(), 15);
    v -= Fix15::from_int(3);
    assert_eq!(v.to_int(), 12);
    v *= Fix15::from_int(2);
    assert_eq!(v.to_int(), 24);
    v /= Fix15::from_int(4);
    assert_eq!(v.to_int(), 6);
    v <<= 1;
    assert_eq!(v.to_int(), 12);
    v >>= 2;
    assert_eq!(v.to_int(), 3);
}

#[test]
fn test_comparisons_follow_value_order() {
    assert!(Fix15::from_f32(1.5) < Fix15::from_f32(2.0));
    assert!(Fix15::from_f32(-2.0) < Fix15::from_f32(-1.5));
    assert!(Fix15::from_int(3) > Fix15::from_f32(2.999));
    assert_eq!(Fix15::from_f32(0.5), Fix15::from_raw(1 << 14));
}

#[test]
fn test_neg_for_signed_kinds() {
    let v = Fix15::from_f32(2.5);
    assert_eq!((-v).to_f32(), -2.5);
    assert_eq!((-(-v)), v);
}

#[test]
fn test_to_int_truncates_toward_zero() {
    assert_eq!(FixedLow::from_f32(2.75).to_int(), 2);
    assert_eq!(FixedLow::from_f32(-2.75).to_int(), -2);
    assert_eq!(FixedLow::from_f32(-0.5).to_int(), 0);
    assert_eq!(FixedU16_16::from_f32(3.9).to_int(), 3);
}

#[test]
fn test_rcp() {
    let v = Fix15::from_int(4);
    assert_eq!(rcp(v).to_f32(), 0.25);

    let v = Fix15::from_f32(0.5);
    assert_eq!(rcp(v).to_f32(), 2.0);

    // zero input returns the maximum raw value instead of faulting
    assert_eq!(rcp(Fix15::default()).raw(), i32::MAX);
    assert_eq!(rcp(FixedU16_16::default()).raw(), u32::MAX);
}

#[test]
fn test_signbit() {
    assert!(signbit(Fix15::from_f32(-0.25)));
    assert!(!signbit(Fix15::from_f32(0.25)));
    assert!(!signbit(Fix15::default()));
    // for unsigned kinds the top raw bit reads as the sign bit
    assert!(signbit(FixedU16_16::from_raw(1 << 31)));
}

#[test]
fn test_named_precisions() {
    // 24.7 low precision: steps of 1/128
    assert_eq!(FixedLow::from_f32(0.0078125).raw(), 1);
    // 8.23 high precision: steps of 1/2^23
    assert_eq!(FixedHigh::from_f64(1.0 / 8388608.0).raw(), 1);
    // unsigned 16.16
    assert_eq!(FixedU16_16::from_f32(1.0).raw(), 1 << 16);
    // wide 32.31
    assert_eq!(FixedWide::from_f64(1.0).raw(), 1i64 << 31);
    assert_eq!(FixedWide::from_int(100_000).to_f64(), 100_000.0);
}

#[test]
fn test_wide_precision_survives_small_steps() {
    let step = FixedWide::from_raw(1);
    let mut acc = FixedWide::default();
    for _ in 0..1_000_000 {
        acc += step;
    }
    assert_eq!(acc.raw(), 1_000_000);
    assert_eq!(acc.to_f64(), 1_000_000.0 / (1u64 << 31) as f64);
}

#[test]
fn test_display_and_debug() {
    assert_eq!(format!("{}", Fix15::from_f32(1.5)), "1.5");
    let s = format!("{:?}", Fix15::from_int(2));
    assert!(s.contains("65536"), "debug output was {}", s);
}
