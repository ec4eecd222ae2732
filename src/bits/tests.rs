use super::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn rng() -> StdRng {
    StdRng::from_seed([
        7, 6, 5, 4, 3, 2, 1, 0, 7, 6, 5, 4, 3, 2, 1, 0, 7, 6, 5, 4, 3, 2, 1, 0, 7, 6, 5, 4, 3, 2,
        1, 0,
    ])
}

#[test]
fn test_popcount_against_naive() {
    let mut rng = rng();
    for _ in 0..1000 {
        let v: u64 = rng.gen();
        let naive = (0..64).filter(|i| v & (1 << i) != 0).count() as u32;
        assert_eq!(popcount(v), naive);
        assert_eq!(popcount(v as i64), naive);

        let v = v as u32;
        let naive = (0..32).filter(|i| v & (1 << i) != 0).count() as u32;
        assert_eq!(popcount(v), naive);
        assert_eq!(popcount(v as i32), naive);
    }
}

#[test]
fn test_popcount_counts_sign_bit() {
    assert_eq!(popcount(-1i32), 32);
    assert_eq!(popcount(-1i64), 64);
    assert_eq!(popcount(i32::MIN), 1);
    assert_eq!(popcount(i64::MIN), 1);
}

#[test]
fn test_zero_counts_at_zero_return_width() {
    assert_eq!(count_leading_zeros(0u32), 32);
    assert_eq!(count_leading_zeros(0u64), 64);
    assert_eq!(count_leading_zeros(0i32), 32);
    assert_eq!(count_leading_zeros(0i64), 64);
    assert_eq!(count_trailing_zeros(0u32), 32);
    assert_eq!(count_trailing_zeros(0u64), 64);
    assert_eq!(count_trailing_zeros(0i32), 32);
    assert_eq!(count_trailing_zeros(0i64), 64);
}

#[test]
fn test_zero_counts_single_bits() {
    for i in 0..32 {
        assert_eq!(count_leading_zeros(1u32 << i), 31 - i);
        assert_eq!(count_trailing_zeros(1u32 << i), i);
    }
    for i in 0..64 {
        assert_eq!(count_leading_zeros(1u64 << i), 63 - i);
        assert_eq!(count_trailing_zeros(1u64 << i), i);
    }
}

#[test]
fn test_zero_counts_negative_inputs() {
    // the sign bit is the most significant bit of the pattern
    assert_eq!(count_leading_zeros(-1i32), 0);
    assert_eq!(count_leading_zeros(-1i64), 0);
    assert_eq!(count_trailing_zeros(i32::MIN), 31);
    assert_eq!(count_trailing_zeros(i64::MIN), 63);
}

#[test]
fn test_rotate_round_trip() {
    let mut rng = rng();
    for _ in 0..1000 {
        let v: u64 = rng.gen();
        for k in 0..128 {
            assert_eq!(rotate_left(rotate_right(v, k), k), v, "k = {}", k);
            assert_eq!(rotate_right(rotate_left(v, k), k), v, "k = {}", k);
        }

        let v = v as u32;
        for k in 0..64 {
            assert_eq!(rotate_left(rotate_right(v, k), k), v, "k = {}", k);
            assert_eq!(rotate_right(rotate_left(v, k), k), v, "k = {}", k);
        }
    }
}

#[test]
fn test_rotate_count_wraps_past_width() {
    // a count one past the width behaves like a count of one
    assert_eq!(rotate_left(0x0000_0001u32, 33), 0x0000_0002);
    assert_eq!(rotate_left(0x0000_0001u32, 32), 0x0000_0001);
    assert_eq!(rotate_right(0x0000_0001u32, 33), 0x8000_0000);
    assert_eq!(rotate_left(1u64, 65), 2);
    assert_eq!(rotate_left(1u64, 64), 1);
}

#[test]
fn test_rotate_moves_bits_circularly() {
    assert_eq!(rotate_left(0x8000_0000u32, 1), 0x0000_0001);
    assert_eq!(rotate_right(0x0000_0001u32, 1), 0x8000_0000);
    assert_eq!(rotate_left(0x0123_4567u32, 4), 0x1234_5670);
    assert_eq!(rotate_left(0xf123_4567u32, 4), 0x1234_567f);
}

#[test]
fn test_rotate_signed_preserves_pattern() {
    // the sign bit rotates like any other bit
    assert_eq!(rotate_left(i32::MIN, 1), 1);
    assert_eq!(rotate_right(1i32, 1), i32::MIN);
    assert_eq!(rotate_left(-1i64, 17), -1);

    let mut rng = rng();
    for _ in 0..100 {
        let v: i64 = rng.gen();
        let k = rng.gen_range(0..128);
        assert_eq!(
            rotate_left(v, k) as u64,
            rotate_left(v as u64, k),
            "signed and unsigned rotation diverged for {:#x}, k = {}",
            v,
            k
        );
    }
}
