//! Exhaustive check of all half precision bit patterns.

use fpprint::{DigitLayout, FloatBits};

// Exact value of a finite half as a single precision number.
fn half_to_f32(h: u16) -> f32 {
    let sign = if h & 0x8000 != 0 { -1.0 } else { 1.0 };
    let e = ((h >> 10) & 0x1F) as i32;
    let m = (h & 0x3FF) as f32;

    if e == 0 {
        sign * m * 2f32.powi(-24)
    } else {
        sign * (1024.0 + m) * 2f32.powi(e - 25)
    }
}

#[test]
fn half_classification() {
    for h in 0..=u16::MAX {
        let fb = FloatBits::decompose16(h);
        assert!(fb.is_valid());
        assert_eq!(fb.is_negative(), h & 0x8000 != 0);

        let kinds = [fb.is_zero(), fb.is_infinity(), fb.is_nan(), fb.is_normal(), fb.is_subnormal()];
        assert_eq!(kinds.iter().filter(|k| **k).count(), 1, "{:#06x}", h);

        // pure
        assert_eq!(fb, FloatBits::decompose16(h));

        let e = (h >> 10) & 0x1F;
        let m = h & 0x3FF;
        assert_eq!(fb.is_nan(), e == 0x1F && m != 0);
        assert_eq!(fb.is_infinity(), e == 0x1F && m == 0);
        assert_eq!(fb.is_subnormal(), e == 0 && m != 0);

        let l = DigitLayout::analyze(&fb, 25).unwrap();
        assert_eq!(l.is_nan(), fb.is_nan());
        assert_eq!(l.is_infinity(), fb.is_infinity());
    }
}

#[test]
fn half_digits() {
    for h in 0..=u16::MAX {
        let fb = FloatBits::decompose16(h);
        if fb.is_nan() || fb.is_infinity() {
            continue;
        }

        let f = half_to_f32(h);
        assert_eq!(f.to_bits() >> 31 == 1, fb.is_negative());

        // 24 fractional digits print every half exactly
        assert_eq!(
            fb.to_fixed(24).unwrap(),
            FloatBits::from(f).to_fixed(24).unwrap(),
            "{:#06x}",
            h
        );
        assert!(fb.exact_precision() <= 24);
    }
}
