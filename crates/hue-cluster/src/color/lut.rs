//! Gamma lookup table access functions
//!
//! Tables are generated at compile time by build.rs. 8-bit input takes the
//! exact 256-entry table; float input interpolates the 4096-entry tables.

include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Decode one 8-bit sRGB channel to linear light (exact, no interpolation).
#[inline]
pub fn srgb8_to_linear(value: u8) -> f32 {
    SRGB8_TO_LINEAR[value as usize]
}

/// Convert an sRGB value (0.0..=1.0) to linear RGB using LUT with linear interpolation.
///
/// # Panics (debug only)
/// Debug-asserts that the input is in the range 0.0..=1.0.
#[inline]
pub fn srgb_to_linear(srgb: f32) -> f32 {
    debug_assert!(
        (0.0..=1.0).contains(&srgb),
        "srgb_to_linear: input {srgb} out of range 0.0..=1.0"
    );
    interpolate(&SRGB_TO_LINEAR, srgb)
}

/// Convert a linear RGB value (0.0..=1.0) to sRGB using LUT with linear interpolation.
///
/// # Panics (debug only)
/// Debug-asserts that the input is in the range 0.0..=1.0.
#[inline]
pub fn linear_to_srgb(linear: f32) -> f32 {
    debug_assert!(
        (0.0..=1.0).contains(&linear),
        "linear_to_srgb: input {linear} out of range 0.0..=1.0"
    );
    interpolate(&LINEAR_TO_SRGB, linear)
}

#[inline]
fn interpolate(table: &[f32; 4096], value: f32) -> f32 {
    let scaled = value.clamp(0.0, 1.0) * 4095.0;
    let index = scaled as usize;

    if index >= 4095 {
        return table[4095];
    }

    let frac = scaled - index as f32;
    let a = table[index];
    let b = table[index + 1];
    a + (b - a) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb8_table_endpoints() {
        assert_eq!(srgb8_to_linear(0), 0.0);
        assert!((srgb8_to_linear(255) - 1.0).abs() < 1e-6);
        // 10/255 = 0.0392 sits on the linear segment
        assert!((srgb8_to_linear(10) - (10.0 / 255.0) / 12.92).abs() < 1e-7);
    }

    #[test]
    fn test_srgb8_table_matches_interpolated() {
        for i in 0..=255u8 {
            let exact = srgb8_to_linear(i);
            let interpolated = srgb_to_linear(i as f32 / 255.0);
            assert!(
                (exact - interpolated).abs() < 1e-4,
                "byte {i}: exact {exact}, interpolated {interpolated}"
            );
        }
    }

    #[test]
    fn test_boundaries() {
        assert!(srgb_to_linear(0.0).abs() < 1e-6);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!(linear_to_srgb(0.0).abs() < 1e-6);
        assert!((linear_to_srgb(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_monotonicity() {
        let mut prev = linear_to_srgb(0.0);
        for i in 1..=1000 {
            let curr = linear_to_srgb(i as f32 / 1000.0);
            assert!(curr >= prev, "linear_to_srgb not monotonic at {i}");
            prev = curr;
        }

        let mut prev = srgb8_to_linear(0);
        for i in 1..=255u8 {
            let curr = srgb8_to_linear(i);
            assert!(curr > prev, "srgb8_to_linear not strictly increasing at {i}");
            prev = curr;
        }
    }
}
