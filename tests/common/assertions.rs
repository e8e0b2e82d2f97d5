//! Assertion helpers for tests.

use image::{GrayImage, RgbImage};
use pretty_assertions::assert_eq;

/// Assert masks are pairwise disjoint and cover every pixel
pub fn assert_partition(masks: &[GrayImage], width: u32, height: u32) {
    assert!(!masks.is_empty(), "Expected at least one mask");
    for mask in masks {
        assert_eq!(mask.dimensions(), (width, height));
    }

    for y in 0..height {
        for x in 0..width {
            let on = masks.iter().filter(|m| m.get_pixel(x, y)[0] != 0).count();
            assert_eq!(on, 1, "Pixel ({x}, {y}) is set in {on} masks");
        }
    }
}

/// Assert every mask pixel is 0 or 255
pub fn assert_binary(mask: &GrayImage) {
    assert!(
        mask.pixels().all(|p| p[0] == 0 || p[0] == 255),
        "Mask contains values other than 0 and 255"
    );
}

/// Number of set pixels in a mask
pub fn mask_area(mask: &GrayImage) -> usize {
    mask.pixels().filter(|p| p[0] != 0).count()
}

/// Assert a layer shows the source where `mask` is set and white elsewhere
pub fn assert_layer_matches(layer: &RgbImage, mask: &GrayImage, source: &RgbImage) {
    for (x, y, pixel) in layer.enumerate_pixels() {
        let expected = if mask.get_pixel(x, y)[0] != 0 {
            source.get_pixel(x, y).0
        } else {
            [255, 255, 255]
        };
        assert_eq!(pixel.0, expected, "Layer pixel ({x}, {y})");
    }
}
