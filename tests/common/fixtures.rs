//! Synthetic test images and masks.

use image::{GrayImage, Luma, Rgb, RgbImage};

pub mod colors {
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const BLACK: [u8; 3] = [0, 0, 0];
    /// Printed blue ink
    pub const INK_BLUE: [u8; 3] = [30, 60, 200];
    /// Printed red ink
    pub const INK_RED: [u8; 3] = [200, 40, 30];
    /// Faint yellow scanner fringe (HSV saturation 0.1)
    pub const FRINGE: [u8; 3] = [250, 250, 225];
}

/// 2x2 image: three red pixels, white at (1, 1)
pub fn red_and_white() -> RgbImage {
    let mut img = RgbImage::from_pixel(2, 2, Rgb(colors::RED));
    img.put_pixel(1, 1, Rgb(colors::WHITE));
    img
}

/// White page with a blue band on rows `0..h/3` and a red band on rows
/// `h/3..2h/3`
pub fn two_ink_page(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |_, y| {
        if y < height / 3 {
            Rgb(colors::INK_BLUE)
        } else if y < 2 * height / 3 {
            Rgb(colors::INK_RED)
        } else {
            Rgb(colors::WHITE)
        }
    })
}

/// Mask of a `width x height` image with pixels where `on(x, y)` set to 255
pub fn mask_from_fn(width: u32, height: u32, on: impl Fn(u32, u32) -> bool) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| Luma([if on(x, y) { 255 } else { 0 }]))
}

/// 10x1 mask with the pixels in `range` set
pub fn strip_mask(range: std::ops::Range<u32>) -> GrayImage {
    mask_from_fn(10, 1, |x, _| range.contains(&x))
}
