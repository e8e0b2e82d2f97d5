//! Per-pixel cluster labels, binary masks and color layers.

use crate::models::ColorTable;
use hue_cluster::{project, ClusterMap, LinearRgb};
use image::{GrayImage, Luma, Rgb, RgbImage};
use rayon::prelude::*;

pub const MASK_ON: u8 = 255;
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Cluster id of every pixel, decided on its working color.
///
/// `table` must be built from `working`, and `hues` must be aligned with
/// `table.entries()`.
pub fn pixel_labels(
    working: &[[u8; 3]],
    table: &ColorTable,
    hues: &[usize],
    map: &ClusterMap,
) -> Vec<usize> {
    debug_assert_eq!(hues.len(), table.len(), "hues not aligned with color table");
    working
        .par_iter()
        .map(|&rgb| {
            let position = table.position(rgb);
            debug_assert!(position.is_some(), "color {rgb:?} missing from table");
            let hue = match position {
                Some(i) => hues[i],
                None => project(LinearRgb::from_bytes(rgb)).hue(),
            };
            map.cluster_of(hue)
        })
        .collect()
}

/// One 0/255 mask per cluster. Every pixel is on in exactly one mask.
pub fn build_masks(labels: &[usize], clusters: usize, width: u32, height: u32) -> Vec<GrayImage> {
    let mut masks = vec![GrayImage::new(width, height); clusters];
    let coords = (0..height).flat_map(|y| (0..width).map(move |x| (x, y)));
    for ((x, y), &label) in coords.zip(labels) {
        masks[label].put_pixel(x, y, Luma([MASK_ON]));
    }
    masks
}

/// One layer per cluster holding the source colors of its pixels on white.
pub fn build_layers(labels: &[usize], clusters: usize, source: &RgbImage) -> Vec<RgbImage> {
    let (width, height) = source.dimensions();
    let mut layers = vec![RgbImage::from_pixel(width, height, BACKGROUND); clusters];
    for ((x, y, pixel), &label) in source.enumerate_pixels().zip(labels) {
        layers[label].put_pixel(x, y, *pixel);
    }
    layers
}

/// Flatten an image into `[r, g, b]` triples in row-major order.
pub fn pixel_triples(image: &RgbImage) -> Vec<[u8; 3]> {
    image.pixels().map(|p| p.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> RgbImage {
        let mut img = RgbImage::from_pixel(2, 2, Rgb([255, 0, 0]));
        img.put_pixel(1, 1, Rgb([255, 255, 255]));
        img
    }

    #[test]
    fn test_masks_partition_pixels() {
        let labels = vec![0, 1, 1, 0, 2, 1];
        let masks = build_masks(&labels, 3, 3, 2);

        assert_eq!(masks.len(), 3);
        for i in 0..6u32 {
            let (x, y) = (i % 3, i / 3);
            let on: Vec<usize> = (0..3).filter(|&k| masks[k].get_pixel(x, y)[0] == MASK_ON).collect();
            assert_eq!(on, vec![labels[i as usize]]);
        }
    }

    #[test]
    fn test_layers_copy_source_on_white() {
        let source = two_by_two();
        let labels = vec![0, 0, 0, 1];
        let layers = build_layers(&labels, 2, &source);

        assert_eq!(layers[0].get_pixel(0, 0), &Rgb([255, 0, 0]));
        assert_eq!(layers[0].get_pixel(1, 1), &BACKGROUND);
        assert_eq!(layers[1].get_pixel(0, 0), &BACKGROUND);
        assert_eq!(layers[1].get_pixel(1, 1), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_pixel_labels_follow_hue_map() {
        let pixels = pixel_triples(&two_by_two());
        let table = ColorTable::from_pixels(&pixels, 2);
        let hues: Vec<usize> = table
            .color_counts()
            .map(|(rgb, _)| project(LinearRgb::from_bytes(rgb)).hue())
            .collect();
        let map = ClusterMap::assign(&[0, 150]).unwrap();

        assert_eq!(pixel_labels(&pixels, &table, &hues, &map), vec![1, 1, 1, 0]);
    }

    #[test]
    fn test_masks_follow_row_major_order() {
        // 2 wide, 3 tall: the pixel at flat index 3 is (1, 1)
        let labels = vec![0, 0, 0, 1, 0, 0];
        let masks = build_masks(&labels, 2, 2, 3);

        assert_eq!(masks[1].get_pixel(1, 1)[0], MASK_ON);
        assert_eq!(masks[1].pixels().filter(|p| p[0] == MASK_ON).count(), 1);
        assert_eq!(masks[0].get_pixel(1, 1)[0], 0);
        assert_eq!(masks[0].get_pixel(0, 2)[0], MASK_ON);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "missing from table")]
    fn test_color_missing_from_table_is_caught() {
        let table = ColorTable::from_pixels(&[[255, 0, 0]], 1);
        let map = ClusterMap::assign(&[30, 150, 270]).unwrap();
        pixel_labels(&[[0, 0, 255]], &table, &[150], &map);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not aligned")]
    fn test_misaligned_hues_are_caught() {
        let table = ColorTable::from_pixels(&[[255, 0, 0], [0, 0, 255]], 2);
        let map = ClusterMap::assign(&[150]).unwrap();
        pixel_labels(&[[255, 0, 0]], &table, &[150], &map);
    }
}
