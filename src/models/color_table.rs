use hue_cluster::PackedRgb;
use rayon::prelude::*;
use std::collections::HashMap;

/// One distinct color and how many pixels carry it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorEntry {
    pub color: PackedRgb,
    pub count: u64,
}

impl ColorEntry {
    pub fn bytes(&self) -> [u8; 3] {
        self.color.to_bytes()
    }
}

/// Distinct colors of an image with their pixel counts.
///
/// Entries are kept in ascending packed-key order so every consumer sees the
/// same sequence regardless of how the parallel count was split.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorTable {
    entries: Vec<ColorEntry>,
    index: HashMap<PackedRgb, usize>,
    total: u64,
}

impl ColorTable {
    /// Count colors row by row in parallel. Partial counts are summed when
    /// merged.
    pub fn from_pixels(pixels: &[[u8; 3]], row_len: usize) -> Self {
        let counts = pixels
            .par_chunks(row_len.max(1))
            .fold(HashMap::new, |mut counts: HashMap<PackedRgb, u64>, row| {
                for &rgb in row {
                    *counts.entry(PackedRgb::from_bytes(rgb)).or_insert(0) += 1;
                }
                counts
            })
            .reduce(HashMap::new, |mut merged, partial| {
                for (color, count) in partial {
                    *merged.entry(color).or_insert(0) += count;
                }
                merged
            });

        let mut entries: Vec<ColorEntry> = counts
            .into_iter()
            .map(|(color, count)| ColorEntry { color, count })
            .collect();
        entries.sort_unstable_by_key(|e| e.color);

        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.color, i))
            .collect();
        let total = entries.iter().map(|e| e.count).sum();

        Self {
            entries,
            index,
            total,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, equal to the pixel count of the source
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    /// Position of a color in [`entries`](Self::entries)
    pub fn position(&self, rgb: [u8; 3]) -> Option<usize> {
        self.index.get(&PackedRgb::from_bytes(rgb)).copied()
    }

    pub fn count_of(&self, rgb: [u8; 3]) -> u64 {
        self.position(rgb).map_or(0, |i| self.entries[i].count)
    }

    /// `(color, count)` pairs in table order
    pub fn color_counts(&self) -> impl Iterator<Item = ([u8; 3], u64)> + '_ {
        self.entries.iter().map(|e| (e.bytes(), e.count))
    }

    /// Up to `limit` entries by descending count, ties by ascending key
    pub fn most_frequent(&self, limit: usize) -> Vec<ColorEntry> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then(a.color.cmp(&b.color)));
        ranked.truncate(limit);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 3] = [255, 0, 0];
    const WHITE: [u8; 3] = [255, 255, 255];
    const BLUE: [u8; 3] = [0, 0, 255];

    #[test]
    fn test_counts_sum_to_pixel_count() {
        let pixels = vec![RED, RED, WHITE, RED, BLUE, BLUE];
        let table = ColorTable::from_pixels(&pixels, 2);

        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 6);
        assert_eq!(table.count_of(RED), 3);
        assert_eq!(table.count_of(BLUE), 2);
        assert_eq!(table.count_of(WHITE), 1);
        assert_eq!(table.count_of([1, 2, 3]), 0);
    }

    #[test]
    fn test_row_split_does_not_change_counts() {
        let pixels: Vec<[u8; 3]> = (0..1000u32)
            .map(|i| [(i % 7) as u8, (i % 3) as u8, 9])
            .collect();

        let by_rows = ColorTable::from_pixels(&pixels, 10);
        let single = ColorTable::from_pixels(&pixels, pixels.len());
        assert_eq!(by_rows, single);
        assert_eq!(by_rows.len(), 21);
    }

    #[test]
    fn test_entries_sorted_by_key() {
        let table = ColorTable::from_pixels(&[WHITE, BLUE, RED], 3);
        let keys: Vec<u32> = table.entries().iter().map(|e| e.color.value()).collect();
        assert_eq!(keys, vec![0x0000FF, 0xFF0000, 0xFFFFFF]);
        assert_eq!(table.position(RED), Some(1));
    }

    #[test]
    fn test_most_frequent_ties_by_key() {
        let table = ColorTable::from_pixels(&[WHITE, BLUE, RED, RED], 4);
        let top: Vec<[u8; 3]> = table.most_frequent(2).iter().map(|e| e.bytes()).collect();
        assert_eq!(top, vec![RED, BLUE]);
    }

    #[test]
    fn test_empty_input() {
        let table = ColorTable::from_pixels(&[], 0);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }
}
