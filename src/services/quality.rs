//! Panoptic-quality scoring of predicted masks against ground truth.
//!
//! A mask pixel is foreground when its value is non-zero.

use image::GrayImage;

/// Minimum IoU for a predicted/truth pair to count as a match
pub const MATCH_THRESHOLD: f64 = 0.5;

/// Intersection over union of two same-sized masks; 0 when both are empty.
pub fn iou(a: &GrayImage, b: &GrayImage) -> f64 {
    let (mut intersection, mut union) = (0u64, 0u64);
    for (pa, pb) in a.as_raw().iter().zip(b.as_raw()) {
        let (fa, fb) = (*pa != 0, *pb != 0);
        intersection += u64::from(fa && fb);
        union += u64::from(fa || fb);
    }

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Greedy matching summary behind a quality score
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSummary {
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub iou_sum: f64,
}

impl MatchSummary {
    /// `iou_sum / (TP + (FP + FN) / 2)`, `None` when nothing was compared
    pub fn score(&self) -> Option<f64> {
        let denominator = self.true_positives as f64
            + 0.5 * (self.false_positives + self.false_negatives) as f64;
        (denominator > 0.0).then(|| self.iou_sum / denominator)
    }
}

/// Match predicted masks to truth masks in predicted order.
///
/// Each predicted mask takes the unconsumed truth mask with the highest IoU
/// (first index on ties). The pair counts when that IoU reaches
/// [`MATCH_THRESHOLD`].
pub fn match_masks(predicted: &[GrayImage], truth: &[GrayImage]) -> MatchSummary {
    let mut consumed = vec![false; truth.len()];
    let mut summary = MatchSummary {
        true_positives: 0,
        false_positives: 0,
        false_negatives: 0,
        iou_sum: 0.0,
    };

    for mask in predicted {
        let mut best: Option<(usize, f64)> = None;
        for (j, candidate) in truth.iter().enumerate() {
            if consumed[j] {
                continue;
            }
            let score = iou(mask, candidate);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((j, score));
            }
        }

        match best {
            Some((j, score)) if score >= MATCH_THRESHOLD => {
                consumed[j] = true;
                summary.true_positives += 1;
                summary.iou_sum += score;
            }
            _ => summary.false_positives += 1,
        }
    }

    summary.false_negatives = consumed.iter().filter(|&&c| !c).count();
    summary
}

/// Panoptic quality of `predicted` against `truth`.
///
/// Returns `None` only when both sets are empty.
pub fn panoptic_quality(predicted: &[GrayImage], truth: &[GrayImage]) -> Option<f64> {
    match_masks(predicted, truth).score()
}
