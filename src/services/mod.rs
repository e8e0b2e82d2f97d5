pub mod decomposer;
pub mod materialize;
pub mod quality;

pub use decomposer::DocColorDecomposer;
pub use quality::{iou, match_masks, panoptic_quality, MatchSummary};
