//! Mock chromosome segmentation.
//!
//! Produces a fixed-count list of placeholder segment records, each
//! referencing the full source image. No cropping or localization is
//! performed; the count comes from configuration, not from image
//! content. The simulated latency lives in the application shell; this
//! function is synchronous and cannot fail.

use crate::types::{AnalysisConfig, Segment, SegmentStatus};

/// Run the mock segmentation stage.
///
/// An empty image reference produces an empty result set. A non-empty
/// reference produces exactly `config.segment_count` records with ids
/// `1..=N`, every record pointing at the same source image, in
/// [`SegmentStatus::Segmented`] status.
#[must_use]
pub fn segment_image(image: &str, config: &AnalysisConfig) -> Vec<Segment> {
    if image.is_empty() {
        return Vec::new();
    }

    (1..=config.segment_count)
        .map(|id| Segment {
            id,
            image: image.to_owned(),
            status: SegmentStatus::Segmented,
        })
        .collect()
}
