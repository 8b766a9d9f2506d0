//! karyo-analysis: Pure mock analysis core (sans-IO).
//!
//! Simulates a karyotype analysis workflow: segmentation of a
//! metaphase image into chromosome records, then per-record
//! classification with confidence scores and abnormality findings.
//! All values are mocked: the segment count is configuration, not
//! image content, and scores come from an injected [`rand::Rng`].
//!
//! This crate has **no I/O dependencies** -- it operates on opaque
//! image references and returns structured data. All browser
//! interaction (timers, Blob URLs, rendering) lives in `karyo-io` and
//! the application shell.

pub mod classify;
pub mod diagnostics;
pub mod history;
pub mod segment;
pub mod types;

pub use classify::{Classification, classify_segments};
pub use diagnostics::{RunTiming, StageTiming};
pub use history::{AnalysisRecord, RecordStatus, demo_records};
pub use segment::segment_image;
pub use types::{
    ABNORMALITY_FINDING, AnalysisConfig, AnalysisError, ChromosomeClass, ClassifiedSegment,
    Notification, Segment, SegmentStatus, Severity,
};

use rand::Rng;

/// Output of a full segment-then-classify run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRun {
    /// Segmentation stage output.
    pub segments: Vec<Segment>,
    /// Classification stage output, one record per segment.
    pub classified: Vec<ClassifiedSegment>,
    /// User-facing notifications accumulated across the stages.
    pub notifications: Vec<Notification>,
}

/// Run both mock stages back to back.
///
/// Interactive use drives the stages separately (they have distinct
/// simulated latencies and the classification step is user-gated);
/// this is the synchronous convenience for tests and non-interactive
/// callers.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidConfig`] when the configuration
/// fails validation.
pub fn analyze(
    image: &str,
    config: &AnalysisConfig,
    rng: &mut impl Rng,
) -> Result<AnalysisRun, AnalysisError> {
    config.validate()?;

    let segments = segment_image(image, config);
    let Classification {
        classified,
        notifications,
    } = classify_segments(&segments, config, rng);

    Ok(AnalysisRun {
        segments,
        classified,
        notifications,
    })
}
