//! JSON report serializer.
//!
//! Machine-readable rendering of a completed classification set, for
//! downstream tooling that wants structure instead of the plain-text
//! report.

use karyo_analysis::ClassifiedSegment;
use serde::{Deserialize, Serialize};

use crate::text::{ReportMetadata, karyotype_summary};

/// Errors that can occur while serializing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// JSON serialization failed.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// The machine-readable report document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Analysis identifier, when provided.
    pub analysis_id: Option<String>,
    /// Patient identifier, when provided.
    pub patient_id: Option<String>,
    /// Report date, when provided.
    pub date: Option<String>,
    /// Karyotype designation, e.g. `46,XY`.
    pub karyotype: String,
    /// Number of segments analyzed.
    pub segment_count: usize,
    /// Number of segments with findings.
    pub abnormal_count: usize,
    /// Per-segment results.
    pub segments: Vec<ReportSegment>,
}

/// One classified segment as it appears in the JSON report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSegment {
    /// 1-based segment number.
    pub id: u32,
    /// Assigned chromosome class label (`"1"`..`"22"`, `"X"`, `"Y"`).
    pub class: String,
    /// Confidence score in `[0, 1]`.
    pub confidence: f64,
    /// Findings; empty when unremarkable.
    pub abnormalities: Vec<String>,
}

impl ReportDocument {
    /// Build the document from a classification set and metadata.
    #[must_use]
    pub fn new(classified: &[ClassifiedSegment], metadata: &ReportMetadata<'_>) -> Self {
        let segments: Vec<ReportSegment> = classified
            .iter()
            .map(|c| ReportSegment {
                id: c.id,
                class: c.class.label().to_owned(),
                confidence: c.confidence,
                abnormalities: c.abnormalities.clone(),
            })
            .collect();

        Self {
            analysis_id: metadata.analysis_id.map(str::to_owned),
            patient_id: metadata.patient_id.map(str::to_owned),
            date: metadata.date.map(str::to_owned),
            karyotype: karyotype_summary(classified),
            segment_count: classified.len(),
            abnormal_count: classified.iter().filter(|c| c.is_abnormal()).count(),
            segments,
        }
    }
}

/// Serialize a classification set into pretty-printed report JSON.
///
/// # Errors
///
/// Returns [`ReportError::Json`] if serialization fails.
pub fn to_json(
    classified: &[ClassifiedSegment],
    metadata: &ReportMetadata<'_>,
) -> Result<String, ReportError> {
    let document = ReportDocument::new(classified, metadata);
    Ok(serde_json::to_string_pretty(&document)?)
}
