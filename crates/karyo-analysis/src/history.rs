//! Prior-analysis records for the history view.
//!
//! This demonstrator has no persistence layer; the history list is a
//! fixed set of demo records. In a real deployment these would be the
//! persisted entities.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a recorded analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    Scheduled,
    InProgress,
    Complete,
}

impl RecordStatus {
    /// Display label for the status badge.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::InProgress => "In Progress",
            Self::Complete => "Complete",
        }
    }
}

/// One prior analysis as shown in the history table. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Analysis identifier, e.g. `KT-2025-0512`.
    pub id: String,
    /// Patient identifier, e.g. `P-78431`.
    pub patient_id: String,
    /// Human-readable analysis date.
    pub date: String,
    /// Where the analysis is in its lifecycle.
    pub status: RecordStatus,
    /// Whether any abnormality was reported.
    pub abnormalities_present: bool,
    /// Analysis protocol name.
    pub analysis_type: String,
}

/// The fixed demo records backing the history view.
#[must_use]
pub fn demo_records() -> Vec<AnalysisRecord> {
    vec![
        AnalysisRecord {
            id: "KT-2025-0512".into(),
            patient_id: "P-78431".into(),
            date: "May 12, 2025".into(),
            status: RecordStatus::Complete,
            abnormalities_present: false,
            analysis_type: "Standard Karyotype".into(),
        },
        AnalysisRecord {
            id: "KT-2025-0510".into(),
            patient_id: "P-65122".into(),
            date: "May 10, 2025".into(),
            status: RecordStatus::Complete,
            abnormalities_present: true,
            analysis_type: "Standard Karyotype".into(),
        },
        AnalysisRecord {
            id: "KT-2025-0505".into(),
            patient_id: "P-92135".into(),
            date: "May 5, 2025".into(),
            status: RecordStatus::Complete,
            abnormalities_present: false,
            analysis_type: "High-Resolution".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_records_are_stable() {
        let records = demo_records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, "KT-2025-0512");
        assert!(records.iter().all(|r| r.status == RecordStatus::Complete));
    }

    #[test]
    fn exactly_one_demo_record_has_abnormalities() {
        let flagged = demo_records()
            .iter()
            .filter(|r| r.abnormalities_present)
            .count();
        assert_eq!(flagged, 1);
    }

    #[test]
    fn status_labels() {
        assert_eq!(RecordStatus::Complete.label(), "Complete");
        assert_eq!(RecordStatus::InProgress.label(), "In Progress");
    }
}
