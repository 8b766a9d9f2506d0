//! Shared types for the karyo mock analysis pipeline.

use serde::{Deserialize, Serialize};

/// Finding text attached to a segment flagged as abnormal.
pub const ABNORMALITY_FINDING: &str = "Structural variation detected";

/// Lifecycle status of a chromosome segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentStatus {
    /// Segmentation is still in flight; the record is a placeholder.
    Processing,
    /// Segmentation has completed for this record.
    Segmented,
}

/// One extracted chromosome region from a metaphase image.
///
/// The mock segmentation stage does no cropping or localization:
/// every segment references the full source image. Segments are
/// immutable once created and are discarded whenever a new image is
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// 1-based segment number (`1..=segment_count`).
    pub id: u32,
    /// Opaque reference to the source image (an object URL in the app).
    pub image: String,
    /// Where this record is in the segmentation lifecycle.
    pub status: SegmentStatus,
}

impl Segment {
    /// Create an in-flight placeholder record.
    #[must_use]
    pub const fn placeholder(id: u32, image: String) -> Self {
        Self {
            id,
            image,
            status: SegmentStatus::Processing,
        }
    }
}

/// Chromosome type label assigned by the mock classifier.
///
/// The 24 human chromosome classes: autosomes 1–22 plus the sex
/// chromosomes X and Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChromosomeClass {
    C1,
    C2,
    C3,
    C4,
    C5,
    C6,
    C7,
    C8,
    C9,
    C10,
    C11,
    C12,
    C13,
    C14,
    C15,
    C16,
    C17,
    C18,
    C19,
    C20,
    C21,
    C22,
    X,
    Y,
}

impl ChromosomeClass {
    /// All classes in karyogram order.
    pub const ALL: [Self; 24] = [
        Self::C1,
        Self::C2,
        Self::C3,
        Self::C4,
        Self::C5,
        Self::C6,
        Self::C7,
        Self::C8,
        Self::C9,
        Self::C10,
        Self::C11,
        Self::C12,
        Self::C13,
        Self::C14,
        Self::C15,
        Self::C16,
        Self::C17,
        Self::C18,
        Self::C19,
        Self::C20,
        Self::C21,
        Self::C22,
        Self::X,
        Self::Y,
    ];

    /// Display label for the class (`"1"`..`"22"`, `"X"`, `"Y"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::C1 => "1",
            Self::C2 => "2",
            Self::C3 => "3",
            Self::C4 => "4",
            Self::C5 => "5",
            Self::C6 => "6",
            Self::C7 => "7",
            Self::C8 => "8",
            Self::C9 => "9",
            Self::C10 => "10",
            Self::C11 => "11",
            Self::C12 => "12",
            Self::C13 => "13",
            Self::C14 => "14",
            Self::C15 => "15",
            Self::C16 => "16",
            Self::C17 => "17",
            Self::C18 => "18",
            Self::C19 => "19",
            Self::C20 => "20",
            Self::C21 => "21",
            Self::C22 => "22",
            Self::X => "X",
            Self::Y => "Y",
        }
    }

    /// Positional label assignment used by the mock classifier.
    ///
    /// Segment at position `i` receives class `ALL[i]`; positions past
    /// the end clamp to [`Self::Y`]. The clamp is mock behavior, not a
    /// classification contract. A real model would assign labels from
    /// inference, independent of position.
    #[must_use]
    pub fn from_position(position: usize) -> Self {
        Self::ALL
            .get(position)
            .copied()
            .unwrap_or(Self::Y)
    }
}

impl std::fmt::Display for ChromosomeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A segment with its mock classification attached.
///
/// Immutable once created; discarded on reset or re-upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedSegment {
    /// 1-based segment number, carried over from the segment.
    pub id: u32,
    /// Opaque reference to the source image.
    pub image: String,
    /// Assigned chromosome class.
    pub class: ChromosomeClass,
    /// Mock confidence score in `[confidence_floor, confidence_ceiling]`,
    /// rounded to two decimals.
    pub confidence: f64,
    /// Free-text findings; empty when the segment is unremarkable.
    pub abnormalities: Vec<String>,
}

impl ClassifiedSegment {
    /// Whether any finding was attached to this segment.
    #[must_use]
    pub fn is_abnormal(&self) -> bool {
        !self.abnormalities.is_empty()
    }
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
}

/// A user-facing message produced by a stage.
///
/// Stages are pure functions of input → (result, notifications); the
/// application shell decides how notifications are rendered. Stage code
/// never talks to the toast layer directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub body: String,
}

impl Notification {
    /// Create an informational notification.
    #[must_use]
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Create a warning notification.
    #[must_use]
    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Configuration for the mock analysis stages.
///
/// The defaults reproduce the demonstrator's fixed behavior: 23
/// segments, 2 s / 3 s simulated latencies, confidence in [0.70, 1.00],
/// and a ~20 % per-segment abnormality rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of segment records produced per image.
    pub segment_count: u32,

    /// Simulated segmentation latency in milliseconds.
    pub segmentation_delay_ms: u32,

    /// Simulated classification latency in milliseconds.
    pub classification_delay_ms: u32,

    /// Delay before auto-advancing from upload to segmentation after an
    /// image is accepted, in milliseconds.
    pub auto_advance_delay_ms: u32,

    /// Lower bound of the uniform confidence draw.
    pub confidence_floor: f64,

    /// Upper bound of the uniform confidence draw.
    pub confidence_ceiling: f64,

    /// Independent per-segment probability of an abnormality finding.
    pub abnormality_rate: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            segment_count: 23,
            segmentation_delay_ms: 2000,
            classification_delay_ms: 3000,
            auto_advance_delay_ms: 500,
            confidence_floor: 0.70,
            confidence_ceiling: 1.00,
            abnormality_rate: 0.2,
        }
    }
}

impl AnalysisConfig {
    /// Check the configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidConfig`] when the segment count
    /// is zero, the confidence bounds are inverted or outside [0, 1],
    /// or the abnormality rate is outside [0, 1].
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.segment_count == 0 {
            return Err(AnalysisError::InvalidConfig(
                "segment_count must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.confidence_floor)
            || !(0.0..=1.0).contains(&self.confidence_ceiling)
        {
            return Err(AnalysisError::InvalidConfig(
                "confidence bounds must lie in [0, 1]".into(),
            ));
        }
        if self.confidence_floor > self.confidence_ceiling {
            return Err(AnalysisError::InvalidConfig(
                "confidence_floor must not exceed confidence_ceiling".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.abnormality_rate) {
            return Err(AnalysisError::InvalidConfig(
                "abnormality_rate must lie in [0, 1]".into(),
            ));
        }
        Ok(())
    }
}

/// Errors that can occur in the analysis core.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// Analysis configuration is invalid.
    #[error("invalid analysis configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // --- ChromosomeClass tests ---

    #[test]
    fn all_contains_every_class_once() {
        assert_eq!(
            ChromosomeClass::ALL.len(),
            24,
            "ChromosomeClass::ALL length must match variant count"
        );
        let mut seen = std::collections::HashSet::new();
        for class in ChromosomeClass::ALL {
            assert!(seen.insert(class), "Duplicate class in ALL: {class}");
        }
    }

    #[test]
    fn labels_follow_karyogram_order() {
        assert_eq!(ChromosomeClass::ALL[0].label(), "1");
        assert_eq!(ChromosomeClass::ALL[21].label(), "22");
        assert_eq!(ChromosomeClass::ALL[22].label(), "X");
        assert_eq!(ChromosomeClass::ALL[23].label(), "Y");
    }

    #[test]
    fn from_position_is_positional_within_range() {
        for (i, class) in ChromosomeClass::ALL.iter().enumerate() {
            assert_eq!(ChromosomeClass::from_position(i), *class);
        }
    }

    #[test]
    fn from_position_clamps_past_the_end() {
        assert_eq!(ChromosomeClass::from_position(24), ChromosomeClass::Y);
        assert_eq!(ChromosomeClass::from_position(usize::MAX), ChromosomeClass::Y);
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(ChromosomeClass::C7.to_string(), "7");
        assert_eq!(ChromosomeClass::X.to_string(), "X");
    }

    // --- Segment tests ---

    #[test]
    fn placeholder_is_processing() {
        let segment = Segment::placeholder(3, "blob:demo".into());
        assert_eq!(segment.id, 3);
        assert_eq!(segment.status, SegmentStatus::Processing);
    }

    // --- ClassifiedSegment tests ---

    #[test]
    fn is_abnormal_tracks_findings() {
        let mut classified = ClassifiedSegment {
            id: 1,
            image: "blob:demo".into(),
            class: ChromosomeClass::C1,
            confidence: 0.91,
            abnormalities: vec![],
        };
        assert!(!classified.is_abnormal());
        classified.abnormalities.push(ABNORMALITY_FINDING.into());
        assert!(classified.is_abnormal());
    }

    // --- Notification tests ---

    #[test]
    fn notification_constructors_set_severity() {
        let info = Notification::info("Analysis complete", "no findings");
        assert_eq!(info.severity, Severity::Info);
        let warning = Notification::warning("Abnormalities detected", "2 segments");
        assert_eq!(warning.severity, Severity::Warning);
    }

    // --- AnalysisConfig tests ---

    #[test]
    fn default_config_matches_demonstrator_constants() {
        let config = AnalysisConfig::default();
        assert_eq!(config.segment_count, 23);
        assert_eq!(config.segmentation_delay_ms, 2000);
        assert_eq!(config.classification_delay_ms, 3000);
        assert_eq!(config.auto_advance_delay_ms, 500);
        assert!((config.confidence_floor - 0.70).abs() < f64::EPSILON);
        assert!((config.confidence_ceiling - 1.00).abs() < f64::EPSILON);
        assert!((config.abnormality_rate - 0.2).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_segments() {
        let config = AnalysisConfig {
            segment_count: 0,
            ..AnalysisConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }

    #[test]
    fn validate_rejects_inverted_confidence_bounds() {
        let config = AnalysisConfig {
            confidence_floor: 0.9,
            confidence_ceiling: 0.8,
            ..AnalysisConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_rate() {
        let config = AnalysisConfig {
            abnormality_rate: 1.5,
            ..AnalysisConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }

    // --- Error display ---

    #[test]
    fn invalid_config_display() {
        let err = AnalysisError::InvalidConfig("segment_count must be at least 1".into());
        assert_eq!(
            err.to_string(),
            "invalid analysis configuration: segment_count must be at least 1",
        );
    }

    // --- Serde ---

    #[test]
    fn config_serde_round_trip() {
        let config = AnalysisConfig {
            segment_count: 46,
            abnormality_rate: 0.05,
            ..AnalysisConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
