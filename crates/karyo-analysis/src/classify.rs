//! Mock chromosome classification.
//!
//! Assigns each segment a positional chromosome class, a uniformly
//! drawn confidence score, and an independent-probability abnormality
//! finding. The randomness source is injected so the stage stays pure:
//! callers pass any [`Rng`], and tests seed a `SmallRng` for
//! reproducible runs.

use rand::Rng;

use crate::types::{
    ABNORMALITY_FINDING, AnalysisConfig, ChromosomeClass, ClassifiedSegment, Notification, Segment,
};

/// Output of a classification run.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// One classified record per input segment, in input order.
    pub classified: Vec<ClassifiedSegment>,
    /// User-facing summary of the run. Empty for empty input; exactly
    /// one entry otherwise.
    pub notifications: Vec<Notification>,
}

/// Run the mock classification stage.
///
/// Empty input yields empty output with no notifications; there was
/// no run to summarize. Non-empty input yields one record per segment:
/// class assigned positionally via [`ChromosomeClass::from_position`],
/// confidence drawn uniformly from
/// `[confidence_floor, confidence_ceiling]` and rounded to two
/// decimals, and with probability `abnormality_rate` a single
/// [`ABNORMALITY_FINDING`]. A single summary notification reports
/// either the flagged count or a clean result.
pub fn classify_segments(
    segments: &[Segment],
    config: &AnalysisConfig,
    rng: &mut impl Rng,
) -> Classification {
    if segments.is_empty() {
        return Classification {
            classified: Vec::new(),
            notifications: Vec::new(),
        };
    }

    let classified: Vec<ClassifiedSegment> = segments
        .iter()
        .enumerate()
        .map(|(position, segment)| {
            let confidence =
                rng.gen_range(config.confidence_floor..=config.confidence_ceiling);
            let abnormalities = if rng.gen_bool(config.abnormality_rate.clamp(0.0, 1.0)) {
                vec![ABNORMALITY_FINDING.to_owned()]
            } else {
                Vec::new()
            };
            ClassifiedSegment {
                id: segment.id,
                image: segment.image.clone(),
                class: ChromosomeClass::from_position(position),
                confidence: round_confidence(confidence),
                abnormalities,
            }
        })
        .collect();

    let abnormal_count = classified.iter().filter(|c| c.is_abnormal()).count();
    let summary = if abnormal_count > 0 {
        Notification::warning(
            "Abnormalities detected",
            format!("{abnormal_count} chromosome(s) show potential abnormalities."),
        )
    } else {
        Notification::info(
            "Analysis complete",
            "No abnormalities detected in the karyotype analysis.",
        )
    };

    Classification {
        classified,
        notifications: vec![summary],
    }
}

/// Round a confidence draw to two decimal places.
fn round_confidence(confidence: f64) -> f64 {
    (confidence * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::segment::segment_image;
    use crate::types::Severity;

    fn segments(count: u32) -> Vec<Segment> {
        let config = AnalysisConfig {
            segment_count: count,
            ..AnalysisConfig::default()
        };
        segment_image("blob:metaphase", &config)
    }

    #[test]
    fn empty_input_yields_empty_output_and_no_notifications() {
        let mut rng = SmallRng::seed_from_u64(1);
        let result = classify_segments(&[], &AnalysisConfig::default(), &mut rng);
        assert!(result.classified.is_empty());
        assert!(result.notifications.is_empty());
    }

    #[test]
    fn one_record_per_segment_in_input_order() {
        let mut rng = SmallRng::seed_from_u64(1);
        let input = segments(23);
        let result = classify_segments(&input, &AnalysisConfig::default(), &mut rng);
        assert_eq!(result.classified.len(), 23);
        for (classified, segment) in result.classified.iter().zip(&input) {
            assert_eq!(classified.id, segment.id);
            assert_eq!(classified.image, segment.image);
        }
    }

    #[test]
    fn confidence_stays_in_configured_band() {
        let mut rng = SmallRng::seed_from_u64(7);
        let result = classify_segments(&segments(23), &AnalysisConfig::default(), &mut rng);
        for classified in &result.classified {
            assert!(
                (0.70..=1.00).contains(&classified.confidence),
                "confidence {} outside [0.70, 1.00]",
                classified.confidence,
            );
        }
    }

    #[test]
    fn confidence_is_two_decimal_rounded() {
        let mut rng = SmallRng::seed_from_u64(7);
        let result = classify_segments(&segments(23), &AnalysisConfig::default(), &mut rng);
        for classified in &result.classified {
            let scaled = classified.confidence * 100.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-9,
                "confidence {} not rounded to two decimals",
                classified.confidence,
            );
        }
    }

    #[test]
    fn classes_are_assigned_positionally() {
        let mut rng = SmallRng::seed_from_u64(3);
        let result = classify_segments(&segments(23), &AnalysisConfig::default(), &mut rng);
        for (position, classified) in result.classified.iter().enumerate() {
            assert_eq!(classified.class, ChromosomeClass::from_position(position));
        }
    }

    #[test]
    fn positions_past_24_clamp_to_y() {
        let mut rng = SmallRng::seed_from_u64(3);
        let config = AnalysisConfig {
            segment_count: 30,
            ..AnalysisConfig::default()
        };
        let result = classify_segments(&segments(30), &config, &mut rng);
        for classified in &result.classified[24..] {
            assert_eq!(classified.class, ChromosomeClass::Y);
        }
    }

    #[test]
    fn clean_run_emits_single_info_notification() {
        let mut rng = SmallRng::seed_from_u64(5);
        let config = AnalysisConfig {
            abnormality_rate: 0.0,
            ..AnalysisConfig::default()
        };
        let result = classify_segments(&segments(23), &config, &mut rng);
        assert_eq!(result.notifications.len(), 1);
        assert_eq!(result.notifications[0].severity, Severity::Info);
        assert!(result.classified.iter().all(|c| !c.is_abnormal()));
    }

    #[test]
    fn flagged_run_emits_single_warning_with_count() {
        let mut rng = SmallRng::seed_from_u64(5);
        let config = AnalysisConfig {
            abnormality_rate: 1.0,
            ..AnalysisConfig::default()
        };
        let result = classify_segments(&segments(23), &config, &mut rng);
        assert_eq!(result.notifications.len(), 1);
        assert_eq!(result.notifications[0].severity, Severity::Warning);
        assert!(result.notifications[0].body.starts_with("23 chromosome"));
        assert!(result.classified.iter().all(ClassifiedSegment::is_abnormal));
    }

    #[test]
    fn same_seed_reproduces_the_run() {
        let config = AnalysisConfig::default();
        let input = segments(23);
        let mut rng_a = SmallRng::seed_from_u64(42);
        let mut rng_b = SmallRng::seed_from_u64(42);
        let a = classify_segments(&input, &config, &mut rng_a);
        let b = classify_segments(&input, &config, &mut rng_b);
        assert_eq!(a, b);
    }
}
