//! Plain-text report serializer.
//!
//! Renders a completed classification set into a human-readable
//! analysis report: a header with the analysis identifiers, the
//! karyotype summary, a per-segment table, and an abnormal-findings
//! section.
//!
//! This is a pure function with no I/O -- it returns a `String`.

use std::fmt::Write;

use karyo_analysis::{ChromosomeClass, ClassifiedSegment};

/// Metadata to embed in the report header.
///
/// All fields are optional. When present, the corresponding header
/// line is emitted.
#[derive(Debug, Clone, Default)]
pub struct ReportMetadata<'a> {
    /// Analysis identifier, e.g. `KT-2025-0601`.
    pub analysis_id: Option<&'a str>,

    /// Patient identifier, e.g. `P-78431`.
    pub patient_id: Option<&'a str>,

    /// Human-readable report date.
    pub date: Option<&'a str>,

    /// Source image filename.
    pub source: Option<&'a str>,
}

/// Summarize a classification set as a karyotype designation.
///
/// Produces `<count>,<sex complement>`, e.g. `46,XY` for a full
/// diploid set with one X and one Y, or just the count when no sex
/// chromosomes were assigned.
#[must_use]
pub fn karyotype_summary(classified: &[ClassifiedSegment]) -> String {
    let x_count = classified
        .iter()
        .filter(|c| c.class == ChromosomeClass::X)
        .count();
    let y_count = classified
        .iter()
        .filter(|c| c.class == ChromosomeClass::Y)
        .count();

    let mut sex = String::new();
    sex.push_str(&"X".repeat(x_count));
    sex.push_str(&"Y".repeat(y_count));

    if sex.is_empty() {
        classified.len().to_string()
    } else {
        format!("{},{sex}", classified.len())
    }
}

/// Serialize a classification set into a plain-text report.
#[must_use]
pub fn to_text(classified: &[ClassifiedSegment], metadata: &ReportMetadata<'_>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "KARYOTYPE ANALYSIS REPORT");
    let _ = writeln!(out, "=========================");
    let _ = writeln!(out);

    if let Some(analysis_id) = metadata.analysis_id {
        let _ = writeln!(out, "Analysis ID: {analysis_id}");
    }
    if let Some(patient_id) = metadata.patient_id {
        let _ = writeln!(out, "Patient ID:  {patient_id}");
    }
    if let Some(date) = metadata.date {
        let _ = writeln!(out, "Date:        {date}");
    }
    if let Some(source) = metadata.source {
        let _ = writeln!(out, "Source:      {source}");
    }
    let _ = writeln!(out);

    let abnormal: Vec<&ClassifiedSegment> =
        classified.iter().filter(|c| c.is_abnormal()).collect();

    let _ = writeln!(out, "Karyotype:         {}", karyotype_summary(classified));
    let _ = writeln!(out, "Segments analyzed: {}", classified.len());
    let _ = writeln!(out, "Abnormal segments: {}", abnormal.len());
    let _ = writeln!(out);

    let _ = writeln!(out, "Segment  Class  Confidence  Findings");
    for segment in classified {
        let findings = if segment.abnormalities.is_empty() {
            "-".to_owned()
        } else {
            segment.abnormalities.join("; ")
        };
        let _ = writeln!(
            out,
            "{:>7}  {:>5}  {:>9.0}%  {findings}",
            segment.id,
            segment.class,
            segment.confidence * 100.0,
        );
    }
    let _ = writeln!(out);

    if abnormal.is_empty() {
        let _ = writeln!(out, "No abnormalities detected.");
    } else {
        let _ = writeln!(out, "ABNORMAL FINDINGS");
        for segment in &abnormal {
            for finding in &segment.abnormalities {
                let _ = writeln!(
                    out,
                    "  Segment {} (class {}): {finding}",
                    segment.id, segment.class,
                );
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use karyo_analysis::ABNORMALITY_FINDING;

    use super::*;

    fn classified(id: u32, class: ChromosomeClass, abnormal: bool) -> ClassifiedSegment {
        ClassifiedSegment {
            id,
            image: "blob:metaphase".into(),
            class,
            confidence: 0.87,
            abnormalities: if abnormal {
                vec![ABNORMALITY_FINDING.into()]
            } else {
                Vec::new()
            },
        }
    }

    #[test]
    fn karyotype_summary_includes_sex_complement() {
        let set = vec![
            classified(1, ChromosomeClass::C1, false),
            classified(2, ChromosomeClass::X, false),
            classified(3, ChromosomeClass::Y, false),
        ];
        assert_eq!(karyotype_summary(&set), "3,XY");
    }

    #[test]
    fn karyotype_summary_without_sex_chromosomes_is_count_only() {
        let set = vec![
            classified(1, ChromosomeClass::C1, false),
            classified(2, ChromosomeClass::C2, false),
        ];
        assert_eq!(karyotype_summary(&set), "2");
    }

    #[test]
    fn report_carries_header_metadata() {
        let metadata = ReportMetadata {
            analysis_id: Some("KT-2025-0601"),
            patient_id: Some("P-78431"),
            date: Some("June 1, 2025"),
            source: Some("metaphase.png"),
        };
        let report = to_text(&[classified(1, ChromosomeClass::C1, false)], &metadata);
        assert!(report.contains("Analysis ID: KT-2025-0601"));
        assert!(report.contains("Patient ID:  P-78431"));
        assert!(report.contains("Source:      metaphase.png"));
    }

    #[test]
    fn report_lists_every_segment() {
        let set = vec![
            classified(1, ChromosomeClass::C1, false),
            classified(2, ChromosomeClass::C2, true),
        ];
        let report = to_text(&set, &ReportMetadata::default());
        assert!(report.contains("Segments analyzed: 2"));
        assert!(report.contains("Abnormal segments: 1"));
        assert!(report.contains(ABNORMALITY_FINDING));
    }

    #[test]
    fn clean_report_says_so() {
        let set = vec![classified(1, ChromosomeClass::C1, false)];
        let report = to_text(&set, &ReportMetadata::default());
        assert!(report.contains("No abnormalities detected."));
        assert!(!report.contains("ABNORMAL FINDINGS"));
    }
}
