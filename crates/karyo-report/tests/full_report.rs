//! Integration test: run a seeded mock analysis end to end and render
//! both report formats from the output.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use karyo_analysis::{AnalysisConfig, analyze};
use karyo_report::{ReportMetadata, karyotype_summary, to_json, to_text};
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[test]
fn seeded_analysis_renders_consistent_reports() {
    let config = AnalysisConfig::default();
    let mut rng = SmallRng::seed_from_u64(2025);
    let run = analyze("blob:metaphase", &config, &mut rng).expect("analysis should succeed");

    assert_eq!(run.classified.len(), 23);
    assert_eq!(run.notifications.len(), 1);

    let metadata = ReportMetadata {
        analysis_id: Some("KT-2025-0601"),
        patient_id: Some("P-78431"),
        date: Some("June 1, 2025"),
        source: Some("metaphase.png"),
    };

    // The default 23-segment run assigns classes positionally, so the
    // karyotype always carries exactly one X and no Y.
    assert_eq!(karyotype_summary(&run.classified), "23,X");

    let text = to_text(&run.classified, &metadata);
    assert!(text.contains("KARYOTYPE ANALYSIS REPORT"));
    assert!(text.contains("Analysis ID: KT-2025-0601"));
    assert!(text.contains("Segments analyzed: 23"));
    assert!(text.contains("Karyotype:         23,X"));

    let json = to_json(&run.classified, &metadata).unwrap();
    let document: karyo_report::ReportDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(document.segment_count, 23);
    assert_eq!(document.karyotype, "23,X");

    // Both renderings must agree on the abnormal count.
    let abnormal = run.classified.iter().filter(|c| c.is_abnormal()).count();
    assert_eq!(document.abnormal_count, abnormal);
    assert!(text.contains(&format!("Abnormal segments: {abnormal}")));
}

#[test]
fn empty_classification_set_renders_an_empty_report() {
    let text = to_text(&[], &ReportMetadata::default());
    assert!(text.contains("Segments analyzed: 0"));
    assert!(text.contains("No abnormalities detected."));

    let json = to_json(&[], &ReportMetadata::default()).unwrap();
    let document: karyo_report::ReportDocument = serde_json::from_str(&json).unwrap();
    assert!(document.segments.is_empty());
    assert_eq!(document.karyotype, "0");
}
