//! Prior-analysis history table.

use dioxus::prelude::*;
use karyo_analysis::AnalysisRecord;

/// Props for the [`HistoryView`] component.
#[derive(Props, Clone, PartialEq)]
pub struct HistoryViewProps {
    /// Records to list, newest first.
    records: Vec<AnalysisRecord>,
    /// Fired when the user starts a new analysis from this page.
    on_new_analysis: EventHandler<()>,
}

/// Read-only table of prior analyses with status and abnormality
/// badges.
#[component]
pub fn HistoryView(props: HistoryViewProps) -> Element {
    rsx! {
        div { class: "page-heading",
            h1 { "Analysis History" }
            button {
                class: "button button-primary",
                onclick: move |_| props.on_new_analysis.call(()),
                "New Analysis"
            }
        }

        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Recent Analyses" }
                p { class: "card-description",
                    "View and manage your recent karyotype analyses"
                }
            }
            div { class: "card-content",
                table { class: "history-table",
                    thead {
                        tr {
                            th { "ID" }
                            th { "Patient ID" }
                            th { "Date" }
                            th { "Status" }
                            th { "Abnormalities" }
                            th { "Type" }
                        }
                    }
                    tbody {
                        for record in props.records.iter() {
                            tr { key: "{record.id}",
                                td { "{record.id}" }
                                td { "{record.patient_id}" }
                                td { "{record.date}" }
                                td {
                                    span { class: "badge badge-status",
                                        "{record.status.label()}"
                                    }
                                }
                                td {
                                    if record.abnormalities_present {
                                        span { class: "badge badge-abnormal", "Detected" }
                                    } else {
                                        span { class: "badge badge-clear", "None" }
                                    }
                                }
                                td { "{record.analysis_type}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
