//! Landing page: quick-start, recent activity, and pipeline status.

use dioxus::prelude::*;
use karyo_analysis::{AnalysisRecord, RunTiming};

use crate::page::Page;

/// Props for the [`Dashboard`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DashboardProps {
    /// Recent records for the activity card.
    records: Vec<AnalysisRecord>,
    /// Timing of the most recent in-session run, if any stage has
    /// completed.
    timing: RunTiming,
    /// Fired with the destination page from the card actions.
    on_navigate: EventHandler<Page>,
}

/// Dashboard with quick-analysis, recent-activity, and status cards,
/// plus the how-it-works explainer.
#[component]
pub fn Dashboard(props: DashboardProps) -> Element {
    let last_run = {
        let total = props.timing.total();
        if total.is_zero() {
            "—".to_owned()
        } else {
            format!("{:.1} seconds", total.as_secs_f64())
        }
    };

    rsx! {
        h1 { class: "page-title", "Welcome to KaryoType Assistant" }

        div { class: "dashboard-grid",
            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Quick Analysis" }
                    p { class: "card-description", "Start a new karyotype analysis" }
                }
                div { class: "card-content",
                    p { class: "empty-note",
                        "Upload a metaphase image for automated chromosome segmentation and classification."
                    }
                }
                div { class: "card-footer",
                    button {
                        class: "button button-primary button-wide",
                        onclick: move |_| props.on_navigate.call(Page::Analysis),
                        "Start New Analysis"
                    }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Recent Activity" }
                    p { class: "card-description", "View your recent analyses" }
                }
                div { class: "card-content",
                    ul { class: "activity-list",
                        for record in props.records.iter() {
                            li { key: "{record.id}",
                                span { "{record.id}" }
                                span { class: "activity-date", "{record.date}" }
                            }
                        }
                    }
                }
                div { class: "card-footer",
                    button {
                        class: "button button-outline button-wide",
                        onclick: move |_| props.on_navigate.call(Page::History),
                        "View All History"
                    }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "System Status" }
                    p { class: "card-description", "Pipeline statistics" }
                }
                div { class: "card-content",
                    div { class: "status-rows",
                        div { class: "status-row",
                            span { "Segmentation Model" }
                            span { class: "badge badge-status", "Online" }
                        }
                        div { class: "status-row",
                            span { "Classification Model" }
                            span { class: "badge badge-status", "Online" }
                        }
                        div { class: "status-row",
                            span { "Last Run" }
                            span { class: "status-value", "{last_run}" }
                        }
                    }
                }
            }
        }

        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "How It Works" }
                p { class: "card-description", "The automated karyotyping process explained" }
            }
            div { class: "card-content how-it-works",
                div { class: "how-step",
                    span { class: "how-step-number", "1" }
                    h3 { "Upload Metaphase Image" }
                    p { "Upload a high-quality metaphase spread image from your microscopy system." }
                }
                div { class: "how-step",
                    span { class: "how-step-number", "2" }
                    h3 { "Automated Segmentation" }
                    p { "Individual chromosomes are identified and segmented from the metaphase spread." }
                }
                div { class: "how-step",
                    span { class: "how-step-number", "3" }
                    h3 { "Classification & Analysis" }
                    p { "Each chromosome is classified and analyzed for potential abnormalities." }
                }
            }
        }
    }
}
