//! Classification results view: labeled chromosome grid with
//! confidence scores, abnormality badges, and the report actions.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdTriangleAlert;
use karyo_analysis::{ClassifiedSegment, Segment};

/// Number of placeholder tiles shown while classification is in flight.
const SKELETON_TILES: usize = 12;

/// Props for the [`ClassificationView`] component.
#[derive(Props, Clone)]
pub struct ClassificationViewProps {
    /// Segmentation output feeding this stage; `None` or empty means
    /// there is nothing to classify yet.
    segments: Option<Rc<Vec<Segment>>>,
    /// Completed classification output.
    classified: Option<Rc<Vec<ClassifiedSegment>>>,
    /// Whether the simulated classification run is in flight.
    loading: bool,
    /// Fired when the user starts a classification run.
    on_classify: EventHandler<()>,
    /// Fired when the user discards the classification output.
    on_reset: EventHandler<()>,
    /// Fired when the user requests a report.
    on_report: EventHandler<()>,
}

impl PartialEq for ClassificationViewProps {
    fn eq(&self, other: &Self) -> bool {
        fn rc_eq<T>(a: &Option<Rc<T>>, b: &Option<Rc<T>>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
        }
        rc_eq(&self.segments, &other.segments)
            && rc_eq(&self.classified, &other.classified)
            && self.loading == other.loading
    }
}

/// Card showing the classification stage.
///
/// Walks through four states: no segmentation data, ready to run,
/// skeleton grid while the mock run is in flight, and the labeled
/// result grid with Reset / Generate Report actions.
#[component]
pub fn ClassificationView(props: ClassificationViewProps) -> Element {
    let has_segments = props.segments.as_ref().is_some_and(|s| !s.is_empty());
    let is_complete = props.classified.is_some();

    if !has_segments {
        return rsx! {
            div { class: "card card-empty",
                div { class: "card-header",
                    h2 { class: "card-title", "Classification Results" }
                    p { class: "card-description",
                        "Upload a metaphase image to perform chromosome classification"
                    }
                }
                div { class: "card-content card-content-centered",
                    p { class: "empty-note", "No segmentation data available yet" }
                }
            }
        };
    }

    let description = if is_complete {
        "Classification complete. Review the results below."
    } else if props.loading {
        "Classifying chromosomes and detecting abnormalities..."
    } else {
        "Start classification to begin chromosome type identification"
    };

    let content = if props.loading {
        render_skeleton_grid()
    } else if let Some(ref classified) = props.classified {
        render_result_grid(classified)
    } else {
        let on_classify = props.on_classify;
        rsx! {
            div { class: "card-content-centered classify-prompt",
                p { class: "empty-note",
                    "Segmentation complete. Ready to classify chromosomes."
                }
                button {
                    class: "button button-primary",
                    onclick: move |_| on_classify.call(()),
                    "Start Classification"
                }
            }
        }
    };

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Classification Results" }
                p { class: "card-description", "{description}" }
            }
            div { class: "card-content", {content} }
            if is_complete {
                div { class: "card-footer",
                    button {
                        class: "button button-outline",
                        onclick: move |_| props.on_reset.call(()),
                        "Reset"
                    }
                    button {
                        class: "button button-accent",
                        onclick: move |_| props.on_report.call(()),
                        "Generate Report"
                    }
                }
            }
        }
    }
}

/// Placeholder tiles shown while the mock run is in flight.
fn render_skeleton_grid() -> Element {
    rsx! {
        div { class: "classified-grid",
            for i in 0..SKELETON_TILES {
                div { key: "{i}", class: "classified-tile",
                    div { class: "skeleton skeleton-chromosome" }
                    div { class: "skeleton skeleton-label" }
                    div { class: "skeleton skeleton-sub" }
                }
            }
        }
    }
}

/// The labeled chromosome grid.
fn render_result_grid(classified: &[ClassifiedSegment]) -> Element {
    rsx! {
        div { class: "classified-grid",
            for chromosome in classified.iter() {
                {render_chromosome(chromosome)}
            }
        }
    }
}

/// Render one classified chromosome tile.
fn render_chromosome(chromosome: &ClassifiedSegment) -> Element {
    let tile_class = if chromosome.is_abnormal() {
        "classified-tile classified-tile-abnormal"
    } else {
        "classified-tile"
    };
    let confidence = format!("Confidence: {:.0}%", chromosome.confidence * 100.0);

    rsx! {
        div { key: "{chromosome.id}", class: "{tile_class}",
            div { class: "segment-thumb segment-thumb-tall",
                img {
                    src: "{chromosome.image}",
                    alt: "Chromosome {chromosome.class}",
                }
            }
            span { class: "classified-type", "Type: {chromosome.class}" }
            span { class: "classified-confidence", "{confidence}" }
            if chromosome.is_abnormal() {
                span { class: "classified-abnormal",
                    Icon { icon: LdTriangleAlert, width: 12, height: 12 }
                    " Abnormality detected"
                }
            }
        }
    }
}
