//! Segmentation results view: a grid of extracted chromosome tiles.

use std::rc::Rc;

use dioxus::prelude::*;
use karyo_analysis::Segment;

/// Number of placeholder tiles shown while segmentation is in flight.
const SKELETON_TILES: usize = 12;

/// Props for the [`SegmentationView`] component.
#[derive(Props, Clone)]
pub struct SegmentationViewProps {
    /// Object URL of the held image; `None` when nothing is uploaded.
    image: Option<String>,
    /// Completed segmentation output. Wrapped in `Rc` so renders diff
    /// by pointer instead of walking 23 records.
    segments: Option<Rc<Vec<Segment>>>,
    /// Whether the simulated segmentation run is in flight.
    loading: bool,
}

impl PartialEq for SegmentationViewProps {
    fn eq(&self, other: &Self) -> bool {
        let segments_eq = match (&self.segments, &other.segments) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        segments_eq && self.image == other.image && self.loading == other.loading
    }
}

/// Card showing the segmentation stage: an empty prompt before any
/// upload, a skeleton grid while the mock run is in flight, then one
/// tile per extracted segment.
#[component]
pub fn SegmentationView(props: SegmentationViewProps) -> Element {
    let segment_count = props.segments.as_ref().map_or(0, |s| s.len());

    if props.image.is_none() && segment_count == 0 {
        return rsx! {
            div { class: "card card-empty",
                div { class: "card-header",
                    h2 { class: "card-title", "Chromosome Segmentation" }
                    p { class: "card-description",
                        "Upload a metaphase image to see the segmentation results"
                    }
                }
                div { class: "card-content card-content-centered",
                    p { class: "empty-note", "No image uploaded yet" }
                }
            }
        };
    }

    let description = if props.loading {
        "Processing image and extracting chromosomes...".to_owned()
    } else {
        format!("{segment_count} chromosomes have been identified and segmented")
    };

    let grid = if props.loading {
        render_skeleton_grid()
    } else {
        props
            .segments
            .as_ref()
            .map_or_else(|| rsx! {}, |segments| render_segment_grid(segments))
    };

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Chromosome Segmentation" }
                p { class: "card-description", "{description}" }
            }
            div { class: "card-content", {grid} }
        }
    }
}

/// Placeholder tiles shown while the mock run is in flight.
fn render_skeleton_grid() -> Element {
    rsx! {
        div { class: "segment-grid",
            for i in 0..SKELETON_TILES {
                div { key: "{i}", class: "segment-tile",
                    div { class: "skeleton skeleton-chromosome" }
                    div { class: "skeleton skeleton-label" }
                }
            }
        }
    }
}

/// One tile per extracted segment.
fn render_segment_grid(segments: &[Segment]) -> Element {
    rsx! {
        div { class: "segment-grid",
            for segment in segments.iter() {
                div { key: "{segment.id}", class: "segment-tile",
                    div { class: "segment-thumb",
                        img {
                            src: "{segment.image}",
                            alt: "Chromosome {segment.id}",
                        }
                    }
                    span { class: "segment-label", "Chr {segment.id}" }
                }
            }
        }
    }
}
