use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use karyo_analysis::{
    AnalysisConfig, Classification, ClassifiedSegment, Notification, RunTiming, Segment,
    StageTiming, classify_segments, demo_records, segment_image,
};
use karyo_io::media::{self, ImageMeta};
use karyo_io::{
    ClassificationView, Dashboard, Header, HistoryView, ImageUpload, Page, SegmentationView,
    StageId, ToastHost, save, use_toasts,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_time::Instant;

fn main() {
    dioxus::launch(app);
}

/// An accepted upload held by the shell.
///
/// Owns the object URL for the image; the URL is revoked when the
/// image is replaced or cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
struct HeldImage {
    /// Blob object URL, the opaque reference every stage carries.
    url: String,
    /// Original filename, used for the report download name.
    filename: String,
    /// Dimensions and size captured at intake.
    meta: ImageMeta,
}

/// Root application component.
///
/// Owns all state via Dioxus signals and wires together the header,
/// the three-stage analysis pipeline, the dashboard and history pages,
/// and the toast host. Stage results are `Rc`-wrapped so child
/// components diff by pointer.
///
/// Every asynchronous operation (auto-advance, segmentation run,
/// classification run) captures the `generation` counter at spawn
/// time; accepting or clearing an image bumps it, so stale timers
/// discard their results instead of racing the new image.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let mut page = use_signal(|| Page::Dashboard);
    let mut active_stage = use_signal(|| StageId::Upload);
    let mut image = use_signal(|| Option::<Rc<HeldImage>>::None);
    let mut segments = use_signal(|| Option::<Rc<Vec<Segment>>>::None);
    let mut classified = use_signal(|| Option::<Rc<Vec<ClassifiedSegment>>>::None);
    let mut segmenting = use_signal(|| false);
    let mut classifying = use_signal(|| false);
    let mut generation = use_signal(|| 0u64);
    let mut timing = use_signal(RunTiming::default);
    let config = use_signal(AnalysisConfig::default);
    let toasts = use_toasts();

    // --- Upload handler ---
    // Validates the file, replaces the held image, resets all
    // downstream derived state, and schedules the auto-advance to the
    // segmentation tab.
    let on_upload = move |(bytes, name): (Vec<u8>, String)| {
        let meta = match media::inspect_image(&name, &bytes) {
            Ok(meta) => meta,
            Err(media::MediaError::UnsupportedType(_)) => {
                toasts.push(Notification::warning(
                    "Invalid file type",
                    "Please upload an image file.",
                ));
                return;
            }
            Err(e) => {
                toasts.push(Notification::warning("Invalid file type", e.to_string()));
                return;
            }
        };

        let url = match media::image_to_object_url(&bytes, media::mime_for(&name)) {
            Ok(url) => url,
            Err(e) => {
                toasts.push(Notification::warning("Upload failed", e.to_string()));
                return;
            }
        };

        // Invalidate in-flight stage results before replacing the image.
        generation += 1;
        if let Some(old) = image.peek().as_ref() {
            media::revoke_object_url(&old.url);
        }
        image.set(Some(Rc::new(HeldImage {
            url,
            filename: name,
            meta,
        })));
        segments.set(None);
        classified.set(None);
        timing.set(RunTiming::default());

        toasts.push(Notification::info(
            "Image uploaded",
            format!(
                "Your metaphase image has been uploaded successfully ({}×{}).",
                meta.width, meta.height,
            ),
        ));

        let my_generation = *generation.peek();
        let delay = config().auto_advance_delay_ms;
        spawn(async move {
            TimeoutFuture::new(delay).await;
            if *generation.peek() != my_generation {
                return;
            }
            active_stage.set(StageId::Segmentation);
        });
    };

    // --- Clear handler ---
    let on_clear = move |()| {
        generation += 1;
        if let Some(old) = image.peek().as_ref() {
            media::revoke_object_url(&old.url);
        }
        image.set(None);
        segments.set(None);
        classified.set(None);
        timing.set(RunTiming::default());
        active_stage.set(StageId::Upload);
    };

    // --- Segmentation effect ---
    // Re-runs whenever the held image changes. The simulated latency
    // lives here, not in the pure stage function; the generation check
    // discards completions the user has superseded with a new upload.
    use_effect(move || {
        let Some(held) = image() else {
            segments.set(None);
            segmenting.set(false);
            return;
        };
        let my_generation = *generation.peek();
        let stage_config = config();
        segmenting.set(true);

        spawn(async move {
            let started = Instant::now();
            TimeoutFuture::new(stage_config.segmentation_delay_ms).await;
            if *generation.peek() != my_generation {
                return;
            }
            let result = segment_image(&held.url, &stage_config);
            timing.write().segmentation = Some(StageTiming {
                duration: started.elapsed(),
                produced: result.len(),
            });
            segments.set(Some(Rc::new(result)));
            segmenting.set(false);
        });
    });

    // --- Classification handler ---
    // User-gated: runs only from the Start Classification button.
    let on_classify = move |()| {
        let Some(input) = segments() else {
            return;
        };
        let my_generation = *generation.peek();
        let stage_config = config();
        classifying.set(true);

        spawn(async move {
            let started = Instant::now();
            TimeoutFuture::new(stage_config.classification_delay_ms).await;
            if *generation.peek() != my_generation {
                classifying.set(false);
                return;
            }
            let mut rng = SmallRng::from_entropy();
            let Classification {
                classified: results,
                notifications,
            } = classify_segments(&input, &stage_config, &mut rng);
            timing.write().classification = Some(StageTiming {
                duration: started.elapsed(),
                produced: results.len(),
            });
            classified.set(Some(Rc::new(results)));
            classifying.set(false);
            for notification in notifications {
                toasts.push(notification);
            }
        });
    };

    // --- Reset handler ---
    // Discards classification output only, returning to the
    // pre-classification view.
    let on_reset = move |()| {
        classified.set(None);
        timing.write().classification = None;
    };

    // --- Report handler ---
    let on_report = move |()| {
        let Some(results) = classified() else {
            return;
        };
        let source = image().map(|held| held.filename.clone());
        let base = source.as_deref().map_or("analysis", |name| {
            name.rsplit_once('.').map_or(name, |(stem, _)| stem)
        });

        let metadata = karyo_report::ReportMetadata {
            source: source.as_deref(),
            ..karyo_report::ReportMetadata::default()
        };
        let report = karyo_report::to_text(&results, &metadata);

        match save::save_text_file(&report, &format!("{base}-karyotype.txt"), "text/plain") {
            Ok(()) => toasts.push(Notification::info(
                "Report generated",
                "The karyotype analysis report has been generated and saved.",
            )),
            Err(e) => toasts.push(Notification::warning("Report failed", e.to_string())),
        }
    };

    let on_read_error = move |message: String| {
        toasts.push(Notification::warning("Upload failed", message));
    };

    // --- Layout ---
    let has_image = image().is_some();
    let preview = image().map(|held| held.url.clone());
    let filename = image().map(|held| held.filename.clone());

    let stage_content = match active_stage() {
        StageId::Upload => rsx! {
            ImageUpload {
                preview: preview.clone(),
                filename: filename.clone(),
                on_upload: on_upload,
                on_clear: on_clear,
                on_error: on_read_error,
            }
            {render_next_button(StageId::Upload, has_image, active_stage)}
        },
        StageId::Segmentation => rsx! {
            SegmentationView {
                image: preview.clone(),
                segments: segments(),
                loading: segmenting(),
            }
            {render_next_button(StageId::Segmentation, has_image, active_stage)}
        },
        StageId::Classification => rsx! {
            ClassificationView {
                segments: segments(),
                classified: classified(),
                loading: classifying(),
                on_classify: on_classify,
                on_reset: on_reset,
                on_report: on_report,
            }
        },
    };

    let page_body = match page() {
        Page::Dashboard => rsx! {
            Dashboard {
                records: demo_records(),
                timing: timing(),
                on_navigate: move |destination| page.set(destination),
            }
        },
        Page::History => rsx! {
            HistoryView {
                records: demo_records(),
                on_new_analysis: move |()| page.set(Page::Analysis),
            }
        },
        Page::Analysis => rsx! {
            h1 { class: "page-title", "Karyotype Analysis" }

            // Stage tabs. Downstream tabs stay disabled until an image
            // is held.
            div { class: "tab-strip", role: "tablist",
                for stage in StageId::ALL {
                    {render_stage_tab(stage, active_stage, has_image)}
                }
            }

            {stage_content}
        },
    };

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/app.css") }

        div { class: "app-root",
            Header {
                active: page(),
                on_navigate: move |destination| page.set(destination),
            }

            main { class: "app-main", {page_body} }

            ToastHost {
                toasts: toasts.items(),
                on_dismiss: move |id| toasts.dismiss(id),
            }
        }
    }
}

/// Render one stage tab button.
fn render_stage_tab(stage: StageId, mut active_stage: Signal<StageId>, has_image: bool) -> Element {
    let is_active = *active_stage.read() == stage;
    let class = if is_active { "tab tab-active" } else { "tab" };
    let caption = format!("{}. {}", stage.step(), stage.label());

    rsx! {
        button {
            class: "{class}",
            role: "tab",
            "aria-selected": "{is_active}",
            disabled: !stage.enabled(has_image),
            onclick: move |_| active_stage.set(stage),
            "{caption}"
        }
    }
}

/// Render the forward-navigation button for a stage, when the next
/// stage exists and is reachable.
fn render_next_button(
    stage: StageId,
    has_image: bool,
    mut active_stage: Signal<StageId>,
) -> Element {
    let Some(next) = stage.next() else {
        return rsx! {};
    };
    if !next.enabled(has_image) {
        return rsx! {};
    }

    rsx! {
        div { class: "next-row",
            button {
                class: "button button-primary",
                onclick: move |_| active_stage.set(next),
                "Next: {next.label()}"
            }
        }
    }
}
