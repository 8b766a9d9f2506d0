//! Metaphase image upload component with drag-and-drop and file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;

use crate::media::ALLOWED_EXTENSIONS;

/// Props for the [`ImageUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ImageUploadProps {
    /// Object URL of the currently held image, for the preview.
    preview: Option<String>,
    /// Filename of the currently held image.
    filename: Option<String>,
    /// Called with the raw file bytes and filename once a file has
    /// been read. Validation is the shell's job; rejected files must
    /// leave the held image untouched.
    on_upload: EventHandler<(Vec<u8>, String)>,
    /// Called when the user clears the held image.
    on_clear: EventHandler<()>,
    /// Called when the browser fails to read the selected file.
    on_error: EventHandler<String>,
}

/// A drag-and-drop zone with a file picker button and inline preview.
///
/// Reads the first selected file and fires `on_upload` with
/// `(bytes, filename)`. Shows the held image when one is present, with
/// a Clear action to discard it.
#[component]
pub fn ImageUpload(props: ImageUploadProps) -> Element {
    let mut dragging = use_signal(|| false);

    // Read and forward the first file from a list. Shared by the
    // file-picker and drag-and-drop paths.
    let process_files = move |files: Vec<FileData>| async move {
        if let Some(file) = files.first() {
            let name = file.name();
            match file.read_bytes().await {
                Ok(bytes) => props.on_upload.call((bytes.to_vec(), name)),
                Err(e) => props.on_error.call(format!("Failed to read file: {e}")),
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let zone_class = if dragging() {
        "upload-zone upload-zone-active"
    } else {
        "upload-zone"
    };

    let accept = ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",");

    let zone_body = props.preview.as_ref().map_or_else(
        || {
            rsx! {
                span { class: "upload-icon",
                    Icon { icon: LdUpload, width: 32, height: 32 }
                }
                p { class: "upload-prompt",
                    "Drop your metaphase image here or"
                }
            }
        },
        |url| {
            let filename = props.filename.clone();
            rsx! {
                img {
                    class: "upload-preview",
                    src: "{url}",
                    alt: "Metaphase preview",
                }
                if let Some(ref name) = filename {
                    p { class: "upload-filename", "Loaded: {name}" }
                }
                p { class: "upload-hint",
                    "Drop or choose another file to replace it"
                }
            }
        },
    );

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Upload Metaphase Image" }
                p { class: "card-description",
                    "Upload a high-quality metaphase image for chromosome analysis"
                }
            }
            div { class: "card-content",
                div {
                    class: "{zone_class}",
                    ondragover: move |evt| {
                        evt.prevent_default();
                        dragging.set(true);
                    },
                    ondragleave: move |_| {
                        dragging.set(false);
                    },
                    ondrop: handle_drop,

                    {zone_body}

                    label { class: "button button-primary",
                        input {
                            r#type: "file",
                            accept: "{accept}",
                            class: "hidden-input",
                            onchange: handle_files,
                        }
                        "Choose File"
                    }

                    p { class: "upload-formats", "PNG, JPEG, TIFF, BMP, WebP" }
                }

                if props.preview.is_some() {
                    div { class: "card-actions",
                        button {
                            class: "button button-outline",
                            onclick: move |_| props.on_clear.call(()),
                            "Clear"
                        }
                    }
                }
            }
        }
    }
}
