//! Saving generated reports via Blob URLs.
//!
//! Dioxus has no built-in file download API. Reports are saved by
//! creating a `Blob`, generating an object URL for it, and clicking a
//! temporary `<a download>` element.
//!
//! Requires a browser environment (`wasm32-unknown-unknown` target).

use wasm_bindgen::{JsCast, JsValue};
use web_sys::BlobPropertyBag;

/// Errors that can occur when saving a report.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    Js(String),
}

impl From<JsValue> for SaveError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

/// Save `contents` as a downloaded file named `filename`.
///
/// # Errors
///
/// Returns [`SaveError::Js`] if any browser API call fails (Blob or
/// URL creation, anchor element construction).
pub fn save_text_file(contents: &str, filename: &str, mime: &str) -> Result<(), SaveError> {
    let window = web_sys::window().ok_or_else(|| SaveError::Js("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| SaveError::Js("no document".into()))?;
    let body = document
        .body()
        .ok_or_else(|| SaveError::Js("no document body".into()))?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(contents));

    let opts = BlobPropertyBag::new();
    opts.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &opts)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| SaveError::Js(format!("failed to cast element: {e:?}")))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    body.append_child(&anchor)?;
    anchor.click();

    // The download is already initiated; cleanup failures are not
    // reported as a failed save.
    let _ = body.remove_child(&anchor);
    let _ = web_sys::Url::revoke_object_url(&url);

    Ok(())
}
