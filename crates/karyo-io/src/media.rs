//! Upload media validation and Blob URL plumbing.
//!
//! Accepted uploads are decoded once to confirm they really are images
//! and to capture their dimensions, then handed to the browser as an
//! object URL, the opaque string every downstream stage references.
//! URLs must be revoked via [`revoke_object_url`] when the image is
//! replaced.

use image::GenericImageView;
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Allowed file extensions for metaphase image uploads.
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tif", "tiff", "bmp", "webp"];

/// Errors that can occur while taking in an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    /// The filename extension is not an accepted image type.
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    /// The bytes did not decode as an image.
    #[error("failed to decode image: {0}")]
    Decode(String),

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    Js(String),
}

impl From<JsValue> for MediaError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

impl From<image::ImageError> for MediaError {
    fn from(err: image::ImageError) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Metadata extracted from an accepted upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageMeta {
    /// Decoded image width in pixels.
    pub width: u32,
    /// Decoded image height in pixels.
    pub height: u32,
    /// Size of the uploaded file in bytes.
    pub byte_len: usize,
}

/// Check whether a filename has an allowed image extension.
#[must_use]
pub fn has_allowed_extension(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        ALLOWED_EXTENSIONS
            .iter()
            .any(|a| a.eq_ignore_ascii_case(ext))
    })
}

/// MIME type for an accepted filename, by extension.
///
/// Falls back to `image/png` for unknown extensions; callers should
/// have validated via [`has_allowed_extension`] first.
#[must_use]
pub fn mime_for(name: &str) -> &'static str {
    match name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("tif" | "tiff") => "image/tiff",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}

/// Validate an upload and extract its metadata.
///
/// The extension is checked against [`ALLOWED_EXTENSIONS`], then the
/// bytes are decoded (format sniffed from content, not the extension)
/// so a renamed non-image cannot slip through.
///
/// # Errors
///
/// Returns [`MediaError::UnsupportedType`] for a disallowed extension
/// and [`MediaError::Decode`] when the bytes are not a decodable image.
pub fn inspect_image(name: &str, bytes: &[u8]) -> Result<ImageMeta, MediaError> {
    if !has_allowed_extension(name) {
        return Err(MediaError::UnsupportedType(name.to_owned()));
    }

    let decoded = image::load_from_memory(bytes)?;
    let (width, height) = decoded.dimensions();
    Ok(ImageMeta {
        width,
        height,
        byte_len: bytes.len(),
    })
}

/// Hand uploaded image bytes to the browser as a Blob object URL.
///
/// The returned URL is the opaque image reference carried by segments.
/// Revoke it via [`revoke_object_url`] when the image is replaced.
///
/// # Errors
///
/// Returns [`MediaError::Js`] if Blob or URL creation fails.
pub fn image_to_object_url(bytes: &[u8], mime: &str) -> Result<String, MediaError> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array);

    let opts = BlobPropertyBag::new();
    opts.set_type(mime);

    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    Ok(url)
}

/// Revoke a previously created object URL.
///
/// Best-effort: revocation failures are ignored, matching the
/// browser's own forgiving semantics for already-revoked URLs.
pub fn revoke_object_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Encode a tiny uniform PNG for decode tests.
    fn tiny_png() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(4, 3, image::Rgba([120, 120, 120, 255]));
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgba8,
        )
        .unwrap();
        buf
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(has_allowed_extension("metaphase.PNG"));
        assert!(has_allowed_extension("metaphase.jpeg"));
        assert!(!has_allowed_extension("metaphase.pdf"));
        assert!(!has_allowed_extension("metaphase"));
    }

    #[test]
    fn inspect_accepts_a_valid_png() {
        let meta = inspect_image("metaphase.png", &tiny_png()).unwrap();
        assert_eq!(meta.width, 4);
        assert_eq!(meta.height, 3);
        assert!(meta.byte_len > 0);
    }

    #[test]
    fn inspect_rejects_disallowed_extensions() {
        let result = inspect_image("notes.pdf", &tiny_png());
        assert!(matches!(result, Err(MediaError::UnsupportedType(_))));
    }

    #[test]
    fn inspect_rejects_renamed_non_images() {
        // A text file renamed to .png must fail the decode sniff.
        let result = inspect_image("fake.png", b"not an image at all");
        assert!(matches!(result, Err(MediaError::Decode(_))));
    }

    #[test]
    fn mime_follows_extension() {
        assert_eq!(mime_for("a.jpg"), "image/jpeg");
        assert_eq!(mime_for("a.TIFF"), "image/tiff");
        assert_eq!(mime_for("a.png"), "image/png");
        assert_eq!(mime_for("a.webp"), "image/webp");
    }
}
