//! karyo-io: Browser I/O and Dioxus component library.
//!
//! Handles image uploads and validation, Blob object URLs, report
//! downloads, toast notifications, and provides the reusable UI
//! components for the karyo web application.

pub mod components;
pub mod media;
pub mod page;
pub mod save;
pub mod stage;
pub mod toast;

pub use components::{
    ClassificationView, Dashboard, Header, HistoryView, ImageUpload, SegmentationView,
};
pub use media::{ImageMeta, MediaError};
pub use page::Page;
pub use stage::StageId;
pub use toast::{Toast, ToastHost, Toasts, use_toasts};
