//! Dioxus UI components for karyo.
//!
//! Provides the header navigation, metaphase image upload zone,
//! segmentation and classification result views, the history table,
//! and the dashboard landing page.

mod classification;
mod dashboard;
mod header;
mod history;
mod segmentation;
mod upload;

pub use classification::ClassificationView;
pub use dashboard::Dashboard;
pub use header::Header;
pub use history::HistoryView;
pub use segmentation::SegmentationView;
pub use upload::ImageUpload;
