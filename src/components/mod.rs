//! UI components built with Leptos.
//!
//! - [`viewer`] - Image viewer widget (sidebar, thumbnails, preview, picker)
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod viewer;

pub use viewer::ImageViewer;
