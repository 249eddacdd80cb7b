//! Image viewer UI components.
//!
//! Components:
//! - [`ImageViewer`] - Root widget, owns the [`ViewerState`](hooks::ViewerState)
//! - [`Sidebar`] - Thumbnail list and file picker
//! - [`PreviewPane`] - Enlarged active image

mod hooks;
mod picker;
mod preview;
mod sidebar;
mod thumbnail;
#[allow(clippy::module_inception)]
mod viewer;

pub use preview::PreviewPane;
pub use sidebar::Sidebar;
pub use viewer::ImageViewer;
