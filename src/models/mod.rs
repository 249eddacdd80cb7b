//! Data models and types for the viewer.
//!
//! Contains domain types for:
//! - [`ImageSource`], [`ObjectUrl`] - Displayable, self-releasing image references
//! - [`LayoutMode`] - Layout-dependent interaction capabilities
//! - [`AcceptFilter`] - Which picked or dropped files are taken in

mod accept;
mod image;
mod layout;

pub use accept::AcceptFilter;
pub use image::{ImageSource, ObjectUrl};
pub use layout::LayoutMode;
