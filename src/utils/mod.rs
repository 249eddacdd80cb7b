//! Utility modules for browser file handling.
//!
//! Provides:
//! - [`dom`] - Window access helpers
//! - [`files`] - `FileList` / drop conversion into [`ObjectUrl`](crate::models::ObjectUrl)s
//! - [`picker`] - Native `showOpenFilePicker` interop

pub mod dom;
pub mod files;
pub mod picker;
