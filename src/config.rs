//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the viewer.
//! Behavior that depends on the viewport is not decided here; see
//! [`LayoutMode`](crate::models::LayoutMode), which the root component
//! derives from [`compact_media_query`] and passes down.

use crate::models::AcceptFilter;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name (used for the document title).
pub const APP_NAME: &str = "pixshelf";

// =============================================================================
// Layout Configuration
// =============================================================================

/// Viewport width (px) at or below which the compact layout is used.
pub const COMPACT_BREAKPOINT_PX: u32 = 1000;

/// Media query matching the compact layout.
pub fn compact_media_query() -> String {
    format!("(max-width: {}px)", COMPACT_BREAKPOINT_PX)
}

// =============================================================================
// Gesture Configuration
// =============================================================================

/// Swipe gesture tuning for the compact layout.
pub mod swipe {
    /// Leftward distance (px) a swipe must exceed to delete an entry.
    pub const DELETE_THRESHOLD_PX: f64 = 50.0;
    /// Maximum visual travel (px) of a swiped thumbnail.
    pub const MAX_TRAVEL_PX: f64 = 200.0;
    /// CSS transition applied while a thumbnail follows the finger.
    pub const TRANSITION: &str = "transform 0.1s ease-out";
}

/// Drag-and-drop configuration for the wide layout.
pub mod drag {
    /// `DataTransfer.effectAllowed` used for reordering.
    pub const EFFECT_ALLOWED: &str = "move";
    /// Transparent 1x1 GIF used as the drag ghost so only the live reorder is visible.
    pub const GHOST_IMAGE: &str =
        "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";
}

// =============================================================================
// Keyboard Configuration
// =============================================================================

/// Number of entries reachable through digit hotkeys (`1`..`9`).
pub const HOTKEY_SLOTS: usize = 9;

// =============================================================================
// File Acquisition
// =============================================================================

/// Accept filter used when the widget is mounted without an explicit one.
pub const DEFAULT_ACCEPT: AcceptFilter = AcceptFilter::Images;

/// File extensions advertised to the native picker for [`AcceptFilter::Images`].
pub const IMAGE_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".webp", ".bmp", ".svg", ".avif", ".ico",
];

// =============================================================================
// UI Text
// =============================================================================

/// Label of the file selection button.
pub const SELECT_LABEL: &str = "Select Images";

/// Placeholder shown in the preview pane when nothing is active.
pub const PREVIEW_PLACEHOLDER: &str = "Select an image to display";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder
/// - `Lucide` - Minimal, thin strokes (default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_media_query() {
        assert_eq!(compact_media_query(), "(max-width: 1000px)");
    }

    #[test]
    fn test_swipe_threshold_within_travel() {
        assert!(swipe::DELETE_THRESHOLD_PX < swipe::MAX_TRAVEL_PX);
    }

    #[test]
    fn test_image_extensions_are_dotted() {
        assert!(IMAGE_EXTENSIONS.iter().all(|ext| ext.starts_with('.')));
    }
}
