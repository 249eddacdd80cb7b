//! Layout mode and the interaction capabilities it enables.

/// Viewer layout, chosen from the viewport width by the root component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    /// Desktop layout (default): narrow sidebar, drag reorder, delete buttons
    #[default]
    Wide,
    /// Narrow viewports: wider sidebar, swipe-to-delete, native picker
    Compact,
}

impl LayoutMode {
    /// Pick the layout from a "is the viewport narrow" flag.
    pub fn from_compact(is_compact: bool) -> Self {
        if is_compact { Self::Compact } else { Self::Wide }
    }

    pub fn is_compact(self) -> bool {
        matches!(self, Self::Compact)
    }

    /// Thumbnails can be reordered by pointer drag.
    pub fn allows_drag_reorder(self) -> bool {
        !self.is_compact()
    }

    /// Thumbnails can be deleted with a leftward touch swipe.
    pub fn allows_swipe_delete(self) -> bool {
        self.is_compact()
    }

    /// Each thumbnail carries a hover delete button.
    pub fn shows_delete_button(self) -> bool {
        !self.is_compact()
    }

    /// The first nine thumbnails show their digit hotkey.
    pub fn shows_hotkey_badges(self) -> bool {
        !self.is_compact()
    }

    /// Try `showOpenFilePicker` before the hidden file input.
    pub fn prefers_native_picker(self) -> bool {
        self.is_compact()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_compact() {
        assert_eq!(LayoutMode::from_compact(true), LayoutMode::Compact);
        assert_eq!(LayoutMode::from_compact(false), LayoutMode::Wide);
        assert_eq!(LayoutMode::default(), LayoutMode::Wide);
    }

    #[test]
    fn test_wide_capabilities() {
        let mode = LayoutMode::Wide;
        assert!(mode.allows_drag_reorder());
        assert!(mode.shows_delete_button());
        assert!(mode.shows_hotkey_badges());
        assert!(!mode.allows_swipe_delete());
        assert!(!mode.prefers_native_picker());
    }

    #[test]
    fn test_compact_capabilities() {
        let mode = LayoutMode::Compact;
        assert!(!mode.allows_drag_reorder());
        assert!(!mode.shows_delete_button());
        assert!(!mode.shows_hotkey_badges());
        assert!(mode.allows_swipe_delete());
        assert!(mode.prefers_native_picker());
    }
}
