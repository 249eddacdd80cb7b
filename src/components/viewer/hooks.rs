//! Viewer state and lifecycle-scoped hooks.
//!
//! [`ViewerState`] bundles the signals shared by the sidebar, thumbnails,
//! picker and preview. It is provided as context by
//! [`ImageViewer`](super::ImageViewer) and read back with [`use_viewer`].

use leptos::{ev, prelude::*};
use web_sys::File;

use crate::core::{DragState, EntryId, Gallery, SwipeState, hotkey_slot};
use crate::models::{AcceptFilter, LayoutMode, ObjectUrl};
use crate::utils::files::to_object_urls;

/// Reactive state of one mounted viewer.
///
/// `Copy` because every field is a signal handle or a plain enum.
#[derive(Clone, Copy)]
pub struct ViewerState {
    /// Thumbnails in display order plus the active entry.
    pub gallery: RwSignal<Gallery<ObjectUrl>>,
    /// Pointer drag in progress (wide layout).
    pub drag: RwSignal<DragState>,
    /// Touch swipe in progress (compact layout).
    pub swipe: RwSignal<SwipeState>,
    /// Layout chosen by the embedding component.
    pub layout: Signal<LayoutMode>,
    /// Which picked or dropped files are taken in.
    pub accept: AcceptFilter,
}

impl ViewerState {
    pub fn new(layout: Signal<LayoutMode>, accept: AcceptFilter) -> Self {
        Self {
            gallery: RwSignal::new(Gallery::new()),
            drag: RwSignal::new(DragState::default()),
            swipe: RwSignal::new(SwipeState::default()),
            layout,
            accept,
        }
    }

    /// Append files to the end of the gallery, in order.
    pub fn add_files(&self, files: Vec<File>) {
        let images = to_object_urls(files, self.accept);
        if images.is_empty() {
            return;
        }
        self.gallery.update(|g| {
            g.append(images);
        });
    }

    /// Remove the entry at `index`, revoking its object URL.
    pub fn remove(&self, index: usize) {
        self.gallery.maybe_update(|g| g.remove(index).is_some());
    }

    /// Show the entry in the preview pane.
    pub fn activate(&self, id: EntryId) {
        if self.gallery.with_untracked(|g| g.active_id()) != Some(id) {
            self.gallery.maybe_update(|g| g.activate_id(id));
        }
    }

    /// Drop every entry. Used when the viewer unmounts.
    pub fn release_all(&self) {
        self.gallery.try_update(|g| g.clear());
    }
}

/// Get the [`ViewerState`] of the enclosing viewer.
pub fn use_viewer() -> ViewerState {
    use_context::<ViewerState>().expect("ViewerState must be provided")
}

/// Select gallery entries with the digit keys `1`..`9`.
///
/// The window listener lives exactly as long as the calling component.
pub fn use_digit_hotkeys(gallery: RwSignal<Gallery<ObjectUrl>>) {
    let handle = window_event_listener(ev::keypress, move |event| {
        if let Some(slot) = hotkey_slot(&event.key()) {
            gallery.maybe_update(|g| g.activate_slot(slot));
        }
    });
    on_cleanup(move || handle.remove());
}
