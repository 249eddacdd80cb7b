//! Image viewer widget.
//!
//! ## Layout
//!
//! - **Wide**: narrow sidebar (20%) with drag reorder, delete buttons and
//!   hotkey badges; preview pane on the right
//! - **Compact**: wider sidebar (33%) with swipe-to-delete and the native
//!   file picker
//!
//! Digit keys `1`..`9` select thumbnails in both layouts.

use leptos::prelude::*;

use super::hooks::{ViewerState, use_digit_hotkeys};
use super::{PreviewPane, Sidebar};
use crate::config::DEFAULT_ACCEPT;
use crate::models::{AcceptFilter, LayoutMode};

stylance::import_crate_style!(css, "src/components/viewer/viewer.module.css");

/// Image viewer with thumbnail sidebar and preview pane.
///
/// # Props
/// - `layout`: Layout decided by the embedding component
/// - `accept`: File filter for picked and dropped files
#[component]
pub fn ImageViewer(
    #[prop(into)] layout: Signal<LayoutMode>,
    #[prop(default = DEFAULT_ACCEPT)] accept: AcceptFilter,
) -> impl IntoView {
    let state = ViewerState::new(layout, accept);
    provide_context(state);

    use_digit_hotkeys(state.gallery);

    // Revoke every remaining object URL on unmount
    on_cleanup(move || state.release_all());

    view! {
        <div class=css::viewer>
            <Sidebar />
            <PreviewPane />
        </div>
    }
}
