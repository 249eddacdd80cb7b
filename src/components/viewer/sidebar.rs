//! Sidebar with the ordered thumbnail list and the file picker.
//!
//! Also accepts files dropped from the operating system.

use leptos::{ev::DragEvent, prelude::*};

use super::hooks::use_viewer;
use super::picker::SelectButton;
use super::thumbnail::Thumbnail;
use crate::utils::files::dropped_files;

stylance::import_crate_style!(css, "src/components/viewer/sidebar.module.css");

#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_viewer();

    // Only the id list is tracked here; thumbnails track their own position
    let ids = Memo::new(move |_| state.gallery.with(|g| g.ids()));

    let sidebar_class = move || {
        if state.layout.get().is_compact() {
            format!("{} {}", css::sidebar, css::sidebarCompact)
        } else {
            format!("{} {}", css::sidebar, css::sidebarWide)
        }
    };

    // Allow dropping files from the desktop anywhere on the list
    let on_drag_over = move |event: DragEvent| {
        event.prevent_default();
    };

    let on_drop = move |event: DragEvent| {
        event.prevent_default();
        // Dropping a dragged thumbnail ends a reorder; dragend resets the state
        if !state.drag.with_untracked(|d| d.accepts_file_drop()) {
            return;
        }
        let files = event
            .data_transfer()
            .map(|transfer| dropped_files(&transfer))
            .unwrap_or_default();
        if !files.is_empty() {
            state.add_files(files);
        }
    };

    let list_label = move || format!("Selected images ({})", state.gallery.with(|g| g.len()));

    view! {
        <aside class=sidebar_class aria-label=list_label>
            <div
                class=css::list
                role="list"
                on:dragover=on_drag_over
                on:drop=on_drop
            >
                <For
                    each=move || ids.get()
                    key=|id| *id
                    children=move |id| view! { <Thumbnail id=id /> }
                />
            </div>
            <div class=css::footer>
                <SelectButton />
            </div>
        </aside>
    }
}
