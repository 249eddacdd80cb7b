//! A single sidebar thumbnail.
//!
//! Handles preview activation (click and hover), drag reordering in the wide
//! layout, swipe-to-delete in the compact layout, the delete button and the
//! hotkey badge.

use leptos::{
    ev::{DragEvent, MouseEvent, TouchEvent},
    prelude::*,
};
use leptos_icons::Icon;
use web_sys::HtmlImageElement;

use super::hooks::use_viewer;
use crate::components::icons as ic;
use crate::config::{drag, swipe};
use crate::core::{EntryId, SwipeState, hotkey_label};
use crate::models::ImageSource;

stylance::import_crate_style!(css, "src/components/viewer/thumbnail.module.css");

#[component]
pub fn Thumbnail(id: EntryId) -> impl IntoView {
    let state = use_viewer();
    let layout = state.layout;

    // The URL of an entry never changes, so read it once
    let (src, label) = state
        .gallery
        .with_untracked(|g| {
            g.entry(id)
                .map(|e| (e.image().src().to_string(), e.image().label().to_string()))
        })
        .unwrap_or_default();

    let position = Memo::new(move |_| state.gallery.with(|g| g.position(id)));
    let is_active = Memo::new(move |_| state.gallery.with(|g| g.active_id() == Some(id)));
    let is_dragging = Memo::new(move |_| {
        let source = state.drag.with(|d| d.source());
        source.is_some() && source == position.get()
    });

    let activate = move |_: MouseEvent| state.activate(id);

    // --- Drag reordering (wide layout) ---

    let on_drag_start = move |event: DragEvent| {
        if !layout.get_untracked().allows_drag_reorder() {
            return;
        }
        let Some(index) = position.get_untracked() else {
            return;
        };
        state.drag.update(|d| d.start(index));

        if let Some(transfer) = event.data_transfer() {
            transfer.set_effect_allowed(drag::EFFECT_ALLOWED);
            if let Ok(ghost) = HtmlImageElement::new() {
                ghost.set_src(drag::GHOST_IMAGE);
                transfer.set_drag_image(&ghost, 0, 0);
            }
        }
    };

    let on_drag_over = move |event: DragEvent| {
        if !layout.get_untracked().allows_drag_reorder() {
            return;
        }
        event.prevent_default();
        let Some(index) = position.get_untracked() else {
            return;
        };

        let mut drag = state.drag.get_untracked();
        if let Some((from, to)) = drag.over(index) {
            state.drag.set(drag);
            state.gallery.maybe_update(|g| g.move_entry(from, to));
        }
    };

    let on_drag_end = move |_: DragEvent| {
        state.drag.update(|d| d.end());
    };

    // --- Swipe to delete (compact layout) ---

    let on_touch_start = move |event: TouchEvent| {
        if !layout.get_untracked().allows_swipe_delete() {
            return;
        }
        let (Some(index), Some(touch)) = (position.get_untracked(), event.target_touches().get(0))
        else {
            return;
        };
        state.swipe.update(|s| s.start(index, touch.client_x() as f64));
    };

    let on_touch_move = move |event: TouchEvent| {
        if state.swipe.with_untracked(|s| s.index().is_none()) {
            return;
        }
        if let Some(touch) = event.target_touches().get(0) {
            state.swipe.update(|s| s.track(touch.client_x() as f64));
        }
    };

    let on_touch_end = move |_: TouchEvent| {
        if state.swipe.with_untracked(|s| s.index().is_none()) {
            return;
        }
        if let Some(index) = state.swipe.try_update(|s| s.finish()).flatten() {
            state.remove(index);
        }
    };

    let on_touch_cancel = move |_: TouchEvent| {
        state.swipe.set(SwipeState::Idle);
    };

    let swipe_style = move || {
        let gesture = state.swipe.get();
        let swiping_here = gesture.index().is_some() && gesture.index() == position.get();
        if swiping_here && gesture.distance().is_some() {
            format!(
                "transform: translateX({}px); opacity: {}; transition: {};",
                gesture.offset(),
                gesture.opacity(),
                swipe::TRANSITION
            )
        } else {
            String::new()
        }
    };

    // --- Delete button and hotkey badge (wide layout) ---

    let on_delete = move |event: MouseEvent| {
        event.stop_propagation();
        if let Some(index) = position.get_untracked() {
            state.remove(index);
        }
    };

    let badge = move || {
        if !layout.get().shows_hotkey_badges() {
            return None;
        }
        position.get().and_then(hotkey_label)
    };

    let item_class = move || {
        let mut class = css::item.to_string();
        if is_active.get() {
            class.push(' ');
            class.push_str(css::itemActive);
        }
        if is_dragging.get() {
            class.push(' ');
            class.push_str(css::itemDragging);
        }
        class
    };

    let alt = format!("Selected image: {}", label);

    view! {
        <div
            class=item_class
            role="listitem"
            style=swipe_style
            draggable=move || if layout.get().allows_drag_reorder() { "true" } else { "false" }
            on:dragstart=on_drag_start
            on:dragover=on_drag_over
            on:dragend=on_drag_end
            on:touchstart=on_touch_start
            on:touchmove=on_touch_move
            on:touchend=on_touch_end
            on:touchcancel=on_touch_cancel
        >
            <img
                src=src
                alt=alt
                class=css::image
                draggable="false"
                on:click=activate
                on:mouseenter=activate
            />
            <Show when=move || layout.get().shows_delete_button()>
                <button
                    class=css::deleteButton
                    on:click=on_delete
                    title="Remove"
                    aria-label="Remove image"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </Show>
            {move || badge().map(|key| view! {
                <kbd class=css::badge aria-hidden="true">{key}</kbd>
            })}
        </div>
    }
}
