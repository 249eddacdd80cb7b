//! File selection button.
//!
//! Tries the native multi-file picker where the layout asks for it and the
//! browser supports it; otherwise, or on any picker failure, clicks a hidden
//! `<input type="file" multiple>`.

use leptos::{ev::MouseEvent, html, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::hooks::use_viewer;
use crate::components::icons as ic;
use crate::config::SELECT_LABEL;
use crate::utils::{files::file_list_to_vec, picker};

stylance::import_crate_style!(css, "src/components/viewer/picker.module.css");

#[component]
pub fn SelectButton() -> impl IntoView {
    let state = use_viewer();
    let input_ref = NodeRef::<html::Input>::new();

    let open_file_input = move || {
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    let on_click = move |_: MouseEvent| {
        if !(state.layout.get_untracked().prefers_native_picker() && picker::is_available()) {
            open_file_input();
            return;
        }

        let accept = state.accept;
        spawn_local(async move {
            match picker::pick_files(accept).await {
                Ok(files) => state.add_files(files),
                Err(e) => {
                    let msg = format!("Native picker unavailable, using file input: {}", e);
                    if e.is_unexpected() {
                        web_sys::console::warn_1(&msg.into());
                    } else {
                        web_sys::console::log_1(&msg.into());
                    }
                    open_file_input();
                }
            }
        });
    };

    let on_change = move |_: leptos::ev::Event| {
        let Some(input) = input_ref.get_untracked() else {
            return;
        };
        if let Some(files) = input.files() {
            state.add_files(file_list_to_vec(&files));
        }
        // Reset so choosing the same files again still fires `change`
        input.set_value("");
    };

    view! {
        <input
            node_ref=input_ref
            type="file"
            class=css::hiddenInput
            accept=state.accept.input_accept()
            multiple=true
            tabindex="-1"
            aria-hidden="true"
            on:change=on_change
        />
        <button class=css::selectButton on:click=on_click>
            <Icon icon=ic::PLUS />
            <span>{SELECT_LABEL}</span>
        </button>
    }
}
