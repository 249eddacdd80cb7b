//! Preview pane showing the active image.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::hooks::use_viewer;
use crate::components::icons as ic;
use crate::config::PREVIEW_PLACEHOLDER;
use crate::models::ImageSource;

stylance::import_crate_style!(css, "src/components/viewer/preview.module.css");

#[component]
pub fn PreviewPane() -> impl IntoView {
    let state = use_viewer();

    let active = Memo::new(move |_| {
        state.gallery.with(|g| {
            g.active()
                .map(|e| (e.image().src().to_string(), e.image().label().to_string()))
        })
    });

    view! {
        <main class=css::pane aria-live="polite">
            {move || match active.get() {
                Some((src, label)) => view! {
                    <img src=src alt=label class=css::image />
                }.into_any(),
                None => view! {
                    <div class=css::placeholder>
                        <span class=css::placeholderIcon aria-hidden="true">
                            <Icon icon=ic::IMAGE />
                        </span>
                        <p>{PREVIEW_PLACEHOLDER}</p>
                    </div>
                }.into_any(),
            }}
        </main>
    }
}
