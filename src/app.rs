//! Root application module.
//!
//! Decides the layout from the viewport and mounts the [`ImageViewer`]
//! inside an error boundary.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::ImageViewer;
use crate::config::{APP_NAME, compact_media_query};
use crate::models::LayoutMode;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

/// Root application component with error boundary.
///
/// This component:
/// - Tracks the compact breakpoint with a media query
/// - Passes the resulting [`LayoutMode`] down to the viewer
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    dom::set_title(APP_NAME);

    let is_compact = use_media_query(compact_media_query());
    let layout = Signal::derive(move || LayoutMode::from_compact(is_compact.get()));

    view! {
        <ErrorBoundary fallback=error_fallback>
            <ImageViewer layout=layout />
        </ErrorBoundary>
    }
}

/// Replaces the viewer when a child view fails to render.
fn error_fallback(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let messages = move || {
        errors
            .get()
            .into_iter()
            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
            .collect::<Vec<_>>()
    };

    view! {
        <div class=css::fallback role="alert">
            <h1>"Something went wrong"</h1>
            <ul class=css::errors>{messages}</ul>
            <button
                class=css::reload
                on:click=move |_| {
                    if let Some(window) = dom::window() {
                        let _ = window.location().reload();
                    }
                }
            >
                "Reload"
            </button>
        </div>
    }
}
