//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::state::use_app_state;

/// A button that switches between light and dark themes.
///
/// Its label names the theme a click switches to. Persistence and chart
/// repaint are handled by the session.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = use_app_state();
    let label = move || state.theme.get().toggle_label();

    view! {
        <button class="theme-toggle" on:click=move |_| state.toggle_theme() title="Toggle theme">
            {label}
        </button>
    }
}
