use leptos::prelude::*;

/// Spinner shown while the device list is being fetched.
#[component]
pub fn Loading(
    #[prop(default = "Loading devices\u{2026}".into(), into)] message: String,
) -> impl IntoView {
    view! {
        <p class="loading">
            <span class="spinner"></span>
            {message}
        </p>
    }
}
