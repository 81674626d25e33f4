use leptos::prelude::*;

use crate::state::use_app_state;

#[component]
pub fn Footer() -> impl IntoView {
    let host = use_app_state().config().host.address;

    view! {
        <footer>
            <span>"WATTCHdog \u{2014} It watches over your energy."</span>
            {host.map(|address| view! { <span class="muted host">"Host: " {address}</span> })}
        </footer>
    }
}
