use leptos::ev;
use leptos::prelude::*;
use watchdog_domain::section::Section;

pub mod api;
pub mod browser;
pub mod chart;
mod components;
mod pages;
mod state;

use components::{Footer, Nav, ThemeToggle};
use pages::{Config, Live, Messages, Start};
use state::AppState;

fn fragment_section() -> Section {
    Section::from_fragment(&browser::current_fragment())
}

/// Root application component.
///
/// The URL fragment is the only navigation state: the initial fragment picks
/// the first section and every `hashchange` (menu link, back/forward, manual
/// edit) navigates again.
#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new(browser::load_config());
    provide_context(state);

    state.navigate(fragment_section());
    let _hashchange = window_event_listener(ev::hashchange, move |_| {
        state.navigate(fragment_section());
    });

    let page = move || match state.section.get() {
        Section::Start => view! { <Start/> }.into_any(),
        Section::Live => view! { <Live/> }.into_any(),
        Section::Config => view! { <Config/> }.into_any(),
        Section::Messages => view! { <Messages/> }.into_any(),
    };

    view! {
        <header class="topbar">
            <span class="brand">"WATTCHdog"</span>
            <Nav/>
            <ThemeToggle/>
        </header>
        <main>{page}</main>
        <Footer/>
    }
}
