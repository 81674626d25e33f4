use leptos::prelude::*;
use watchdog_domain::section::Section;

/// Landing section with quick links.
#[component]
pub fn Start() -> impl IntoView {
    view! {
        <section id="start" class="hero">
            <h1>"WATTCHdog"</h1>
            <p class="motto">"It watches over your energy."</p>
            <p class="links">
                <a class="btn btn-primary" href=Section::Live.fragment()>{Section::Live.title()}</a>
                <a class="btn btn-secondary" href=Section::Config.fragment()>{Section::Config.title()}</a>
            </p>
        </section>
    }
}
