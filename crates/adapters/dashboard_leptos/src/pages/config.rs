use leptos::prelude::*;
use watchdog_app::services::DeviceListing;

use crate::components::{ConfigGroup, Loading};
use crate::state::use_app_state;

/// Configuration editor: one form per known device, rebuilt on every visit.
#[component]
pub fn Config() -> impl IntoView {
    let state = use_app_state();
    let devices = LocalResource::new(move || {
        let listing = DeviceListing::new(state.api());
        async move { listing.list_or_empty().await }
    });

    view! {
        <section id="config">
            <h2>"Configuration"</h2>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    devices.read().as_ref().map(|devices| {
                        if devices.is_empty() {
                            view! { <p class="muted">"No devices found."</p> }.into_any()
                        } else {
                            devices
                                .iter()
                                .map(|device| view! { <ConfigGroup device=device.clone()/> })
                                .collect_view()
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}
