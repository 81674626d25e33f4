use leptos::prelude::*;
use watchdog_app::services::DeviceListing;

use crate::components::{LiveCard, Loading};
use crate::state::use_app_state;

/// Live view: one simulated power chart per known device.
///
/// Every visit fetches the device list again; an unreachable backend shows
/// no cards.
#[component]
pub fn Live() -> impl IntoView {
    let state = use_app_state();
    let devices = LocalResource::new(move || {
        let listing = DeviceListing::new(state.api());
        async move { listing.list_or_empty().await }
    });

    view! {
        <section id="live">
            <h2>"Live view"</h2>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    devices.read().as_ref().map(|devices| {
                        if devices.is_empty() {
                            view! { <p class="muted">"No devices found."</p> }.into_any()
                        } else {
                            view! {
                                <div class="grid">
                                    {devices
                                        .iter()
                                        .map(|device| view! { <LiveCard device=device.clone()/> })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}
