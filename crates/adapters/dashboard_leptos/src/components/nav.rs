use leptos::prelude::*;
use watchdog_domain::section::Section;

use crate::state::use_app_state;

#[component]
pub fn Nav() -> impl IntoView {
    let state = use_app_state();

    view! {
        <nav>
            <ul>
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        let class = move || {
                            if state.section.get() == section { "active" } else { "" }
                        };
                        // The fragment does not change when the current link is
                        // clicked again, so no hashchange fires; rebuild directly.
                        let reselect = move |_| {
                            if state.section.get_untracked() == section {
                                state.navigate(section);
                            }
                        };
                        view! {
                            <li>
                                <a href=section.fragment() class=class on:click=reselect>
                                    {section.title()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
