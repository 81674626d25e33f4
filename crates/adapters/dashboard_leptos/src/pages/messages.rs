//! Message log of the device host, polled while the section is visible.

use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use watchdog_app::services::MessageFeed;
use watchdog_domain::error::WatchdogError;
use watchdog_domain::submit::{SEND_MESSAGE, SubmitStatus};

use crate::state::use_app_state;

#[component]
pub fn Messages() -> impl IntoView {
    let state = use_app_state();
    let config = state.config();
    let messages = RwSignal::new(Vec::<String>::new());
    let draft = RwSignal::new(String::new());
    let status = RwSignal::new(SubmitStatus::Idle);
    let hint = RwSignal::new(None::<String>);

    // A failed poll keeps the current list.
    let refresh = move || {
        let feed = MessageFeed::new(state.api());
        spawn_local(async move {
            if let Some(latest) = feed.refresh().await {
                let _ = messages.try_set(latest);
            }
        });
    };
    refresh();
    let poller = StoredValue::new_local(Some(Interval::new(config.messages.poll_ms, refresh)));
    on_cleanup(move || {
        let _ = poller.try_update_value(Option::take);
    });

    let revert_ms = config.feedback.message_revert_ms;
    let send = move || {
        if status.get_untracked().is_busy() {
            return;
        }
        let text = draft.get_untracked();
        let feed = MessageFeed::new(state.api());
        hint.set(None);
        status.set(SubmitStatus::Sending);
        spawn_local(async move {
            let settled = match feed.send(&text).await {
                Ok(()) => {
                    let _ = draft.try_set(String::new());
                    refresh();
                    SubmitStatus::Sent
                }
                Err(WatchdogError::Validation(err)) => {
                    let _ = hint.try_set(Some(err.to_string()));
                    let _ = status.try_set(SubmitStatus::Idle);
                    return;
                }
                Err(WatchdogError::Network(err)) => {
                    let _ = hint.try_set(Some(err.user_message()));
                    SubmitStatus::Failed
                }
            };
            if status.try_set(settled).is_none() {
                TimeoutFuture::new(revert_ms).await;
                let _ = status.try_update(|current| *current = current.reverted(settled));
            }
        });
    };

    view! {
        <section id="messages">
            <h2>"Messages"</h2>
            <form
                class="send-box"
                on:submit=move |ev| {
                    ev.prevent_default();
                    send();
                }
            >
                <input
                    type="text"
                    placeholder="Message"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary" disabled=move || status.get().is_busy()>
                    {move || status.get().label(SEND_MESSAGE)}
                </button>
            </form>
            {move || hint.get().map(|text| view! { <p class="hint">{text}</p> })}
            {move || {
                let list = messages.get();
                if list.is_empty() {
                    view! { <p class="muted">"No messages yet."</p> }.into_any()
                } else {
                    view! {
                        <ul class="messages">
                            {list.into_iter().map(|text| view! { <li>{text}</li> }).collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
