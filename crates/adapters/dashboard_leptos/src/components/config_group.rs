//! Per-device notification configuration form.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use watchdog_app::services::ConfigSubmission;
use watchdog_domain::config_form::{
    Channel, DeviceConfigForm, EVENT_SLOTS, RECIPIENT_SLOTS, RecipientField, TriggerMode,
};
use watchdog_domain::device::Device;
use watchdog_domain::submit::{SEND_CONFIGURATION, SubmitStatus};

use crate::state::use_app_state;

/// Recipients and event rules of one device, submitted as a single request.
///
/// The form state lives only as long as the component: leaving the section
/// discards unsent edits.
#[component]
pub fn ConfigGroup(device: Device) -> impl IntoView {
    let state = use_app_state();
    let form = RwSignal::new(DeviceConfigForm::new(device.id.clone()));
    let options = Memo::new(move |_| form.with(DeviceConfigForm::recipient_options));
    let status = RwSignal::new(SubmitStatus::Idle);
    let failure = RwSignal::new(None::<String>);
    let revert_ms = state.config().feedback.config_revert_ms;

    let submit = move |_| {
        if status.get_untracked().is_busy() {
            return;
        }
        status.set(SubmitStatus::Sending);
        failure.set(None);
        let snapshot = form.get_untracked();
        let submission = ConfigSubmission::new(state.api());
        spawn_local(async move {
            let result = submission.submit(&snapshot).await;
            // The group may be gone by now; its signals are then disposed.
            let _ = failure.try_set(result.as_ref().err().map(|err| err.user_message()));
            let settled = SubmitStatus::settled(&result);
            if status.try_set(settled).is_none() {
                TimeoutFuture::new(revert_ms).await;
                let _ = status.try_update(|current| *current = current.reverted(settled));
            }
        });
    };

    let recipients = (0..RECIPIENT_SLOTS)
        .map(|index| {
            view! {
                <div class="recipient">
                    <RecipientInputBox form=form index=index field=RecipientField::Name kind="text" placeholder="Name"/>
                    <RecipientInputBox form=form index=index field=RecipientField::Email kind="email" placeholder="Email"/>
                    <RecipientInputBox form=form index=index field=RecipientField::Phone kind="tel" placeholder="Phone"/>
                </div>
            }
        })
        .collect_view();

    let events = (0..EVENT_SLOTS)
        .map(|row| view! { <EventRow form=form options=options row=row/> })
        .collect_view();

    view! {
        <section class="card config-group">
            <header>
                <span class="badge">{device.name.clone()}</span>
                <h3>{device.label()}</h3>
            </header>
            <h4>"Recipients"</h4>
            {recipients}
            <h4>"Events"</h4>
            <table class="events">
                <thead>
                    <tr>
                        <th>"Recipient"</th>
                        <th>"Trigger"</th>
                        <th>"SMS"</th>
                        <th>"Email"</th>
                    </tr>
                </thead>
                <tbody>{events}</tbody>
            </table>
            <button
                type="button"
                class="btn btn-primary"
                disabled=move || status.get().is_busy()
                title=move || failure.get()
                on:click=submit
            >
                {move || status.get().label(SEND_CONFIGURATION)}
            </button>
        </section>
    }
}

/// One input of a recipient triple.
#[component]
fn RecipientInputBox(
    form: RwSignal<DeviceConfigForm>,
    index: usize,
    field: RecipientField,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let value = move || form.with(|f| f.recipients()[index].field(field).to_string());

    view! {
        <input
            type=kind
            placeholder=placeholder
            prop:value=value
            on:input=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| {
                    let _ = f.set_recipient_field(index, field, value);
                });
            }
        />
    }
}

/// One event rule: recipient selector, trigger mode and channel flags.
#[component]
fn EventRow(
    form: RwSignal<DeviceConfigForm>,
    options: Memo<Vec<String>>,
    row: usize,
) -> impl IntoView {
    let selected = move || form.with(|f| f.events()[row].recipient.clone());

    let recipient_options = move || {
        options
            .get()
            .into_iter()
            .map(|name| {
                let is_selected = {
                    let name = name.clone();
                    move || selected() == name
                };
                view! { <option value=name.clone() prop:selected=is_selected>{name}</option> }
            })
            .collect_view()
    };

    let trigger_options = TriggerMode::ALL
        .into_iter()
        .map(|mode| {
            let is_selected = move || form.with(|f| f.events()[row].trigger) == mode;
            view! { <option value=mode.as_str() prop:selected=is_selected>{mode.as_str()}</option> }
        })
        .collect_view();

    let channel = move |channel: Channel| {
        let checked = move || {
            form.with(|f| {
                let event = &f.events()[row];
                match channel {
                    Channel::Sms => event.sms,
                    Channel::Email => event.email,
                }
            })
        };
        view! {
            <input
                type="checkbox"
                prop:checked=checked
                on:change=move |ev| {
                    let enabled = event_target_checked(&ev);
                    form.update(|f| {
                        let _ = f.set_event_channel(row, channel, enabled);
                    });
                }
            />
        }
    };

    view! {
        <tr>
            <td>
                <select on:change=move |ev| {
                    let name = event_target_value(&ev);
                    form.update(|f| {
                        let _ = f.set_event_recipient(row, name);
                    });
                }>
                    <option value="" prop:selected=move || selected().is_empty()>"\u{2014}"</option>
                    {recipient_options}
                </select>
            </td>
            <td>
                <select on:change=move |ev| {
                    if let Ok(mode) = event_target_value(&ev).parse::<TriggerMode>() {
                        form.update(|f| {
                            let _ = f.set_event_trigger(row, mode);
                        });
                    }
                }>
                    {trigger_options}
                </select>
            </td>
            <td>{channel(Channel::Sms)}</td>
            <td>{channel(Channel::Email)}</td>
        </tr>
    }
}
