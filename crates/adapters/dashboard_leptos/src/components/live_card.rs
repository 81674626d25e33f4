//! One device's live power chart.

use std::rc::Rc;

use leptos::html::Canvas;
use leptos::prelude::*;
use watchdog_app::services::ChartHandle;
use watchdog_domain::device::Device;

use crate::chart::CanvasChart;
use crate::state::use_app_state;

/// Card with a device's badge, label, status and live chart.
///
/// The chart is created once the canvas is mounted and then joins the
/// running live session.
#[component]
pub fn LiveCard(device: Device) -> impl IntoView {
    let state = use_app_state();
    let canvas_ref = NodeRef::<Canvas>::new();
    let chart = StoredValue::new_local(None::<ChartHandle<CanvasChart>>);

    let attached = device.clone();
    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if chart.with_value(Option::is_some) {
            return;
        }
        match CanvasChart::create(canvas, state.chart_config()) {
            Ok(handle) => {
                state.attach_chart(&attached, Rc::clone(&handle));
                chart.set_value(Some(handle));
            }
            Err(err) => {
                tracing::warn!(device = %attached.id, error = %err, "chart unavailable");
            }
        }
    });

    let last_seen = device
        .last_seen
        .map(|ts| ts.format("%Y-%m-%d %H:%M:%S UTC").to_string());

    view! {
        <article class="card live-card">
            <header>
                <span class="badge">{device.name.clone()}</span>
                <h3>{device.label()}</h3>
                {(!device.online).then(|| view! { <span class="offline">"offline"</span> })}
            </header>
            <div class="chart-wrap">
                <canvas id=format!("pow-{}", device.id) node_ref=canvas_ref></canvas>
            </div>
            {last_seen.map(|ts| view! { <p class="muted">"Last seen: " {ts}</p> })}
        </article>
    }
}
