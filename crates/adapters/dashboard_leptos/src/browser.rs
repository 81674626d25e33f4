//! Browser-backed implementations of the timer and theme ports, plus small
//! `window` helpers (URL fragment, CSS variables, inline configuration).

use gloo_timers::callback::Interval;
use wasm_bindgen::JsValue;
use watchdog_app::config::DashboardConfig;
use watchdog_app::ports::{Scheduler, ThemeEnvironment};
use watchdog_domain::section::Section;
use watchdog_domain::theme::{ATTRIBUTE, STORAGE_KEY, Theme};

/// `id` of the optional `<script type="application/json">` element holding the configuration.
pub const CONFIG_ELEMENT_ID: &str = "watchdog-config";

/// Media query matching a light system color scheme.
const PREFERS_LIGHT: &str = "(prefers-color-scheme: light)";

/// Periodic timers backed by `setInterval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Timer = Interval;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, tick)
    }
}

/// Theme persisted in `localStorage` and shown via `data-theme` on `<html>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTheme;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl ThemeEnvironment for BrowserTheme {
    fn stored(&self) -> Option<String> {
        local_storage()?.get_item(STORAGE_KEY).ok().flatten()
    }

    fn persist(&self, theme: Theme) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_KEY, theme.as_str());
        }
    }

    fn prefers_light(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(PREFERS_LIGHT).ok().flatten())
            .is_some_and(|query| query.matches())
    }

    fn apply(&self, theme: Theme) {
        if let Some(html) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = html.set_attribute(ATTRIBUTE, theme.as_str());
        }
    }
}

/// The current URL fragment, including the leading `#` (empty if none).
pub fn current_fragment() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Rewrite the URL fragment to `section` without adding a history entry.
pub fn replace_fragment(section: Section) {
    let fragment = section.fragment();
    if current_fragment() == fragment {
        return;
    }
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&fragment));
    }
}

/// Computed value of a CSS custom property on the document root, if set.
pub fn css_var(name: &str) -> Option<String> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let style = window.get_computed_style(&root).ok().flatten()?;
    let value = style.get_property_value(name).ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Read the inline dashboard configuration.
///
/// A missing element yields the defaults. An invalid document is logged and
/// the defaults are used instead, so the dashboard always starts.
pub fn load_config() -> DashboardConfig {
    let Some(text) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
    else {
        return DashboardConfig::default();
    };
    match DashboardConfig::from_json(&text) {
        Ok(config) => {
            tracing::debug!(?config, "dashboard configuration loaded");
            config
        }
        Err(err) => {
            tracing::warn!(error = %err, "invalid dashboard configuration, using defaults");
            DashboardConfig::default()
        }
    }
}
