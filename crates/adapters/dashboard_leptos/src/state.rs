//! Dashboard session shared through Leptos context.

use leptos::prelude::*;
use watchdog_app::config::DashboardConfig;
use watchdog_app::services::{ChartHandle, Dashboard, LiveSession, ThemeController};
use watchdog_domain::chart::ChartConfig;
use watchdog_domain::device::Device;
use watchdog_domain::section::Section;
use watchdog_domain::theme::Theme;

use crate::api::HttpApi;
use crate::browser::{self, BrowserTheme, IntervalScheduler};
use crate::chart::CanvasChart;

/// The session object with its browser adapters plugged in.
pub type Session = Dashboard<IntervalScheduler, CanvasChart, BrowserTheme>;

/// Handles to the session and the signals derived from it.
#[derive(Clone, Copy)]
pub struct AppState {
    session: StoredValue<Session, LocalStorage>,
    config: StoredValue<DashboardConfig>,
    api: StoredValue<HttpApi>,
    /// Visible section.
    pub section: RwSignal<Section>,
    /// Active color theme.
    pub theme: RwSignal<Theme>,
}

impl AppState {
    /// Build the session and apply the initial theme.
    pub fn new(config: DashboardConfig) -> Self {
        let live = LiveSession::new(IntervalScheduler, config.live_settings());
        let dashboard = Dashboard::new(live, ThemeController::init(BrowserTheme));
        let theme = dashboard.theme();
        Self {
            session: StoredValue::new_local(dashboard),
            api: StoredValue::new(HttpApi::new(config.api.clone())),
            config: StoredValue::new(config),
            section: RwSignal::new(Section::default()),
            theme: RwSignal::new(theme),
        }
    }

    /// Show `section`, updating the live session and the URL fragment.
    ///
    /// The section signal is notified even when the section is unchanged, so
    /// re-entering a section rebuilds it.
    pub fn navigate(&self, section: Section) {
        self.session.update_value(|session| {
            session.navigate(section);
        });
        browser::replace_fragment(section);
        self.section.set(section);
    }

    pub fn toggle_theme(&self) {
        if let Some(theme) = self.session.try_update_value(Session::toggle_theme) {
            self.theme.set(theme);
        }
    }

    /// Hand a freshly built chart to the live session.
    pub fn attach_chart(&self, device: &Device, chart: ChartHandle<CanvasChart>) {
        self.session.update_value(|session| session.live_mut().attach(device, chart));
    }

    pub fn chart_config(&self) -> ChartConfig {
        self.config.with_value(DashboardConfig::chart_config)
    }

    pub fn config(&self) -> DashboardConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }
}

/// Access the dashboard state from Leptos context.
///
/// Must be called within the tree rendered by [`App`](crate::App).
pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState not found in context")
}
