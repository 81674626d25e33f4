//! Dashboard session — the explicit state shared by navigation, theme and live view.

use watchdog_domain::section::Section;
use watchdog_domain::theme::Theme;

use crate::ports::{ChartSurface, Scheduler, ThemeEnvironment};
use crate::services::live_session::LiveSession;
use crate::services::navigator::{Navigator, Transition};
use crate::services::theme::ThemeController;

/// Everything that outlives a single section render.
pub struct Dashboard<S: Scheduler, C, E> {
    navigator: Navigator,
    live: LiveSession<S, C>,
    theme: ThemeController<E>,
}

impl<S, C, E> Dashboard<S, C, E>
where
    S: Scheduler,
    C: ChartSurface + 'static,
    E: ThemeEnvironment,
{
    pub fn new(live: LiveSession<S, C>, theme: ThemeController<E>) -> Self {
        Self {
            navigator: Navigator::default(),
            live,
            theme,
        }
    }

    /// Show `section`.
    ///
    /// Entering the live view drops the previous charts and starts a fresh
    /// session that charts join as they are built; leaving it stops every
    /// live timer.
    pub fn navigate(&mut self, section: Section) -> Transition {
        let transition = self.navigator.go(section);
        if transition.enters(Section::Live) {
            self.live.reset();
            self.live.start();
        } else if transition.leaves(Section::Live) {
            self.live.stop();
        }
        tracing::info!(from = %transition.from, to = %transition.to, "navigated");
        transition
    }

    #[must_use]
    pub fn section(&self) -> Section {
        self.navigator.current()
    }

    /// Apply `theme` and repaint every live chart with its colors.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.theme.apply(theme);
        self.live.redraw_all();
    }

    /// Flip the theme and repaint every live chart.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.theme.toggle();
        self.live.redraw_all();
        theme
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    #[must_use]
    pub fn live(&self) -> &LiveSession<S, C> {
        &self.live
    }

    pub fn live_mut(&mut self) -> &mut LiveSession<S, C> {
        &mut self.live
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use watchdog_domain::device::Device;
    use watchdog_domain::simulator::WARMUP_SAMPLES;

    use crate::services::live_session::tests::{ManualScheduler, RecordingChart, session};
    use crate::services::theme::tests::MemoryTheme;

    type TestDashboard = Dashboard<ManualScheduler, RecordingChart, MemoryTheme>;

    fn dashboard(scheduler: &ManualScheduler) -> TestDashboard {
        Dashboard::new(
            session(scheduler),
            ThemeController::init(MemoryTheme::default()),
        )
    }

    fn attach(dash: &mut TestDashboard, id: &str) -> Rc<RefCell<RecordingChart>> {
        let chart = Rc::new(RefCell::new(RecordingChart::default()));
        dash.live_mut().attach(&Device::new(id), Rc::clone(&chart));
        chart
    }

    #[test]
    fn should_start_live_session_when_entering_live() {
        let scheduler = ManualScheduler::default();
        let mut dash = dashboard(&scheduler);

        dash.navigate(Section::Live);
        attach(&mut dash, "111111");

        assert!(dash.live().is_running());
        assert_eq!(scheduler.live.get(), 1);
    }

    #[test]
    fn should_stop_timers_when_leaving_live() {
        let scheduler = ManualScheduler::default();
        let mut dash = dashboard(&scheduler);
        dash.navigate(Section::Live);
        attach(&mut dash, "1");
        attach(&mut dash, "2");

        dash.navigate(Section::Config);

        assert_eq!(scheduler.live.get(), 0);
        assert_eq!(dash.section(), Section::Config);
    }

    #[test]
    fn should_rebuild_charts_when_reentering_live() {
        let scheduler = ManualScheduler::default();
        let mut dash = dashboard(&scheduler);
        dash.navigate(Section::Live);
        attach(&mut dash, "1");
        dash.navigate(Section::Start);

        dash.navigate(Section::Live);

        assert_eq!(dash.live().chart_count(), 0);
        assert_eq!(scheduler.live.get(), 0);
    }

    #[test]
    fn should_redraw_both_charts_on_theme_toggle_without_losing_samples() {
        let scheduler = ManualScheduler::default();
        let mut dash = dashboard(&scheduler);
        dash.navigate(Section::Live);
        let a = attach(&mut dash, "1");
        let b = attach(&mut dash, "2");
        let before = dash.theme();

        let after = dash.toggle_theme();

        assert_eq!(after, before.toggled());
        for chart in [&a, &b] {
            assert_eq!(chart.borrow().redraws, 1);
            assert_eq!(chart.borrow().values.len(), WARMUP_SAMPLES);
        }
    }

    #[test]
    fn should_redraw_charts_when_theme_applied_explicitly() {
        let scheduler = ManualScheduler::default();
        let mut dash = dashboard(&scheduler);
        dash.navigate(Section::Live);
        let chart = attach(&mut dash, "1");

        dash.apply_theme(Theme::Light);

        assert_eq!(dash.theme(), Theme::Light);
        assert_eq!(chart.borrow().redraws, 1);
    }
}
