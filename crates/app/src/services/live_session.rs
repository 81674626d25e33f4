//! Live session — one simulated update loop per visible chart.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rand::SeedableRng;
use rand::rngs::StdRng;
use watchdog_domain::device::Device;
use watchdog_domain::simulator::{self, PowerSimulator};

use crate::ports::{ChartSurface, Scheduler};

/// Shared handle to a chart; the presentation layer and the session both hold one.
pub type ChartHandle<C> = Rc<RefCell<C>>;

/// Timing of the simulated update loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveSettings {
    /// Samples pushed synchronously when a loop starts.
    pub warmup_samples: usize,
    /// Period between samples.
    pub tick_ms: u32,
}

impl Default for LiveSettings {
    fn default() -> Self {
        Self {
            warmup_samples: simulator::WARMUP_SAMPLES,
            tick_ms: simulator::TICK_MS,
        }
    }
}

type RngSource = Box<dyn FnMut() -> StdRng>;

/// Owns the live charts and the timers feeding them.
///
/// Timers only exist while the session is running. [`start`](Self::start)
/// always stops first, so repeated starts never accumulate timers.
pub struct LiveSession<S: Scheduler, C> {
    scheduler: S,
    settings: LiveSettings,
    rng_source: RngSource,
    charts: Vec<ChartHandle<C>>,
    timers: Vec<S::Timer>,
    running: bool,
}

impl<S, C> LiveSession<S, C>
where
    S: Scheduler,
    C: ChartSurface + 'static,
{
    /// Create a stopped session with no charts. Simulators are seeded from OS entropy.
    pub fn new(scheduler: S, settings: LiveSettings) -> Self {
        Self {
            scheduler,
            settings,
            rng_source: Box::new(StdRng::from_entropy),
            charts: Vec::new(),
            timers: Vec::new(),
            running: false,
        }
    }

    /// Replace the source of simulator RNGs (one is drawn per started loop).
    #[must_use]
    pub fn with_rng_source(mut self, source: impl FnMut() -> StdRng + 'static) -> Self {
        self.rng_source = Box::new(source);
        self
    }

    /// Register a chart. If the session is running its loop starts immediately.
    pub fn attach(&mut self, device: &Device, chart: ChartHandle<C>) {
        if self.running {
            self.spawn_loop(&chart);
        }
        tracing::debug!(device = %device.id, running = self.running, "chart attached");
        self.charts.push(chart);
    }

    /// Start one loop per registered chart, cancelling any running ones first.
    pub fn start(&mut self) {
        self.stop();
        self.running = true;
        let charts: Vec<ChartHandle<C>> = self.charts.iter().map(Rc::clone).collect();
        for chart in &charts {
            self.spawn_loop(chart);
        }
        tracing::debug!(timers = self.timers.len(), "live session started");
    }

    /// Cancel every timer. Charts stay registered.
    pub fn stop(&mut self) {
        if !self.timers.is_empty() {
            tracing::debug!(timers = self.timers.len(), "live session stopped");
        }
        self.timers.clear();
        self.running = false;
    }

    /// Stop and forget every chart, ready for the live view to be rebuilt.
    pub fn reset(&mut self) {
        self.stop();
        self.charts.clear();
    }

    /// Repaint every chart, e.g. after the theme changed.
    pub fn redraw_all(&self) {
        for chart in &self.charts {
            chart.borrow_mut().redraw();
        }
    }

    #[must_use]
    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn chart_count(&self) -> usize {
        self.charts.len()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    fn spawn_loop(&mut self, chart: &ChartHandle<C>) {
        let mut sim = PowerSimulator::new((self.rng_source)());
        {
            let mut surface = chart.borrow_mut();
            for value in sim.warmup(self.settings.warmup_samples) {
                surface.push(value);
            }
        }
        let target: Weak<RefCell<C>> = Rc::downgrade(chart);
        let timer = self.scheduler.every(
            self.settings.tick_ms,
            Box::new(move || {
                if let Some(chart) = target.upgrade() {
                    chart.borrow_mut().push(sim.next_value());
                }
            }),
        );
        self.timers.push(timer);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;

    /// Records samples and repaint count.
    #[derive(Default)]
    pub(crate) struct RecordingChart {
        pub values: Vec<f64>,
        pub redraws: usize,
    }

    impl ChartSurface for RecordingChart {
        fn push(&mut self, value: f64) {
            self.values.push(value);
        }

        fn redraw(&mut self) {
            self.redraws += 1;
        }

        fn sample_count(&self) -> usize {
            self.values.len()
        }
    }

    /// Scheduler whose timers are counted while alive and can be fired by hand.
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        pub live: Rc<Cell<usize>>,
        pub ticks: Rc<RefCell<Vec<Weak<RefCell<Box<dyn FnMut()>>>>>>,
    }

    pub(crate) struct ManualTimer {
        live: Rc<Cell<usize>>,
        _tick: Rc<RefCell<Box<dyn FnMut()>>>,
    }

    impl Drop for ManualTimer {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    impl ManualScheduler {
        /// Fire every still-running timer once.
        pub fn fire_all(&self) {
            for tick in self.ticks.borrow().iter().filter_map(Weak::upgrade) {
                (tick.borrow_mut())();
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Timer = ManualTimer;

        fn every(&self, _period_ms: u32, tick: Box<dyn FnMut()>) -> ManualTimer {
            let tick = Rc::new(RefCell::new(tick));
            self.ticks.borrow_mut().push(Rc::downgrade(&tick));
            self.live.set(self.live.get() + 1);
            ManualTimer {
                live: Rc::clone(&self.live),
                _tick: tick,
            }
        }
    }

    pub(crate) fn session(
        scheduler: &ManualScheduler,
    ) -> LiveSession<ManualScheduler, RecordingChart> {
        let mut seed = 0;
        LiveSession::new(scheduler.clone(), LiveSettings::default()).with_rng_source(move || {
            seed += 1;
            StdRng::seed_from_u64(seed)
        })
    }

    fn chart() -> ChartHandle<RecordingChart> {
        Rc::new(RefCell::new(RecordingChart::default()))
    }

    #[test]
    fn should_start_one_timer_per_chart() {
        let scheduler = ManualScheduler::default();
        let mut live = session(&scheduler);
        live.attach(&Device::new("1"), chart());
        live.attach(&Device::new("2"), chart());

        live.start();

        assert_eq!(live.timer_count(), 2);
        assert_eq!(scheduler.live.get(), 2);
    }

    #[test]
    fn should_not_accumulate_timers_when_started_twice() {
        let scheduler = ManualScheduler::default();
        let mut live = session(&scheduler);
        live.attach(&Device::new("1"), chart());
        live.attach(&Device::new("2"), chart());

        live.start();
        live.start();

        assert_eq!(live.timer_count(), 2);
        assert_eq!(scheduler.live.get(), 2);
    }

    #[test]
    fn should_leave_no_pending_timers_after_stop() {
        let scheduler = ManualScheduler::default();
        let mut live = session(&scheduler);
        live.attach(&Device::new("1"), chart());
        live.start();

        live.stop();

        assert_eq!(live.timer_count(), 0);
        assert_eq!(scheduler.live.get(), 0);
        assert!(!live.is_running());
        assert_eq!(live.chart_count(), 1);
    }

    #[test]
    fn should_seed_warmup_samples_on_start() {
        let scheduler = ManualScheduler::default();
        let mut live = session(&scheduler);
        let handle = chart();
        live.attach(&Device::new("1"), Rc::clone(&handle));

        live.start();

        assert_eq!(handle.borrow().sample_count(), simulator::WARMUP_SAMPLES);
    }

    #[test]
    fn should_push_one_sample_per_tick() {
        let scheduler = ManualScheduler::default();
        let mut live = session(&scheduler);
        let handle = chart();
        live.attach(&Device::new("1"), Rc::clone(&handle));
        live.start();

        scheduler.fire_all();
        scheduler.fire_all();

        assert_eq!(handle.borrow().sample_count(), simulator::WARMUP_SAMPLES + 2);
    }

    #[test]
    fn should_not_push_after_stop() {
        let scheduler = ManualScheduler::default();
        let mut live = session(&scheduler);
        let handle = chart();
        live.attach(&Device::new("1"), Rc::clone(&handle));
        live.start();
        live.stop();

        scheduler.fire_all();

        assert_eq!(handle.borrow().sample_count(), simulator::WARMUP_SAMPLES);
    }

    #[test]
    fn should_start_loop_for_chart_attached_while_running() {
        let scheduler = ManualScheduler::default();
        let mut live = session(&scheduler);
        live.start();
        assert_eq!(live.timer_count(), 0);

        let handle = chart();
        live.attach(&Device::new("1"), Rc::clone(&handle));

        assert_eq!(live.timer_count(), 1);
        assert_eq!(handle.borrow().sample_count(), simulator::WARMUP_SAMPLES);
    }

    #[test]
    fn should_not_start_loop_for_chart_attached_while_stopped() {
        let scheduler = ManualScheduler::default();
        let mut live = session(&scheduler);
        let handle = chart();
        live.attach(&Device::new("1"), Rc::clone(&handle));
        assert_eq!(live.timer_count(), 0);
        assert_eq!(handle.borrow().sample_count(), 0);
    }

    #[test]
    fn should_forget_charts_on_reset() {
        let scheduler = ManualScheduler::default();
        let mut live = session(&scheduler);
        live.attach(&Device::new("1"), chart());
        live.start();

        live.reset();

        assert_eq!(live.chart_count(), 0);
        assert_eq!(scheduler.live.get(), 0);
    }

    #[test]
    fn should_redraw_every_chart_without_touching_samples() {
        let scheduler = ManualScheduler::default();
        let mut live = session(&scheduler);
        let a = chart();
        let b = chart();
        live.attach(&Device::new("1"), Rc::clone(&a));
        live.attach(&Device::new("2"), Rc::clone(&b));
        live.start();

        live.redraw_all();

        for handle in [&a, &b] {
            assert_eq!(handle.borrow().redraws, 1);
            assert_eq!(handle.borrow().sample_count(), simulator::WARMUP_SAMPLES);
        }
    }
}
