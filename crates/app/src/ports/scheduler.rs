//! Scheduler port — periodic timers.

/// Runs callbacks on a fixed period.
pub trait Scheduler {
    /// Handle to a running timer. Dropping it cancels the timer.
    type Timer;

    /// Call `tick` every `period_ms` milliseconds until the returned handle is dropped.
    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Timer;
}
