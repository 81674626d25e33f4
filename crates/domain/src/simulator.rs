//! Simulated active-power readings for the live view.
//!
//! A bounded random walk: small jitter on every step, with an occasional
//! large spike up or down, clamped to the meter's range.

use rand::Rng;

/// Samples pushed immediately when a simulation starts.
pub const WARMUP_SAMPLES: usize = 20;
/// Period between simulated samples.
pub const TICK_MS: u32 = 500;

/// Lowest reading the simulator produces, in watts.
pub const MIN_WATTS: f64 = 0.0;
/// Highest reading the simulator produces, in watts.
pub const MAX_WATTS: f64 = 1800.0;

const START_BASE: f64 = 350.0;
const START_SPREAD: f64 = 50.0;
const JITTER: f64 = 30.0;
const SPIKE_PROBABILITY: f64 = 0.03;
const SPIKE_BASE: f64 = 150.0;
const SPIKE_SPREAD: f64 = 250.0;

/// Random-walk power generator for one device.
#[derive(Debug)]
pub struct PowerSimulator<R> {
    rng: R,
    value: f64,
}

impl<R: Rng> PowerSimulator<R> {
    /// Start a walk somewhere in `[350, 400)` watts.
    pub fn new(mut rng: R) -> Self {
        let value = START_BASE + rng.gen_range(0.0..START_SPREAD);
        Self { rng, value }
    }

    /// Current value without advancing the walk.
    #[must_use]
    pub fn current(&self) -> f64 {
        self.value
    }

    /// Advance the walk by one step and return the new reading.
    pub fn next_value(&mut self) -> f64 {
        let mut v = self.value + (self.rng.gen_range(0.0..1.0) - 0.5) * JITTER;
        if self.rng.gen_bool(SPIKE_PROBABILITY) {
            let magnitude = SPIKE_BASE + self.rng.gen_range(0.0..SPIKE_SPREAD);
            v += if self.rng.gen_bool(0.5) {
                -magnitude
            } else {
                magnitude
            };
        }
        self.value = v.clamp(MIN_WATTS, MAX_WATTS);
        self.value
    }

    /// Produce `count` readings in a row.
    pub fn warmup(&mut self, count: usize) -> Vec<f64> {
        (0..count).map(|_| self.next_value()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn should_start_near_base_load() {
        for seed in 0..32 {
            let sim = PowerSimulator::new(StdRng::seed_from_u64(seed));
            assert!((START_BASE..START_BASE + START_SPREAD).contains(&sim.current()));
        }
    }

    #[test]
    fn should_stay_within_meter_range() {
        let mut sim = PowerSimulator::new(StdRng::seed_from_u64(7));
        for _ in 0..10_000 {
            let v = sim.next_value();
            assert!((MIN_WATTS..=MAX_WATTS).contains(&v));
        }
    }

    #[test]
    fn should_produce_requested_warmup_count() {
        let mut sim = PowerSimulator::new(StdRng::seed_from_u64(1));
        assert_eq!(sim.warmup(WARMUP_SAMPLES).len(), WARMUP_SAMPLES);
    }

    #[test]
    fn should_be_deterministic_for_same_seed() {
        let mut a = PowerSimulator::new(StdRng::seed_from_u64(99));
        let mut b = PowerSimulator::new(StdRng::seed_from_u64(99));
        assert_eq!(a.warmup(50), b.warmup(50));
    }

    #[test]
    fn should_move_by_at_most_jitter_without_spike() {
        let mut sim = PowerSimulator::new(StdRng::seed_from_u64(3));
        let mut previous = sim.current();
        for _ in 0..500 {
            let v = sim.next_value();
            let delta = (v - previous).abs();
            let clamped = v == MIN_WATTS || v == MAX_WATTS;
            assert!(delta <= JITTER / 2.0 || delta >= SPIKE_BASE - JITTER / 2.0 || clamped);
            previous = v;
        }
    }
}
