//! Samples and the fixed-capacity rolling buffer backing a live chart.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Default number of samples a live chart keeps.
pub const DEFAULT_CAPACITY: usize = 120;

/// A single power reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Milliseconds since the UNIX epoch.
    pub timestamp: i64,
    pub value: f64,
}

impl Sample {
    #[must_use]
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Bounded FIFO of samples in chronological order.
///
/// Pushing beyond capacity evicts the oldest sample. Timestamps never go
/// backwards: a sample older than the newest buffered one is re-stamped with
/// the newest timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingBuffer {
    capacity: usize,
    samples: VecDeque<Sample>,
}

impl Default for RollingBuffer {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            samples: VecDeque::with_capacity(DEFAULT_CAPACITY),
        }
    }
}

impl RollingBuffer {
    /// Create an empty buffer holding at most `capacity` samples.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, ValidationError> {
        if capacity == 0 {
            return Err(ValidationError::ZeroCapacity);
        }
        Ok(Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        })
    }

    /// Append a sample, evicting the oldest one when full.
    pub fn push(&mut self, mut sample: Sample) {
        if let Some(last) = self.samples.back() {
            sample.timestamp = sample.timestamp.max(last.timestamp);
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Samples from oldest to newest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Sample> {
        self.samples.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// `(oldest, newest)` timestamps, or `None` when empty.
    #[must_use]
    pub fn time_span(&self) -> Option<(i64, i64)> {
        Some((self.samples.front()?.timestamp, self.samples.back()?.timestamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: usize, count: usize) -> RollingBuffer {
        let mut buffer = RollingBuffer::new(capacity).unwrap();
        for i in 0..count {
            buffer.push(Sample::new(i as i64, i as f64));
        }
        buffer
    }

    #[test]
    fn should_reject_zero_capacity() {
        assert_eq!(RollingBuffer::new(0), Err(ValidationError::ZeroCapacity));
    }

    #[test]
    fn should_default_to_120_samples() {
        assert_eq!(RollingBuffer::default().capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn should_never_exceed_capacity() {
        let mut buffer = RollingBuffer::new(5).unwrap();
        for i in 0..50 {
            buffer.push(Sample::new(i, 0.0));
            assert!(buffer.len() <= 5);
        }
    }

    #[test]
    fn should_keep_last_capacity_values_in_order_when_overflowing() {
        let buffer = filled(120, 120 + 7);
        let values: Vec<f64> = buffer.iter().map(|s| s.value).collect();
        let expected: Vec<f64> = (7..127).map(|i| i as f64).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn should_report_time_span_of_buffered_samples() {
        let buffer = filled(3, 10);
        assert_eq!(buffer.time_span(), Some((7, 9)));
        assert_eq!(RollingBuffer::default().time_span(), None);
    }

    #[test]
    fn should_clamp_timestamps_that_go_backwards() {
        let mut buffer = RollingBuffer::new(4).unwrap();
        buffer.push(Sample::new(100, 1.0));
        buffer.push(Sample::new(90, 2.0));
        assert_eq!(buffer.latest(), Some(&Sample::new(100, 2.0)));
    }
}
