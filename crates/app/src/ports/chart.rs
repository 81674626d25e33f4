//! Chart port — a drawing surface fed with samples.

/// A live chart owned by the presentation layer.
pub trait ChartSurface {
    /// Append a reading stamped with the current time and repaint.
    fn push(&mut self, value: f64);

    /// Recompute layout from the current surface size and repaint.
    fn redraw(&mut self);

    /// Number of buffered samples.
    fn sample_count(&self) -> usize;
}
