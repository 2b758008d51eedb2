use log::{log_enabled, trace, Level};
use std::time::Instant;

/// Scoped wall-clock timer reported at `trace` level when dropped.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        if log_enabled!(Level::Trace) {
            trace!("start {label}");
        }
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            trace!("end {} ({} µs)", self.label, self.start.elapsed().as_micros());
        }
    }
}
