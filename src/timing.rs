use std::sync::LazyLock;
use std::time::Instant;

/// Timing diagnostics are gated by the SPECIMEN_TIMING environment variable.
static ENABLED: LazyLock<bool> = LazyLock::new(|| std::env::var("SPECIMEN_TIMING").is_ok());

/// Check if timing is enabled
pub fn is_enabled() -> bool {
    *ENABLED
}

/// Log a timing message to stderr if timing is enabled
pub fn log(label: &str, duration: std::time::Duration) {
    if is_enabled() {
        eprintln!(
            "[TIMING] {}: {:.3}ms",
            label,
            duration.as_secs_f64() * 1000.0
        );
    }
}

/// A guard that logs timing when dropped
pub struct TimingGuard {
    label: &'static str,
    start: Instant,
}

impl TimingGuard {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        log(self.label, self.start.elapsed());
    }
}
