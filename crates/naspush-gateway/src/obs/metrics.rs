//! Minimal metrics registry for the relay.
//!
//! No external dependencies are used; counters and histograms are plain
//! atomics. Histogram buckets are fixed in microseconds to avoid floating
//! point math. The uptime gauge is computed at render time from the process
//! start instant.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use super::MetricsSink;

#[derive(Default)]
pub struct Counter {
    value: AtomicU64,
}

impl Counter {
    /// Increment by 1.
    pub fn inc(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} counter", name);
        let _ = writeln!(out, "{} {}", name, self.get());
    }
}

// Fixed buckets in microseconds (µs)
// 100us, 500us, 1ms, 5ms, 10ms, 50ms, 100ms, 500ms, 1s
const BUCKETS_MICROS: [u64; 9] =
    [100, 500, 1_000, 5_000, 10_000, 50_000, 100_000, 500_000, 1_000_000];

pub struct Histogram {
    count: AtomicU64,
    sum: AtomicU64,
    buckets: [AtomicU64; 9],
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            count: AtomicU64::new(0),
            sum: AtomicU64::new(0),
            buckets: std::array::from_fn(|_| AtomicU64::new(0)),
        }
    }
}

impl Histogram {
    /// Observe a duration and increment cumulative buckets (microsecond scale).
    pub fn observe(&self, duration: Duration) {
        let micros = duration.as_micros() as u64;

        self.count.fetch_add(1, Ordering::Relaxed);
        self.sum.fetch_add(micros, Ordering::Relaxed);

        for (i, &b) in BUCKETS_MICROS.iter().enumerate() {
            if micros <= b {
                self.buckets[i].fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Render in Prometheus text exposition format (unit: microseconds).
    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} histogram", name);
        for (i, &le) in BUCKETS_MICROS.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}_bucket{{le=\"{}\"}} {}",
                name,
                le,
                self.buckets[i].load(Ordering::Relaxed)
            );
        }
        let count = self.count();
        let _ = writeln!(out, "{}_bucket{{le=\"+Inf\"}} {}", name, count);
        let _ = writeln!(out, "{}_sum {}", name, self.sum.load(Ordering::Relaxed));
        let _ = writeln!(out, "{}_count {}", name, count);
    }
}

/// All instruments the relay records, plus the process start instant for the
/// derived uptime gauge.
pub struct RelayMetrics {
    started: Instant,
    pub requests_total: Counter,
    pub requests_failed_total: Counter,
    pub sends_total: Counter,
    pub sends_failed_total: Counter,
    pub request_duration: Histogram,
    pub send_duration: Histogram,
}

impl Default for RelayMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl RelayMetrics {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            requests_total: Counter::default(),
            requests_failed_total: Counter::default(),
            sends_total: Counter::default(),
            sends_failed_total: Counter::default(),
            request_duration: Histogram::default(),
            send_duration: Histogram::default(),
        }
    }

    /// Seconds since process start, computed on demand.
    pub fn uptime_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }

    /// Render all registered metrics.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.requests_total.render("naspush_requests_total", &mut out);
        self.requests_failed_total
            .render("naspush_requests_failed_total", &mut out);
        self.sends_total.render("naspush_sends_total", &mut out);
        self.sends_failed_total
            .render("naspush_sends_failed_total", &mut out);
        self.request_duration
            .render("naspush_request_duration_micros", &mut out);
        self.send_duration
            .render("naspush_send_duration_micros", &mut out);
        let _ = writeln!(
            out,
            "# TYPE naspush_uptime_seconds gauge\nnaspush_uptime_seconds {}",
            self.uptime_secs()
        );
        out
    }
}

impl MetricsSink for RelayMetrics {
    fn request_received(&self) {
        self.requests_total.inc();
    }
    fn request_rejected(&self) {
        self.requests_failed_total.inc();
    }
    fn send_attempted(&self) {
        self.sends_total.inc();
    }
    fn send_failed(&self) {
        self.sends_failed_total.inc();
    }
    fn observe_request(&self, elapsed: Duration) {
        self.request_duration.observe(elapsed);
    }
    fn observe_send(&self, elapsed: Duration) {
        self.send_duration.observe(elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_covers_every_instrument() {
        let m = RelayMetrics::new();
        m.request_received();
        m.request_received();
        m.request_rejected();
        m.observe_request(Duration::from_millis(3));

        let out = m.render();
        assert!(out.contains("naspush_requests_total 2"));
        assert!(out.contains("naspush_requests_failed_total 1"));
        assert!(out.contains("# TYPE naspush_request_duration_micros histogram"));
        assert!(out.contains("naspush_request_duration_micros_count 1"));
        assert!(out.contains("# TYPE naspush_uptime_seconds gauge"));
    }

    #[test]
    fn histogram_buckets_are_cumulative() {
        let h = Histogram::default();
        h.observe(Duration::from_micros(200));
        h.observe(Duration::from_micros(200_000));

        let mut out = String::new();
        h.render("x", &mut out);
        // 200us falls past the 100us bucket, both fall within 500ms and 1s
        assert!(out.contains("x_bucket{le=\"100\"} 0"));
        assert!(out.contains("x_bucket{le=\"500\"} 1"));
        assert!(out.contains("x_bucket{le=\"500000\"} 2"));
        assert!(out.contains("x_bucket{le=\"+Inf\"} 2"));
        assert!(out.contains("x_count 2"));
    }
}
