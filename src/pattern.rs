//! Traffic-shape generator: request rate as a function of time.
//!
//! Drives repeated simulation runs and charting. Shapes are deterministic;
//! jitter belongs to the metric calculators, not the load series.

use crate::config::TrafficPattern;

/// Maximum number of samples in a generated series.
pub const MAX_SAMPLES: usize = 300;

/// Request rate at time `t` (seconds) into a run of `duration` seconds.
pub fn sample_at(pattern: TrafficPattern, base_rps: f64, duration: u64, t: f64) -> f64 {
    let duration = duration.max(1) as f64;
    match pattern {
        TrafficPattern::Constant => base_rps,
        TrafficPattern::Spike => {
            let progress = t / duration;
            if (0.3..=0.7).contains(&progress) {
                base_rps * 3.0
            } else {
                base_rps
            }
        }
        TrafficPattern::Ramp => base_rps * (t / duration),
        TrafficPattern::Wave => {
            let period = duration / 3.0;
            base_rps * (1.0 + 0.5 * (2.0 * std::f64::consts::PI * t / period).sin())
        }
    }
}

/// Time series of request rates: up to [`MAX_SAMPLES`] evenly spaced samples
/// over `[0, duration)`, one per second for short runs.
pub fn series(pattern: TrafficPattern, base_rps: f64, duration: u64) -> Vec<f64> {
    let n = (duration.max(1) as usize).min(MAX_SAMPLES);
    let step = duration.max(1) as f64 / n as f64;
    (0..n)
        .map(|i| sample_at(pattern, base_rps, duration, i as f64 * step))
        .collect()
}
