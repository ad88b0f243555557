//! Error-rate estimate: base rate plus saturation penalties.

use crate::config::ComponentKind;
use crate::model::Utilization;
use crate::profile;

/// Error percentage for one component, clamped to [0, 10].
///
/// Starts at the kind's base rate; CPU past 85% and memory past 90% each
/// add a linear penalty.
pub fn error_rate_pct(kind: ComponentKind, util: &Utilization) -> f64 {
    let mut rate = profile::base_error_rate_pct(kind);

    if util.cpu_pct > 85.0 {
        rate += (util.cpu_pct - 85.0) * 0.1;
    }
    if util.memory_pct > 90.0 {
        rate += (util.memory_pct - 90.0) * 0.2;
    }

    rate.clamp(0.0, 10.0)
}
