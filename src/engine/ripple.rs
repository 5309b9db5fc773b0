use super::constants::{
    RIPPLE_MAX_ALPHA, RIPPLE_MAX_RADIUS, RIPPLE_PHASE_PER_MS, RIPPLE_RING_COUNT,
    RIPPLE_RING_SPACING, RIPPLE_SPEED,
};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub radius: f64,
    pub alpha: f64,
}

pub type Rings = SmallVec<[Ring; RIPPLE_RING_COUNT]>;

/// Wall-clock driven ripple phase.
#[inline]
pub fn ripple_phase(now_ms: f64) -> f64 {
    now_ms * RIPPLE_PHASE_PER_MS
}

/// The concentric rings for a given phase. Rings whose alpha has faded to
/// zero are left out.
pub fn ripple_rings(phase: f64) -> Rings {
    (0..RIPPLE_RING_COUNT)
        .filter_map(|i| {
            let radius =
                (phase * RIPPLE_SPEED + i as f64 * RIPPLE_RING_SPACING).rem_euclid(RIPPLE_MAX_RADIUS);
            let alpha = (1.0 - radius / RIPPLE_MAX_RADIUS).max(0.0) * RIPPLE_MAX_ALPHA;
            (alpha > 0.0).then_some(Ring { radius, alpha })
        })
        .collect()
}
