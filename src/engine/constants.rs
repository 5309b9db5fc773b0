// Tuning constants for the particle effect. These set the look of the
// effect; change them together and by eye.

// Simulation
pub const GRAVITY_DAMPING: f32 = 0.1; // user gravity -> per-tick acceleration
pub const DRAG: f32 = 0.995; // per-tick velocity multiplier
pub const LIFE_DECREMENT: f32 = 2.0;
pub const MAX_LIFE: f32 = 255.0;
pub const MAX_PARTICLES: usize = 300;

// Emission
pub const CLICK_BURST_MULTIPLIER: u32 = 3;
pub const MIN_SPEED: f32 = 1.0;
pub const MIN_SIZE: f32 = 2.0;

// Trail
pub const TRAIL_UNIT_MS: f64 = 100.0; // trailLength is expressed in these units
pub const TRAIL_MAX_ALPHA: f64 = 0.8;
pub const TRAIL_MAX_WIDTH: f64 = 3.0;

// Afterimage fade overlay
pub const FADE_ALPHA: f64 = 0.08;

// Glow
pub const GLOW_BLUR: f64 = 10.0;

// Ripples
pub const RIPPLE_RING_COUNT: usize = 3;
pub const RIPPLE_RING_SPACING: f64 = 30.0;
pub const RIPPLE_MAX_RADIUS: f64 = 120.0;
pub const RIPPLE_SPEED: f64 = 3.0; // radius units per phase unit
pub const RIPPLE_PHASE_PER_MS: f64 = 0.005;
pub const RIPPLE_MAX_ALPHA: f64 = 0.6;
pub const RIPPLE_LINE_WIDTH: f64 = 2.0;
