use super::color::Rgba;
use super::constants::MAX_LIFE;
use glam::Vec2;

/// One emitted particle. Plain data; the stepper mutates it in place.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32,
    pub max_life: f32,
    pub size: f32,
    pub color: Rgba,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, size: f32, color: Rgba) -> Self {
        Self {
            pos,
            vel,
            life: MAX_LIFE,
            max_life: MAX_LIFE,
            size,
            color,
        }
    }

    /// Remaining life as a fraction of the starting life, clamped to `[0, 1]`.
    #[inline]
    pub fn fade(&self) -> f32 {
        if self.max_life <= 0.0 {
            return 0.0;
        }
        (self.life / self.max_life).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}
