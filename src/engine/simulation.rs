//! Per-tick particle integration.

use super::color::Rgb;
use super::constants::{DRAG, GRAVITY_DAMPING, LIFE_DECREMENT};
use super::particle::Particle;

/// Advance every particle by one tick and drop the ones whose life ran out.
///
/// Order per particle: move, gravity, drag, decay, recolor. Survivors get
/// their color rebuilt from `base` so a color change shows up immediately.
pub fn step_particles(particles: &mut Vec<Particle>, gravity: f32, base: Rgb) {
    particles.retain_mut(|p| {
        p.pos += p.vel;
        p.vel.y += gravity * GRAVITY_DAMPING;
        p.vel *= DRAG;
        p.life -= LIFE_DECREMENT;
        if !p.is_alive() {
            return false;
        }
        p.color = base.with_alpha(p.fade());
        true
    });
}
