//! Pointer state machine and the emission policy behind it.

use super::color::Rgb;
use super::constants::{CLICK_BURST_MULTIPLIER, MAX_PARTICLES, MIN_SIZE, MIN_SPEED};
use super::params::{EffectParams, EmissionMode};
use super::particle::Particle;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerPhase {
    #[default]
    Up,
    Down,
}

/// Last known pointer position and whether a button is held.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
    pub phase: PointerPhase,
}

impl PointerState {
    #[inline]
    pub fn is_held(&self) -> bool {
        self.phase == PointerPhase::Down
    }

    pub fn press(&mut self, pos: Vec2) {
        self.pos = pos;
        self.phase = PointerPhase::Down;
    }

    /// Release and leaving the surface both end a hold.
    pub fn release(&mut self) {
        self.phase = PointerPhase::Up;
    }
}

/// How many particles a move event should emit under `params`.
#[inline]
pub fn move_emission(params: &EffectParams, pointer: &PointerState) -> u32 {
    match params.effect_mode {
        EmissionMode::Continuous => params.particle_count,
        EmissionMode::Drag if pointer.is_held() => params.particle_count,
        EmissionMode::Drag | EmissionMode::Click => 0,
    }
}

/// How many particles a press event should emit under `params`.
#[inline]
pub fn press_emission(params: &EffectParams) -> u32 {
    match params.effect_mode {
        EmissionMode::Click => params.particle_count.saturating_mul(CLICK_BURST_MULTIPLIER),
        EmissionMode::Continuous | EmissionMode::Drag => 0,
    }
}

/// A fresh particle at `at` heading in a random direction.
///
/// Speed is drawn from `[1, intensity + 1)` and radius from `[2, size + 2)`.
/// Intensity is used as given, so a negative value slows particles down (and
/// below -1 can flip them backwards). A negative size collapses to radius 2.
pub fn spawn_particle<R: Rng + ?Sized>(
    rng: &mut R,
    at: Vec2,
    params: &EffectParams,
    base: Rgb,
) -> Particle {
    let angle = rng.gen::<f32>() * TAU;
    let speed = MIN_SPEED + rng.gen::<f32>() * params.intensity;
    let size = MIN_SIZE + rng.gen::<f32>() * params.size.max(0.0);
    let vel = Vec2::new(angle.cos(), angle.sin()) * speed;
    Particle::new(at, vel, size, base.with_alpha(1.0))
}

/// Push up to `count` new particles, stopping silently at the live cap.
/// Returns how many were actually added.
pub fn emit<R: Rng + ?Sized>(
    particles: &mut Vec<Particle>,
    count: u32,
    rng: &mut R,
    at: Vec2,
    params: &EffectParams,
    base: Rgb,
) -> usize {
    let room = MAX_PARTICLES.saturating_sub(particles.len());
    let n = (count as usize).min(room);
    particles.extend((0..n).map(|_| spawn_particle(rng, at, params, base)));
    n
}
