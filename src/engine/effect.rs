//! The single owned state object behind one canvas.
//!
//! Pointer handlers and the frame tick both take `&mut Effect`; the host
//! serializes them, so nothing here is shared or locked.

use super::color::{ColorCache, Rgb};
use super::input::{self, PointerState};
use super::params::EffectParams;
use super::particle::Particle;
use super::scene;
use super::simulation::step_particles;
use super::surface::DrawSurface;
use super::trail::TrailBuffer;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// What one rendered frame put on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub trail_segments: usize,
    pub ripples: usize,
}

pub struct Effect<R: Rng = StdRng> {
    params: EffectParams,
    particles: Vec<Particle>,
    trail: TrailBuffer,
    pointer: PointerState,
    palette: ColorCache,
    rng: R,
}

impl Effect<StdRng> {
    pub fn new(params: EffectParams) -> Self {
        Self::with_rng(params, StdRng::from_entropy())
    }

    /// Deterministic emission for tests and reproducible captures.
    pub fn with_seed(params: EffectParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Effect<R> {
    pub fn with_rng(params: EffectParams, rng: R) -> Self {
        let palette = ColorCache::new(&params.color);
        Self {
            params,
            particles: Vec::new(),
            trail: TrailBuffer::new(),
            pointer: PointerState::default(),
            palette,
            rng,
        }
    }

    pub fn params(&self) -> &EffectParams {
        &self.params
    }

    /// Changes take effect on the next event or tick.
    pub fn params_mut(&mut self) -> &mut EffectParams {
        &mut self.params
    }

    pub fn reset_params(&mut self) {
        self.params.reset();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Forget every particle and trail point. The pointer keeps its state.
    pub fn clear(&mut self) {
        log::debug!(
            "[effect] clear particles={} trail={}",
            self.particles.len(),
            self.trail.len()
        );
        self.particles.clear();
        self.trail.clear();
    }

    fn base_rgb(&mut self) -> Rgb {
        self.palette.rgb(&self.params.color)
    }

    // ---------------- Input ----------------

    /// Returns the number of particles emitted.
    pub fn pointer_move(&mut self, x: f32, y: f32, now_ms: f64) -> usize {
        let at = Vec2::new(x, y);
        self.pointer.pos = at;
        if self.params.enable_trail {
            self.trail.push(at, now_ms);
        }
        let count = input::move_emission(&self.params, &self.pointer);
        self.emit(count, at)
    }

    /// Returns the number of particles emitted.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> usize {
        let at = Vec2::new(x, y);
        self.pointer.press(at);
        let count = input::press_emission(&self.params);
        let n = self.emit(count, at);
        if n > 0 {
            log::debug!("[effect] burst {} at ({:.0},{:.0})", n, x, y);
        }
        n
    }

    pub fn pointer_up(&mut self) {
        self.pointer.release();
    }

    /// Leaving the surface ends a hold exactly like a release.
    pub fn pointer_leave(&mut self) {
        self.pointer.release();
    }

    fn emit(&mut self, count: u32, at: Vec2) -> usize {
        if count == 0 {
            return 0;
        }
        let base = self.base_rgb();
        input::emit(
            &mut self.particles,
            count,
            &mut self.rng,
            at,
            &self.params,
            base,
        )
    }

    // ---------------- Frame ----------------

    /// Advance the simulation by one tick.
    pub fn step(&mut self) {
        let base = self.base_rgb();
        step_particles(&mut self.particles, self.params.gravity, base);
    }

    /// Draw one frame. Also drops expired trail points.
    pub fn render<S: DrawSurface + ?Sized>(&mut self, surface: &mut S, now_ms: f64) -> FrameStats {
        let base = self.base_rgb();
        scene::draw_fade(surface);
        let trail_segments = scene::draw_trail(
            surface,
            &mut self.trail,
            self.params.enable_trail,
            base,
            now_ms,
            self.params.trail_max_age_ms(),
        );
        scene::draw_particles(surface, &self.particles, self.params.enable_glow);
        let ripples = if self.params.enable_ripples && self.pointer.is_held() {
            scene::draw_ripples(surface, self.pointer.pos, base, now_ms)
        } else {
            0
        };
        FrameStats {
            particles: self.particles.len(),
            trail_segments,
            ripples,
        }
    }

    /// Step then render: one display refresh.
    pub fn tick<S: DrawSurface + ?Sized>(&mut self, surface: &mut S, now_ms: f64) -> FrameStats {
        self.step();
        self.render(surface, now_ms)
    }
}
