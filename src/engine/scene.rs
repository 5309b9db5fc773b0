//! Frame composition: fade, trail, particles, ripples, in that order.

use super::color::{Rgb, Rgba};
use super::constants::{FADE_ALPHA, GLOW_BLUR, RIPPLE_LINE_WIDTH};
use super::particle::Particle;
use super::ripple::{ripple_phase, ripple_rings};
use super::surface::DrawSurface;
use super::trail::TrailBuffer;
use glam::Vec2;

/// Translucent black over the whole surface. Leaves an afterimage of the
/// previous frames instead of a hard clear.
pub fn draw_fade<S: DrawSurface + ?Sized>(surface: &mut S) {
    let (w, h) = surface.size();
    surface.fill_rect(0.0, 0.0, w, h, Rgb::BLACK.with_alpha(FADE_ALPHA as f32));
}

/// Prune expired points, then stroke what is left. Returns segments drawn.
///
/// Pruning happens whether or not the trail is shown so the buffer stays
/// bounded while the toggle is off.
pub fn draw_trail<S: DrawSurface + ?Sized>(
    surface: &mut S,
    trail: &mut TrailBuffer,
    enabled: bool,
    base: Rgb,
    now_ms: f64,
    max_age_ms: f64,
) -> usize {
    trail.prune(now_ms, max_age_ms);
    if !enabled || trail.len() < 2 {
        return 0;
    }
    let mut drawn = 0;
    for seg in trail.segments(now_ms, max_age_ms) {
        surface.stroke_line(seg.from, seg.to, base.with_alpha(seg.alpha as f32), seg.width);
        drawn += 1;
    }
    drawn
}

pub fn draw_particles<S: DrawSurface + ?Sized>(
    surface: &mut S,
    particles: &[Particle],
    glow: bool,
) {
    let blur = glow.then_some(GLOW_BLUR);
    for p in particles.iter().filter(|p| p.is_alive()) {
        surface.fill_disc(p.pos, p.size as f64, p.color, blur);
    }
}

/// Expanding rings around `center`. Returns rings drawn.
pub fn draw_ripples<S: DrawSurface + ?Sized>(
    surface: &mut S,
    center: Vec2,
    base: Rgb,
    now_ms: f64,
) -> usize {
    let rings = ripple_rings(ripple_phase(now_ms));
    for ring in &rings {
        let color: Rgba = base.with_alpha(ring.alpha as f32);
        surface.stroke_circle(center, ring.radius, color, RIPPLE_LINE_WIDTH);
    }
    rings.len()
}
