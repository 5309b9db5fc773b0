// Host-side tests for the per-tick particle stepper.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/engine/mod.rs"]
mod engine;

use engine::constants::{LIFE_DECREMENT, MAX_LIFE};
use engine::simulation::step_particles;
use engine::{Particle, Rgb};
use glam::Vec2;

fn particle(vel: Vec2) -> Particle {
    Particle::new(Vec2::ZERO, vel, 3.0, Rgb::WHITE.with_alpha(1.0))
}

#[test]
fn life_drops_by_exactly_two_per_tick() {
    let mut ps = vec![particle(Vec2::new(1.0, -1.0))];
    let mut expected = MAX_LIFE;
    while !ps.is_empty() {
        step_particles(&mut ps, 0.3, Rgb::WHITE);
        expected -= LIFE_DECREMENT;
        if let Some(p) = ps.first() {
            assert_eq!(p.life, expected);
        }
    }
    assert!(expected <= 0.0);
}

#[test]
fn particle_is_removed_after_128_ticks() {
    let mut ps = vec![particle(Vec2::ZERO)];
    for _ in 0..127 {
        step_particles(&mut ps, 0.0, Rgb::WHITE);
    }
    assert_eq!(ps.len(), 1, "still alive after 127 ticks");
    assert_eq!(ps[0].life, 1.0);
    step_particles(&mut ps, 0.0, Rgb::WHITE);
    assert!(ps.is_empty(), "removed on tick 128");
}

#[test]
fn alpha_tracks_life_ratio() {
    let mut ps = vec![particle(Vec2::new(2.0, 0.0))];
    let base = Rgb::new(0, 191, 255);
    while !ps.is_empty() {
        step_particles(&mut ps, 0.0, base);
        for p in &ps {
            let want = p.life / p.max_life;
            assert!((p.color.alpha - want).abs() < 1e-6);
            assert!(p.color.alpha > 0.0 && p.color.alpha <= 1.0);
            assert_eq!(p.color.rgb, base);
        }
    }
}

#[test]
fn drag_never_grows_or_flips_velocity() {
    let mut ps = vec![
        particle(Vec2::new(5.0, -3.0)),
        particle(Vec2::new(-0.5, 7.0)),
        particle(Vec2::new(0.0, -1.0)),
    ];
    let mut prev: Vec<Vec2> = ps.iter().map(|p| p.vel).collect();
    for _ in 0..100 {
        step_particles(&mut ps, 0.0, Rgb::WHITE);
        for (p, v0) in ps.iter().zip(&prev) {
            assert!(p.vel.x.abs() <= v0.x.abs());
            assert!(p.vel.y.abs() <= v0.y.abs());
            assert!(p.vel.x * v0.x >= 0.0, "vx flipped sign");
            assert!(p.vel.y * v0.y >= 0.0, "vy flipped sign");
        }
        prev = ps.iter().map(|p| p.vel).collect();
    }
}

#[test]
fn position_integrates_before_gravity() {
    let mut ps = vec![particle(Vec2::ZERO)];
    step_particles(&mut ps, 1.0, Rgb::WHITE);
    assert_eq!(ps[0].pos, Vec2::ZERO);
    assert!((ps[0].vel.y - 0.1 * 0.995).abs() < 1e-6);
    step_particles(&mut ps, 1.0, Rgb::WHITE);
    assert!((ps[0].pos.y - 0.1 * 0.995).abs() < 1e-6);
}

#[test]
fn negative_gravity_drifts_upward() {
    let mut ps = vec![particle(Vec2::ZERO)];
    for _ in 0..10 {
        step_particles(&mut ps, -2.0, Rgb::WHITE);
    }
    assert!(ps[0].pos.y < 0.0);
    assert_eq!(ps[0].pos.x, 0.0);
}

#[test]
fn only_expired_particles_are_dropped() {
    let mut dying = particle(Vec2::ZERO);
    dying.life = 2.0;
    let mut ps = vec![particle(Vec2::ZERO), dying, particle(Vec2::ZERO)];
    step_particles(&mut ps, 0.0, Rgb::WHITE);
    assert_eq!(ps.len(), 2);
    assert!(ps.iter().all(|p| p.life == MAX_LIFE - LIFE_DECREMENT));
}

#[test]
fn base_color_change_shows_on_next_tick() {
    let mut ps = vec![particle(Vec2::ZERO), particle(Vec2::ONE)];
    step_particles(&mut ps, 0.0, Rgb::new(255, 0, 0));
    assert!(ps.iter().all(|p| p.color.rgb == Rgb::new(255, 0, 0)));
    step_particles(&mut ps, 0.0, Rgb::new(0, 0, 255));
    assert!(ps.iter().all(|p| p.color.rgb == Rgb::new(0, 0, 255)));
}
