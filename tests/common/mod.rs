// Draw surfaces for host-side tests: one that records every call, one that
// discards them.

use crate::engine::{DrawSurface, EffectParams, EmissionMode, Rgba};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Draw {
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        width: f64,
    },
    Disc {
        center: Vec2,
        radius: f64,
        color: Rgba,
        glow: Option<f64>,
    },
    Circle {
        center: Vec2,
        radius: f64,
        color: Rgba,
        width: f64,
    },
}

pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub calls: Vec<Draw>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn lines(&self) -> Vec<&Draw> {
        self.calls.iter().filter(|c| matches!(c, Draw::Line { .. })).collect()
    }

    pub fn discs(&self) -> Vec<&Draw> {
        self.calls.iter().filter(|c| matches!(c, Draw::Disc { .. })).collect()
    }

    pub fn circles(&self) -> Vec<&Draw> {
        self.calls.iter().filter(|c| matches!(c, Draw::Circle { .. })).collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.calls.push(Draw::Rect { x, y, w, h, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f64) {
        self.calls.push(Draw::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn fill_disc(&mut self, center: Vec2, radius: f64, color: Rgba, glow: Option<f64>) {
        self.calls.push(Draw::Disc {
            center,
            radius,
            color,
            glow,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f64, color: Rgba, width: f64) {
        self.calls.push(Draw::Circle {
            center,
            radius,
            color,
            width,
        });
    }
}

pub struct NullSurface;

impl DrawSurface for NullSurface {
    fn size(&self) -> (f64, f64) {
        (800.0, 600.0)
    }
    fn fill_rect(&mut self, _: f64, _: f64, _: f64, _: f64, _: Rgba) {}
    fn stroke_line(&mut self, _: Vec2, _: Vec2, _: Rgba, _: f64) {}
    fn fill_disc(&mut self, _: Vec2, _: f64, _: Rgba, _: Option<f64>) {}
    fn stroke_circle(&mut self, _: Vec2, _: f64, _: Rgba, _: f64) {}
}

pub fn params_with_mode(mode: EmissionMode, particle_count: u32) -> EffectParams {
    EffectParams {
        effect_mode: mode,
        particle_count,
        ..EffectParams::default()
    }
}
