//! Time-stamped pointer positions drawn as a fading polyline.

use super::constants::{TRAIL_MAX_ALPHA, TRAIL_MAX_WIDTH};
use glam::Vec2;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub time_ms: f64,
}

/// One drawable piece of the trail between two consecutive points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailSegment {
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: f64,
    pub width: f64,
}

#[derive(Clone, Debug, Default)]
pub struct TrailBuffer {
    points: VecDeque<TrailPoint>,
}

impl TrailBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pos: Vec2, time_ms: f64) {
        self.points.push_back(TrailPoint { pos, time_ms });
    }

    /// Drop every point at least `max_age_ms` old.
    pub fn prune(&mut self, now_ms: f64, max_age_ms: f64) {
        self.points.retain(|p| now_ms - p.time_ms < max_age_ms);
    }

    /// Segments between surviving neighbours, oldest first.
    ///
    /// Alpha and width fall off linearly with the age of the newer point of
    /// each segment. Call [`TrailBuffer::prune`] first; expired points would
    /// yield negative fade.
    pub fn segments(
        &self,
        now_ms: f64,
        max_age_ms: f64,
    ) -> impl Iterator<Item = TrailSegment> + '_ {
        let prev = self.points.iter();
        let next = self.points.iter().skip(1);
        prev.zip(next).map(move |(a, b)| {
            let age = if max_age_ms > 0.0 {
                ((now_ms - b.time_ms) / max_age_ms).clamp(0.0, 1.0)
            } else {
                1.0
            };
            let keep = 1.0 - age;
            TrailSegment {
                from: a.pos,
                to: b.pos,
                alpha: keep * TRAIL_MAX_ALPHA,
                width: keep * TRAIL_MAX_WIDTH,
            }
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
