//! User-facing effect parameters.
//!
//! The control panel owns these values; the engine re-reads them every tick
//! and never validates ranges. Mutation arrives as `(key, value)` string pairs
//! named after the panel's fields.

use super::constants::TRAIL_UNIT_MS;
use anyhow::{anyhow, bail, Context};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmissionMode {
    /// Burst on press only.
    Click,
    /// Stream on every move.
    #[default]
    Continuous,
    /// Stream on moves while held.
    Drag,
}

impl EmissionMode {
    pub const ALL: [EmissionMode; 3] = [Self::Click, Self::Continuous, Self::Drag];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Continuous => "continuous",
            Self::Drag => "drag",
        }
    }
}

impl fmt::Display for EmissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmissionMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "click" => Ok(Self::Click),
            "continuous" => Ok(Self::Continuous),
            "drag" => Ok(Self::Drag),
            other => Err(anyhow!("unknown effect mode {other:?}")),
        }
    }
}

/// Named color swatches offered next to the color picker.
pub const COLOR_PRESETS: [(&str, &str); 8] = [
    ("Electric Blue", "#00BFFF"),
    ("Neon Pink", "#FF1493"),
    ("Lime Green", "#32CD32"),
    ("Orange Fire", "#FF4500"),
    ("Purple Magic", "#8A2BE2"),
    ("Gold Rush", "#FFD700"),
    ("Cyan Wave", "#00FFFF"),
    ("Red Passion", "#DC143C"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct EffectParams {
    pub color: String,
    pub intensity: f32,
    pub particle_count: u32,
    pub trail_length: f32,
    pub gravity: f32,
    pub size: f32,
    pub effect_mode: EmissionMode,
    pub enable_trail: bool,
    pub enable_glow: bool,
    pub enable_ripples: bool,
}

impl Default for EffectParams {
    fn default() -> Self {
        Self {
            color: COLOR_PRESETS[0].1.to_owned(),
            intensity: 6.0,
            particle_count: 3,
            trail_length: 12.0,
            gravity: 0.3,
            size: 5.0,
            effect_mode: EmissionMode::Continuous,
            enable_trail: true,
            enable_glow: true,
            enable_ripples: true,
        }
    }
}

impl EffectParams {
    /// Field names accepted by [`EffectParams::apply`].
    pub const KEYS: [&'static str; 10] = [
        "color",
        "intensity",
        "particleCount",
        "trailLength",
        "gravity",
        "size",
        "effectMode",
        "enableTrail",
        "enableGlow",
        "enableRipples",
    ];

    /// Age at which a trail point expires.
    #[inline]
    pub fn trail_max_age_ms(&self) -> f64 {
        self.trail_length as f64 * TRAIL_UNIT_MS
    }

    /// Apply one control-panel change. On error the params are unchanged.
    pub fn apply(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let value = value.trim();
        match key {
            "color" => self.color = value.to_owned(),
            "intensity" => self.intensity = parse_num(key, value)?,
            "particleCount" => self.particle_count = parse_count(value)?,
            "trailLength" => self.trail_length = parse_num(key, value)?,
            "gravity" => self.gravity = parse_num(key, value)?,
            "size" => self.size = parse_num(key, value)?,
            "effectMode" => self.effect_mode = value.parse()?,
            "enableTrail" => self.enable_trail = parse_flag(key, value)?,
            "enableGlow" => self.enable_glow = parse_flag(key, value)?,
            "enableRipples" => self.enable_ripples = parse_flag(key, value)?,
            _ => bail!("unknown parameter {key:?}"),
        }
        Ok(())
    }

    /// Current value of `key` in the same string form [`EffectParams::apply`] takes.
    pub fn get(&self, key: &str) -> Option<String> {
        let v = match key {
            "color" => self.color.clone(),
            "intensity" => self.intensity.to_string(),
            "particleCount" => self.particle_count.to_string(),
            "trailLength" => self.trail_length.to_string(),
            "gravity" => self.gravity.to_string(),
            "size" => self.size.to_string(),
            "effectMode" => self.effect_mode.as_str().to_owned(),
            "enableTrail" => self.enable_trail.to_string(),
            "enableGlow" => self.enable_glow.to_string(),
            "enableRipples" => self.enable_ripples.to_string(),
            _ => return None,
        };
        Some(v)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn parse_num(key: &str, value: &str) -> anyhow::Result<f32> {
    let v: f32 = value
        .parse()
        .with_context(|| format!("{key}: expected a number, got {value:?}"))?;
    if !v.is_finite() {
        bail!("{key}: expected a finite number, got {value:?}");
    }
    Ok(v)
}

// Sliders hand back "3" or "3.0" depending on the step; accept both.
fn parse_count(value: &str) -> anyhow::Result<u32> {
    if let Ok(n) = value.parse::<u32>() {
        return Ok(n);
    }
    let v = parse_num("particleCount", value)?;
    Ok(v.max(0.0).round() as u32)
}

fn parse_flag(key: &str, value: &str) -> anyhow::Result<bool> {
    match value {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        _ => bail!("{key}: expected a boolean, got {value:?}"),
    }
}
