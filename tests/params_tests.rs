// Host-side tests for effect parameters and control-panel mutations.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/engine/mod.rs"]
mod engine;

use engine::{hex_to_rgb, EffectParams, EmissionMode, Rgb, COLOR_PRESETS};

#[test]
fn defaults_match_the_shipped_panel() {
    let p = EffectParams::default();
    assert_eq!(p.color, "#00BFFF");
    assert_eq!(p.intensity, 6.0);
    assert_eq!(p.particle_count, 3);
    assert_eq!(p.trail_length, 12.0);
    assert_eq!(p.gravity, 0.3);
    assert_eq!(p.size, 5.0);
    assert_eq!(p.effect_mode, EmissionMode::Continuous);
    assert!(p.enable_trail && p.enable_glow && p.enable_ripples);
    assert_eq!(p.trail_max_age_ms(), 1200.0);
}

#[test]
fn apply_updates_each_field() {
    let mut p = EffectParams::default();
    p.apply("color", "#FF1493").unwrap();
    p.apply("intensity", "12").unwrap();
    p.apply("particleCount", "8").unwrap();
    p.apply("trailLength", "3").unwrap();
    p.apply("gravity", "-1.5").unwrap();
    p.apply("size", "15").unwrap();
    p.apply("effectMode", "drag").unwrap();
    p.apply("enableTrail", "false").unwrap();
    p.apply("enableGlow", "off").unwrap();
    p.apply("enableRipples", "0").unwrap();

    assert_eq!(p.color, "#FF1493");
    assert_eq!(p.intensity, 12.0);
    assert_eq!(p.particle_count, 8);
    assert_eq!(p.trail_length, 3.0);
    assert_eq!(p.gravity, -1.5);
    assert_eq!(p.size, 15.0);
    assert_eq!(p.effect_mode, EmissionMode::Drag);
    assert!(!p.enable_trail && !p.enable_glow && !p.enable_ripples);
    assert_eq!(p.trail_max_age_ms(), 300.0);
}

#[test]
fn particle_count_accepts_slider_floats() {
    let mut p = EffectParams::default();
    p.apply("particleCount", "4.0").unwrap();
    assert_eq!(p.particle_count, 4);
    p.apply("particleCount", " 6 ").unwrap();
    assert_eq!(p.particle_count, 6);
}

#[test]
fn rejected_changes_leave_params_untouched() {
    let mut p = EffectParams::default();
    let before = p.clone();
    assert!(p.apply("speed", "3").is_err());
    assert!(p.apply("intensity", "fast").is_err());
    assert!(p.apply("gravity", "NaN").is_err());
    assert!(p.apply("effectMode", "explode").is_err());
    assert!(p.apply("enableGlow", "maybe").is_err());
    assert_eq!(p, before);
}

#[test]
fn out_of_range_values_are_not_validated() {
    let mut p = EffectParams::default();
    p.apply("gravity", "-50").unwrap();
    p.apply("intensity", "1000").unwrap();
    p.apply("color", "not-a-color").unwrap();
    assert_eq!(p.gravity, -50.0);
    assert_eq!(p.intensity, 1000.0);
    assert_eq!(hex_to_rgb(&p.color), Rgb::WHITE);
}

#[test]
fn get_reports_what_apply_accepts() {
    let mut p = EffectParams::default();
    p.apply("effectMode", "click").unwrap();
    p.apply("gravity", "-0.7").unwrap();
    let snapshot = p.clone();
    for key in EffectParams::KEYS {
        let v = p.get(key).unwrap_or_else(|| panic!("no value for {key}"));
        p.apply(key, &v).unwrap();
    }
    assert_eq!(p, snapshot);
    assert_eq!(p.get("effectMode").as_deref(), Some("click"));
    assert!(p.get("nope").is_none());
}

#[test]
fn reset_restores_defaults() {
    let mut p = EffectParams::default();
    p.apply("size", "9").unwrap();
    p.apply("enableTrail", "false").unwrap();
    p.reset();
    assert_eq!(p, EffectParams::default());
}

#[test]
fn emission_mode_names() {
    for mode in EmissionMode::ALL {
        assert_eq!(mode.as_str().parse::<EmissionMode>().unwrap(), mode);
        assert_eq!(mode.to_string(), mode.as_str());
    }
    assert!("Click".parse::<EmissionMode>().is_err());
}

#[test]
fn presets_are_distinct_valid_colors() {
    for (name, hex) in COLOR_PRESETS {
        assert_ne!(hex_to_rgb(hex), Rgb::WHITE, "{name} {hex}");
    }
    assert_eq!(COLOR_PRESETS[0].1, EffectParams::default().color);
    let mut hexes: Vec<&str> = COLOR_PRESETS.iter().map(|(_, h)| *h).collect();
    hexes.sort();
    hexes.dedup();
    assert_eq!(hexes.len(), COLOR_PRESETS.len());
}
