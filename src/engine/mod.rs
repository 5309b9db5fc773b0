//! Platform-independent particle effect: simulation, input mapping and frame
//! composition against an abstract [`DrawSurface`].

pub mod color;
pub mod constants;
pub mod effect;
pub mod frame_loop;
pub mod input;
pub mod panel;
pub mod params;
pub mod particle;
pub mod ripple;
pub mod scene;
pub mod simulation;
pub mod surface;
pub mod trail;

pub use color::{hex_to_rgb, ColorCache, Rgb, Rgba};
pub use effect::{Effect, FrameStats};
pub use frame_loop::{CancelToken, FrameLoop, LoopGuard, TickOutcome};
pub use input::{PointerPhase, PointerState};
pub use panel::PanelState;
pub use params::{EffectParams, EmissionMode, COLOR_PRESETS};
pub use particle::Particle;
pub use surface::DrawSurface;
pub use trail::{TrailBuffer, TrailPoint, TrailSegment};
