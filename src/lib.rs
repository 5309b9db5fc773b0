#![cfg(target_arch = "wasm32")]
use crate::dom::EventListener;
use crate::engine::{Effect, EffectParams};
use crate::frame::{AnimationLoop, FrameContext};
use crate::render::CanvasSurface;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod controls;
mod dom;
pub mod engine;
mod events;
mod frame;
mod overlay;
mod render;

// Marks a canvas that already has a live effect attached
const MOUNTED_ATTR: &str = "data-particles-mounted";

thread_local! {
    static AUTO_MOUNTED: RefCell<Option<ParticleCanvas>> = const { RefCell::new(None) };
}

struct Mounted {
    canvas: web::HtmlCanvasElement,
    effect: Rc<RefCell<Effect>>,
    animation: AnimationLoop,
    listeners: Vec<EventListener>,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.animation.stop();
        _ = self.canvas.remove_attribute(MOUNTED_ATTR);
        log::info!("[mount] detached {} listeners", self.listeners.len());
    }
}

fn mount(canvas_id: &str) -> anyhow::Result<Mounted> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow!("missing #{}", canvas_id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!(format!("{:?}", e)))?;
    if canvas.has_attribute(MOUNTED_ATTR) {
        return Err(anyhow!("#{} already has a particle effect", canvas_id));
    }

    let surface = CanvasSurface::new(&canvas)?;
    let effect = Rc::new(RefCell::new(Effect::new(EffectParams::default())));

    let mut listeners = Vec::new();
    listeners.extend(dom::wire_canvas_resize(&canvas));
    listeners.extend(events::wire_pointer_handlers(&canvas, &effect));
    listeners.extend(controls::wire_controls(&document, &effect));
    listeners.extend(wire_overlay(&document));

    let animation = AnimationLoop::start(FrameContext::new(effect.clone(), surface))
        .ok_or_else(|| anyhow!("animation loop already running"))?;
    _ = canvas.set_attribute(MOUNTED_ATTR, "");

    log::info!(
        "[mount] #{} {}x{} listeners={}",
        canvas_id,
        canvas.width(),
        canvas.height(),
        listeners.len()
    );
    Ok(Mounted {
        canvas,
        effect,
        animation,
        listeners,
    })
}

fn wire_overlay(document: &web::Document) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    let doc = document.clone();
    listeners.extend(dom::add_click_listener(
        document,
        constants::INFO_CLOSE_ID,
        move || overlay::hide(&doc),
    ));
    let doc = document.clone();
    listeners.extend(dom::add_click_listener(
        document,
        constants::INFO_MINIMIZE_ID,
        move || overlay::toggle_minimized(&doc),
    ));
    listeners.extend(events::wire_overlay_toggle_h(document));
    listeners
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

/// Handle to a particle effect attached to one canvas.
#[wasm_bindgen]
pub struct ParticleCanvas {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl ParticleCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<ParticleCanvas, JsValue> {
        let mounted = mount(canvas_id).map_err(to_js)?;
        Ok(Self {
            mounted: Some(mounted),
        })
    }

    /// Apply one control change, e.g. `set_param("gravity", "-0.5")`.
    pub fn set_param(&self, key: &str, value: &str) -> Result<(), JsValue> {
        let m = self.live()?;
        controls::apply_param(&m.effect, key, value).map_err(to_js)
    }

    pub fn reset(&self) -> Result<(), JsValue> {
        let m = self.live()?;
        m.effect.borrow_mut().reset_params();
        if let Some(doc) = dom::window_document() {
            controls::sync_controls(&doc, m.effect.borrow().params());
        }
        Ok(())
    }

    pub fn clear(&self) -> Result<(), JsValue> {
        self.live()?.effect.borrow_mut().clear();
        Ok(())
    }

    pub fn particle_count(&self) -> usize {
        self.mounted
            .as_ref()
            .map(|m| m.effect.borrow().particles().len())
            .unwrap_or(0)
    }

    pub fn is_running(&self) -> bool {
        self.mounted
            .as_ref()
            .is_some_and(|m| m.animation.is_running())
    }

    /// Stop the loop and detach every listener. Safe to call twice; the
    /// generated `free()` does the same.
    pub fn destroy(&mut self) {
        drop(self.mounted.take());
    }
}

impl ParticleCanvas {
    fn live(&self) -> Result<&Mounted, JsValue> {
        self.mounted
            .as_ref()
            .ok_or_else(|| JsValue::from_str("particle canvas was destroyed"))
    }
}

/// Tear down the effect mounted automatically at start, if any.
#[wasm_bindgen]
pub fn destroy_auto_mounted() {
    AUTO_MOUNTED.with(|slot| {
        if let Some(mut pc) = slot.borrow_mut().take() {
            pc.destroy();
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-canvas starting");

    let has_canvas = dom::window_document()
        .and_then(|d| d.get_element_by_id(constants::CANVAS_ID))
        .is_some();
    if !has_canvas {
        log::info!("no #{}; waiting for an explicit mount", constants::CANVAS_ID);
        return Ok(());
    }
    match mount(constants::CANVAS_ID) {
        Ok(m) => AUTO_MOUNTED.with(|slot| {
            *slot.borrow_mut() = Some(ParticleCanvas { mounted: Some(m) });
        }),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}
