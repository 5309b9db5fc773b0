use crate::engine::{Effect, FrameLoop, LoopGuard, TickOutcome};
use crate::render::CanvasSurface;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const STATS_LOG_INTERVAL: Duration = Duration::from_secs(10);

pub struct FrameContext {
    pub effect: Rc<RefCell<Effect>>,
    pub surface: CanvasSurface,
    pub last_stats: Instant,
    pub frames_since_stats: u32,
}

impl FrameContext {
    pub fn new(effect: Rc<RefCell<Effect>>, surface: CanvasSurface) -> Self {
        Self {
            effect,
            surface,
            last_stats: Instant::now(),
            frames_since_stats: 0,
        }
    }

    pub fn frame(&mut self) {
        let stats = self
            .effect
            .borrow_mut()
            .tick(&mut self.surface, instant::now());

        self.frames_since_stats += 1;
        let elapsed = self.last_stats.elapsed();
        if elapsed >= STATS_LOG_INTERVAL {
            log::debug!(
                "[frame] fps={:.1} particles={} trail_segments={} ripples={}",
                self.frames_since_stats as f32 / elapsed.as_secs_f32(),
                stats.particles,
                stats.trail_segments,
                stats.ripples
            );
            self.last_stats = Instant::now();
            self.frames_since_stats = 0;
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running `requestAnimationFrame` loop. [`AnimationLoop::stop`] (or dropping
/// the loop) cancels the pending frame; a tick that finds its token cancelled
/// or its canvas gone does nothing and does not re-arm.
pub struct AnimationLoop {
    state: Rc<RefCell<FrameLoop>>,
    guard: LoopGuard,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickClosure,
}

impl AnimationLoop {
    pub fn start(mut ctx: FrameContext) -> Option<Self> {
        let state = Rc::new(RefCell::new(FrameLoop::new()));
        let guard = LoopGuard::new(state.borrow_mut().start()?);
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: TickClosure = Rc::new(RefCell::new(None));

        let state_tick = state.clone();
        let pending_tick = pending.clone();
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            let ready = ctx.surface.is_ready();
            if state_tick.borrow_mut().begin_tick(ready) == TickOutcome::Stop {
                log::info!("[frame] loop stopped");
                return;
            }
            ctx.frame();
            if let Some(cb) = tick_clone.borrow().as_ref() {
                pending_tick.set(request_frame(cb));
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = tick.borrow().as_ref() {
            pending.set(request_frame(cb));
        }
        Some(Self {
            state,
            guard,
            pending,
            tick,
        })
    }

    pub fn is_running(&self) -> bool {
        !self.guard.token().is_cancelled()
    }

    pub fn stop(&self) {
        self.state.borrow_mut().stop();
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Break the closure's self-reference.
        self.tick.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
}
