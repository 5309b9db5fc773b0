use crate::dom::EventListener;
use crate::engine::Effect;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position in canvas backing pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let (w, h) = (rect.width() as f32, rect.height() as f32);
    if w <= 0.0 || h <= 0.0 {
        return Vec2::new(x_css, y_css);
    }
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Move, press, release and leave on the canvas, all feeding `effect`.
pub fn wire_pointer_handlers(
    canvas: &web::HtmlCanvasElement,
    effect: &Rc<RefCell<Effect>>,
) -> Vec<EventListener> {
    vec![
        wire_pointermove(canvas, effect),
        wire_pointerdown(canvas, effect),
        wire_pointerup(canvas, effect),
        wire_pointerleave(canvas, effect),
    ]
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, effect: &Rc<RefCell<Effect>>) -> EventListener {
    let effect = effect.clone();
    let canvas_for_pos = canvas.clone();
    EventListener::new(canvas.as_ref(), "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let pos = pointer_canvas_px(ev, &canvas_for_pos);
        effect
            .borrow_mut()
            .pointer_move(pos.x, pos.y, instant::now());
    })
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, effect: &Rc<RefCell<Effect>>) -> EventListener {
    let effect = effect.clone();
    let canvas_for_pos = canvas.clone();
    EventListener::new(canvas.as_ref(), "pointerdown", move |ev: web::Event| {
        let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let pos = pointer_canvas_px(mouse, &canvas_for_pos);
        effect.borrow_mut().pointer_down(pos.x, pos.y);
        ev.prevent_default();
    })
}

fn wire_pointerup(canvas: &web::HtmlCanvasElement, effect: &Rc<RefCell<Effect>>) -> EventListener {
    let effect = effect.clone();
    EventListener::new(canvas.as_ref(), "pointerup", move |_| {
        effect.borrow_mut().pointer_up();
    })
}

fn wire_pointerleave(canvas: &web::HtmlCanvasElement, effect: &Rc<RefCell<Effect>>) -> EventListener {
    let effect = effect.clone();
    EventListener::new(canvas.as_ref(), "pointerleave", move |_| {
        effect.borrow_mut().pointer_leave();
    })
}
