use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// A DOM event listener that detaches itself when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> Option<EventListener> {
    let el = document.get_element_by_id(element_id)?;
    Some(EventListener::new(el.as_ref(), "click", move |_| handler()))
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Match the canvas backing store to the viewport (CSS pixels, no DPR scaling).
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let (w_px, h_px) = ((width as u32).max(1), (height as u32).max(1));
        if canvas.width() != w_px {
            canvas.set_width(w_px);
        }
        if canvas.height() != h_px {
            canvas.set_height(h_px);
        }
    }
}

/// Keep the backing size in step with the viewport while the listener lives.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) -> Option<EventListener> {
    sync_canvas_backing_size(canvas);
    let window = web::window()?;
    let canvas = canvas.clone();
    Some(EventListener::new(window.as_ref(), "resize", move |_| {
        sync_canvas_backing_size(&canvas);
    }))
}
