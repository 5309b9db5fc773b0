use crate::dom::EventListener;
use crate::overlay;
use wasm_bindgen::JsCast;
use web_sys as web;

// 'H' toggles the info overlay. Typing into a control keeps the key.
pub fn wire_overlay_toggle_h(document: &web::Document) -> Option<EventListener> {
    let window = web::window()?;
    let doc = document.clone();
    Some(EventListener::new(window.as_ref(), "keydown", move |ev: web::Event| {
        let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if is_text_entry(ev.target()) {
            return;
        }
        let key = kev.key();
        if key == "h" || key == "H" {
            overlay::toggle(&doc);
            ev.prevent_default();
        }
    }))
}

fn is_text_entry(target: Option<web::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        .is_some_and(|input| input.type_() == "text")
}
