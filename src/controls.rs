//! Glue between the page's control panel and [`EffectParams`].
//!
//! Inputs opt in with `data-param="<key>"`; checkboxes report `checked`,
//! everything else its `value`. Swatches use `data-color-preset="<hex>"`.

use crate::constants::{PARAM_ATTR, PRESET_ATTR, RESET_CONTROLS_ID};
use crate::dom::{self, EventListener};
use crate::engine::{Effect, EffectParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Apply one change, logging and dropping it if it does not parse.
pub fn apply_param(effect: &Rc<RefCell<Effect>>, key: &str, value: &str) -> anyhow::Result<()> {
    let res = effect.borrow_mut().params_mut().apply(key, value);
    match &res {
        Ok(()) => log::debug!("[controls] {}={}", key, value),
        Err(e) => log::warn!("[controls] rejected {}={:?}: {:#}", key, value, e),
    }
    res
}

pub fn wire_controls(document: &web::Document, effect: &Rc<RefCell<Effect>>) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    for el in dom::query_all(document, &format!("[{PARAM_ATTR}]")) {
        let Some(key) = el.get_attribute(PARAM_ATTR) else {
            continue;
        };
        let kind = if is_checkbox(&el) || el.is_instance_of::<web::HtmlSelectElement>() {
            "change"
        } else {
            "input"
        };
        let effect = effect.clone();
        let source = el.clone();
        listeners.push(EventListener::new(el.as_ref(), kind, move |_| {
            if let Some(value) = control_value(&source) {
                _ = apply_param(&effect, &key, &value);
            }
        }));
    }

    for el in dom::query_all(document, &format!("[{PRESET_ATTR}]")) {
        let Some(hex) = el.get_attribute(PRESET_ATTR) else {
            continue;
        };
        let effect = effect.clone();
        let doc = document.clone();
        listeners.push(EventListener::new(el.as_ref(), "click", move |_| {
            if apply_param(&effect, "color", &hex).is_ok() {
                sync_controls(&doc, effect.borrow().params());
            }
        }));
    }

    let effect_reset = effect.clone();
    let doc = document.clone();
    if let Some(l) = dom::add_click_listener(document, RESET_CONTROLS_ID, move || {
        effect_reset.borrow_mut().reset_params();
        sync_controls(&doc, effect_reset.borrow().params());
        log::info!("[controls] reset to defaults");
    }) {
        listeners.push(l);
    }

    sync_controls(document, effect.borrow().params());
    listeners
}

/// Write `params` back into every bound input.
pub fn sync_controls(document: &web::Document, params: &EffectParams) {
    for el in dom::query_all(document, &format!("[{PARAM_ATTR}]")) {
        let Some(value) = el.get_attribute(PARAM_ATTR).and_then(|k| params.get(&k)) else {
            continue;
        };
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            if input.type_() == "checkbox" {
                input.set_checked(value == "true");
            } else {
                input.set_value(&value);
            }
        } else if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
            select.set_value(&value);
        }
    }
}

fn is_checkbox(el: &web::Element) -> bool {
    el.dyn_ref::<web::HtmlInputElement>()
        .is_some_and(|i| i.type_() == "checkbox")
}

fn control_value(el: &web::Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        if input.type_() == "checkbox" {
            return Some(input.checked().to_string());
        }
        return Some(input.value());
    }
    if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
        return Some(select.value());
    }
    el.get_attribute("value")
}
