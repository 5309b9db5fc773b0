use crate::constants::{HIDDEN_CLASS, INFO_PANEL_ID, MINIMIZED_CLASS};
use crate::engine::PanelState;
use web_sys as web;

// The stylesheet hides `.hidden` and collapses `#info-body` under `.minimized`.

fn read(panel: &web::Element) -> PanelState {
    let classes = panel.class_list();
    PanelState::from_classes(
        classes.contains(HIDDEN_CLASS),
        classes.contains(MINIMIZED_CLASS),
    )
}

fn write(panel: &web::Element, state: PanelState) {
    let classes = panel.class_list();
    _ = classes.toggle_with_force(HIDDEN_CLASS, state.hidden);
    _ = classes.toggle_with_force(MINIMIZED_CLASS, state.minimized);
}

fn update(document: &web::Document, f: impl FnOnce(PanelState) -> PanelState) {
    if let Some(panel) = document.get_element_by_id(INFO_PANEL_ID) {
        let next = f(read(&panel));
        write(&panel, next);
    }
}

pub fn hide(document: &web::Document) {
    update(document, PanelState::hide);
}

pub fn toggle(document: &web::Document) {
    update(document, PanelState::toggle_visible);
}

/// Collapse the panel to its header, or expand it again.
pub fn toggle_minimized(document: &web::Document) {
    update(document, PanelState::toggle_minimized);
}
