pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_overlay_toggle_h;
pub use pointer::wire_pointer_handlers;
