// Page wiring: element ids, attributes and classes the glue looks for.

// Canvas the effect draws into; auto-mounted at start when present
pub const CANVAS_ID: &str = "particle-canvas";

// Control panel
pub const PARAM_ATTR: &str = "data-param"; // value is an EffectParams key
pub const PRESET_ATTR: &str = "data-color-preset"; // value is a hex color
pub const RESET_CONTROLS_ID: &str = "reset-controls";

// Info overlay
pub const INFO_PANEL_ID: &str = "info-panel";
pub const INFO_CLOSE_ID: &str = "info-close";
pub const INFO_MINIMIZE_ID: &str = "info-minimize";
pub const HIDDEN_CLASS: &str = "hidden";
pub const MINIMIZED_CLASS: &str = "minimized";
