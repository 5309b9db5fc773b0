//! Visibility of the info panel. The page stores this as two CSS classes on
//! the panel element; this type holds the transitions.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    pub hidden: bool,
    pub minimized: bool,
}

impl PanelState {
    pub fn from_classes(hidden: bool, minimized: bool) -> Self {
        Self { hidden, minimized }
    }

    /// Close button. Minimized is kept so the panel comes back as it was.
    pub fn hide(self) -> Self {
        Self {
            hidden: true,
            ..self
        }
    }

    pub fn show(self) -> Self {
        Self {
            hidden: false,
            ..self
        }
    }

    /// `H` key.
    pub fn toggle_visible(self) -> Self {
        if self.hidden {
            self.show()
        } else {
            self.hide()
        }
    }

    /// Header button. A hidden panel ignores it.
    pub fn toggle_minimized(self) -> Self {
        if self.hidden {
            return self;
        }
        Self {
            minimized: !self.minimized,
            ..self
        }
    }

    /// Whether the body below the header is shown.
    pub fn body_visible(self) -> bool {
        !self.hidden && !self.minimized
    }
}
