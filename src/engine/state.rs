use crate::config::LayoutMode;

/// Observable arrangement of the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FanState {
    /// Fan mode, pointer outside: rotated overlapping stack.
    Stacked,
    /// Fan mode, pointer inside: scattered, unrotated.
    Exploded,
    /// Wrap mode, regardless of the pointer.
    Wrapped,
}

/// Whether a signal requires the host to run an arrangement pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Invalidation {
    None,
    Arrange,
}

impl Invalidation {
    pub fn needs_arrange(self) -> bool {
        self == Self::Arrange
    }

    pub(crate) fn or(self, other: Self) -> Self {
        if self.needs_arrange() { self } else { other }
    }
}

/// Mode flag plus pointer presence; [`FanState`] is derived from both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    mode: LayoutMode,
    hovered: bool,
}

impl PanelState {
    pub fn new(mode: LayoutMode) -> Self {
        Self {
            mode,
            hovered: false,
        }
    }

    pub fn mode(self) -> LayoutMode {
        self.mode
    }

    pub fn is_hovered(self) -> bool {
        self.hovered
    }

    pub fn state(self) -> FanState {
        match (self.mode, self.hovered) {
            (LayoutMode::Wrap, _) => FanState::Wrapped,
            (LayoutMode::Fan, false) => FanState::Stacked,
            (LayoutMode::Fan, true) => FanState::Exploded,
        }
    }

    pub fn pointer_enter(&mut self) -> Invalidation {
        tracing::debug!("pointer enter");
        self.set_hovered(true)
    }

    pub fn pointer_leave(&mut self) -> Invalidation {
        tracing::debug!("pointer leave");
        self.set_hovered(false)
    }

    // Pointer presence is always recorded so a later switch back to fan mode picks the
    // right sub-state; while wrapped it never triggers a pass.
    fn set_hovered(&mut self, hovered: bool) -> Invalidation {
        self.hovered = hovered;
        if self.mode == LayoutMode::Wrap {
            tracing::debug!("hover ignored in wrap mode");
            return Invalidation::None;
        }
        Invalidation::Arrange
    }

    pub fn set_mode(&mut self, mode: LayoutMode) -> Invalidation {
        if self.mode == mode {
            return Invalidation::None;
        }
        tracing::debug!(from = ?self.mode, to = ?mode, "layout mode changed");
        self.mode = mode;
        Invalidation::Arrange
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/state.rs"]
mod tests;
