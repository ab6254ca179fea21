//! Local UI chrome state (theme, mobile menu, success modal, active section).
//!
//! DESIGN
//! ======
//! One `RwSignal<UiState>` is provided at the app root. Components read the
//! fields they render and call the transition methods below, so the state
//! rules are testable without a DOM.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use folio::theme::Theme;

/// Delay between `display: flex` and adding the `show` class, so the CSS
/// transition runs.
pub const MODAL_REVEAL_DELAY_MS: u32 = 10;
/// Fade-out duration before the modal is taken out of layout.
pub const MODAL_HIDE_DELAY_MS: u32 = 300;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub theme: Theme,
    /// Mobile navigation menu expanded.
    pub nav_open: bool,
    pub modal: ModalPhase,
    /// Id of the section the viewport is currently in.
    pub active_section: Option<&'static str>,
}

impl UiState {
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    pub fn close_nav(&mut self) {
        self.nav_open = false;
    }
}

/// Success modal lifecycle.
///
/// `Hidden → Displayed → Shown` on open, `Shown → Closing → Hidden` on close.
/// `open` always restarts; other out-of-order transitions (a timer firing
/// after the user already moved on) leave the phase unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Hidden,
    /// In layout, transition not started yet.
    Displayed,
    /// Fully visible.
    Shown,
    /// Fading out.
    Closing,
}

impl ModalPhase {
    #[must_use]
    pub fn open(self) -> Self {
        Self::Displayed
    }

    #[must_use]
    pub fn reveal(self) -> Self {
        match self {
            Self::Displayed => Self::Shown,
            other => other,
        }
    }

    #[must_use]
    pub fn close(self) -> Self {
        match self {
            Self::Displayed | Self::Shown => Self::Closing,
            other => other,
        }
    }

    #[must_use]
    pub fn finish_close(self) -> Self {
        match self {
            Self::Closing => Self::Hidden,
            other => other,
        }
    }

    /// Whether the modal takes part in layout (`display: flex`).
    #[must_use]
    pub fn in_layout(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Whether the `show` class is applied.
    #[must_use]
    pub fn has_show_class(self) -> bool {
        matches!(self, Self::Shown)
    }
}
