#![cfg(not(feature = "csr"))]

use super::*;
use crate::state::ui::ModalPhase;

#[test]
fn open_then_close_settles_without_timers() {
    Owner::new().with(|| {
        let ui = RwSignal::new(UiState::default());
        open_success_modal(ui);
        assert_eq!(ui.get_untracked().modal, ModalPhase::Shown);
        close_success_modal(ui);
        assert_eq!(ui.get_untracked().modal, ModalPhase::Hidden);
    });
}

#[test]
fn close_without_open_keeps_modal_hidden() {
    Owner::new().with(|| {
        let ui = RwSignal::new(UiState::default());
        close_success_modal(ui);
        assert_eq!(ui.get_untracked().modal, ModalPhase::Hidden);
    });
}
