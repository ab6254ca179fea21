use super::*;

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_is_light_closed_hidden() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.nav_open);
    assert_eq!(state.modal, ModalPhase::Hidden);
    assert_eq!(state.active_section, None);
}

#[test]
fn ui_state_with_theme_keeps_other_defaults() {
    let state = UiState::with_theme(Theme::Dark);
    assert_eq!(state.theme, Theme::Dark);
    assert!(!state.nav_open);
}

#[test]
fn toggle_nav_flips_and_close_nav_resets() {
    let mut state = UiState::default();
    state.toggle_nav();
    assert!(state.nav_open);
    state.toggle_nav();
    assert!(!state.nav_open);
    state.toggle_nav();
    state.close_nav();
    assert!(!state.nav_open);
}

// =============================================================
// ModalPhase
// =============================================================

#[test]
fn modal_open_sequence() {
    let phase = ModalPhase::Hidden.open();
    assert_eq!(phase, ModalPhase::Displayed);
    assert!(phase.in_layout());
    assert!(!phase.has_show_class());

    let phase = phase.reveal();
    assert_eq!(phase, ModalPhase::Shown);
    assert!(phase.has_show_class());
}

#[test]
fn modal_close_sequence() {
    let phase = ModalPhase::Shown.close();
    assert_eq!(phase, ModalPhase::Closing);
    assert!(phase.in_layout());
    assert!(!phase.has_show_class());

    let phase = phase.finish_close();
    assert_eq!(phase, ModalPhase::Hidden);
    assert!(!phase.in_layout());
}

#[test]
fn modal_late_reveal_after_close_is_ignored() {
    let phase = ModalPhase::Displayed.close();
    assert_eq!(phase.reveal(), ModalPhase::Closing);
}

#[test]
fn modal_stale_finish_after_reopen_is_ignored() {
    let phase = ModalPhase::Closing.open();
    assert_eq!(phase.finish_close(), ModalPhase::Displayed);
}

#[test]
fn modal_close_when_hidden_stays_hidden() {
    assert_eq!(ModalPhase::Hidden.close(), ModalPhase::Hidden);
}
