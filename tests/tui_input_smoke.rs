use draw_poker::round::Phase;
use draw_poker::tui::app::{AppState, InputAction, Scene};
use draw_poker::tui::controller::handle_key;
use crossterm::event::KeyCode;
use std::time::Duration;

fn started_app() -> AppState {
    let mut app = AppState::default();
    app.cfg_fixed_seed = true;
    app.cfg_seed = 42;
    assert!(app.handle_input(InputAction::StartGame));
    app
}

#[test]
fn menu_navigation_and_start() {
    let mut app = AppState::default();
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);
    let _ = app.handle_input(InputAction::StartGame);
    assert!(matches!(app.scene, Scene::Table));
    assert_eq!(app.round.phase(), Phase::Dealt);
}

#[test]
fn focus_wraps_and_space_toggles_focused_card() {
    let mut app = started_app();
    let _ = app.handle_input(InputAction::FocusPrev);
    assert_eq!(app.focus, 3);
    let _ = app.handle_input(InputAction::FocusNext);
    assert_eq!(app.focus, 0);
    assert!(app.handle_input(InputAction::ToggleFocused));
    assert!(app.round.selection().is_selected(0));
}

#[test]
fn keys_drive_a_whole_round() {
    let mut app = started_app();
    assert!(!handle_key(&mut app, KeyCode::Char('2')));
    assert!(app.round.selection().is_selected(1));
    let _ = handle_key(&mut app, KeyCode::Char('d'));
    assert_eq!(app.round.exchanges_used(), 1);
    let _ = handle_key(&mut app, KeyCode::Char('r'));
    assert_eq!(app.round.phase(), Phase::Revealing);
    assert!(app.revealing());
    app.on_tick(Duration::from_secs(4));
    assert_eq!(app.round.phase(), Phase::Resolved);
    let _ = handle_key(&mut app, KeyCode::Char('n'));
    assert_eq!(app.round.phase(), Phase::Dealt);
    let _ = handle_key(&mut app, KeyCode::Char('x'));
    assert!(matches!(app.scene, Scene::Menu));
    assert_eq!(app.round.phase(), Phase::Idle);
    assert!(handle_key(&mut app, KeyCode::Char('q')));
}

#[test]
fn help_blocks_table_keys() {
    let mut app = started_app();
    let _ = handle_key(&mut app, KeyCode::Char('?'));
    assert!(app.help_open());
    let _ = handle_key(&mut app, KeyCode::Char('1'));
    assert!(!app.round.selection().any());
    let _ = handle_key(&mut app, KeyCode::Esc);
    assert!(!app.help_open());
    assert!(matches!(app.scene, Scene::Table));
}

#[test]
fn selection_ignored_while_revealing() {
    let mut app = started_app();
    let _ = app.handle_input(InputAction::Reveal);
    assert!(!app.handle_input(InputAction::ToggleCard(0)));
    assert!(app.action_error().is_some());
    assert!(!app.round.selection().any());
}
