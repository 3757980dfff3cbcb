use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Wake early when a reveal step is due before the next tick.
        let mut timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if let Some(due) = app.round.next_reveal_due() {
            timeout = timeout.min(due.saturating_sub(last_tick.elapsed()));
        }
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }

        let elapsed = last_tick.elapsed();
        let reveal_due = app.round.next_reveal_due().is_some_and(|due| elapsed >= due);
        if elapsed >= tick_rate || reveal_due {
            app.on_tick(elapsed);
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Map a key to an input action. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if matches!(code, KeyCode::Char('?')) {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }

    match app.scene {
        Scene::Menu => match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::MenuPrev);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::MenuNext);
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                let _ = app.handle_input(InputAction::MenuInc);
            }
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => {
                let _ = app.handle_input(InputAction::MenuDec);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::StartGame);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            _ => {}
        },
        Scene::Table => match code {
            KeyCode::Left => {
                let _ = app.handle_input(InputAction::FocusPrev);
            }
            KeyCode::Right => {
                let _ = app.handle_input(InputAction::FocusNext);
            }
            KeyCode::Char(' ') => {
                let _ = app.handle_input(InputAction::ToggleFocused);
            }
            KeyCode::Char(c @ '1'..='4') => {
                let idx = (c as u8 - b'1') as usize;
                let _ = app.handle_input(InputAction::ToggleCard(idx));
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                let _ = app.handle_input(InputAction::Drop);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                let _ = app.handle_input(InputAction::Reveal);
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                let _ = app.handle_input(InputAction::Reset);
            }
            KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Esc => {
                let _ = app.handle_input(InputAction::Exit);
            }
            _ => {}
        },
    }
    false
}
