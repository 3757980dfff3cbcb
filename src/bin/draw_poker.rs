use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use draw_poker::logging::{self, LogSettings};
use draw_poker::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn setup_logging() {
    match LogSettings::from_env().and_then(|s| s.map(|s| logging::init(&s)).transpose()) {
        Ok(Some(())) => log::info!("draw-poker {} starting", draw_poker::VERSION),
        Ok(None) => {}
        Err(err) => eprintln!("logging disabled: {err}"),
    }
}

fn main() -> io::Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "draw-poker TUI requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            draw_poker::VERSION
        );
        return Ok(());
    }
    setup_logging();
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = AppState::default();

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    log::info!("draw-poker exiting");
    res
}
