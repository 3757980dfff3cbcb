use crate::config::RoundConfig;
use crate::hand::HAND_SIZE;
use crate::round::{ActionError, Intent, Phase, Round};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    StartGame,
    ToggleHelp,
    FocusNext,
    FocusPrev,
    ToggleFocused,
    ToggleCard(usize),
    Drop,
    Reveal,
    Reset,
    Exit,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub round: Round,
    // Player card under the cursor
    pub focus: usize,
    // Start-screen config being edited
    pub menu_index: usize,
    pub cfg_reveal_ms: u64,
    pub cfg_fixed_seed: bool,
    pub cfg_seed: u64,
    help_open: bool,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        let config = RoundConfig::default();
        Self {
            scene: Scene::Menu,
            round: Round::new(config),
            focus: 0,
            menu_index: 0,
            cfg_reveal_ms: config.reveal_interval.as_millis() as u64,
            cfg_fixed_seed: false,
            cfg_seed: 1,
            help_open: false,
            action_error: None,
            action_error_at: None,
        }
    }
}

impl AppState {
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    /// Config for the next round, built from the start-screen settings.
    pub fn round_config(&self) -> RoundConfig {
        let cfg = RoundConfig::default()
            .with_reveal_interval(Duration::from_millis(self.cfg_reveal_ms));
        if self.cfg_fixed_seed {
            cfg.with_seed(self.cfg_seed)
        } else {
            cfg
        }
    }

    /// Forward an intent to the round; rejections become a transient status line.
    fn send(&mut self, intent: Intent) -> bool {
        if self.scene != Scene::Table {
            return false;
        }
        match self.round.apply(intent) {
            Ok(()) => {
                self.clear_action_error();
                true
            }
            Err(err) => {
                self.show_error(&err);
                false
            }
        }
    }

    fn show_error(&mut self, err: &ActionError) {
        self.action_error = Some(err.to_string());
        self.action_error_at = Some(Instant::now());
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::StartGame => {
                if self.scene == Scene::Menu {
                    return self.start_game();
                }
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::FocusNext => {
                if self.scene == Scene::Table {
                    self.focus = (self.focus + 1) % HAND_SIZE;
                }
                false
            }
            InputAction::FocusPrev => {
                if self.scene == Scene::Table {
                    self.focus = (self.focus + HAND_SIZE - 1) % HAND_SIZE;
                }
                false
            }
            InputAction::ToggleFocused => self.send(Intent::ToggleCardSelection(self.focus)),
            InputAction::ToggleCard(idx) => {
                if idx < HAND_SIZE {
                    self.focus = idx;
                }
                self.send(Intent::ToggleCardSelection(idx))
            }
            InputAction::Drop => self.send(Intent::DropSelectedCards),
            InputAction::Reveal => self.send(Intent::HandleReveal),
            InputAction::Reset => self.send(Intent::ResetGame),
            InputAction::Exit => {
                if self.scene != Scene::Table {
                    return false;
                }
                self.round.exit_game();
                self.close_help();
                self.clear_action_error();
                self.focus = 0;
                self.scene = Scene::Menu;
                true
            }
        }
    }

    /// Replace the round with one built from the current settings and deal it.
    pub fn start_game(&mut self) -> bool {
        self.round.exit_game();
        self.round = Round::new(self.round_config());
        self.scene = Scene::Table;
        self.focus = 0;
        self.send(Intent::StartGame)
    }

    /// Timer tick: expire stale errors and drive a pending reveal.
    pub fn on_tick(&mut self, elapsed: Duration) -> bool {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
        if self.scene != Scene::Table {
            return false;
        }
        self.round.advance(elapsed)
    }

    pub fn revealing(&self) -> bool {
        self.round.phase() == Phase::Revealing
    }
}
