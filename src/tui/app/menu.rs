use super::AppState;

const MAX_REVEAL_MS: u64 = 5_000;
const REVEAL_STEP_MS: u64 = 100;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    RevealDelayMs,
    FixedSeed,
    Seed,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::RevealDelayMs, MenuItem::FixedSeed, MenuItem::Seed];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::RevealDelayMs => format!("Reveal Delay (ms): {}", app.cfg_reveal_ms),
            MenuItem::FixedSeed => {
                format!("Fixed Seed: {}", if app.cfg_fixed_seed { "On" } else { "Off" })
            }
            MenuItem::Seed => {
                if app.cfg_fixed_seed {
                    format!("Seed: {}", app.cfg_seed)
                } else {
                    format!("Seed: {} (unused)", app.cfg_seed)
                }
            }
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::RevealDelayMs => {
                app.cfg_reveal_ms = (app.cfg_reveal_ms + REVEAL_STEP_MS).min(MAX_REVEAL_MS);
            }
            MenuItem::FixedSeed => app.cfg_fixed_seed = !app.cfg_fixed_seed,
            MenuItem::Seed => app.cfg_seed = app.cfg_seed.wrapping_add(1),
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::RevealDelayMs => {
                app.cfg_reveal_ms = app.cfg_reveal_ms.saturating_sub(REVEAL_STEP_MS);
            }
            MenuItem::FixedSeed => app.cfg_fixed_seed = !app.cfg_fixed_seed,
            MenuItem::Seed => app.cfg_seed = app.cfg_seed.wrapping_sub(1),
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }

    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }

    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }

    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_delay_is_clamped() {
        let mut app = AppState::default();
        app.menu_index = 0;
        app.cfg_reveal_ms = 50;
        app.menu_dec();
        assert_eq!(app.cfg_reveal_ms, 0);
        app.cfg_reveal_ms = MAX_REVEAL_MS;
        app.menu_inc();
        assert_eq!(app.cfg_reveal_ms, MAX_REVEAL_MS);
    }

    #[test]
    fn seed_only_used_when_fixed() {
        let mut app = AppState::default();
        assert_eq!(app.round_config().seed, None);
        app.menu_index = 1;
        app.menu_inc();
        assert!(app.cfg_fixed_seed);
        assert_eq!(app.round_config().seed, Some(app.cfg_seed));
    }
}
