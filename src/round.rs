//! Round controller: owns all state of one human-vs-computer round and
//! drives it through its phases.
//!
//! ```text
//! Idle --start--> Dealt <--drop-- Exchanging
//!                   |  --select-->     |
//!                   +------reveal------+--> Revealing --(timer)--> Resolved
//! any --reset--> Dealt            any --exit--> Idle
//! ```
//!
//! Intents that are not allowed in the current phase are rejected with an
//! [`ActionError`] and leave the round untouched.

use crate::cards::Card;
use crate::config::RoundConfig;
use crate::deal::{deal, DealError};
use crate::deck::Deck;
use crate::evaluator::{evaluate, Evaluation};
use crate::exchange::{drop_selected, Selection, MAX_EXCHANGES};
use crate::hand::{Hand, HAND_SIZE};
use crate::reveal::{CancelToken, RevealSequence, RevealStep};
use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    /// No round on the table.
    Idle,
    /// Hands dealt, nothing selected.
    Dealt,
    /// At least one player card selected for exchange.
    Exchanging,
    /// Computer cards are being turned over.
    Revealing,
    /// Winner decided.
    Resolved,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::Dealt => "Dealt",
            Phase::Exchanging => "Exchanging",
            Phase::Revealing => "Revealing",
            Phase::Resolved => "Resolved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    Player,
    Computer,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Player => f.write_str("Player"),
            Winner::Computer => f.write_str("Computer"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Outcome {
    pub winner: Winner,
    pub message: String,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("no round in progress")]
    NoRound,
    #[error("cards are already being revealed")]
    RevealStarted,
    #[error("no card at slot {index}")]
    SlotOutOfRange { index: usize },
    #[error("no cards selected")]
    NothingSelected,
    #[error("exchange limit reached ({max})")]
    ExchangeCapReached { max: u8 },
    #[error(transparent)]
    Deal(#[from] DealError),
}

/// Inbound intents from a front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Intent {
    StartGame,
    ToggleCardSelection(usize),
    DropSelectedCards,
    HandleReveal,
    ResetGame,
    ExitGame,
}

/// One rendered card slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView {
    pub card: Card,
    pub face_up: bool,
    pub selected: bool,
}

/// Read-only snapshot for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundView {
    pub phase: Phase,
    pub player: Vec<CardView>,
    pub computer: Vec<CardView>,
    pub remaining: usize,
    pub exchanges_used: u8,
    pub max_exchanges: u8,
    pub winner: Option<Winner>,
    pub result_message: String,
    pub drop_enabled: bool,
}

#[derive(Debug)]
pub struct Round {
    config: RoundConfig,
    rng: ChaCha8Rng,
    phase: Phase,
    player: Option<Hand>,
    computer: Option<Hand>,
    remainder: Deck,
    selection: Selection,
    exchanges_used: u8,
    revealed: [bool; HAND_SIZE],
    reveal: Option<RevealSequence>,
    winner: Option<Winner>,
    result_message: String,
}

impl Default for Round {
    fn default() -> Self {
        Self::new(RoundConfig::default())
    }
}

impl Round {
    pub fn new(config: RoundConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            phase: Phase::Idle,
            player: None,
            computer: None,
            remainder: Deck::empty(),
            selection: Selection::default(),
            exchanges_used: 0,
            revealed: [false; HAND_SIZE],
            reveal: None,
            winner: None,
            result_message: String::new(),
        }
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player_hand(&self) -> Option<&Hand> {
        self.player.as_ref()
    }

    pub fn computer_hand(&self) -> Option<&Hand> {
        self.computer.as_ref()
    }

    /// Cards left in the draw pile.
    pub fn remaining(&self) -> usize {
        self.remainder.len()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn exchanges_used(&self) -> u8 {
        self.exchanges_used
    }

    /// Face-up flags of the computer's cards.
    pub fn revealed(&self) -> [bool; HAND_SIZE] {
        self.revealed
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn result_message(&self) -> &str {
        &self.result_message
    }

    /// True from the moment reveal is requested until the round is replaced.
    pub fn reveal_started(&self) -> bool {
        matches!(self.phase, Phase::Revealing | Phase::Resolved)
    }

    /// Token of the pending reveal, if one is running.
    pub fn reveal_token(&self) -> Option<&CancelToken> {
        self.reveal.as_ref().map(|seq| seq.token())
    }

    /// Time until the next reveal step is due.
    pub fn next_reveal_due(&self) -> Option<Duration> {
        self.reveal.as_ref().and_then(|seq| seq.next_due())
    }

    pub fn drop_enabled(&self) -> bool {
        self.selection.any() && self.exchanges_used < MAX_EXCHANGES && !self.reveal_started()
    }

    /// Shuffle a fresh deck and deal both hands, discarding whatever was on the table.
    pub fn start_game(&mut self) -> Result<(), DealError> {
        let shuffled = Deck::ordered().shuffled_with(&mut self.rng);
        let dealt = deal(shuffled)?;
        self.cancel_reveal();
        info!(
            "round started: player [{}], {} cards in pile",
            dealt.player,
            dealt.remainder.len()
        );
        debug!("computer holds [{}]", dealt.computer);
        self.player = Some(dealt.player);
        self.computer = Some(dealt.computer);
        self.remainder = dealt.remainder;
        self.selection.clear();
        self.revealed = [false; HAND_SIZE];
        self.exchanges_used = 0;
        self.winner = None;
        self.result_message.clear();
        self.phase = Phase::Dealt;
        Ok(())
    }

    pub fn reset_game(&mut self) -> Result<(), DealError> {
        info!("round reset");
        self.start_game()
    }

    /// Clear the table back to idle.
    pub fn exit_game(&mut self) {
        self.cancel_reveal();
        self.player = None;
        self.computer = None;
        self.remainder = Deck::empty();
        self.selection.clear();
        self.revealed = [false; HAND_SIZE];
        self.exchanges_used = 0;
        self.winner = None;
        self.result_message.clear();
        self.phase = Phase::Idle;
        info!("round exited");
    }

    pub fn toggle_card_selection(&mut self, index: usize) -> Result<(), ActionError> {
        self.ensure_can_act()?;
        let selected =
            self.selection.toggle(index).ok_or(ActionError::SlotOutOfRange { index })?;
        debug!("slot {index} {}", if selected { "selected" } else { "deselected" });
        self.phase = if self.selection.any() { Phase::Exchanging } else { Phase::Dealt };
        Ok(())
    }

    /// Exchange the selected cards. Counts against the cap even when the pile
    /// could not cover every selected slot.
    pub fn drop_selected_cards(&mut self) -> Result<(), ActionError> {
        self.ensure_can_act()?;
        if self.exchanges_used >= MAX_EXCHANGES {
            return Err(ActionError::ExchangeCapReached { max: MAX_EXCHANGES });
        }
        if !self.selection.any() {
            return Err(ActionError::NothingSelected);
        }
        let Some(hand) = self.player.as_ref() else {
            return Err(ActionError::NoRound);
        };
        let exchange = drop_selected(hand, &self.selection, &self.remainder);
        self.player = Some(exchange.hand);
        self.remainder = exchange.remainder;
        self.selection.clear();
        self.exchanges_used += 1;
        self.phase = Phase::Dealt;
        debug!(
            "exchange {}/{}: replaced {}, hand [{}], {} left in pile",
            self.exchanges_used,
            MAX_EXCHANGES,
            exchange.replaced,
            exchange.hand,
            self.remainder.len()
        );
        Ok(())
    }

    /// Start turning over the computer's cards. The first card flips now; the
    /// rest follow via [`Round::advance`].
    pub fn handle_reveal(&mut self) -> Result<(), ActionError> {
        self.ensure_can_act()?;
        self.cancel_reveal();
        let seq = RevealSequence::new(HAND_SIZE, self.config.reveal_interval, CancelToken::new());
        self.reveal = Some(seq);
        self.phase = Phase::Revealing;
        info!("reveal started");
        self.advance(Duration::ZERO);
        Ok(())
    }

    /// Feed elapsed time to a pending reveal. Returns true if anything changed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(seq) = self.reveal.as_mut() else {
            return false;
        };
        if seq.is_cancelled() {
            self.reveal = None;
            return false;
        }
        let steps = seq.advance(dt);
        let changed = !steps.is_empty();
        for step in steps {
            match step {
                RevealStep::Card(i) => {
                    if let Some(flag) = self.revealed.get_mut(i) {
                        *flag = true;
                    }
                    debug!("computer card {i} revealed");
                }
                RevealStep::Resolve => self.resolve(),
            }
        }
        changed
    }

    /// Dispatch a front-end intent.
    pub fn apply(&mut self, intent: Intent) -> Result<(), ActionError> {
        let res = match intent {
            Intent::StartGame => self.start_game().map_err(ActionError::from),
            Intent::ResetGame => self.reset_game().map_err(ActionError::from),
            Intent::ExitGame => {
                self.exit_game();
                Ok(())
            }
            Intent::ToggleCardSelection(i) => self.toggle_card_selection(i),
            Intent::DropSelectedCards => self.drop_selected_cards(),
            Intent::HandleReveal => self.handle_reveal(),
        };
        if let Err(err) = &res {
            debug!("{intent:?} ignored: {err}");
        }
        res
    }

    pub fn view(&self) -> RoundView {
        let player = self
            .player
            .iter()
            .flat_map(|h| h.iter())
            .enumerate()
            .map(|(i, card)| CardView { card, face_up: true, selected: self.selection.is_selected(i) })
            .collect();
        let computer = self
            .computer
            .iter()
            .flat_map(|h| h.iter())
            .enumerate()
            .map(|(i, card)| CardView { card, face_up: self.revealed[i], selected: false })
            .collect();
        RoundView {
            phase: self.phase,
            player,
            computer,
            remaining: self.remainder.len(),
            exchanges_used: self.exchanges_used,
            max_exchanges: MAX_EXCHANGES,
            winner: self.winner,
            result_message: self.result_message.clone(),
            drop_enabled: self.drop_enabled(),
        }
    }

    fn ensure_can_act(&self) -> Result<(), ActionError> {
        match self.phase {
            Phase::Idle => Err(ActionError::NoRound),
            Phase::Revealing | Phase::Resolved => Err(ActionError::RevealStarted),
            Phase::Dealt | Phase::Exchanging => Ok(()),
        }
    }

    fn cancel_reveal(&mut self) {
        if let Some(seq) = self.reveal.take() {
            if !seq.is_finished() {
                seq.token().cancel();
                warn!("pending reveal cancelled after {} of {HAND_SIZE} cards", seq.revealed());
            }
        }
    }

    fn resolve(&mut self) {
        let (Some(player), Some(computer)) = (self.player.as_ref(), self.computer.as_ref()) else {
            return;
        };
        let outcome = determine_winner(&evaluate(player), &evaluate(computer));
        info!("round resolved: {}", outcome.message);
        self.winner = Some(outcome.winner);
        self.result_message = outcome.message;
        self.reveal = None;
        self.phase = Phase::Resolved;
    }
}

/// Higher score wins. Equal scores fall back to the high-card value.
///
/// Known quirk: only High Card carries a high-card value, so any other tie
/// compares two unset values and goes to the computer, as does an equal
/// high card. Kept until the tie rule is settled.
pub fn determine_winner(player: &Evaluation, computer: &Evaluation) -> Outcome {
    if player.score() > computer.score() {
        return Outcome {
            winner: Winner::Player,
            message: format!("Player wins with: {}", player.label()),
        };
    }
    if computer.score() > player.score() {
        return Outcome {
            winner: Winner::Computer,
            message: format!("Computer wins with: {}", computer.label()),
        };
    }
    let player_high = player.high_card.map_or(-1, i16::from);
    let computer_high = computer.high_card.map_or(-1, i16::from);
    if player_high > computer_high {
        Outcome { winner: Winner::Player, message: "Player wins with the high card.".to_string() }
    } else {
        Outcome {
            winner: Winner::Computer,
            message: "Computer wins with the high card.".to_string(),
        }
    }
}
