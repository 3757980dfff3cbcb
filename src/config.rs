use std::time::Duration;

/// Delay between reveal steps unless configured otherwise.
pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_secs(1);

/// Per-round settings. Rules themselves (hand size, deck, exchange cap) are fixed.
///
/// ```
/// use draw_poker::config::RoundConfig;
/// use std::time::Duration;
///
/// let cfg = RoundConfig::default().with_seed(7).with_reveal_interval(Duration::ZERO);
/// assert_eq!(cfg.seed, Some(7));
/// assert_eq!(cfg.reveal_interval, Duration::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundConfig {
    pub reveal_interval: Duration,
    /// Fixed RNG seed for reproducible shuffles; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self { reveal_interval: DEFAULT_REVEAL_INTERVAL, seed: None }
    }
}

impl RoundConfig {
    pub fn with_reveal_interval(mut self, interval: Duration) -> Self {
        self.reveal_interval = interval;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
