//! Timing configuration for a game session

use std::time::Duration;

const DEFAULT_DEBOUNCE_MS: u64 = 50;
const DEFAULT_REVEAL_STAGGER_MS: u64 = 250;
const DEFAULT_MESSAGE_MS: u64 = 2000;

/// Observable delays of the game loop
///
/// None of these are hard guarantees; a slow terminal only stretches them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Keys whose blocking read returns faster than this are discarded as noise
    /// (the tail of an escape sequence or input queued before the prompt)
    pub debounce: Duration,
    /// Pause before each cell of a submitted row is revealed
    pub reveal_stagger: Duration,
    /// How long "Not enough letters" / "Not in word list" stay on screen
    pub message_duration: Duration,
}

impl GameConfig {
    #[must_use]
    pub const fn from_millis(debounce: u64, reveal_stagger: u64, message_duration: u64) -> Self {
        Self {
            debounce: Duration::from_millis(debounce),
            reveal_stagger: Duration::from_millis(reveal_stagger),
            message_duration: Duration::from_millis(message_duration),
        }
    }

    /// No debounce and no pauses, for scripted input
    #[must_use]
    pub const fn instant() -> Self {
        Self::from_millis(0, 0, 0)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_millis(
            DEFAULT_DEBOUNCE_MS,
            DEFAULT_REVEAL_STAGGER_MS,
            DEFAULT_MESSAGE_MS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timings() {
        let config = GameConfig::default();
        assert_eq!(config.debounce, Duration::from_millis(50));
        assert_eq!(config.reveal_stagger, Duration::from_millis(250));
        assert_eq!(config.message_duration, Duration::from_secs(2));
    }

    #[test]
    fn instant_is_all_zero() {
        let config = GameConfig::instant();
        assert!(config.debounce.is_zero());
        assert!(config.reveal_stagger.is_zero());
        assert!(config.message_duration.is_zero());
    }
}
