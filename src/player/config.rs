//! Player configuration

/// Reason recorded when a video is flagged without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Configuration for a player session
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Reason used by `flag_video` when none is given
    pub default_flag_reason: String,

    /// Seed for random video selection (None = seeded from the OS)
    pub seed: Option<u64>,
}

impl PlayerConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self {
            default_flag_reason: DEFAULT_FLAG_REASON.to_string(),
            seed: None,
        }
    }

    /// Fix the random seed for reproducible `play_random` picks
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the reason used for flags without one
    pub fn with_default_flag_reason(mut self, reason: impl Into<String>) -> Self {
        self.default_flag_reason = reason.into();
        self
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new()
    }
}
