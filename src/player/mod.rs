//! Video player session
//!
//! The player owns the catalog together with all mutable session state:
//! what is playing, whether it is paused, the user's playlists and the
//! results of the last search. Every operation returns a [`Report`] and
//! never fails at the call level.

mod config;
mod error;
mod flags;
mod playback;
mod playlists;
mod report;
mod search;

pub use config::{PlayerConfig, DEFAULT_FLAG_REASON};
pub use error::{ErrorKind, PlayerError};
pub use report::Report;

use crate::model::{Catalog, Playlist, Video};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// Playback state derived from the current video and pause flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

/// Interactive video player over an in-memory catalog
pub struct Player {
    config: PlayerConfig,
    catalog: Catalog,

    /// Playlists keyed by lowercased name
    playlists: HashMap<String, Playlist>,

    /// ID of the video currently playing
    currently_playing: Option<String>,

    /// Only meaningful while something is playing
    is_paused: bool,

    /// Video IDs from the most recent search, in result order
    last_results: Vec<String>,

    rng: ChaCha8Rng,
}

impl Player {
    /// Create a player with the default configuration
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, PlayerConfig::default())
    }

    pub fn with_config(catalog: Catalog, config: PlayerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };

        log::debug!(
            "Player created with {} videos (seed: {:?})",
            catalog.video_count(),
            config.seed
        );

        Self {
            config,
            catalog,
            playlists: HashMap::new(),
            currently_playing: None,
            is_paused: false,
            last_results: Vec::new(),
            rng,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The video currently playing, paused or not
    pub fn currently_playing(&self) -> Option<&Video> {
        self.currently_playing
            .as_deref()
            .and_then(|id| self.catalog.get_video(id))
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn playback_state(&self) -> PlaybackState {
        match (&self.currently_playing, self.is_paused) {
            (None, _) => PlaybackState::Stopped,
            (Some(_), false) => PlaybackState::Playing,
            (Some(_), true) => PlaybackState::Paused,
        }
    }

    /// Look up a playlist by name, ignoring case
    pub fn playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&playlist_key(name))
    }

    /// Report the number of videos in the catalog
    pub fn number_of_videos(&self) -> Report {
        Report::line(format!(
            "{} videos in the library",
            self.catalog.video_count()
        ))
    }

    /// List every catalog video sorted by title, flagged ones annotated
    pub fn show_all_videos(&self) -> Report {
        let mut report = Report::line("Here's a list of all available videos:");
        for video in self.catalog.videos_by_title() {
            report.push(video.annotated().to_string());
        }
        report
    }

    fn current_title(&self) -> Option<String> {
        self.currently_playing().map(|v| v.title.clone())
    }
}

/// Normalized key for playlist lookups
fn playlist_key(name: &str) -> String {
    name.to_lowercase()
}
