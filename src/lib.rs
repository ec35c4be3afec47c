//! Video Console - in-memory video player
//!
//! This library models a small video streaming console: a catalog of
//! videos, single-video playback, user playlists, search and flagging.

pub mod loader;
pub mod model;
pub mod player;

pub use model::{Catalog, Playlist, Video};
pub use player::{Player, PlayerConfig, Report};
