//! Data model for the video catalog and playlists
//!
//! Plain records with no knowledge of playback state; the player
//! coordinates them.

mod catalog;
mod playlist;
mod video;

pub use catalog::Catalog;
pub use playlist::Playlist;
pub use video::{Annotated, Video};
