//! Playlist management
//!
//! Playlists are looked up case-insensitively. Messages show the name as it
//! was given at creation once the playlist is found, and the caller's text
//! otherwise.

use super::{playlist_key, Player, PlayerError, Report};
use crate::model::Playlist;
use std::collections::hash_map::Entry;

impl Player {
    pub fn create_playlist(&mut self, name: &str) -> Report {
        match self.playlists.entry(playlist_key(name)) {
            Entry::Occupied(_) => {
                Report::failed("Cannot create playlist", PlayerError::PlaylistExists)
            }
            Entry::Vacant(slot) => {
                slot.insert(Playlist::new(name));
                log::debug!("Created playlist {:?}", name);
                Report::line(format!("Successfully created new playlist: {}", name))
            }
        }
    }

    /// Append a catalog video to a playlist
    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Report {
        let Some(playlist) = self.playlists.get_mut(&playlist_key(name)) else {
            return Report::failed(
                &format!("Cannot add video to {}", name),
                PlayerError::PlaylistNotFound,
            );
        };
        let context = format!("Cannot add video to {}", playlist.name);

        let Some(video) = self.catalog.get_video(video_id) else {
            return Report::failed(&context, PlayerError::VideoNotFound);
        };
        if let Some(reason) = video.flag_reason() {
            return Report::failed(
                &context,
                PlayerError::Flagged {
                    reason: reason.to_string(),
                },
            );
        }
        if !playlist.add(&video.id) {
            return Report::failed(&context, PlayerError::AlreadyInPlaylist);
        }

        log::debug!("Added {:?} to playlist {:?}", video.id, playlist.name);
        Report::line(format!("Added video to {}: {}", playlist.name, video.title))
    }

    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> Report {
        let Some(playlist) = self.playlists.get_mut(&playlist_key(name)) else {
            return Report::failed(
                &format!("Cannot remove video from {}", name),
                PlayerError::PlaylistNotFound,
            );
        };
        let context = format!("Cannot remove video from {}", playlist.name);

        let Some(video) = self.catalog.get_video(video_id) else {
            return Report::failed(&context, PlayerError::VideoNotFound);
        };
        if !playlist.remove(&video.id) {
            return Report::failed(&context, PlayerError::NotInPlaylist);
        }

        log::debug!("Removed {:?} from playlist {:?}", video.id, playlist.name);
        Report::line(format!(
            "Removed video from {}: {}",
            playlist.name, video.title
        ))
    }

    /// Remove every video from a playlist, keeping the playlist itself
    pub fn clear_playlist(&mut self, name: &str) -> Report {
        let Some(playlist) = self.playlists.get_mut(&playlist_key(name)) else {
            return Report::failed(
                &format!("Cannot clear playlist {}", name),
                PlayerError::PlaylistNotFound,
            );
        };

        playlist.clear();
        Report::line(format!(
            "Successfully removed all videos from {}",
            playlist.name
        ))
    }

    pub fn delete_playlist(&mut self, name: &str) -> Report {
        match self.playlists.remove(&playlist_key(name)) {
            Some(playlist) => {
                log::debug!("Deleted playlist {:?}", playlist.name);
                Report::line(format!("Deleted playlist: {}", playlist.name))
            }
            None => Report::failed(
                &format!("Cannot delete playlist {}", name),
                PlayerError::PlaylistNotFound,
            ),
        }
    }

    /// List playlist names in alphabetical order
    pub fn show_all_playlists(&self) -> Report {
        if self.playlists.is_empty() {
            return Report::line("No playlists exist yet");
        }

        let mut names: Vec<&str> = self.playlists.values().map(|p| p.name.as_str()).collect();
        names.sort_unstable();

        let mut report = Report::line("Showing all playlists:");
        for name in names {
            report.push(name);
        }
        report
    }

    /// List the videos of one playlist, flagged ones annotated
    pub fn show_playlist(&self, name: &str) -> Report {
        let Some(playlist) = self.playlist(name) else {
            return Report::failed(
                &format!("Cannot show playlist {}", name),
                PlayerError::PlaylistNotFound,
            );
        };

        let mut report = Report::line(format!("Showing playlist: {}", playlist.name));
        if playlist.is_empty() {
            report.push("No videos here yet");
            return report;
        }

        for video in playlist
            .video_ids()
            .iter()
            .filter_map(|id| self.catalog.get_video(id))
        {
            report.push(video.annotated().to_string());
        }
        report
    }
}
