use serde::{Deserialize, Serialize};

/// Represents a user-defined playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Display name, casing preserved from creation
    pub name: String,

    /// Member video IDs (ordered, unique)
    videos: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            videos: Vec::new(),
        }
    }

    /// Append a video to the end of the playlist.
    ///
    /// Returns `false` without modifying the playlist if the video is
    /// already a member.
    pub fn add(&mut self, video_id: &str) -> bool {
        if self.contains(video_id) {
            return false;
        }
        self.videos.push(video_id.to_string());
        true
    }

    /// Remove a video from the playlist, returning whether it was a member
    pub fn remove(&mut self, video_id: &str) -> bool {
        match self.videos.iter().position(|id| id == video_id) {
            Some(index) => {
                self.videos.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove all videos
    pub fn clear(&mut self) {
        self.videos.clear();
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.videos.iter().any(|id| id == video_id)
    }

    /// Member video IDs in playlist order
    pub fn video_ids(&self) -> &[String] {
        &self.videos
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
