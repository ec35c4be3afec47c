//! Player operation failures

/// Broad failure category of a player operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Video or playlist absent
    NotFound,
    /// Duplicate playlist name
    AlreadyExists,
    /// Operation not valid in the current playback or flag state
    InvalidState,
    /// Target video is flagged
    Flagged,
    /// Video already in the playlist
    DuplicateMembership,
    /// Video not in the playlist
    NotAMember,
}

/// Reasons a player operation can fail.
///
/// The display text is the user-facing reason; each operation prefixes it
/// with its own context (e.g. `Cannot play video: `).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    #[error("Video does not exist")]
    VideoNotFound,

    #[error("Playlist does not exist")]
    PlaylistNotFound,

    #[error("A playlist with the same name already exists")]
    PlaylistExists,

    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video is not paused")]
    NotPaused,

    #[error("Video already paused: {title}")]
    AlreadyPaused { title: String },

    #[error("Video is already flagged")]
    AlreadyFlagged,

    #[error("Video is not flagged")]
    NotFlagged,

    #[error("Video is currently flagged (reason: {reason})")]
    Flagged { reason: String },

    #[error("Video already added")]
    AlreadyInPlaylist,

    #[error("Video is not in playlist")]
    NotInPlaylist,

    #[error("No videos available")]
    NoVideosAvailable,
}

impl PlayerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlayerError::VideoNotFound
            | PlayerError::PlaylistNotFound
            | PlayerError::NoVideosAvailable => ErrorKind::NotFound,
            PlayerError::PlaylistExists => ErrorKind::AlreadyExists,
            PlayerError::NothingPlaying
            | PlayerError::NotPaused
            | PlayerError::AlreadyPaused { .. }
            | PlayerError::AlreadyFlagged
            | PlayerError::NotFlagged => ErrorKind::InvalidState,
            PlayerError::Flagged { .. } => ErrorKind::Flagged,
            PlayerError::AlreadyInPlaylist => ErrorKind::DuplicateMembership,
            PlayerError::NotInPlaylist => ErrorKind::NotAMember,
        }
    }
}
