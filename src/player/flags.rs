//! Flagging
//!
//! A flagged video cannot be played, added to playlists or found by search,
//! but it still shows up (annotated) in full listings and playlists.

use super::{Player, PlayerError, Report};

impl Player {
    /// Flag a video, stopping it first if it is the one playing.
    ///
    /// A missing or blank reason falls back to the configured default.
    pub fn flag_video(&mut self, video_id: &str, reason: Option<&str>) -> Report {
        const CONTEXT: &str = "Cannot flag video";

        let Some(video) = self.catalog.get_video(video_id) else {
            return Report::failed(CONTEXT, PlayerError::VideoNotFound);
        };
        if video.is_flagged() {
            return Report::failed(CONTEXT, PlayerError::AlreadyFlagged);
        }

        let reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(self.config.default_flag_reason.as_str())
            .to_string();

        let mut report = Report::new();
        if self.currently_playing.as_deref() == Some(video_id) {
            self.stop_current(&mut report);
        }

        let Some(video) = self.catalog.get_video_mut(video_id) else {
            return Report::failed(CONTEXT, PlayerError::VideoNotFound);
        };
        video.set_flag(reason.as_str());
        log::debug!("Flagged {:?}: {}", video_id, reason);

        report.push(format!(
            "Successfully flagged video: {} (reason: {})",
            video.title, reason
        ));
        report
    }

    /// Remove the flag from a video
    pub fn allow_video(&mut self, video_id: &str) -> Report {
        const CONTEXT: &str = "Cannot remove flag from video";

        let Some(video) = self.catalog.get_video_mut(video_id) else {
            return Report::failed(CONTEXT, PlayerError::VideoNotFound);
        };
        if !video.is_flagged() {
            return Report::failed(CONTEXT, PlayerError::NotFlagged);
        }

        video.clear_flag();
        log::debug!("Unflagged {:?}", video_id);
        Report::line(format!(
            "Successfully removed flag from video: {}",
            video.title
        ))
    }
}
