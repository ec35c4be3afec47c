//! Play, stop, pause and continue

use super::{Player, PlayerError, Report};
use rand::seq::IndexedRandom;

impl Player {
    /// Play a video by ID, stopping whatever is playing first.
    ///
    /// Replaying the current video still announces the stop.
    pub fn play(&mut self, video_id: &str) -> Report {
        const CONTEXT: &str = "Cannot play video";

        let Some(video) = self.catalog.get_video(video_id) else {
            return Report::failed(CONTEXT, PlayerError::VideoNotFound);
        };
        if let Some(reason) = video.flag_reason() {
            return Report::failed(
                CONTEXT,
                PlayerError::Flagged {
                    reason: reason.to_string(),
                },
            );
        }
        let title = video.title.clone();

        let mut report = Report::new();
        self.stop_current(&mut report);

        self.currently_playing = Some(video_id.to_string());
        self.is_paused = false;
        log::debug!("Now playing {:?}", video_id);

        report.push(format!("Playing video: {}", title));
        report
    }

    /// Stop the current video
    pub fn stop(&mut self) -> Report {
        let mut report = Report::new();
        if !self.stop_current(&mut report) {
            return Report::failed("Cannot stop video", PlayerError::NothingPlaying);
        }
        report
    }

    /// Play a uniformly random unflagged video
    pub fn play_random(&mut self) -> Report {
        let candidates: Vec<&str> = self
            .catalog
            .videos()
            .filter(|v| !v.is_flagged())
            .map(|v| v.id.as_str())
            .collect();

        let Some(video_id) = candidates.choose(&mut self.rng).map(|id| id.to_string()) else {
            let err = PlayerError::NoVideosAvailable;
            return Report::line(err.to_string()).with_failure(err);
        };

        log::debug!(
            "Random pick {:?} out of {} candidates",
            video_id,
            candidates.len()
        );
        self.play(&video_id)
    }

    /// Pause the current video. Pausing twice leaves the state unchanged.
    pub fn pause(&mut self) -> Report {
        let Some(title) = self.current_title() else {
            return Report::failed("Cannot pause video", PlayerError::NothingPlaying);
        };

        if self.is_paused {
            let err = PlayerError::AlreadyPaused { title };
            return Report::line(err.to_string()).with_failure(err);
        }

        self.is_paused = true;
        log::debug!("Paused {:?}", title);
        Report::line(format!("Pausing video: {}", title))
    }

    /// Continue a paused video
    pub fn resume(&mut self) -> Report {
        const CONTEXT: &str = "Cannot continue video";

        let Some(title) = self.current_title() else {
            return Report::failed(CONTEXT, PlayerError::NothingPlaying);
        };
        if !self.is_paused {
            return Report::failed(CONTEXT, PlayerError::NotPaused);
        }

        self.is_paused = false;
        log::debug!("Continuing {:?}", title);
        Report::line(format!("Continuing video: {}", title))
    }

    /// Describe the current video
    pub fn show_playing(&self) -> Report {
        match self.currently_playing() {
            Some(video) => {
                let suffix = if self.is_paused { " - PAUSED" } else { "" };
                Report::line(format!("Currently playing: {}{}", video, suffix))
            }
            None => Report::line("No video is currently playing"),
        }
    }

    /// Stop playback if anything is playing, appending the notification.
    /// Returns whether a video was stopped.
    pub(super) fn stop_current(&mut self, report: &mut Report) -> bool {
        let Some(video_id) = self.currently_playing.take() else {
            return false;
        };
        self.is_paused = false;

        let title = self
            .catalog
            .get_video(&video_id)
            .map_or(video_id.as_str(), |v| v.title.as_str());
        report.push(format!("Stopping video: {}", title));
        log::debug!("Stopped {:?}", video_id);
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::model::Catalog;
    use crate::player::test_support::catalog;
    use crate::player::{ErrorKind, PlaybackState, Player, PlayerConfig};

    #[test]
    fn test_play_unknown_video() {
        let mut player = Player::new(catalog());
        let report = player.play("does_not_exist");

        assert_eq!(report.lines(), ["Cannot play video: Video does not exist"]);
        assert_eq!(report.error_kind(), Some(ErrorKind::NotFound));
        assert_eq!(player.playback_state(), PlaybackState::Stopped);
    }

    #[test]
    fn test_play_stops_previous_first() {
        let mut player = Player::new(catalog());
        assert_eq!(
            player.play("amazing_cats_video_id").lines(),
            ["Playing video: Amazing Cats"]
        );

        let report = player.play("funny_dogs_video_id");
        assert_eq!(
            report.lines(),
            ["Stopping video: Amazing Cats", "Playing video: Funny Dogs"]
        );
        assert_eq!(player.currently_playing().unwrap().id, "funny_dogs_video_id");
    }

    #[test]
    fn test_replay_current_video_announces_stop() {
        let mut player = Player::new(catalog());
        player.play("amazing_cats_video_id");

        let report = player.play("amazing_cats_video_id");
        assert_eq!(
            report.lines(),
            ["Stopping video: Amazing Cats", "Playing video: Amazing Cats"]
        );
    }

    #[test]
    fn test_play_clears_pause() {
        let mut player = Player::new(catalog());
        player.play("amazing_cats_video_id");
        player.pause();

        let report = player.play("funny_dogs_video_id");
        assert_eq!(report.lines()[0], "Stopping video: Amazing Cats");
        assert_eq!(player.playback_state(), PlaybackState::Playing);
    }

    #[test]
    fn test_stop() {
        let mut player = Player::new(catalog());
        let report = player.stop();
        assert_eq!(
            report.lines(),
            ["Cannot stop video: No video is currently playing"]
        );
        assert_eq!(report.error_kind(), Some(ErrorKind::InvalidState));

        player.play("amazing_cats_video_id");
        player.pause();
        assert_eq!(player.stop().lines(), ["Stopping video: Amazing Cats"]);
        assert_eq!(player.playback_state(), PlaybackState::Stopped);
        assert!(!player.is_paused());
    }

    #[test]
    fn test_pause_is_idempotent_with_distinct_message() {
        let mut player = Player::new(catalog());
        player.play("amazing_cats_video_id");

        let first = player.pause();
        assert_eq!(first.lines(), ["Pausing video: Amazing Cats"]);
        assert!(first.is_ok());

        let second = player.pause();
        assert_eq!(second.lines(), ["Video already paused: Amazing Cats"]);
        assert_eq!(second.error_kind(), Some(ErrorKind::InvalidState));
        assert_eq!(player.playback_state(), PlaybackState::Paused);
    }

    #[test]
    fn test_pause_when_stopped() {
        let mut player = Player::new(catalog());
        assert_eq!(
            player.pause().lines(),
            ["Cannot pause video: No video is currently playing"]
        );
        assert!(!player.is_paused());
    }

    #[test]
    fn test_resume() {
        let mut player = Player::new(catalog());
        assert_eq!(
            player.resume().lines(),
            ["Cannot continue video: No video is currently playing"]
        );

        player.play("amazing_cats_video_id");
        assert_eq!(
            player.resume().lines(),
            ["Cannot continue video: Video is not paused"]
        );

        player.pause();
        assert_eq!(player.resume().lines(), ["Continuing video: Amazing Cats"]);
        assert_eq!(player.playback_state(), PlaybackState::Playing);
    }

    #[test]
    fn test_show_playing() {
        let mut player = Player::new(catalog());
        assert_eq!(player.show_playing().lines(), ["No video is currently playing"]);

        player.play("amazing_cats_video_id");
        assert_eq!(
            player.show_playing().lines(),
            ["Currently playing: Amazing Cats (amazing_cats_video_id) [#cat #animal]"]
        );

        player.pause();
        assert_eq!(
            player.show_playing().lines(),
            ["Currently playing: Amazing Cats (amazing_cats_video_id) [#cat #animal] - PAUSED"]
        );
    }

    #[test]
    fn test_play_random_picks_unflagged() {
        let mut player = Player::with_config(catalog(), PlayerConfig::new().with_seed(7));
        for id in [
            "funny_dogs_video_id",
            "amazing_cats_video_id",
            "another_cat_video_id",
            "life_at_google_video_id",
        ] {
            player.flag_video(id, None);
        }

        for _ in 0..5 {
            let report = player.play_random();
            assert!(report.is_ok());
            assert_eq!(
                report.lines().last().unwrap(),
                "Playing video: Video about nothing"
            );
        }
    }

    #[test]
    fn test_play_random_stops_current() {
        let mut player = Player::with_config(catalog(), PlayerConfig::new().with_seed(42));
        player.play("amazing_cats_video_id");

        let report = player.play_random();
        assert_eq!(report.lines().len(), 2);
        assert_eq!(report.lines()[0], "Stopping video: Amazing Cats");
        assert!(report.lines()[1].starts_with("Playing video: "));
        assert!(!player.currently_playing().unwrap().is_flagged());
    }

    #[test]
    fn test_play_random_without_videos() {
        let mut player = Player::new(Catalog::new());
        let report = player.play_random();

        assert_eq!(report.lines(), ["No videos available"]);
        assert_eq!(report.error_kind(), Some(ErrorKind::NotFound));
        assert_eq!(player.playback_state(), PlaybackState::Stopped);
    }

    #[test]
    fn test_seeded_players_pick_alike() {
        let mut a = Player::with_config(catalog(), PlayerConfig::new().with_seed(3));
        let mut b = Player::with_config(catalog(), PlayerConfig::new().with_seed(3));

        for _ in 0..4 {
            assert_eq!(a.play_random(), b.play_random());
        }
    }
}
