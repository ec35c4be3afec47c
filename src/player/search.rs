//! Title and tag search with numbered results
//!
//! A search remembers its results so the caller can follow up with
//! [`Player::play_result`] or [`Player::play_selection`].

use super::{Player, Report};
use crate::model::Video;

const PLAY_PROMPT: &str =
    "Would you like to play any of the above? If yes, specify the number of the video.";
const PLAY_PROMPT_HINT: &str = "If your answer is not a valid number, we will assume it's a no.";

impl Player {
    /// Search unflagged videos whose title contains `term`, ignoring case
    pub fn search_videos(&mut self, term: &str) -> Report {
        let matches = self.matching_ids(|video| video.title_contains(term));
        self.present_results(term, matches)
    }

    /// Search unflagged videos carrying exactly `tag`
    pub fn search_videos_tag(&mut self, tag: &str) -> Report {
        let matches = self.matching_ids(|video| video.has_tag(tag));
        self.present_results(tag, matches)
    }

    /// Videos from the most recent search, in result order
    pub fn last_results(&self) -> impl Iterator<Item = &Video> {
        self.last_results
            .iter()
            .filter_map(|id| self.catalog.get_video(id))
    }

    /// Play the 1-based `number`th result of the last search.
    ///
    /// Anything out of range is treated as declining and yields an
    /// empty report.
    pub fn play_result(&mut self, number: usize) -> Report {
        let chosen = number
            .checked_sub(1)
            .and_then(|index| self.last_results.get(index))
            .cloned();

        match chosen {
            Some(video_id) => self.play(&video_id),
            None => {
                log::debug!("Ignoring search selection {}", number);
                Report::new()
            }
        }
    }

    /// Play a search result from the user's raw answer; non-numeric
    /// answers are a silent no.
    pub fn play_selection(&mut self, answer: &str) -> Report {
        match answer.trim().parse::<usize>() {
            Ok(number) => self.play_result(number),
            Err(_) => Report::new(),
        }
    }

    fn matching_ids(&self, predicate: impl Fn(&Video) -> bool) -> Vec<String> {
        self.catalog
            .videos()
            .filter(|video| !video.is_flagged() && predicate(video))
            .map(|video| video.id.clone())
            .collect()
    }

    fn present_results(&mut self, term: &str, matches: Vec<String>) -> Report {
        log::debug!("Search {:?} matched {} videos", term, matches.len());
        self.last_results = matches;

        if self.last_results.is_empty() {
            return Report::line(format!("No search results for {}", term));
        }

        let mut report = Report::line(format!("Here are the results for {}:", term));
        for (index, video) in self.last_results().enumerate() {
            report.push(format!("{}) {}", index + 1, video));
        }
        report.push(PLAY_PROMPT);
        report.push(PLAY_PROMPT_HINT);
        report
    }
}
