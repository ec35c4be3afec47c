//! Video list parser
//!
//! Line format: `Title | video_id | tag1,tag2`. The tag field is optional.

use crate::model::{Catalog, Video};

/// Parse a video list into a catalog.
///
/// Blank lines are ignored. Malformed lines and duplicate IDs are skipped
/// with a warning rather than failing the whole load.
pub fn parse_catalog(text: &str) -> Catalog {
    let mut catalog = Catalog::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let Some(video) = parse_line(line) else {
            log::warn!("Skipping malformed catalog line {}: {:?}", line_no, line);
            continue;
        };

        let id = video.id.clone();
        if !catalog.add_video(video) {
            log::warn!("Skipping duplicate video id {:?} on line {}", id, line_no);
        }
    }

    log::debug!("Parsed {} videos from catalog text", catalog.video_count());
    catalog
}

fn parse_line(line: &str) -> Option<Video> {
    let mut fields = line.split('|').map(str::trim);

    let title = fields.next()?;
    let id = fields.next()?;
    if id.is_empty() {
        return None;
    }

    let tags = fields
        .next()
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(Video::new(id, title, tags))
}
