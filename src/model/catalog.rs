use super::Video;

/// The video catalog, kept in load order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    videos: Vec<Video>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self { videos: Vec::new() }
    }

    /// Add a video to the catalog.
    ///
    /// Returns `false` and leaves the catalog untouched if a video with the
    /// same ID is already present.
    pub fn add_video(&mut self, video: Video) -> bool {
        if self.get_video(&video.id).is_some() {
            return false;
        }
        self.videos.push(video);
        true
    }

    /// Get a video by ID
    pub fn get_video(&self, id: &str) -> Option<&Video> {
        self.videos.iter().find(|v| v.id == id)
    }

    pub(crate) fn get_video_mut(&mut self, id: &str) -> Option<&mut Video> {
        self.videos.iter_mut().find(|v| v.id == id)
    }

    /// All videos in catalog order
    pub fn videos(&self) -> impl Iterator<Item = &Video> {
        self.videos.iter()
    }

    /// All videos sorted by title
    pub fn videos_by_title(&self) -> Vec<&Video> {
        let mut sorted: Vec<&Video> = self.videos.iter().collect();
        sorted.sort_by(|a, b| a.title.cmp(&b.title));
        sorted
    }

    /// Total number of videos
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl FromIterator<Video> for Catalog {
    fn from_iter<I: IntoIterator<Item = Video>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for video in iter {
            catalog.add_video(video);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, title: &str) -> Video {
        Video::new(id, title, vec!["#test".to_string()])
    }

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert_eq!(catalog.video_count(), 0);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_video() {
        let mut catalog = Catalog::new();

        assert!(catalog.add_video(video("test123", "Test Video")));

        assert_eq!(catalog.video_count(), 1);
        assert_eq!(catalog.get_video("test123").unwrap().title, "Test Video");
        assert!(catalog.get_video("TEST123").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = Catalog::new();
        assert!(catalog.add_video(video("dup", "First")));
        assert!(!catalog.add_video(video("dup", "Second")));

        assert_eq!(catalog.video_count(), 1);
        assert_eq!(catalog.get_video("dup").unwrap().title, "First");
    }

    #[test]
    fn test_orderings() {
        let catalog: Catalog = vec![video("z", "Zebra"), video("a", "Apple"), video("m", "Mango")]
            .into_iter()
            .collect();

        let load_order: Vec<&str> = catalog.videos().map(|v| v.id.as_str()).collect();
        assert_eq!(load_order, ["z", "a", "m"]);

        let by_title: Vec<&str> = catalog
            .videos_by_title()
            .into_iter()
            .map(|v| v.title.as_str())
            .collect();
        assert_eq!(by_title, ["Apple", "Mango", "Zebra"]);
    }
}
