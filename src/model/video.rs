use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a single video in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique, case-sensitive identifier
    pub id: String,

    /// Display title
    pub title: String,

    /// Tags in the order they were declared
    pub tags: Vec<String>,

    /// Flag reason; `Some` means the video is flagged
    pub flag: Option<String>,
}

impl Video {
    /// Create a new unflagged video
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
            flag: None,
        }
    }

    /// Whether the video is currently flagged
    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    /// Flag reason, if any
    pub fn flag_reason(&self) -> Option<&str> {
        self.flag.as_deref()
    }

    pub fn set_flag(&mut self, reason: impl Into<String>) {
        self.flag = Some(reason.into());
    }

    pub fn clear_flag(&mut self) {
        self.flag = None;
    }

    /// Exact tag membership (case-sensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Case-insensitive substring match on the title
    pub fn title_contains(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }

    /// Listing line including the flag annotation when flagged
    pub fn annotated(&self) -> Annotated<'_> {
        Annotated(self)
    }
}

/// `Title (id) [tag1 tag2]`
impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}

/// Display adapter appending ` - FLAGGED (reason: ...)` to flagged videos
pub struct Annotated<'a>(&'a Video);

impl fmt::Display for Annotated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        if let Some(reason) = self.0.flag_reason() {
            write!(f, " - FLAGGED (reason: {})", reason)?;
        }
        Ok(())
    }
}
