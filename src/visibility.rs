use time::{Duration, OffsetDateTime};

use crate::posts::Post;
use crate::ranking::parse_timestamp;

/// Decides which posts are published on the index.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Visibility {
    pub(crate) now: OffsetDateTime,
    /// Posts scheduled less than this far ahead are already shown.
    pub(crate) scheduled_margin: Duration,
    pub(crate) include_drafts: bool,
}

impl Visibility {
    pub(crate) fn is_visible(&self, post: &Post) -> bool {
        if post.draft && !self.include_drafts {
            return false;
        }
        match parse_timestamp(post.created_time) {
            // a cut-off past the last representable instant hides nothing
            Ok(created) => match self.now.checked_add(self.scheduled_margin) {
                Some(cutoff) => created <= cutoff,
                None => true,
            },
            // ranking reports the bad value
            Err(_) => true,
        }
    }
}
