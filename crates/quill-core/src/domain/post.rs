use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Author;

/// BlogPost entity - a single article with its attribution.
///
/// `id` and `created` are assigned here and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: DateTime<Utc>,
}

/// Everything a client supplies to create a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: Author,
}

/// A partial update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl BlogPost {
    /// Create a new post with a fresh id and creation time.
    ///
    /// The timestamp is truncated to microseconds, the finest precision
    /// Postgres keeps, so a stored post reads back identical.
    pub fn new(new_post: NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: new_post.title,
            content: new_post.content,
            author: new_post.author,
            created: Utc::now().trunc_subsecs(6),
        }
    }

    /// Apply a partial update in place. Returns whether anything changed.
    pub fn apply(&mut self, patch: PostPatch) -> bool {
        let mut changed = false;
        if let Some(title) = patch.title {
            changed |= self.title != title;
            self.title = title;
        }
        if let Some(content) = patch.content {
            changed |= self.content != content;
            self.content = content;
        }
        changed
    }
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
