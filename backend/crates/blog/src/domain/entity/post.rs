//! Post Entity

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

use crate::domain::value_object::{
    like_set::{LikeSet, LikeToggle},
    post_fields::{PostDraft, PostPatch},
};

/// Blog post. The author is fixed at creation.
#[derive(Debug, Clone)]
pub struct Post {
    pub post_id: PostId,
    pub author_id: UserId,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub category: String,
    pub likes: LikeSet,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(author_id: UserId, draft: PostDraft) -> Self {
        let now = Utc::now();

        Self {
            post_id: PostId::new(),
            author_id,
            title: draft.title,
            content: draft.content,
            image: draft.image,
            category: draft.category,
            likes: LikeSet::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        self.author_id == *user_id
    }

    /// Apply the provided fields; the author is not part of a patch
    pub fn apply(&mut self, patch: PostPatch) {
        if patch.is_empty() {
            return;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        self.updated_at = Utc::now();
    }

    pub fn toggle_like(&mut self, user_id: UserId) -> LikeToggle {
        self.likes.toggle(user_id)
    }
}
