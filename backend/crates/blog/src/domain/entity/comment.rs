//! Comment Entity

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PostId, UserId};

use crate::domain::value_object::post_fields::CommentBody;

/// Comment on exactly one post. Author and post never change.
#[derive(Debug, Clone)]
pub struct Comment {
    pub comment_id: CommentId,
    pub post_id: PostId,
    pub author_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(post_id: PostId, author_id: UserId, body: CommentBody) -> Self {
        Self {
            comment_id: CommentId::new(),
            post_id,
            author_id,
            content: body.into_inner(),
            created_at: Utc::now(),
        }
    }
}
