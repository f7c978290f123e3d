//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{PostId, UserId};

use crate::domain::entity::{comment::Comment, post::Post};
use crate::domain::value_object::like_set::LikeToggle;
use crate::error::BlogResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Persist a new post
    async fn create(&self, post: &Post) -> BlogResult<()>;

    /// Find post by ID, likes included
    async fn find_by_id(&self, post_id: &PostId) -> BlogResult<Option<Post>>;

    /// All posts, newest first
    async fn list_all(&self) -> BlogResult<Vec<Post>>;

    /// Posts by one author, in insertion order
    async fn list_by_author(&self, author_id: &UserId) -> BlogResult<Vec<Post>>;

    /// Write back editable fields. Returns `false` if the post is gone.
    async fn update(&self, post: &Post) -> BlogResult<bool>;

    /// Remove the post with its comments and likes. Returns `false` if absent.
    async fn delete(&self, post_id: &PostId) -> BlogResult<bool>;

    /// Flip `user_id` in the like set atomically. `None` if the post is absent.
    async fn toggle_like(
        &self,
        post_id: &PostId,
        user_id: &UserId,
    ) -> BlogResult<Option<LikeToggle>>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Insert a comment if its post still exists. Returns `false` otherwise.
    async fn append(&self, comment: &Comment) -> BlogResult<bool>;

    /// Comments of the given posts, oldest first
    async fn list_for_posts(&self, post_ids: &[PostId]) -> BlogResult<Vec<Comment>>;
}
