//! Toggle Like Use Case

use std::sync::Arc;

use auth::domain::UserRepository;
use kernel::id::{PostId, UserId};

use crate::application::read_model::{PostReader, PostView};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::domain::value_object::like_set::LikeToggle;
use crate::error::{BlogError, BlogResult};

pub struct ToggleLikeOutput {
    pub toggle: LikeToggle,
    pub post: PostView,
}

pub struct ToggleLikeUseCase<P, C, U>
where
    P: PostRepository,
    C: CommentRepository,
    U: UserRepository,
{
    post_repo: Arc<P>,
    reader: PostReader<C, U>,
}

impl<P, C, U> ToggleLikeUseCase<P, C, U>
where
    P: PostRepository,
    C: CommentRepository,
    U: UserRepository,
{
    pub fn new(post_repo: Arc<P>, comment_repo: Arc<C>, user_repo: Arc<U>) -> Self {
        Self {
            post_repo,
            reader: PostReader::new(comment_repo, user_repo),
        }
    }

    pub async fn execute(&self, post_id: &PostId, user_id: &UserId) -> BlogResult<ToggleLikeOutput> {
        let toggle = self
            .post_repo
            .toggle_like(post_id, user_id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        // Reload so the view carries likes from other requests too
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        tracing::info!(
            post_id = %post_id,
            user_id = %user_id,
            liked = toggle.is_liked(),
            likes = post.likes.len(),
            "Post like toggled"
        );

        Ok(ToggleLikeOutput {
            toggle,
            post: self.reader.compose_one(post).await?,
        })
    }
}
