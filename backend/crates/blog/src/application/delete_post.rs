//! Delete Post Use Case
//!
//! Deleting a post also removes its comments and likes.

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::repository::PostRepository;
use crate::error::{BlogError, BlogResult};

pub struct DeletePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> DeletePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, post_id: &PostId, requester_id: &UserId) -> BlogResult<()> {
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        if !post.is_authored_by(requester_id) {
            return Err(BlogError::Forbidden("Unauthorized to delete this blog"));
        }

        if !self.post_repo.delete(post_id).await? {
            return Err(BlogError::PostNotFound);
        }

        tracing::info!(post_id = %post_id, "Post deleted");

        Ok(())
    }
}
