//! Update Post Use Case

use std::sync::Arc;

use auth::domain::UserRepository;
use kernel::id::{PostId, UserId};

use crate::application::read_model::{PostReader, PostView};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::domain::value_object::post_fields::PostPatch;
use crate::error::{BlogError, BlogResult};

/// Update post input. Absent fields stay as they are.
#[derive(Default)]
pub struct UpdatePostInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

/// Update post use case
///
/// Checks run in order: existence, authorship, then field validation.
pub struct UpdatePostUseCase<P, C, U>
where
    P: PostRepository,
    C: CommentRepository,
    U: UserRepository,
{
    post_repo: Arc<P>,
    reader: PostReader<C, U>,
}

impl<P, C, U> UpdatePostUseCase<P, C, U>
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

    pub async fn execute(
        &self,
        post_id: &PostId,
        requester_id: &UserId,
        input: UpdatePostInput,
    ) -> BlogResult<PostView> {
        let mut post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        if !post.is_authored_by(requester_id) {
            return Err(BlogError::Forbidden("Unauthorized to update this blog"));
        }

        let patch = PostPatch::new(input.title, input.content, input.category, input.image)?;
        post.apply(patch);

        if !self.post_repo.update(&post).await? {
            return Err(BlogError::PostNotFound);
        }

        tracing::info!(post_id = %post.post_id, "Post updated");

        self.reader.compose_one(post).await
    }
}
