//! Add Comment Use Case
//!
//! Content is validated before the post is looked up.

use std::sync::Arc;

use auth::domain::UserRepository;
use kernel::id::{PostId, UserId};

use crate::application::read_model::{PostReader, PostView};
use crate::domain::entity::comment::Comment;
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::domain::value_object::post_fields::CommentBody;
use crate::error::{BlogError, BlogResult};

pub struct AddCommentUseCase<P, C, U>
where
    P: PostRepository,
    C: CommentRepository,
    U: UserRepository,
{
    post_repo: Arc<P>,
    comment_repo: Arc<C>,
    reader: PostReader<C, U>,
}

impl<P, C, U> AddCommentUseCase<P, C, U>
where
    P: PostRepository,
    C: CommentRepository,
    U: UserRepository,
{
    pub fn new(post_repo: Arc<P>, comment_repo: Arc<C>, user_repo: Arc<U>) -> Self {
        Self {
            post_repo,
            comment_repo: comment_repo.clone(),
            reader: PostReader::new(comment_repo, user_repo),
        }
    }

    pub async fn execute(
        &self,
        post_id: &PostId,
        author_id: &UserId,
        content: String,
    ) -> BlogResult<PostView> {
        let body = CommentBody::new(content)?;
        let comment = Comment::new(*post_id, *author_id, body);

        if !self.comment_repo.append(&comment).await? {
            return Err(BlogError::PostNotFound);
        }

        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        tracing::info!(
            post_id = %post_id,
            comment_id = %comment.comment_id,
            author_id = %author_id,
            "Comment added"
        );

        self.reader.compose_one(post).await
    }
}
