//! Read-only post queries: list, get one, list mine

use std::sync::Arc;

use auth::domain::UserRepository;
use kernel::id::{PostId, UserId};

use crate::application::read_model::{PostReader, PostView};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::{BlogError, BlogResult};

pub struct ListPostsUseCase<P, C, U>
where
    P: PostRepository,
    C: CommentRepository,
    U: UserRepository,
{
    post_repo: Arc<P>,
    reader: PostReader<C, U>,
}

impl<P, C, U> ListPostsUseCase<P, C, U>
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

    /// Every post, newest first
    pub async fn all(&self) -> BlogResult<Vec<PostView>> {
        let posts = self.post_repo.list_all().await?;
        self.reader.compose(posts).await
    }

    pub async fn one(&self, post_id: &PostId) -> BlogResult<PostView> {
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(BlogError::PostNotFound)?;
        self.reader.compose_one(post).await
    }

    /// Posts by `author_id`, oldest first
    pub async fn by_author(&self, author_id: &UserId) -> BlogResult<Vec<PostView>> {
        let posts = self.post_repo.list_by_author(author_id).await?;
        self.reader.compose(posts).await
    }
}
