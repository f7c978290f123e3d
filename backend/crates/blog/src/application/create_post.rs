//! Create Post Use Case

use std::sync::Arc;

use auth::domain::UserRepository;
use kernel::id::UserId;

use crate::application::read_model::{PostReader, PostView};
use crate::domain::entity::post::Post;
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::domain::value_object::post_fields::PostDraft;
use crate::error::BlogResult;

/// Create post input
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    pub category: String,
    pub image: Option<String>,
}

/// Create post use case
pub struct CreatePostUseCase<P, C, U>
where
    P: PostRepository,
    C: CommentRepository,
    U: UserRepository,
{
    post_repo: Arc<P>,
    reader: PostReader<C, U>,
}

impl<P, C, U> CreatePostUseCase<P, C, U>
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

    pub async fn execute(&self, author_id: UserId, input: CreatePostInput) -> BlogResult<PostView> {
        let draft = PostDraft::new(&input.title, input.content, &input.category, input.image)?;
        let post = Post::new(author_id, draft);

        self.post_repo.create(&post).await?;

        tracing::info!(
            post_id = %post.post_id,
            author_id = %post.author_id,
            category = %post.category,
            "Post created"
        );

        self.reader.compose_one(post).await
    }
}
