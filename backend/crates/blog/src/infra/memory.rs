//! In-memory repository for tests

use std::sync::Arc;

use kernel::id::{PostId, UserId};
use tokio::sync::Mutex;

use crate::domain::entity::{comment::Comment, post::Post};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::domain::value_object::like_set::LikeToggle;
use crate::error::BlogResult;

#[derive(Default)]
struct BlogState {
    /// Insertion order
    posts: Vec<Post>,
    /// Creation order
    comments: Vec<Comment>,
}

/// Post and comment store backed by shared vectors. Clones share storage.
#[derive(Clone, Default)]
pub struct MemoryBlogRepository {
    state: Arc<Mutex<BlogState>>,
}

impl MemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn comment_count(&self) -> usize {
        self.state.lock().await.comments.len()
    }
}

impl PostRepository for MemoryBlogRepository {
    async fn create(&self, post: &Post) -> BlogResult<()> {
        self.state.lock().await.posts.push(post.clone());
        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> BlogResult<Option<Post>> {
        let state = self.state.lock().await;
        Ok(state.posts.iter().find(|p| p.post_id == *post_id).cloned())
    }

    async fn list_all(&self) -> BlogResult<Vec<Post>> {
        let state = self.state.lock().await;
        // Later inserts win ties on created_at
        let mut posts: Vec<Post> = state.posts.iter().rev().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn list_by_author(&self, author_id: &UserId) -> BlogResult<Vec<Post>> {
        let state = self.state.lock().await;
        Ok(state
            .posts
            .iter()
            .filter(|p| p.author_id == *author_id)
            .cloned()
            .collect())
    }

    async fn update(&self, post: &Post) -> BlogResult<bool> {
        let mut state = self.state.lock().await;
        let Some(stored) = state.posts.iter_mut().find(|p| p.post_id == post.post_id) else {
            return Ok(false);
        };

        stored.title = post.title.clone();
        stored.content = post.content.clone();
        stored.image = post.image.clone();
        stored.category = post.category.clone();
        stored.updated_at = post.updated_at;
        Ok(true)
    }

    async fn delete(&self, post_id: &PostId) -> BlogResult<bool> {
        let mut state = self.state.lock().await;
        let before = state.posts.len();
        state.posts.retain(|p| p.post_id != *post_id);
        if state.posts.len() == before {
            return Ok(false);
        }
        state.comments.retain(|c| c.post_id != *post_id);
        Ok(true)
    }

    async fn toggle_like(
        &self,
        post_id: &PostId,
        user_id: &UserId,
    ) -> BlogResult<Option<LikeToggle>> {
        let mut state = self.state.lock().await;
        Ok(state
            .posts
            .iter_mut()
            .find(|p| p.post_id == *post_id)
            .map(|post| post.toggle_like(*user_id)))
    }
}

impl CommentRepository for MemoryBlogRepository {
    async fn append(&self, comment: &Comment) -> BlogResult<bool> {
        let mut state = self.state.lock().await;
        if !state.posts.iter().any(|p| p.post_id == comment.post_id) {
            return Ok(false);
        }
        state.comments.push(comment.clone());
        Ok(true)
    }

    async fn list_for_posts(&self, post_ids: &[PostId]) -> BlogResult<Vec<Comment>> {
        let state = self.state.lock().await;
        Ok(state
            .comments
            .iter()
            .filter(|c| post_ids.contains(&c.post_id))
            .cloned()
            .collect())
    }
}
