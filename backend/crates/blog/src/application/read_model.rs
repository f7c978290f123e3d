//! Read Model
//!
//! Posts as clients see them: author, likes and comments resolved. Built by
//! explicit fetches (posts, then their comments, then one batched user
//! lookup) instead of lazy population.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use auth::domain::{User, UserRepository};
use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PostId, UserId};
use serde::Serialize;

use crate::domain::entity::{comment::Comment, post::Post};
use crate::domain::repository::CommentRepository;
use crate::domain::value_object::like_set::LikeSet;
use crate::error::BlogResult;

/// Public author fields. `None` in a view means the user no longer resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorView {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

impl From<&User> for AuthorView {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id,
            username: user.user_name.to_string(),
            email: user.email.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: CommentId,
    pub content: String,
    pub author: Option<AuthorView>,
    pub post: PostId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub category: String,
    pub author: Option<AuthorView>,
    pub likes: LikeSet,
    pub comments: Vec<CommentView>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Composes [`PostView`]s
pub struct PostReader<C, U>
where
    C: CommentRepository,
    U: UserRepository,
{
    comment_repo: Arc<C>,
    user_repo: Arc<U>,
}

impl<C, U> PostReader<C, U>
where
    C: CommentRepository,
    U: UserRepository,
{
    pub fn new(comment_repo: Arc<C>, user_repo: Arc<U>) -> Self {
        Self {
            comment_repo,
            user_repo,
        }
    }

    /// Resolve a batch, preserving the input order
    pub async fn compose(&self, posts: Vec<Post>) -> BlogResult<Vec<PostView>> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let post_ids: Vec<PostId> = posts.iter().map(|p| p.post_id).collect();
        let comments = self.comment_repo.list_for_posts(&post_ids).await?;

        let mut seen = HashSet::new();
        let author_ids: Vec<UserId> = posts
            .iter()
            .map(|p| p.author_id)
            .chain(comments.iter().map(|c| c.author_id))
            .filter(|id| seen.insert(*id))
            .collect();

        let authors: HashMap<UserId, AuthorView> = self
            .user_repo
            .find_by_ids(&author_ids)
            .await?
            .iter()
            .map(|u| (u.user_id, AuthorView::from(u)))
            .collect();

        let mut comments_by_post: HashMap<PostId, Vec<CommentView>> = HashMap::new();
        for comment in comments {
            comments_by_post
                .entry(comment.post_id)
                .or_default()
                .push(comment_view(comment, &authors));
        }

        Ok(posts
            .into_iter()
            .map(|post| {
                let comments = comments_by_post.remove(&post.post_id).unwrap_or_default();
                post_view(post, comments, &authors)
            })
            .collect())
    }

    pub async fn compose_one(&self, post: Post) -> BlogResult<PostView> {
        let post_id = post.post_id;
        self.compose(vec![post])
            .await?
            .pop()
            .ok_or_else(|| crate::error::BlogError::Internal(format!("lost post {}", post_id)))
    }
}

fn comment_view(comment: Comment, authors: &HashMap<UserId, AuthorView>) -> CommentView {
    CommentView {
        id: comment.comment_id,
        author: authors.get(&comment.author_id).cloned(),
        post: comment.post_id,
        content: comment.content,
        created_at: comment.created_at,
    }
}

fn post_view(
    post: Post,
    comments: Vec<CommentView>,
    authors: &HashMap<UserId, AuthorView>,
) -> PostView {
    PostView {
        id: post.post_id,
        author: authors.get(&post.author_id).cloned(),
        title: post.title,
        content: post.content,
        image: post.image,
        category: post.category,
        likes: post.likes,
        comments,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}
