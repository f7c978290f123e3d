//! HTTP Handlers

use auth::AuthUser;
use auth::domain::UserRepository;
use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::WithRejection;
use kernel::id::PostId;
use std::sync::Arc;

use crate::application::{
    AddCommentUseCase, CreatePostInput, CreatePostUseCase, DeletePostUseCase, ListPostsUseCase,
    ToggleLikeUseCase, UpdatePostInput, UpdatePostUseCase,
};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::domain::value_object::post_fields::CommentBody;
use crate::error::{BlogError, BlogResult};
use crate::presentation::dto::{
    CommentRequest, CreatePostRequest, DeleteResponse, PostListResponse, PostResponse,
    UpdatePostRequest,
};

/// Shared state for blog handlers
pub struct BlogAppState<R, U>
where
    R: PostRepository + CommentRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub users: Arc<U>,
}

impl<R, U> Clone for BlogAppState<R, U>
where
    R: PostRepository + CommentRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            users: self.users.clone(),
        }
    }
}

/// A malformed ID cannot name an existing post
fn parse_post_id(raw: &str) -> BlogResult<PostId> {
    PostId::parse(raw).map_err(|_| BlogError::PostNotFound)
}

// ============================================================================
// Public
// ============================================================================

/// GET /api/blog/blogs
pub async fn list_posts<R, U>(
    State(state): State<BlogAppState<R, U>>,
) -> BlogResult<Json<PostListResponse>>
where
    R: PostRepository + CommentRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let use_case =
        ListPostsUseCase::new(state.repo.clone(), state.repo.clone(), state.users.clone());
    let posts = use_case.all().await?;

    Ok(Json(posts.into()))
}

/// GET /api/blog/blogs/{id}
pub async fn get_post<R, U>(
    State(state): State<BlogAppState<R, U>>,
    Path(id): Path<String>,
) -> BlogResult<Json<PostResponse>>
where
    R: PostRepository + CommentRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    let use_case =
        ListPostsUseCase::new(state.repo.clone(), state.repo.clone(), state.users.clone());
    let post = use_case.one(&post_id).await?;

    Ok(Json(PostResponse {
        success: true,
        message: None,
        blog: post,
    }))
}

// ============================================================================
// Protected
// ============================================================================

/// GET /api/blog/myblogs
pub async fn list_my_posts<R, U>(
    State(state): State<BlogAppState<R, U>>,
    Extension(identity): Extension<AuthUser>,
) -> BlogResult<Json<PostListResponse>>
where
    R: PostRepository + CommentRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let use_case =
        ListPostsUseCase::new(state.repo.clone(), state.repo.clone(), state.users.clone());
    let posts = use_case.by_author(&identity.user_id).await?;

    Ok(Json(posts.into()))
}

/// POST /api/blog/blogs
pub async fn create_post<R, U>(
    State(state): State<BlogAppState<R, U>>,
    Extension(identity): Extension<AuthUser>,
    WithRejection(Json(req), _): WithRejection<Json<CreatePostRequest>, BlogError>,
) -> BlogResult<impl IntoResponse>
where
    R: PostRepository + CommentRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let use_case =
        CreatePostUseCase::new(state.repo.clone(), state.repo.clone(), state.users.clone());

    let post = use_case
        .execute(
            identity.user_id,
            CreatePostInput {
                title: req.title,
                content: req.content,
                category: req.category,
                image: req.image,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PostResponse {
            success: true,
            message: Some("Blog created successfully"),
            blog: post,
        }),
    ))
}

/// PUT /api/blog/blogs/{id}
pub async fn update_post<R, U>(
    State(state): State<BlogAppState<R, U>>,
    Extension(identity): Extension<AuthUser>,
    Path(id): Path<String>,
    WithRejection(Json(req), _): WithRejection<Json<UpdatePostRequest>, BlogError>,
) -> BlogResult<Json<PostResponse>>
where
    R: PostRepository + CommentRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    let use_case =
        UpdatePostUseCase::new(state.repo.clone(), state.repo.clone(), state.users.clone());

    let post = use_case
        .execute(
            &post_id,
            &identity.user_id,
            UpdatePostInput {
                title: req.title,
                content: req.content,
                category: req.category,
                image: req.image,
            },
        )
        .await?;

    Ok(Json(PostResponse {
        success: true,
        message: Some("Blog updated successfully"),
        blog: post,
    }))
}

/// DELETE /api/blog/blogs/{id}
pub async fn delete_post<R, U>(
    State(state): State<BlogAppState<R, U>>,
    Extension(identity): Extension<AuthUser>,
    Path(id): Path<String>,
) -> BlogResult<Json<DeleteResponse>>
where
    R: PostRepository + CommentRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    DeletePostUseCase::new(state.repo.clone())
        .execute(&post_id, &identity.user_id)
        .await?;

    Ok(Json(DeleteResponse {
        success: true,
        message: "Blog deleted successfully",
    }))
}

/// PUT /api/blog/blogs/{id}/like
pub async fn toggle_like<R, U>(
    State(state): State<BlogAppState<R, U>>,
    Extension(identity): Extension<AuthUser>,
    Path(id): Path<String>,
) -> BlogResult<Json<PostResponse>>
where
    R: PostRepository + CommentRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    let use_case =
        ToggleLikeUseCase::new(state.repo.clone(), state.repo.clone(), state.users.clone());

    let output = use_case.execute(&post_id, &identity.user_id).await?;

    let message = if output.toggle.is_liked() {
        "Blog liked"
    } else {
        "Blog unliked"
    };

    Ok(Json(PostResponse {
        success: true,
        message: Some(message),
        blog: output.post,
    }))
}

/// POST /api/blog/blogs/{id}/comment
pub async fn add_comment<R, U>(
    State(state): State<BlogAppState<R, U>>,
    Extension(identity): Extension<AuthUser>,
    Path(id): Path<String>,
    WithRejection(Json(req), _): WithRejection<Json<CommentRequest>, BlogError>,
) -> BlogResult<Json<PostResponse>>
where
    R: PostRepository + CommentRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let use_case =
        AddCommentUseCase::new(state.repo.clone(), state.repo.clone(), state.users.clone());

    // Empty content is reported before an unknown post
    let post_id = match parse_post_id(&id) {
        Ok(post_id) => post_id,
        Err(not_found) => {
            CommentBody::new(req.content)?;
            return Err(not_found);
        }
    };

    let post = use_case
        .execute(&post_id, &identity.user_id, req.content)
        .await?;

    Ok(Json(PostResponse {
        success: true,
        message: Some("Comment added successfully"),
        blog: post,
    }))
}
