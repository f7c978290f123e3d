//! Blog Router

use auth::domain::UserRepository;
use auth::{AuthGate, PgAuthRepository, require_auth};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::{CommentRepository, PostRepository};
use crate::infra::postgres::PgBlogRepository;
use crate::presentation::handlers::{self, BlogAppState};

/// Create the Blog router with PostgreSQL repositories
pub fn blog_router(repo: PgBlogRepository, users: PgAuthRepository, gate: AuthGate) -> Router {
    blog_router_generic(repo, users, gate)
}

/// Create a generic Blog router for any repository implementation
///
/// Reads are public; every write and `/myblogs` pass through the auth gate.
pub fn blog_router_generic<R, U>(repo: R, users: U, gate: AuthGate) -> Router
where
    R: PostRepository + CommentRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let state = BlogAppState {
        repo: Arc::new(repo),
        users: Arc::new(users),
    };

    let public = Router::new()
        .route("/blogs", get(handlers::list_posts::<R, U>))
        .route("/blogs/{id}", get(handlers::get_post::<R, U>));

    let protected = Router::new()
        .route("/myblogs", get(handlers::list_my_posts::<R, U>))
        .route("/blogs", post(handlers::create_post::<R, U>))
        .route(
            "/blogs/{id}",
            put(handlers::update_post::<R, U>).delete(handlers::delete_post::<R, U>),
        )
        .route("/blogs/{id}/like", put(handlers::toggle_like::<R, U>))
        .route("/blogs/{id}/comment", post(handlers::add_comment::<R, U>))
        .route_layer(middleware::from_fn_with_state(gate, require_auth));

    public.merge(protected).with_state(state)
}
