//! Blog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Post and comment entities, like set, repository traits
//! - `application/` - Use cases and the post read model
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Rules
//! - Only the author of a post may update or delete it
//! - A user appears at most once in a post's likes
//! - A post's comments are exactly the comments that reference it
//! - Deleting a post deletes its comments and likes

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::read_model::PostView;
pub use error::{BlogError, BlogResult};
pub use infra::postgres::PgBlogRepository;
pub use presentation::router::{blog_router, blog_router_generic};
