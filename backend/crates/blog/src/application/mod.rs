//! Application Layer
//!
//! Use cases and the read model.

pub mod add_comment;
pub mod create_post;
pub mod delete_post;
pub mod list_posts;
pub mod read_model;
pub mod toggle_like;
pub mod update_post;

// Re-exports
pub use add_comment::AddCommentUseCase;
pub use create_post::{CreatePostInput, CreatePostUseCase};
pub use delete_post::DeletePostUseCase;
pub use list_posts::ListPostsUseCase;
pub use read_model::{AuthorView, CommentView, PostReader, PostView};
pub use toggle_like::{ToggleLikeOutput, ToggleLikeUseCase};
pub use update_post::{UpdatePostInput, UpdatePostUseCase};
