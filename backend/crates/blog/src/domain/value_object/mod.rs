//! Value Object Module

pub mod like_set;
pub mod post_fields;

pub use like_set::{LikeSet, LikeToggle};
pub use post_fields::{CommentBody, PostDraft, PostPatch};
