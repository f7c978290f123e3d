//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate holds the vocabulary every backend crate agrees on:
//! - The unified error type and its HTTP classification
//! - Typed identifiers for users, posts and comments
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across the auth and blog domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
