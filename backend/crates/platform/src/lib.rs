//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id)
//! - Cookie building and extraction
//! - Bearer token extraction from the Authorization header

pub mod bearer;
pub mod cookie;
pub mod password;
