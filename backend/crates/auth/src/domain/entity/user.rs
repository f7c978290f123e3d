//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{
    email::Email, user_name::UserName, user_password::UserPassword, user_role::UserRole,
};

/// Registered user. Never deleted.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Display name (not unique)
    pub user_name: UserName,
    /// Login identifier (unique)
    pub email: Email,
    pub password_hash: UserPassword,
    pub user_role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with the default role
    pub fn new(user_name: UserName, email: Email, password_hash: UserPassword) -> Self {
        Self {
            user_id: UserId::new(),
            user_name,
            email,
            password_hash,
            user_role: UserRole::default(),
            created_at: Utc::now(),
        }
    }
}
