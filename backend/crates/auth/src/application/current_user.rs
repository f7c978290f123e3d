//! Current User Use Case
//!
//! Loads the profile behind an already verified identity.

use std::sync::Arc;

use crate::application::token::AuthUser;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

pub struct CurrentUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> CurrentUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// A valid token whose user is gone is treated as unauthenticated
    pub async fn execute(&self, identity: &AuthUser) -> AuthResult<User> {
        self.user_repo
            .find_by_id(&identity.user_id)
            .await?
            .ok_or(AuthError::InvalidToken)
    }
}
