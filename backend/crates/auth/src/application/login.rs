//! Login Use Case

use std::sync::Arc;

use crate::application::register::AuthenticatedOutput;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login use case
///
/// Unknown email, malformed email and wrong password all collapse into
/// `InvalidCredentials`.
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self { user_repo, tokens }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<AuthenticatedOutput> {
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            // Spend one Argon2 run so unknown emails cost the same as wrong passwords
            let _ = UserPassword::from_raw(&raw_password);
            return Err(AuthError::InvalidCredentials);
        };

        if !user.password_hash.verify(&raw_password) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.user_id, user.user_role)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(AuthenticatedOutput { user, token })
    }
}
