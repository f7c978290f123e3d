//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and the token service
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, auth gate
//!
//! ## Features
//! - Registration and login with email + password
//! - Stateless HS256 tokens, delivered both in the body and as a cookie
//! - Auth gate accepting `Authorization: Bearer` or the `token` cookie
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Login failures are indistinguishable to the client
//! - No server-side session; logout only clears the cookie

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::{AuthUser, TokenService};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{AuthGate, require_auth};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
