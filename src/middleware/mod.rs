//! Middleware and extractors for request authentication and authorization.
//!
//! # Modules
//!
//! - [`auth`]: the [`auth::AuthUser`] extractor (bearer token verification)
//! - [`role`]: the admin guard layered onto admin-only routes
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. `AuthUser` verifies signature and expiry and exposes the claims
//! 3. On admin routes, `require_admin` looks up the caller's stored role
//! 4. Handler executes if all checks pass
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::get};
//! use crate::middleware::role::require_admin;
//!
//! let admin_routes = Router::new()
//!     .route("/users", get(get_users))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
//! ```

pub mod auth;
pub mod role;
