//! # Sports Plus API
//!
//! Backend for a sports-class booking platform, built with Axum and PostgreSQL.
//!
//! ## Overview
//!
//! - **Users**: signup on first sign-in, `admin` / `instructor` roles
//! - **Classes**: instructor listings reviewed by admins (`pending`,
//!   `approved`, `denied`), seat-limited enrollment, reviewer feedback
//! - **Cart**: classes a student selected but has not paid for
//! - **Payments**: card payment intents through an external gateway and a
//!   transactional checkout that records the payment and clears the cart item
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # AuthUser extractor, admin guard
//! ├── modules/          # Feature modules
//! │   ├── auth/        # POST /jwt
//! │   ├── users/       # signup, role checks and promotion
//! │   ├── classes/     # listings, status, feedback, seats
//! │   ├── carts/       # /selectClass
//! │   ├── payments/    # payment intents, checkout, history
//! │   └── health/      # liveness and readiness
//! ├── docs.rs           # OpenAPI document
//! ├── logging.rs        # request logging, subscriber setup
//! ├── metrics.rs        # Prometheus recorder and middleware
//! ├── router.rs         # route table and layers
//! ├── state.rs          # AppState
//! └── validator.rs      # validating extractors
//! ```
//!
//! Each feature module has a `controller.rs` (HTTP handlers), `service.rs`
//! (SQL and business rules) and `router.rs`. Records and DTOs live in the
//! `sportsplus-models` crate.
//!
//! ## Authorization
//!
//! | Guard | Check |
//! |-------|-------|
//! | `AuthUser` | valid, unexpired HS256 bearer token |
//! | `require_admin` | caller's stored role is `admin` |
//! | ownership | `?email=` or payment email equals the token email |
//!
//! The first admin is created with `sportsplus-cli promote-admin`.
//!
//! ## API Documentation
//!
//! - Swagger UI: `http://localhost:5000/swagger-ui`
//! - Scalar: `http://localhost:5000/scalar`

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

pub use sportsplus_auth;
pub use sportsplus_config;
pub use sportsplus_core;
pub use sportsplus_db;
pub use sportsplus_models;
