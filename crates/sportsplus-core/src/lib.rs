//! # Sports Plus Core
//!
//! Foundational types shared by every crate in the Sports Plus workspace.
//!
//! - [`errors`]: the application error type and its HTTP response mapping
//!
//! # Example
//!
//! ```ignore
//! use sportsplus_core::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Class not found"));
//! ```

pub mod errors;

pub use errors::{AppError, ErrorResponse};
