//! # Sports Plus CLI
//!
//! Administrative and seeding utilities for a Sports Plus database.
//!
//! ## Usage
//!
//! ```ignore
//! use sportsplus_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::default().with_instructors(4);
//! seed_all(&pool, &config).await?;
//! ```

pub mod seeder;
