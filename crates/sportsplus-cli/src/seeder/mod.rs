//! Database seeding for local development and demos.
//!
//! Every generated account uses an `@example.com` address so that
//! [`clear_all`] can remove seeded rows without touching real data.

pub mod classes;
pub mod models;
pub mod users;

use sportsplus_models::UserRole;
use sqlx::PgPool;
use std::time::Instant;

pub use models::SeedConfig;
pub use users::promote_admin;

/// Seeds instructors, their classes, students and student cart selections.
pub async fn seed_all(db: &PgPool, config: &SeedConfig) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!(
        "🌱 Seeding {} users and {} classes...\n",
        config.total_users(),
        config.total_classes()
    );

    let instructors =
        users::seed_users(db, config.instructors, UserRole::Instructor, "instructor").await?;
    let classes = classes::seed_classes(db, &instructors, config.classes_per_instructor).await?;
    let students = users::seed_users(db, config.students, UserRole::Unset, "student").await?;

    let cart_items =
        classes::generate_cart_items(&students, &classes, config.selections_per_student);
    classes::seed_cart_items(db, &cart_items).await?;

    println!("\n✅ Seeding complete in {:?}", start_time.elapsed());
    Ok(())
}

/// Removes every seeded row. Admin accounts are kept.
pub async fn clear_all(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();

    classes::clear_classes(db).await?;
    users::clear_users(db).await?;

    println!("\n✅ Cleared seeded data in {:?}", start_time.elapsed());
    Ok(())
}
