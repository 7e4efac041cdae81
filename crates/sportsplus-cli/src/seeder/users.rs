//! User seeding functionality.
//!
//! Generates instructor and student accounts and inserts them with
//! multi-value INSERT statements.

use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::number::en::NumberWithFormat;
use sportsplus_models::{UserId, UserRole};
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

use super::models::{SEED_EMAIL_DOMAIN, UserSeed};

/// Generates `count` users with the given role.
///
/// Emails carry a random per-batch tag so repeated `seed` runs do not hit
/// the unique email constraint.
pub fn generate_users(count: usize, role: UserRole, prefix: &str) -> Vec<UserSeed> {
    let batch: String = NumberWithFormat("########").fake();

    (0..count)
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();

            UserSeed {
                email: format!(
                    "{}.{}+{}{}-{}@{}",
                    first_name.to_lowercase(),
                    last_name.to_lowercase(),
                    prefix,
                    batch,
                    idx,
                    SEED_EMAIL_DOMAIN
                ),
                name: format!("{} {}", first_name, last_name),
                photo_url: Some(format!(
                    "https://i.pravatar.cc/150?u={}{}-{}",
                    prefix, batch, idx
                )),
                role,
            }
        })
        .collect()
}

/// Seeds users into the database, returning them with their new ids.
pub async fn seed_users(
    db: &PgPool,
    count: usize,
    role: UserRole,
    prefix: &str,
) -> Result<Vec<(UserId, UserSeed)>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("👥 Seeding {} {} users...", count, prefix);

    let users = generate_users(count, role, prefix);
    let ids = insert_users_batch(db, &users).await?;

    println!(
        "   ✓ Inserted {} {} users in {:?}",
        ids.len(),
        prefix,
        start_time.elapsed()
    );

    Ok(ids.into_iter().zip(users).collect())
}

/// Inserts users in batches inside one transaction
pub async fn insert_users_batch(
    db: &PgPool,
    users: &[UserSeed],
) -> Result<Vec<UserId>, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    // 4 params per user
    const BATCH_SIZE: usize = 1000;

    let mut all_ids = Vec::with_capacity(users.len());
    for chunk in users.chunks(BATCH_SIZE) {
        all_ids.extend(insert_users_chunk(&mut tx, chunk).await?);
    }

    tx.commit().await?;
    Ok(all_ids)
}

async fn insert_users_chunk(
    tx: &mut Transaction<'_, Postgres>,
    users: &[UserSeed],
) -> Result<Vec<UserId>, Box<dyn std::error::Error>> {
    if users.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from("INSERT INTO users (email, name, photo_url, role) VALUES ");

    for i in 0..users.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let param_idx = i * 4;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${})",
            param_idx + 1,
            param_idx + 2,
            param_idx + 3,
            param_idx + 4
        ));
    }

    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for user in users {
        q = q
            .bind(&user.email)
            .bind(&user.name)
            .bind(&user.photo_url)
            .bind(user.role);
    }

    let ids: Vec<UserId> = q.fetch_all(&mut **tx).await?;
    Ok(ids)
}

/// Promotes an existing account to admin. Returns `false` when no user has that email.
pub async fn promote_admin(db: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
    let rows = sqlx::query("UPDATE users SET role = $1 WHERE email = $2")
        .bind(UserRole::Admin)
        .bind(email)
        .execute(db)
        .await?
        .rows_affected();

    Ok(rows > 0)
}

/// Clears all seeded users
pub async fn clear_users(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded users...");

    let result = sqlx::query("DELETE FROM users WHERE email LIKE $1 AND role <> $2")
        .bind(format!("%@{}", SEED_EMAIL_DOMAIN))
        .bind(UserRole::Admin)
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} users in {:?}",
        result,
        start_time.elapsed()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_emails_are_unique_and_seeded() {
        let users = generate_users(25, UserRole::Instructor, "instructor");

        assert_eq!(users.len(), 25);
        let mut emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();
        emails.sort_unstable();
        emails.dedup();
        assert_eq!(emails.len(), 25);
        assert!(users.iter().all(|u| u.email.ends_with("@example.com")));
        assert!(users.iter().all(|u| u.role == UserRole::Instructor));
    }

    #[test]
    fn test_separate_batches_do_not_share_emails() {
        let first = generate_users(10, UserRole::Unset, "student");
        let second = generate_users(10, UserRole::Unset, "student");

        assert!(
            first
                .iter()
                .all(|a| second.iter().all(|b| a.email != b.email))
        );
    }
}
