//! Class and cart seeding functionality.

use fake::Fake;
use fake::faker::lorem::en::Word;
use rust_decimal::Decimal;
use sportsplus_models::{ClassId, ClassStatus, UserId};
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

use super::models::{CartSeed, ClassSeed, SEED_EMAIL_DOMAIN, UserSeed};

const SPORTS: &[&str] = &[
    "Basketball",
    "Football",
    "Swimming",
    "Tennis",
    "Cricket",
    "Badminton",
    "Volleyball",
    "Table Tennis",
    "Athletics",
    "Martial Arts",
];

const LEVELS: &[&str] = &["Beginner", "Intermediate", "Advanced", "Junior", "Weekend"];

fn pick<'a>(items: &[&'a str]) -> &'a str {
    items[(0..items.len()).fake::<usize>()]
}

fn pick_status() -> ClassStatus {
    // mostly approved so the public listings are populated
    match (0..10).fake::<u8>() {
        0 => ClassStatus::Denied,
        1 | 2 => ClassStatus::Pending,
        _ => ClassStatus::Approved,
    }
}

/// Generates classes for each instructor.
pub fn generate_classes(instructors: &[(UserId, UserSeed)], per_instructor: usize) -> Vec<ClassSeed> {
    instructors
        .iter()
        .flat_map(|(_, instructor)| {
            (0..per_instructor).map(move |_| {
                let seats = (5..40).fake::<i32>();
                let word: String = Word().fake();

                ClassSeed {
                    name: format!("{} {}", pick(LEVELS), pick(SPORTS)),
                    image: Some(format!("https://picsum.photos/seed/{}/640/480", word)),
                    instructor_name: instructor.name.clone(),
                    email: instructor.email.clone(),
                    price: Decimal::new((1500..12000).fake::<i64>(), 2),
                    seats,
                    student: (0..seats).fake::<i32>(),
                    status: pick_status(),
                }
            })
        })
        .collect()
}

/// Seeds classes into the database, returning them with their new ids.
pub async fn seed_classes(
    db: &PgPool,
    instructors: &[(UserId, UserSeed)],
    per_instructor: usize,
) -> Result<Vec<(ClassId, ClassSeed)>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!(
        "🏅 Seeding {} classes ({} per instructor)...",
        instructors.len() * per_instructor,
        per_instructor
    );

    let classes = generate_classes(instructors, per_instructor);
    let ids = insert_classes_batch(db, &classes).await?;

    println!(
        "   ✓ Inserted {} classes in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids.into_iter().zip(classes).collect())
}

/// Inserts classes in batches inside one transaction
pub async fn insert_classes_batch(
    db: &PgPool,
    classes: &[ClassSeed],
) -> Result<Vec<ClassId>, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    // 8 params per class
    const BATCH_SIZE: usize = 500;

    let mut all_ids = Vec::with_capacity(classes.len());
    for chunk in classes.chunks(BATCH_SIZE) {
        all_ids.extend(insert_classes_chunk(&mut tx, chunk).await?);
    }

    tx.commit().await?;
    Ok(all_ids)
}

async fn insert_classes_chunk(
    tx: &mut Transaction<'_, Postgres>,
    classes: &[ClassSeed],
) -> Result<Vec<ClassId>, Box<dyn std::error::Error>> {
    if classes.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from(
        "INSERT INTO classes (name, image, instructor_name, email, price, seats, student, status) VALUES ",
    );

    for i in 0..classes.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let p = i * 8;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${}, ${}, ${}, ${}, ${})",
            p + 1,
            p + 2,
            p + 3,
            p + 4,
            p + 5,
            p + 6,
            p + 7,
            p + 8
        ));
    }

    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for class in classes {
        q = q
            .bind(&class.name)
            .bind(&class.image)
            .bind(&class.instructor_name)
            .bind(&class.email)
            .bind(class.price)
            .bind(class.seats)
            .bind(class.student)
            .bind(class.status);
    }

    let ids: Vec<ClassId> = q.fetch_all(&mut **tx).await?;
    Ok(ids)
}

/// Picks approved classes for each student's cart.
pub fn generate_cart_items(
    students: &[(UserId, UserSeed)],
    classes: &[(ClassId, ClassSeed)],
    per_student: usize,
) -> Vec<CartSeed> {
    let approved: Vec<&(ClassId, ClassSeed)> = classes
        .iter()
        .filter(|(_, c)| c.status == ClassStatus::Approved)
        .collect();

    if approved.is_empty() {
        return Vec::new();
    }

    students
        .iter()
        .flat_map(|(_, student)| {
            let approved = &approved;
            let start = (0..approved.len()).fake::<usize>();
            (0..per_student.min(approved.len())).map(move |offset| {
                let (class_id, class) = approved[(start + offset) % approved.len()];
                CartSeed {
                    email: student.email.clone(),
                    class_id: *class_id,
                    class_name: class.name.clone(),
                    instructor_name: class.instructor_name.clone(),
                    price: class.price,
                }
            })
        })
        .collect()
}

/// Seeds cart selections one statement per item.
pub async fn seed_cart_items(
    db: &PgPool,
    items: &[CartSeed],
) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🛒 Seeding {} cart selections...", items.len());

    let mut tx = db.begin().await?;
    for item in items {
        sqlx::query(
            r#"INSERT INTO cart_items (email, class_id, class_name, instructor_name, price)
               VALUES ($1, $2, $3, $4, $5)"#,
        )
        .bind(&item.email)
        .bind(item.class_id)
        .bind(&item.class_name)
        .bind(&item.instructor_name)
        .bind(item.price)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    println!(
        "   ✓ Inserted {} cart selections in {:?}",
        items.len(),
        start_time.elapsed()
    );

    Ok(items.len() as u64)
}

/// Clears classes, carts and payments owned by seeded emails
pub async fn clear_classes(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded classes, carts and payments...");

    let pattern = format!("%@{}", SEED_EMAIL_DOMAIN);
    let mut tx = db.begin().await?;

    sqlx::query("DELETE FROM payments WHERE email LIKE $1")
        .bind(&pattern)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM cart_items WHERE email LIKE $1")
        .bind(&pattern)
        .execute(&mut *tx)
        .await?;
    let result = sqlx::query("DELETE FROM classes WHERE email LIKE $1")
        .bind(&pattern)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    tx.commit().await?;

    println!(
        "   ✓ Deleted {} classes in {:?}",
        result,
        start_time.elapsed()
    );

    Ok(result)
}
