use sqlx::PgPool;
use tracing::instrument;

use sportsplus_core::AppError;
use sportsplus_models::{
    Class, ClassId, ClassStatus, CreateClassDto, InsertResult, UpdateResult,
};

use crate::metrics::track_enrollment;

const CLASS_COLUMNS: &str = "id, name, image, instructor_name, email, price, seats, student, \
                             status, feedback, created_at";

pub struct ClassService;

impl ClassService {
    #[instrument(skip(db, dto))]
    pub async fn create_class(db: &PgPool, dto: CreateClassDto) -> Result<InsertResult, AppError> {
        let id = sqlx::query_scalar::<_, ClassId>(
            r#"INSERT INTO classes (name, image, instructor_name, email, price, seats, status)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING id"#,
        )
        .bind(&dto.name)
        .bind(&dto.image)
        .bind(&dto.instructor_name)
        .bind(&dto.email)
        .bind(dto.price)
        .bind(dto.seats)
        .bind(dto.status.unwrap_or_default())
        .fetch_one(db)
        .await?;

        Ok(InsertResult {
            inserted_id: id.into_inner(),
        })
    }

    /// Lists classes, optionally restricted to one instructor.
    #[instrument(skip(db))]
    pub async fn list_classes(db: &PgPool, email: Option<&str>) -> Result<Vec<Class>, AppError> {
        let classes = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes
             WHERE ($1::text IS NULL OR email = $1)
             ORDER BY created_at DESC"
        ))
        .bind(email)
        .fetch_all(db)
        .await?;

        Ok(classes)
    }

    #[instrument(skip(db))]
    pub async fn list_by_status(db: &PgPool, status: ClassStatus) -> Result<Vec<Class>, AppError> {
        let classes = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE status = $1 ORDER BY created_at DESC"
        ))
        .bind(status)
        .fetch_all(db)
        .await?;

        Ok(classes)
    }

    /// Classes with `status`, most enrolled first.
    #[instrument(skip(db))]
    pub async fn list_popular(db: &PgPool, status: ClassStatus) -> Result<Vec<Class>, AppError> {
        let classes = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE status = $1
             ORDER BY student DESC, created_at DESC"
        ))
        .bind(status)
        .fetch_all(db)
        .await?;

        Ok(classes)
    }

    #[instrument(skip(db))]
    pub async fn get_class(db: &PgPool, id: ClassId) -> Result<Class, AppError> {
        sqlx::query_as::<_, Class>(&format!("SELECT {CLASS_COLUMNS} FROM classes WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Class not found")))
    }

    /// Moves a class to `status`. Any transition is accepted.
    #[instrument(skip(db))]
    pub async fn update_status(
        db: &PgPool,
        id: ClassId,
        status: ClassStatus,
    ) -> Result<UpdateResult, AppError> {
        let previous = sqlx::query_scalar::<_, ClassStatus>(
            r#"WITH target AS (
                   SELECT id, status AS previous FROM classes WHERE id = $1 FOR UPDATE
               )
               UPDATE classes c SET status = $2
               FROM target
               WHERE c.id = target.id
               RETURNING target.previous"#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Class not found")))?;

        Ok(UpdateResult {
            matched_count: 1,
            modified_count: u64::from(previous != status),
        })
    }

    #[instrument(skip(db, feedback))]
    pub async fn add_feedback(
        db: &PgPool,
        id: ClassId,
        feedback: &str,
    ) -> Result<UpdateResult, AppError> {
        let result = sqlx::query("UPDATE classes SET feedback = array_append(feedback, $2) WHERE id = $1")
            .bind(id)
            .bind(feedback)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Class not found")));
        }

        Ok(UpdateResult::single())
    }

    /// Takes one seat and counts one more student in a single conditional
    /// update, so concurrent enrollments never push `seats` below zero.
    #[instrument(skip(db))]
    pub async fn enroll(db: &PgPool, id: ClassId) -> Result<UpdateResult, AppError> {
        let updated = sqlx::query_scalar::<_, ClassId>(
            r#"UPDATE classes
               SET seats = seats - 1, student = student + 1
               WHERE id = $1 AND seats > 0
               RETURNING id"#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        if updated.is_some() {
            track_enrollment();
            return Ok(UpdateResult::single());
        }

        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM classes WHERE id = $1)")
            .bind(id)
            .fetch_one(db)
            .await?;

        if exists {
            Err(AppError::conflict(anyhow::anyhow!("No seats left in this class")))
        } else {
            Err(AppError::not_found(anyhow::anyhow!("Class not found")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn new_class(email: &str, seats: i32) -> CreateClassDto {
        CreateClassDto {
            name: "Football Skills".to_string(),
            image: Some("https://img/football.png".to_string()),
            instructor_name: Some("Coach Carter".to_string()),
            email: email.to_string(),
            price: Decimal::new(2500, 2),
            seats,
            status: None,
        }
    }

    async fn insert(pool: &PgPool, email: &str, seats: i32) -> ClassId {
        let inserted = ClassService::create_class(pool, new_class(email, seats))
            .await
            .unwrap();
        ClassId::from_uuid(inserted.inserted_id)
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_class_defaults(pool: PgPool) {
        let id = insert(&pool, "coach@example.com", 10).await;
        let class = ClassService::get_class(&pool, id).await.unwrap();

        assert_eq!(class.status, ClassStatus::Pending);
        assert_eq!(class.student, 0);
        assert!(class.feedback.is_empty());
        assert_eq!(class.price, Decimal::new(2500, 2));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_classes_filters_by_email(pool: PgPool) {
        insert(&pool, "a@example.com", 5).await;
        insert(&pool, "b@example.com", 5).await;

        let all = ClassService::list_classes(&pool, None).await.unwrap();
        assert_eq!(all.len(), 2);

        let mine = ClassService::list_classes(&pool, Some("a@example.com"))
            .await
            .unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].email, "a@example.com");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_enroll_decrements_seats(pool: PgPool) {
        let id = insert(&pool, "coach@example.com", 10).await;
        sqlx::query("UPDATE classes SET student = 5 WHERE id = $1")
            .bind(id)
            .execute(&pool)
            .await
            .unwrap();

        ClassService::enroll(&pool, id).await.unwrap();

        let class = ClassService::get_class(&pool, id).await.unwrap();
        assert_eq!(class.seats, 9);
        assert_eq!(class.student, 6);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_enroll_full_class_conflicts(pool: PgPool) {
        let id = insert(&pool, "coach@example.com", 1).await;
        ClassService::enroll(&pool, id).await.unwrap();

        let err = ClassService::enroll(&pool, id).await.unwrap_err();
        assert_eq!(err.status.as_u16(), 409);

        let class = ClassService::get_class(&pool, id).await.unwrap();
        assert_eq!(class.seats, 0);
        assert_eq!(class.student, 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_enroll_missing_class_is_not_found(pool: PgPool) {
        let err = ClassService::enroll(&pool, ClassId::new()).await.unwrap_err();
        assert_eq!(err.status.as_u16(), 404);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_concurrent_enrollment_never_oversells(pool: PgPool) {
        let id = insert(&pool, "coach@example.com", 10).await;

        let mut handles = Vec::new();
        for _ in 0..12 {
            let pool = pool.clone();
            handles.push(tokio::spawn(async move { ClassService::enroll(&pool, id).await }));
        }

        let mut succeeded = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => succeeded += 1,
                Err(e) if e.status.as_u16() == 409 => conflicts += 1,
                Err(e) => panic!("unexpected error: {}", e),
            }
        }

        assert_eq!(succeeded, 10);
        assert_eq!(conflicts, 2);

        let class = ClassService::get_class(&pool, id).await.unwrap();
        assert_eq!(class.seats, 0);
        assert_eq!(class.student, 10);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_status_transitions_and_popular_order(pool: PgPool) {
        let quiet = insert(&pool, "coach@example.com", 10).await;
        let busy = insert(&pool, "coach@example.com", 10).await;

        let result = ClassService::update_status(&pool, busy, ClassStatus::Approved)
            .await
            .unwrap();
        assert_eq!(result.modified_count, 1);
        ClassService::update_status(&pool, quiet, ClassStatus::Approved)
            .await
            .unwrap();

        ClassService::enroll(&pool, busy).await.unwrap();
        ClassService::enroll(&pool, busy).await.unwrap();

        let popular = ClassService::list_popular(&pool, ClassStatus::Approved)
            .await
            .unwrap();
        assert_eq!(popular.len(), 2);
        assert_eq!(popular[0].id, busy);

        let pending = ClassService::list_by_status(&pool, ClassStatus::Pending)
            .await
            .unwrap();
        assert!(pending.is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_add_feedback_appends(pool: PgPool) {
        let id = insert(&pool, "coach@example.com", 10).await;

        ClassService::add_feedback(&pool, id, "needs more detail")
            .await
            .unwrap();
        ClassService::add_feedback(&pool, id, "add a schedule")
            .await
            .unwrap();

        let class = ClassService::get_class(&pool, id).await.unwrap();
        assert_eq!(class.feedback, vec!["needs more detail", "add a schedule"]);

        let err = ClassService::add_feedback(&pool, ClassId::new(), "x")
            .await
            .unwrap_err();
        assert_eq!(err.status.as_u16(), 404);
    }
}
