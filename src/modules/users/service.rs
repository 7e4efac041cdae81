use sqlx::PgPool;
use tracing::instrument;

use sportsplus_core::AppError;
use sportsplus_models::{
    CreateUserDto, InsertResult, MessageResponse, SignupOutcome, UpdateResult, User, UserId,
    UserRole,
};

use crate::metrics::track_user_created;

const USER_COLUMNS: &str = "id, email, name, photo_url, role, created_at";

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn list_users(db: &PgPool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at ASC"
        ))
        .fetch_all(db)
        .await?;

        Ok(users)
    }

    /// Inserts the user unless the email is already registered.
    #[instrument(skip(db))]
    pub async fn create_user(db: &PgPool, dto: CreateUserDto) -> Result<SignupOutcome, AppError> {
        let inserted = sqlx::query_scalar::<_, UserId>(
            r#"INSERT INTO users (email, name, photo_url)
               VALUES ($1, $2, $3)
               ON CONFLICT (email) DO NOTHING
               RETURNING id"#,
        )
        .bind(&dto.email)
        .bind(&dto.name)
        .bind(&dto.photo_url)
        .fetch_optional(db)
        .await?;

        match inserted {
            Some(id) => {
                track_user_created();
                Ok(SignupOutcome::Created(InsertResult {
                    inserted_id: id.into_inner(),
                }))
            }
            None => Ok(SignupOutcome::Exists(MessageResponse::new(
                "user already exists",
            ))),
        }
    }

    #[instrument(skip(db))]
    pub async fn find_role_by_email(
        db: &PgPool,
        email: &str,
    ) -> Result<Option<UserRole>, AppError> {
        let role = sqlx::query_scalar::<_, UserRole>("SELECT role FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(db)
            .await?;

        Ok(role)
    }

    pub async fn has_role(db: &PgPool, email: &str, role: UserRole) -> Result<bool, AppError> {
        Ok(Self::find_role_by_email(db, email).await? == Some(role))
    }

    #[instrument(skip(db))]
    pub async fn list_users_by_role(db: &PgPool, role: UserRole) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE role = $1 ORDER BY created_at ASC"
        ))
        .bind(role)
        .fetch_all(db)
        .await?;

        Ok(users)
    }

    /// Sets the role on one user. `modified_count` is 0 when the user already
    /// had that role.
    #[instrument(skip(db))]
    pub async fn set_role(
        db: &PgPool,
        id: UserId,
        role: UserRole,
    ) -> Result<UpdateResult, AppError> {
        let previous = sqlx::query_scalar::<_, UserRole>(
            r#"WITH target AS (
                   SELECT id, role AS previous FROM users WHERE id = $1 FOR UPDATE
               )
               UPDATE users u SET role = $2
               FROM target
               WHERE u.id = target.id
               RETURNING target.previous"#,
        )
        .bind(id)
        .bind(role)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        Ok(UpdateResult {
            matched_count: 1,
            modified_count: u64::from(previous != role),
        })
    }
}
