use sqlx::PgPool;
use tracing::instrument;

use sportsplus_core::AppError;
use sportsplus_models::{CartItem, CartItemId, CreateCartItemDto, DeleteResult, InsertResult};

const CART_COLUMNS: &str = "id, email, class_id, class_name, image, instructor_name, price, created_at";

pub struct CartService;

impl CartService {
    /// Adds a selected class to a student's cart. The class reference is
    /// stored as given and not checked against `classes`.
    #[instrument(skip(db, dto))]
    pub async fn add_item(db: &PgPool, dto: CreateCartItemDto) -> Result<InsertResult, AppError> {
        let id = sqlx::query_scalar::<_, CartItemId>(
            r#"INSERT INTO cart_items (email, class_id, class_name, image, instructor_name, price)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING id"#,
        )
        .bind(&dto.email)
        .bind(dto.class_id)
        .bind(&dto.class_name)
        .bind(&dto.image)
        .bind(&dto.instructor_name)
        .bind(dto.price)
        .fetch_one(db)
        .await?;

        Ok(InsertResult {
            inserted_id: id.into_inner(),
        })
    }

    #[instrument(skip(db))]
    pub async fn list_for_email(db: &PgPool, email: &str) -> Result<Vec<CartItem>, AppError> {
        let items = sqlx::query_as::<_, CartItem>(&format!(
            "SELECT {CART_COLUMNS} FROM cart_items WHERE email = $1 ORDER BY created_at DESC"
        ))
        .bind(email)
        .fetch_all(db)
        .await?;

        Ok(items)
    }

    #[instrument(skip(db))]
    pub async fn get_item(db: &PgPool, id: CartItemId) -> Result<CartItem, AppError> {
        sqlx::query_as::<_, CartItem>(&format!(
            "SELECT {CART_COLUMNS} FROM cart_items WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Cart item not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete_item(db: &PgPool, id: CartItemId) -> Result<DeleteResult, AppError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Cart item not found")));
        }

        Ok(DeleteResult {
            deleted_count: result.rows_affected(),
        })
    }
}
