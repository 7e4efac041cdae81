use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{instrument, warn};

use sportsplus_core::AppError;
use sportsplus_models::{
    CheckoutOutcome, CheckoutResponse, CreatePaymentDto, DeleteResult, InsertResult,
    MessageResponse, Payment, PaymentId, PaymentIntentResponse,
};

use crate::metrics::track_payment_recorded;
use crate::modules::payments::gateway::{PaymentGateway, to_minor_units};

const PAYMENT_COLUMNS: &str =
    "id, transaction_id, email, price, class_id, cart_item_id, class_name, date, created_at";

pub struct PaymentService;

impl PaymentService {
    #[instrument(skip(gateway))]
    pub async fn create_intent(
        gateway: &dyn PaymentGateway,
        price: Decimal,
    ) -> Result<PaymentIntentResponse, AppError> {
        let amount = to_minor_units(price)?;
        let client_secret = gateway.create_intent(amount).await?;

        Ok(PaymentIntentResponse { client_secret })
    }

    /// Records the payment and removes the purchased cart item in one
    /// transaction. A repeated `transaction_id` records nothing.
    #[instrument(skip(db, dto), fields(transaction_id = %dto.transaction_id))]
    pub async fn checkout(db: &PgPool, dto: CreatePaymentDto) -> Result<CheckoutOutcome, AppError> {
        let mut tx = db.begin().await?;

        let inserted = sqlx::query_scalar::<_, PaymentId>(
            r#"INSERT INTO payments
                   (transaction_id, email, price, class_id, cart_item_id, class_name, date)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               ON CONFLICT (transaction_id) DO NOTHING
               RETURNING id"#,
        )
        .bind(&dto.transaction_id)
        .bind(&dto.email)
        .bind(dto.price)
        .bind(dto.class_id)
        .bind(dto.cart_item_id)
        .bind(&dto.class_name)
        .bind(dto.date.unwrap_or_else(Utc::now))
        .fetch_optional(&mut *tx)
        .await?;

        let Some(payment_id) = inserted else {
            tx.rollback().await?;
            return Ok(CheckoutOutcome::AlreadyEnrolled(MessageResponse::new(
                "Already Enrolled This Class",
            )));
        };

        let deleted = sqlx::query("DELETE FROM cart_items WHERE id = $1 AND email = $2")
            .bind(dto.cart_item_id)
            .bind(&dto.email)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            warn!(cart_item_id = %dto.cart_item_id, "paid cart item was already gone");
        }

        tx.commit().await?;
        track_payment_recorded();

        Ok(CheckoutOutcome::Recorded(CheckoutResponse {
            insert_result: InsertResult {
                inserted_id: payment_id.into_inner(),
            },
            delete_result: DeleteResult {
                deleted_count: deleted,
            },
        }))
    }

    /// Payment history for one student, newest first.
    #[instrument(skip(db))]
    pub async fn list_for_email(db: &PgPool, email: &str) -> Result<Vec<Payment>, AppError> {
        let payments = sqlx::query_as::<_, Payment>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments WHERE email = $1 ORDER BY date DESC"
        ))
        .bind(email)
        .fetch_all(db)
        .await?;

        Ok(payments)
    }
}
