use axum::{Router, routing::{get, post}};

use crate::modules::payments::controller::{create_payment_intent, get_payments, record_payment};
use crate::state::AppState;

pub fn init_payments_router() -> Router<AppState> {
    Router::new()
        .route("/create-payment-intent", post(create_payment_intent))
        .route("/payments", get(get_payments).post(record_payment))
}
