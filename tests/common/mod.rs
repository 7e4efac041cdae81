#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use serde_json::{Map, Value};
use sqlx::PgPool;
use uuid::Uuid;

use sportsplus::router::init_router;
use sportsplus::state::AppState;
use sportsplus_auth::{SelfAssertedIdentity, create_access_token};
use sportsplus_config::{CorsConfig, JwtConfig, RateLimitConfig};
use sportsplus_core::AppError;
use sportsplus::modules::payments::gateway::PaymentGateway;

pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-chars";

/// Gateway double that records the last amount and returns a fixed secret.
#[derive(Default)]
pub struct FakeGateway {
    pub last_amount: AtomicI64,
    pub fail: bool,
}

#[async_trait]
impl PaymentGateway for FakeGateway {
    async fn create_intent(&self, amount: i64) -> Result<String, AppError> {
        if self.fail {
            return Err(AppError::upstream(anyhow::anyhow!(
                "payment gateway is unavailable"
            )));
        }
        self.last_amount.store(amount, Ordering::SeqCst);
        Ok(format!("pi_test_{}_secret", amount))
    }
}

impl FakeGateway {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn last_amount(&self) -> i64 {
        self.last_amount.load(Ordering::SeqCst)
    }
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: 3600,
    }
}

pub fn test_state(pool: PgPool, gateway: Arc<FakeGateway>) -> AppState {
    AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig::default(),
        rate_limit_config: RateLimitConfig::disabled(),
        payment_gateway: gateway,
        identity_verifier: Arc::new(SelfAssertedIdentity),
    }
}

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    init_router(test_state(pool, Arc::new(FakeGateway::default())))
}

pub fn setup_test_app_with_gateway(pool: PgPool, gateway: Arc<FakeGateway>) -> axum::Router {
    init_router(test_state(pool, gateway))
}

pub fn token_for(email: &str) -> String {
    create_access_token(email, Map::new(), &test_jwt_config()).unwrap()
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// Inserts a user directly with the given role ("unset", "admin", "instructor").
pub async fn create_test_user(pool: &PgPool, email: &str, role: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        r#"INSERT INTO users (email, name, role)
           VALUES ($1, 'Test User', $2::user_role)
           RETURNING id"#,
    )
    .bind(email)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_class(
    pool: &PgPool,
    instructor_email: &str,
    status: &str,
    seats: i32,
    student: i32,
) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        r#"INSERT INTO classes (name, instructor_name, email, price, seats, student, status)
           VALUES ('Basketball 101', 'Coach', $1, 40.00, $2, $3, $4::class_status)
           RETURNING id"#,
    )
    .bind(instructor_email)
    .bind(seats)
    .bind(student)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_cart_item(pool: &PgPool, email: &str, class_id: Uuid) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        r#"INSERT INTO cart_items (email, class_id, class_name, price)
           VALUES ($1, $2, 'Basketball 101', 50.00)
           RETURNING id"#,
    )
    .bind(email)
    .bind(class_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Builds a request with an optional bearer token and JSON body.
pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn read_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
