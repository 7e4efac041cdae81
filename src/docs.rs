use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use sportsplus_core::ErrorResponse;
use sportsplus_models::{
    AdminCheckResponse, CartItem, CheckoutOutcome, CheckoutResponse, Class, ClassStatus,
    CreateCartItemDto, CreateClassDto, CreatePaymentDto, CreateUserDto, DeleteResult,
    FeedbackDto, InsertResult, InstructorCheckResponse, MessageResponse, Payment,
    PaymentIntentRequest, PaymentIntentResponse, SignupOutcome, TokenRequest, TokenResponse,
    UpdateResult, User, UserRole,
};

use crate::modules::health::controller::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::root,
        crate::modules::health::controller::health,
        crate::modules::auth::controller::issue_token,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::check_admin,
        crate::modules::users::controller::check_instructor,
        crate::modules::users::controller::get_users_by_role,
        crate::modules::users::controller::make_admin,
        crate::modules::users::controller::make_instructor,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::get_all_classes,
        crate::modules::classes::controller::get_my_classes,
        crate::modules::classes::controller::get_classes_by_status,
        crate::modules::classes::controller::get_popular_classes,
        crate::modules::classes::controller::update_class_status,
        crate::modules::classes::controller::add_feedback,
        crate::modules::classes::controller::enroll_seat,
        crate::modules::carts::controller::add_to_cart,
        crate::modules::carts::controller::get_cart,
        crate::modules::carts::controller::get_cart_item,
        crate::modules::carts::controller::remove_cart_item,
        crate::modules::payments::controller::create_payment_intent,
        crate::modules::payments::controller::record_payment,
        crate::modules::payments::controller::get_payments,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            TokenRequest,
            TokenResponse,
            User,
            UserRole,
            CreateUserDto,
            SignupOutcome,
            AdminCheckResponse,
            InstructorCheckResponse,
            Class,
            ClassStatus,
            CreateClassDto,
            FeedbackDto,
            CartItem,
            CreateCartItemDto,
            Payment,
            CreatePaymentDto,
            CheckoutOutcome,
            CheckoutResponse,
            PaymentIntentRequest,
            PaymentIntentResponse,
            InsertResult,
            UpdateResult,
            DeleteResult,
            MessageResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and readiness"),
        (name = "Authentication", description = "Bearer token issuance"),
        (name = "Users", description = "Signup and role management"),
        (name = "Classes", description = "Class listings, review and enrollment"),
        (name = "Cart", description = "Selected classes awaiting payment"),
        (name = "Payments", description = "Payment intents and checkout")
    ),
    info(
        title = "Sports Plus API",
        version = "0.1.0",
        description = "Backend for booking sports classes: users and roles, class listings, a cart of selected classes and payments.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
