//! # Sports Plus Models
//!
//! Domain records and request/response DTOs for the Sports Plus API.
//!
//! # Modules
//!
//! - [`ids`]: strongly-typed record identifiers
//! - [`users`]: users and the role enum
//! - [`classes`]: class listings, status enum, feedback
//! - [`carts`]: selected-class cart items
//! - [`payments`]: payment records, checkout and payment intents
//! - [`auth`]: token issuance DTOs
//! - [`results`]: write-result shapes shared by every collection

pub mod auth;
pub mod carts;
pub mod classes;
pub mod ids;
pub mod payments;
pub mod results;
pub mod users;
mod validation;

pub use auth::{TokenRequest, TokenResponse};
pub use carts::{CartFilterParams, CartItem, CreateCartItemDto};
pub use classes::{
    Class, ClassFilterParams, ClassStatus, CreateClassDto, FeedbackDto, StatusUpdateParams,
};
pub use ids::{CartItemId, ClassId, PaymentId, UserId};
pub use payments::{
    CheckoutOutcome, CheckoutResponse, CreatePaymentDto, Payment, PaymentFilterParams,
    PaymentIntentRequest, PaymentIntentResponse,
};
pub use results::{DeleteResult, InsertResult, MessageResponse, UpdateResult};
pub use users::{
    AdminCheckResponse, CreateUserDto, InstructorCheckResponse, SignupOutcome, User, UserRole,
};
