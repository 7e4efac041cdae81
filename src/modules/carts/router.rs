use axum::{Router, routing::get};

use crate::modules::carts::controller::{
    add_to_cart, get_cart, get_cart_item, remove_cart_item,
};
use crate::state::AppState;

pub fn init_carts_router() -> Router<AppState> {
    Router::new()
        .route("/selectClass", get(get_cart).post(add_to_cart))
        .route(
            "/selectClass/{id}",
            get(get_cart_item).delete(remove_cart_item),
        )
}
