use axum::{
    Router, middleware,
    routing::{get, patch, post, put},
};

use crate::middleware::role::require_admin;
use crate::modules::classes::controller::{
    add_feedback, create_class, enroll_seat, get_all_classes, get_classes_by_status,
    get_my_classes, get_popular_classes, update_class_status,
};
use crate::state::AppState;

pub fn init_classes_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/classes",
            post(create_class).merge(
                get(get_all_classes)
                    .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
            ),
        )
        .route("/classes/{id}", patch(update_class_status))
        .route("/myclasses", get(get_my_classes))
        .route("/allClasses/{status}", get(get_classes_by_status))
        .route("/popularClass/{status}", get(get_popular_classes))
        .route("/addClasses/{id}", put(add_feedback))
        .route("/all-classes/seats/{id}", patch(enroll_seat))
}
