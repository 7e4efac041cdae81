use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::role::require_admin;
use crate::modules::users::controller::{
    check_admin, check_instructor, create_user, get_users, get_users_by_role, make_admin,
    make_instructor,
};
use crate::state::AppState;

pub fn init_users_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            post(create_user).merge(
                get(get_users)
                    .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
            ),
        )
        // GET takes an email, PATCH a user id; one segment name serves both
        .route("/users/admin/{target}", get(check_admin).patch(make_admin))
        .route(
            "/users/instructor/{target}",
            get(check_instructor).patch(make_instructor),
        )
        .route("/allUsers/{role}", get(get_users_by_role))
}
