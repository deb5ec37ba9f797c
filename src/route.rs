use std::sync::Arc;

use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderName, HeaderValue, Method,
    },
    middleware::from_fn_with_state,
    routing::{get, patch, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handler::*,
    middleware::{
        checks_create_todos_user_availability, checks_exists_user_account, checks_todo_exists,
        find_user_by_id, USERNAME_HEADER,
    },
    AppState,
};

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let users = Router::new()
        .route("/users/:id", get(get_user))
        .route("/users/:id/pro", patch(upgrade_to_pro))
        .route_layer(from_fn_with_state(app_state.clone(), find_user_by_id))
        .route("/users", post(create_user));

    let todo_items = Router::new()
        .route("/todos/:id", put(update_todo).delete(delete_todo))
        .route("/todos/:id/done", patch(mark_todo_done))
        .route_layer(from_fn_with_state(app_state.clone(), checks_todo_exists));

    // The account guard wraps every todo route, so it runs before the
    // quota and todo guards.
    let todos = Router::new()
        .route(
            "/todos",
            get(get_todos).merge(post(create_todo).route_layer(from_fn_with_state(
                app_state.clone(),
                checks_create_todos_user_availability,
            ))),
        )
        .merge(todo_items)
        .route_layer(from_fn_with_state(
            app_state.clone(),
            checks_exists_user_account,
        ));

    Router::new()
        .route("/", get(health_checker_handler))
        .merge(users)
        .merge(todos)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}

/// CORS settings; `allowed_origin` of `None` lets any origin through.
pub fn cors_layer(
    allowed_origin: Option<&str>,
) -> Result<CorsLayer, axum::http::header::InvalidHeaderValue> {
    let origin = match allowed_origin {
        Some(origin) => AllowOrigin::exact(origin.parse::<HeaderValue>()?),
        None => AllowOrigin::any(),
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([
            ACCEPT,
            CONTENT_TYPE,
            HeaderName::from_static(USERNAME_HEADER),
        ]))
}
