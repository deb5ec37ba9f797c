use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    error::AppError,
    model::{Account, FoundUser, TodoRef},
    schema::{CreateTodoSchema, CreateUserSchema, UpdateTodoSchema},
    AppState,
};

// Handler for the health checker route
pub async fn health_checker_handler() -> impl IntoResponse {
    const MESSAGE: &str = "In-memory users and todos API with Rust and Axum";

    let json_response = serde_json::json!({
        "status": "success",
        "message": MESSAGE
    });

    Json(json_response)
}

// Handler for registering a new User
#[tracing::instrument(skip_all, fields(username = %body.username))]
pub async fn create_user(
    State(data): State<Arc<AppState>>,
    Json(body): Json<CreateUserSchema>,
) -> Result<impl IntoResponse, AppError> {
    let user = data
        .registry
        .write()
        .await
        .create_user(body.name, body.username)?;

    Ok((StatusCode::CREATED, Json(user)))
}

// Handler for getting a User resolved by the id guard
#[tracing::instrument(skip_all, fields(user_id = %found.0))]
pub async fn get_user(
    State(data): State<Arc<AppState>>,
    Extension(found): Extension<FoundUser>,
) -> Result<impl IntoResponse, AppError> {
    let registry = data.registry.read().await;
    let user = registry.user_by_id(found.0)?;

    Ok(Json(user.clone()))
}

// Handler for switching a User to the pro plan
#[tracing::instrument(skip_all, fields(user_id = %found.0))]
pub async fn upgrade_to_pro(
    State(data): State<Arc<AppState>>,
    Extension(found): Extension<FoundUser>,
) -> Result<impl IntoResponse, AppError> {
    let user = data.registry.write().await.upgrade_to_pro(found.0)?;

    Ok(Json(user))
}

// Handler for getting all Todo items of the calling account
#[tracing::instrument(skip_all, fields(username = %account.username))]
pub async fn get_todos(
    State(data): State<Arc<AppState>>,
    Extension(account): Extension<Account>,
) -> Result<impl IntoResponse, AppError> {
    let registry = data.registry.read().await;
    let todos = registry.list_todos(account.user_id)?.to_vec();

    Ok(Json(todos))
}

// Handler for creating a new Todo
#[tracing::instrument(skip_all, fields(username = %account.username))]
pub async fn create_todo(
    State(data): State<Arc<AppState>>,
    Extension(account): Extension<Account>,
    Json(body): Json<CreateTodoSchema>,
) -> Result<impl IntoResponse, AppError> {
    let todo = data
        .registry
        .write()
        .await
        .create_todo(account.user_id, body.title, body.deadline)?;

    Ok((StatusCode::CREATED, Json(todo)))
}

// Handler for updating a Todo's title and deadline
#[tracing::instrument(skip_all, fields(todo_id = %todo_ref.todo_id))]
pub async fn update_todo(
    State(data): State<Arc<AppState>>,
    Extension(todo_ref): Extension<TodoRef>,
    Json(body): Json<UpdateTodoSchema>,
) -> Result<impl IntoResponse, AppError> {
    let todo = data
        .registry
        .write()
        .await
        .update_todo(todo_ref, body.title, body.deadline)?;

    Ok(Json(todo))
}

// Handler for marking a Todo as done
#[tracing::instrument(skip_all, fields(todo_id = %todo_ref.todo_id))]
pub async fn mark_todo_done(
    State(data): State<Arc<AppState>>,
    Extension(todo_ref): Extension<TodoRef>,
) -> Result<impl IntoResponse, AppError> {
    let todo = data.registry.write().await.mark_done(todo_ref)?;

    Ok(Json(todo))
}

// Handler for deleting a Todo
#[tracing::instrument(skip_all, fields(todo_id = %todo_ref.todo_id))]
pub async fn delete_todo(
    State(data): State<Arc<AppState>>,
    Extension(todo_ref): Extension<TodoRef>,
) -> Result<impl IntoResponse, AppError> {
    data.registry.write().await.delete_todo(todo_ref)?;

    Ok(StatusCode::NO_CONTENT)
}
