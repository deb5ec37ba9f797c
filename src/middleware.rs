// Guards attach resolved context as request extensions or reject the request

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};

use crate::{
    error::AppError,
    model::{Account, FoundUser},
    AppState,
};

/// Header carrying the claimed identity.
pub const USERNAME_HEADER: &str = "username";

fn claimed_username(headers: &HeaderMap) -> &str {
    // A missing header matches no account
    headers
        .get(USERNAME_HEADER)
        .and_then(|header| header.to_str().ok())
        .unwrap_or_default()
}

/// Resolves the `username` header into an [`Account`].
pub async fn checks_exists_user_account<B>(
    State(state): State<Arc<AppState>>,
    mut request: Request<B>,
    next: Next<B>,
) -> Result<Response, AppError> {
    let account = state
        .registry
        .read()
        .await
        .account(claimed_username(request.headers()))?;

    tracing::debug!(user_id = %account.user_id, username = %account.username, "account resolved");
    request.extensions_mut().insert(account);

    Ok(next.run(request).await)
}

/// Rejects todo creation for non-pro users at the quota. Must run after
/// [`checks_exists_user_account`].
pub async fn checks_create_todos_user_availability<B>(
    State(state): State<Arc<AppState>>,
    request: Request<B>,
    next: Next<B>,
) -> Result<Response, AppError> {
    let account = request
        .extensions()
        .get::<Account>()
        .cloned()
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    state.registry.read().await.check_todo_quota(account.user_id)?;

    Ok(next.run(request).await)
}

/// Resolves `:id` to a todo owned by the claimed user.
pub async fn checks_todo_exists<B>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    mut request: Request<B>,
    next: Next<B>,
) -> Result<Response, AppError> {
    let todo_ref = state
        .registry
        .read()
        .await
        .resolve_todo(claimed_username(request.headers()), &id)?;

    request.extensions_mut().insert(todo_ref);

    Ok(next.run(request).await)
}

/// Resolves `:id` to a registered user.
pub async fn find_user_by_id<B>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    mut request: Request<B>,
    next: Next<B>,
) -> Result<Response, AppError> {
    let user_id = state.registry.read().await.find_user_by_id(&id)?.id;

    request.extensions_mut().insert(FoundUser(user_id));

    Ok(next.run(request).await)
}
