use crate::models::Todo;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /todos handler - List all todos
///
/// Returns every stored todo in store order.
#[utoipa::path(
    get,
    path = routes::TODOS,
    responses(
        (status = 200, description = "All stored todos", body = Vec<Todo>)
    ),
    tag = "todos"
)]
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<Vec<Todo>>) {
    let todos = state.todos.list_all().await;
    tracing::info!("Listed {} todos", todos.len());
    (StatusCode::OK, Json(todos))
}
