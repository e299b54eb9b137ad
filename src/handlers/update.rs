use crate::error::{parse_todo_id, ApiError, ErrorResponse};
use crate::models::Todo;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, extract::Path, http::StatusCode, Json};

/// PUT /todos/:id handler - Replace a todo
///
/// Summary and description are replaced wholesale. The path id wins over any
/// id in the body.
#[utoipa::path(
    put,
    path = routes::TODO_ITEM,
    params(
        ("id" = i64, Path, description = "Todo ID")
    ),
    request_body = Todo,
    responses(
        (status = 200, description = "Todo updated", body = Todo),
        (status = 400, description = "ID is not an integer or invalid JSON", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(todo): Json<Todo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let id = parse_todo_id(&id_str)?;

    let updated = state
        .todos
        .update(id, todo.summary, todo.description)
        .await
        .inspect_err(|_| tracing::info!("Todo not found with id: {}", id))?;

    tracing::info!("Successfully updated todo with id: {}", id);
    Ok((StatusCode::OK, Json(updated)))
}
