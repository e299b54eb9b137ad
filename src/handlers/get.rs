use crate::error::{parse_todo_id, ApiError, ErrorResponse};
use crate::models::Todo;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, extract::Path, http::StatusCode, Json};

/// GET /todos/:id handler - Retrieve a single todo
#[utoipa::path(
    get,
    path = routes::TODO_ITEM,
    params(
        ("id" = i64, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Todo found", body = Todo),
        (status = 400, description = "ID is not an integer", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let id = parse_todo_id(&id_str)?;

    match state.todos.get_by_id(id).await {
        Ok(todo) => {
            tracing::info!("Successfully retrieved todo with id: {}", id);
            Ok((StatusCode::OK, Json(todo)))
        }
        Err(err) => {
            tracing::info!("Todo not found with id: {}", id);
            Err(err.into())
        }
    }
}
