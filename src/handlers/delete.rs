use crate::error::{parse_todo_id, ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, extract::Path, http::StatusCode};

pub const DELETED_MESSAGE: &str = "Todo deleted successfully!";

/// DELETE /todos/:id handler - Remove a todo
///
/// Responds with a plain-text confirmation.
#[utoipa::path(
    delete,
    path = routes::TODO_ITEM,
    params(
        ("id" = i64, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Todo deleted", body = String, content_type = "text/plain"),
        (status = 400, description = "ID is not an integer", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let id = parse_todo_id(&id_str)?;

    state
        .todos
        .delete(id)
        .await
        .inspect_err(|_| tracing::info!("Todo not found with id: {}", id))?;

    tracing::info!("Successfully deleted todo with id: {}", id);
    Ok((StatusCode::OK, DELETED_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Todo;
    use axum::{body::Body, http::Request, Router};
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        crate::app::router(AppState::new())
    }

    fn request(method: &str, uri: String) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn list_todos(app: &Router) -> Vec<Todo> {
        let response = app.clone().oneshot(request("GET", "/todos".to_string())).await.unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_delete_endpoint_success() {
        let app = setup_test_app();

        let post_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/todos")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"summary":"summary","description":"description"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = axum::body::to_bytes(post_response.into_body(), usize::MAX)
            .await
            .unwrap();
        let created: Todo = serde_json::from_slice(&body).unwrap();
        let id = created.id.unwrap();

        let before = list_todos(&app).await;

        let response = app
            .clone()
            .oneshot(request("DELETE", format!("/todos/{}", id)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], DELETED_MESSAGE.as_bytes());

        let after = list_todos(&app).await;
        assert!(before.contains(&created));
        // Todo not contained anymore
        assert!(!after.contains(&created));
        assert_eq!(before.len() - 1, after.len());

        let get_response = app
            .oneshot(request("GET", format!("/todos/{}", id)))
            .await
            .unwrap();
        assert_eq!(get_response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_endpoint_not_found() {
        let app = setup_test_app();

        let response = app
            .oneshot(request("DELETE", "/todos/9999".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let raw = String::from_utf8(body.to_vec()).unwrap();
        assert!(raw.contains(r#""message":"Todo with the ID 9999 not found"#));
    }

    #[tokio::test]
    async fn test_delete_endpoint_invalid_id() {
        let app = setup_test_app();

        let response = app
            .oneshot(request("DELETE", "/todos/1.5".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
