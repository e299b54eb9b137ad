use crate::models::Todo;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// POST /todos handler - Create a todo
///
/// Any `id` in the request body is ignored; the store assigns the next one.
#[utoipa::path(
    post,
    path = routes::TODOS,
    request_body = Todo,
    responses(
        (status = 200, description = "Todo created", body = Todo),
        (status = 400, description = "Malformed JSON body")
    ),
    tag = "todos"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Json(todo): Json<Todo>,
) -> (StatusCode, Json<Todo>) {
    let created = state.todos.create(todo.summary, todo.description).await;

    tracing::info!(
        "Created todo with id: {:?} (total: {})",
        created.id,
        state.todos.len().await
    );
    (StatusCode::OK, Json(created))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, Router};
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        crate::app::router(AppState::new())
    }

    fn post_request(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/todos")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_endpoint_success() {
        let app = setup_test_app();

        let response = app
            .oneshot(post_request(
                r#"{"summary":"test summary","description":"test description"}"#.to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let created: Todo = serde_json::from_slice(&body).unwrap();
        assert!(created.id.is_some());
        assert_eq!(created.summary, "test summary");
        assert_eq!(created.description, "test description");
    }

    #[tokio::test]
    async fn test_create_endpoint_ignores_client_id() {
        let app = setup_test_app();

        let response = app
            .oneshot(post_request(
                serde_json::to_string(&Todo::with_id(500, "s", "d")).unwrap(),
            ))
            .await
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let created: Todo = serde_json::from_slice(&body).unwrap();
        assert_eq!(created, Todo::with_id(1, "s", "d"));
    }

    #[tokio::test]
    async fn test_create_endpoint_unique_ids() {
        let app = setup_test_app();
        let mut ids = Vec::new();

        for i in 0..5 {
            let response = app
                .clone()
                .oneshot(post_request(
                    serde_json::to_string(&Todo::new(format!("s{i}"), "d")).unwrap(),
                ))
                .await
                .unwrap();
            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let created: Todo = serde_json::from_slice(&body).unwrap();
            ids.push(created.id.unwrap());
        }

        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_create_endpoint_invalid_json() {
        let app = setup_test_app();

        let response = app
            .oneshot(post_request("{invalid json}".to_string()))
            .await
            .unwrap();

        // Axum's Json extractor returns 400 for invalid JSON
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
