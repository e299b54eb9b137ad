use crate::models::CounterPair;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /counters handler - Current counter pair
#[utoipa::path(
    get,
    path = routes::COUNTERS,
    responses(
        (status = 200, description = "Current counters", body = CounterPair)
    ),
    tag = "counters"
)]
pub async fn get_counters_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<CounterPair>) {
    (StatusCode::OK, Json(state.counters.get().await))
}

/// PUT /counters handler - Replace the counter pair
///
/// Fields missing from the body are stored as 0.
#[utoipa::path(
    put,
    path = routes::COUNTERS,
    request_body = CounterPair,
    responses(
        (status = 200, description = "Counters replaced", body = CounterPair),
        (status = 400, description = "Malformed JSON body")
    ),
    tag = "counters"
)]
pub async fn put_counters_handler(
    State(state): State<AppState>,
    Json(pair): Json<CounterPair>,
) -> (StatusCode, Json<CounterPair>) {
    let stored = state.counters.replace(pair).await;
    tracing::info!("Counters replaced: red={}, green={}", stored.red, stored.green);
    (StatusCode::OK, Json(stored))
}
