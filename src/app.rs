use axum::{
    routing::{get, put},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::routes;
use crate::state::AppState;

/// Build the full application router
///
/// Every endpoint is registered here against its path constant. State is
/// injected once; Swagger UI is mounted alongside the API.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(
            routes::TODOS,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            routes::TODO_ITEM,
            get(handlers::get_handler)
                .put(handlers::update_handler)
                .delete(handlers::delete_handler),
        )
        .route(
            routes::COUNTERS,
            get(handlers::get_counters_handler).put(handlers::put_counters_handler),
        )
        .with_state(state)
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
