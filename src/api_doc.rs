use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{CounterPair, Todo};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rest-todos API",
        version = "1.0.0",
        description = "In-memory todo CRUD and red/green counters"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler,
        handlers::counters::get_counters_handler,
        handlers::counters::put_counters_handler
    ),
    components(
        schemas(
            Todo,
            CounterPair,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "todos", description = "Todo CRUD operations"),
        (name = "counters", description = "Red/green counter operations")
    )
)]
pub struct ApiDoc;
