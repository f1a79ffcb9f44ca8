//! API route definitions

use axum::{
    body::Bytes,
    http::{header, Response, StatusCode},
    middleware,
    routing::{get, post},
    Router,
};
use http_body_util::Full;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::cors;
use super::handlers::{
    self, ConversationResponse, ErrorBody, GameStatusResponse, HealthResponse, NextResponse,
    ResetResponse, RewardConfirmResponse, RewardOpenResponse, RewardPromptResponse,
};
use crate::types::{AnimationTimings, DialogueLine};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Valentine Quest API",
        version = "0.1.0",
        description = "Scripted endpoints driving the victory dialogue, chest reward flow and confession page"
    ),
    tags(
        (name = "conversation", description = "Victory dialogue"),
        (name = "reward", description = "Chest reward flow"),
        (name = "game", description = "Game status and reset"),
        (name = "health", description = "Health checks")
    ),
    paths(
        handlers::conversation_start,
        handlers::conversation_next,
        handlers::reward_claim,
        handlers::reward_confirm,
        handlers::reward_open,
        handlers::game_status,
        handlers::game_reset,
        handlers::health,
    ),
    components(schemas(
        DialogueLine,
        AnimationTimings,
        ConversationResponse,
        NextResponse,
        RewardPromptResponse,
        RewardConfirmResponse,
        RewardOpenResponse,
        GameStatusResponse,
        ResetResponse,
        HealthResponse,
        ErrorBody,
    ))
)]
pub struct ApiDoc;

/// Render a panicked handler as the standard JSON 500 body
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response<Full<Bytes>> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("handler panicked: {detail}");

    let body = serde_json::json!({
        "error": "Internal server error",
        "code": 500
    });

    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Internal server error"))))
}

/// Create the router
///
/// Handlers carry no state, so the router is plain `Router<()>`.
pub fn create_router() -> Router {
    let openapi = ApiDoc::openapi();

    Router::new()
        // Pages
        .route("/", get(handlers::index).fallback(handlers::method_not_allowed))
        .route(
            "/confession",
            get(handlers::confession).fallback(handlers::method_not_allowed),
        )
        // Conversation
        .route(
            "/api/conversation/start",
            post(handlers::conversation_start).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/conversation/next",
            post(handlers::conversation_next).fallback(handlers::method_not_allowed),
        )
        // Reward flow
        .route(
            "/api/reward/claim",
            post(handlers::reward_claim).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/reward/confirm",
            post(handlers::reward_confirm).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/reward/open",
            post(handlers::reward_open).fallback(handlers::method_not_allowed),
        )
        // Game state
        .route(
            "/api/game/status",
            get(handlers::game_status).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/game/reset",
            post(handlers::game_reset).fallback(handlers::method_not_allowed),
        )
        // Health
        .route(
            "/health",
            get(handlers::health).fallback(handlers::method_not_allowed),
        )
        // OpenAPI spec and Swagger UI
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", openapi))
        // Anything else is a JSON 404
        .fallback(handlers::page_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(cors::cors))
        .layer(TraceLayer::new_for_http())
}
