//! API request handlers
//!
//! Every handler is a pure function of (method, path): the game flow is
//! ordered by the front-end, so each endpoint just returns its scripted
//! payload.

use axum::{
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::pages;
use crate::script;
use crate::types::{AnimationTimings, DialogueLine};

// Response types

#[derive(Debug, Serialize, ToSchema)]
pub struct ConversationResponse {
    /// Always "success"
    pub status: String,
    /// Dialogue lines in playback order
    pub dialogues: Vec<DialogueLine>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NextResponse {
    /// Always "next"
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RewardPromptResponse {
    /// Always "success"
    pub status: String,
    /// Prompt heading
    pub title: String,
    /// Prompt body
    pub message: String,
    /// Label on the action button
    pub action: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RewardConfirmResponse {
    /// Always "success"
    pub status: String,
    /// Dialog heading
    pub title: String,
    /// Dialog body
    pub message: String,
    /// Label on the accept button
    pub yes_button: String,
    /// Label on the decline button
    pub no_button: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RewardOpenResponse {
    /// Always "success"
    pub status: String,
    /// Page the front-end navigates to after the animations
    pub next_page: String,
    /// Frame counts pacing the chest and flower animations
    pub animations: AnimationTimings,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GameStatusResponse {
    /// Always "running"
    pub status: String,
    /// Name of the serving backend
    pub server: String,
    /// API paths the front-end drives
    pub endpoints: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResetResponse {
    /// Always "reset"
    pub status: String,
    /// Human-readable confirmation
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Name of the serving backend
    pub server: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Error message
    pub error: String,
    /// HTTP status code, repeated in the body
    pub code: u16,
}

// Page handlers

/// Serve the main game page
pub async fn index() -> Result<Html<String>, (StatusCode, Json<ErrorBody>)> {
    let html = pages::render("index.html", None).map_err(internal_error)?;
    Ok(Html(html))
}

/// Render the confession page shown after the flower bouquet animation
pub async fn confession() -> Result<Html<String>, (StatusCode, Json<ErrorBody>)> {
    let html = pages::render("confession.html", Some(script::CONFESSION_MESSAGE))
        .map_err(internal_error)?;
    Ok(Html(html))
}

// Conversation handlers

/// Start the victory conversation
#[utoipa::path(
    post,
    path = "/api/conversation/start",
    responses(
        (status = 200, description = "Scripted victory dialogue", body = ConversationResponse)
    ),
    tag = "conversation"
)]
pub async fn conversation_start() -> Json<ConversationResponse> {
    Json(ConversationResponse {
        status: "success".into(),
        dialogues: script::victory_dialogue(),
    })
}

/// Advance the dialogue (legacy endpoint, the front-end paces itself)
#[utoipa::path(
    post,
    path = "/api/conversation/next",
    responses(
        (status = 200, description = "Acknowledgement", body = NextResponse)
    ),
    tag = "conversation"
)]
pub async fn conversation_next() -> Json<NextResponse> {
    Json(NextResponse {
        status: "next".into(),
    })
}

// Reward flow handlers

/// Chest prompt shown when the dialogue ends
#[utoipa::path(
    post,
    path = "/api/reward/claim",
    responses(
        (status = 200, description = "Reward claim prompt", body = RewardPromptResponse)
    ),
    tag = "reward"
)]
pub async fn reward_claim() -> Json<RewardPromptResponse> {
    Json(RewardPromptResponse {
        status: "success".into(),
        title: script::REWARD_TITLE.into(),
        message: script::REWARD_MESSAGE.into(),
        action: script::REWARD_ACTION.into(),
    })
}

/// Confirmation dialog before the chest opens
#[utoipa::path(
    post,
    path = "/api/reward/confirm",
    responses(
        (status = 200, description = "Chest confirmation dialog", body = RewardConfirmResponse)
    ),
    tag = "reward"
)]
pub async fn reward_confirm() -> Json<RewardConfirmResponse> {
    Json(RewardConfirmResponse {
        status: "success".into(),
        title: script::CONFIRM_TITLE.into(),
        message: script::CONFIRM_MESSAGE.into(),
        yes_button: script::CONFIRM_YES.into(),
        no_button: script::CONFIRM_NO.into(),
    })
}

/// Open the chest: animation cues plus where to go afterwards
#[utoipa::path(
    post,
    path = "/api/reward/open",
    responses(
        (status = 200, description = "Animation cues and next page", body = RewardOpenResponse)
    ),
    tag = "reward"
)]
pub async fn reward_open() -> Json<RewardOpenResponse> {
    Json(RewardOpenResponse {
        status: "success".into(),
        next_page: script::CONFESSION_PAGE.into(),
        animations: script::animation_timings(),
    })
}

// Game state handlers

/// Report the server and the endpoints the front-end drives
#[utoipa::path(
    get,
    path = "/api/game/status",
    responses(
        (status = 200, description = "Game status", body = GameStatusResponse)
    ),
    tag = "game"
)]
pub async fn game_status() -> Json<GameStatusResponse> {
    Json(GameStatusResponse {
        status: "running".into(),
        server: env!("CARGO_PKG_NAME").into(),
        endpoints: script::api_endpoints(),
    })
}

/// Acknowledge a restart; there is no server-side state to clear
#[utoipa::path(
    post,
    path = "/api/game/reset",
    responses(
        (status = 200, description = "Reset acknowledged", body = ResetResponse)
    ),
    tag = "game"
)]
pub async fn game_reset() -> Json<ResetResponse> {
    Json(ResetResponse {
        status: "reset".into(),
        message: "Game reset successfully".into(),
    })
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        server: env!("CARGO_PKG_NAME").into(),
    })
}

// Error responders

/// Wrong verb on a mapped path
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody {
            error: "Method not allowed".into(),
            code: 405,
        }),
    )
}

/// Unmapped path
pub async fn page_not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Page not found".into(),
            code: 404,
        }),
    )
}

fn internal_error<E: std::fmt::Display>(err: E) -> (StatusCode, Json<ErrorBody>) {
    tracing::error!("handler error: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "Internal server error".into(),
            code: 500,
        }),
    )
}
