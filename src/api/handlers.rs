use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::{debug, info};

use crate::engine::board::BoardState;
use crate::engine::movegen::moves_for_piece;
use crate::engine::types::{ChessError, PieceKind};
use crate::tutor::guide::{all_piece_guides, all_special_move_guides, piece_guide};
use crate::tutor::{ScenarioKind, Session};

use super::errors::ApiError;
use super::models::*;
use super::state::SharedState;

// =========================================================================
// Health
// =========================================================================

/// GET /health
pub async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let uptime = state.start_time.elapsed().as_secs();
    let sessions = state.sessions.read().await.len();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        engine: "chess-tutor".to_string(),
        sessions,
        uptime,
    })
}

// =========================================================================
// Guide
// =========================================================================

/// GET /api/pieces
pub async fn list_pieces() -> Json<Vec<PieceGuideResponse>> {
    Json(all_piece_guides().iter().map(piece_guide_response).collect())
}

/// GET /api/pieces/:kind
pub async fn get_piece(Path(kind): Path<String>) -> Result<Json<PieceGuideResponse>, ApiError> {
    let kind = PieceKind::from_name(&kind).ok_or(ChessError::UnknownPiece(kind))?;
    Ok(Json(piece_guide_response(&piece_guide(kind))))
}

/// GET /api/special-moves
pub async fn list_special_moves() -> Json<Vec<SpecialMoveGuideResponse>> {
    Json(
        all_special_move_guides()
            .iter()
            .map(special_move_guide_response)
            .collect(),
    )
}

// =========================================================================
// Stateless move generation
// =========================================================================

/// POST /api/moves
pub async fn generate(
    payload: Result<Json<MovesRequest>, JsonRejection>,
) -> Result<Json<MovesResponse>, ApiError> {
    let Json(input) = payload?;
    let board = match input.placement {
        Some(ref placement) => BoardState::from_placement(placement)?,
        None => BoardState::standard(),
    };
    let origin = input.origin.resolve()?;
    let piece = board.at(origin)?.ok_or(ChessError::EmptyOrigin(origin))?;
    let moves = moves_for_piece(&board, origin, piece)?;

    debug!(%origin, piece = %piece.kind, count = moves.len(), "generated moves");

    Ok(Json(MovesResponse {
        origin: coord_view(origin),
        piece: piece_view(piece),
        moves: moves.iter().copied().map(coord_view).collect(),
    }))
}

// =========================================================================
// Create Session
// =========================================================================

/// POST /api/sessions
pub async fn create_session(
    State(state): State<SharedState>,
    payload: Result<Option<Json<CreateSessionRequest>>, JsonRejection>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let input = payload?.map(|Json(b)| b).unwrap_or_default();
    let side = parse_side(input.side.as_deref())?;
    let session = match input.scenario {
        Some(ref name) => Session::with_scenario(ScenarioKind::parse(name, side)?)?,
        None => Session::new(),
    };

    let response = session_to_response(&session);
    let id = session.id.clone();

    let mut sessions = state.sessions.write().await;
    if sessions.len() >= state.config.max_sessions {
        return Err(ApiError::TooManySessions(state.config.max_sessions));
    }
    sessions.insert(id.clone(), session);

    info!(session_id = %id, scenario = %response.scenario, "session created");
    Ok((StatusCode::CREATED, Json(response)))
}

// =========================================================================
// Get / Delete Session
// =========================================================================

/// GET /api/sessions/:id
pub async fn get_session(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&id)
        .ok_or_else(|| ApiError::SessionNotFound(id.clone()))?;
    Ok(Json(session_to_response(session)))
}

/// DELETE /api/sessions/:id
pub async fn delete_session(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let mut sessions = state.sessions.write().await;
    sessions
        .remove(&id)
        .ok_or_else(|| ApiError::SessionNotFound(id.clone()))?;
    info!(session_id = %id, "session deleted");
    Ok(Json(DeleteResponse {
        success: true,
        message: "Session deleted".to_string(),
    }))
}

// =========================================================================
// Session interaction
// =========================================================================

/// POST /api/sessions/:id/select
pub async fn select_square(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    payload: Result<Json<CoordInput>, JsonRejection>,
) -> Result<Json<SessionResponse>, ApiError> {
    let Json(input) = payload?;
    let coord = input.resolve()?;
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::SessionNotFound(id.clone()))?;

    let count = session.select(coord)?.map(|sel| sel.moves.len());
    debug!(session_id = %id, %coord, moves = ?count, "square selected");

    Ok(Json(session_to_response(session)))
}

/// POST /api/sessions/:id/clear
pub async fn clear_highlights(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::SessionNotFound(id.clone()))?;
    session.clear_highlights();
    Ok(Json(session_to_response(session)))
}

/// POST /api/sessions/:id/reset
pub async fn reset_session(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::SessionNotFound(id.clone()))?;
    session.reset();
    debug!(session_id = %id, "session reset");
    Ok(Json(session_to_response(session)))
}

/// POST /api/sessions/:id/scenario
pub async fn stage_scenario(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    payload: Result<Json<ScenarioRequest>, JsonRejection>,
) -> Result<Json<SessionResponse>, ApiError> {
    let Json(input) = payload?;
    let side = parse_side(input.side.as_deref())?;
    let kind = ScenarioKind::parse(&input.scenario, side)?;

    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::SessionNotFound(id.clone()))?;
    session.stage(kind)?;

    debug!(session_id = %id, scenario = %kind, "scenario staged");
    Ok(Json(session_to_response(session)))
}
