//! JSON view-model route.

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::domain::view::GameView;
use crate::error::AppError;
use crate::extractors::game_id::GameId;
use crate::services::view::{run_tick, TickOutcome, WAITING_MESSAGE};
use crate::state::app_state::AppState;

/// Tick response, tagged by whether the game has published data yet.
#[derive(Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ViewResponse {
    Ready(Box<GameView>),
    Waiting { message: String },
}

/// GET /api/view?game_id=...
///
/// Runs one fetch-reconcile-derive cycle and returns the view model for
/// an external render surface. Read-only; the scoreboard cache is the
/// only thing a call touches.
async fn get_view(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let response = match run_tick(&app_state, &game_id.0).await? {
        TickOutcome::View(view) => ViewResponse::Ready(view),
        TickOutcome::AwaitingScores => ViewResponse::Waiting {
            message: WAITING_MESSAGE.to_string(),
        },
    };

    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/view").route(web::get().to(get_view)));
}
