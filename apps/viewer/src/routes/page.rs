//! Server-rendered dashboard route.

use actix_web::{web, HttpResponse};

use crate::extractors::game_id::GameId;
use crate::http::page;
use crate::services::view::{run_tick, TickOutcome, WAITING_MESSAGE};
use crate::state::app_state::AppState;

/// GET /?game_id=...
///
/// The same tick as the JSON route, rendered as HTML. Errors render
/// inline: transient ones keep the page's refresh loop so the next tick
/// retries; the missing-game-id case is fatal and stops it.
pub async fn dashboard(game_id: Option<GameId>, app_state: web::Data<AppState>) -> HttpResponse {
    let refresh = app_state.refresh_secs;

    let Some(GameId(game_id)) = game_id else {
        return html(HttpResponse::BadRequest())
            .body(page::render_error("No game ID provided in the URL.", None));
    };

    match run_tick(&app_state, &game_id).await {
        Ok(TickOutcome::View(view)) => {
            html(HttpResponse::Ok()).body(page::render_dashboard(&view, &game_id, refresh))
        }
        Ok(TickOutcome::AwaitingScores) => {
            html(HttpResponse::Ok()).body(page::render_waiting(WAITING_MESSAGE, &game_id, refresh))
        }
        Err(e) => html(HttpResponse::build(e.status())).body(page::render_error(
            &format!("Error fetching game data: {}", e.detail()),
            Some(refresh),
        )),
    }
}

fn html(mut builder: actix_web::HttpResponseBuilder) -> actix_web::HttpResponseBuilder {
    builder.content_type("text/html; charset=utf-8");
    builder
}
