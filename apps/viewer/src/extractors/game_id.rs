use std::collections::HashMap;
use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Game identifier extracted from the `game_id` query parameter.
///
/// Opaque to the viewer; the scoring service owns its meaning. A missing
/// or empty value is a configuration error for the whole viewing
/// session, not something a retry can fix.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GameId(pub String);

impl FromRequest for GameId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let query = web::Query::<HashMap<String, String>>::from_query(req.query_string())
            .map(web::Query::into_inner)
            .unwrap_or_default();

        let result = match query.get("game_id").filter(|id| !id.is_empty()) {
            Some(id) => Ok(GameId(id.clone())),
            None => Err(AppError::bad_request(
                ErrorCode::MissingGameId,
                "No game ID provided in the URL.",
            )),
        };

        ready(result)
    }
}
