use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};

use crate::routes;
use crate::state::app_state::AppState;

/// Build an in-memory app with the standard route table.
///
/// Middleware (CORS, logging, tracing) is deliberately left off so
/// endpoint behavior can be exercised directly.
pub async fn create_test_app(
    data: web::Data<AppState>,
) -> impl Service<Request, Response = ServiceResponse, Error = Error> {
    test::init_service(App::new().app_data(data).configure(routes::configure)).await
}
