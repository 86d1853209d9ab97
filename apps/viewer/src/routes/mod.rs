use actix_web::web;

pub mod health;
pub mod page;
pub mod view;

/// Configure application routes, shared by the server and tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Dashboard page: /
    cfg.route("/", web::get().to(page::dashboard));

    // View API: /api/view
    cfg.service(web::scope("/api").configure(view::configure_routes));

    // Health check: /health
    cfg.configure(health::configure_routes);
}
