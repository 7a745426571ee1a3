//! HTTP handlers and route configuration.

mod health;
mod posts;


use std::sync::Arc;

use actix_web::web;

use scribe_core::ports::TokenService;

use crate::middleware::auth::RequireAuth;
use crate::middleware::error::form_error_handler;
use crate::state::AppState;

/// Register shared state, extractor configuration and routes.
pub fn configure_app(
    state: AppState,
    token_service: Arc<dyn TokenService>,
    body_limit: usize,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state))
            .app_data(web::Data::new(token_service))
            .app_data(web::PayloadConfig::new(body_limit))
            .app_data(
                web::FormConfig::default()
                    .limit(body_limit)
                    .error_handler(form_error_handler),
            );
        configure_routes(cfg);
    }
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Post resource, authenticated
            .service(
                web::scope("/posts")
                    .wrap(RequireAuth)
                    .route("", web::get().to(posts::index))
                    .route("", web::post().to(posts::store))
                    .route("/{id}", web::get().to(posts::show))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}", web::delete().to(posts::destroy)),
            ),
    );
}
