//! HTTP handlers and route configuration.

mod health;
mod posts;
mod users;

use actix_web::web;

use crate::middleware::error::{json_config, query_config};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .route("", web::post().to(posts::create))
                .route("", web::get().to(posts::list))
                .route("/{id}", web::get().to(posts::find_one))
                .route("/{id}", web::patch().to(posts::update))
                .route("/{id}", web::put().to(posts::update))
                .route("/{id}", web::delete().to(posts::delete))
                .route("/{id}/like/{user_id}", web::post().to(posts::toggle_like)),
        )
        .service(
            web::scope("/users")
                .route("", web::post().to(users::create))
                .route("", web::get().to(users::list))
                .route("/{id}", web::get().to(users::find_one))
                .route("/{id}", web::delete().to(users::delete)),
        );
}
