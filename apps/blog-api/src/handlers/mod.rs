//! HTTP handlers and route configuration.

mod health;
mod post;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/post")
                    .route("", web::get().to(post::list_posts))
                    .route("", web::post().to(post::create_post))
                    .route("/{id}", web::get().to(post::get_post))
                    .route("/{id}", web::put().to(post::update_post))
                    .route("/{id}", web::delete().to(post::delete_post)),
            ),
    );
}
