//! HTTP handlers and route configuration.

mod auth;
mod files;
mod health;
mod posts;
mod users;


use actix_web::{HttpResponse, web};

use scribe_shared::ErrorBody;

/// Configure all application routes under the `/v1` prefix.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .service(web::scope("/auth").route("/login", web::post().to(auth::login)))
            .service(
                web::scope("/users")
                    .route("", web::post().to(users::create))
                    .route("", web::get().to(users::list))
                    .route("/{id}", web::get().to(users::get_by_id)),
            )
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create)),
            )
            .service(web::scope("/files").route("/upload", web::post().to(files::upload))),
    );
}

/// Fallback for unmatched routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::not_found(
        "The requested endpoint does not exist",
    ))
}
