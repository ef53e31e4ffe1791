//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/posts")
                    .service(
                        web::resource("")
                            .route(web::get().to(posts::list_posts))
                            .route(web::post().to(posts::create_post)),
                    )
                    .service(
                        web::resource("/{post_id}")
                            .route(web::get().to(posts::get_post))
                            .route(web::put().to(posts::update_post))
                            .route(web::delete().to(posts::delete_post)),
                    ),
            ),
    );
}
