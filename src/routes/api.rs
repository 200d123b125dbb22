use crate::handlers;
use actix_web::{web, Scope};

pub fn config() -> Scope {
    web::scope("/api")
        .route("/health", web::get().to(handlers::health_check))
        .route("/keywords", web::post().to(handlers::extract))
        .route("/search", web::post().to(handlers::search))
        .route("/search/latest", web::get().to(handlers::latest_search))
        .route("/search/twitter", web::get().to(handlers::search_twitter))
        .route("/search/facebook", web::get().to(handlers::search_facebook))
        .route("/search/google-news", web::get().to(handlers::search_google_news))
}
