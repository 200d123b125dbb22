use actix_web::{web, HttpResponse, Result};

use crate::models::{ErrorResponse, HealthResponse, ProviderStatus};
use crate::AppState;

pub async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse> {
    let providers = state.search_service.providers();
    let providers = ProviderStatus {
        twitter: providers.twitter.is_configured(),
        facebook: providers.facebook.is_configured(),
        google_news: providers.google_news.is_configured(),
    };
    let all_configured = providers.twitter && providers.facebook && providers.google_news;

    let response = HealthResponse {
        status: if all_configured { "healthy" } else { "degraded" }.to_string(),
        providers,
        facebook_mode: state.config.facebook.mode,
        uptime_seconds: state.start_time.elapsed().as_secs(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    Ok(HttpResponse::Ok().json(response))
}

pub async fn not_found() -> Result<HttpResponse> {
    Ok(HttpResponse::NotFound().json(ErrorResponse::new(
        "Endpoint not found"
    )))
}
