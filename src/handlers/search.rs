use actix_web::{http::StatusCode, web, HttpResponse, Result};
use tracing::error;
use validator::Validate;

use crate::models::{ErrorResponse, KeywordQuery, ProviderKind, ResultsResponse, SearchRequest};
use crate::providers::{ProviderError, SearchProvider};
use crate::services::SearchError;
use crate::utils::{extract_keywords, Keywords};
use crate::AppState;

pub async fn search_twitter(
    state: web::Data<AppState>,
    query: web::Query<KeywordQuery>,
) -> Result<HttpResponse> {
    provider_search(state.search_service.providers().twitter.as_ref(), &query).await
}

pub async fn search_facebook(
    state: web::Data<AppState>,
    query: web::Query<KeywordQuery>,
) -> Result<HttpResponse> {
    provider_search(state.search_service.providers().facebook.as_ref(), &query).await
}

pub async fn search_google_news(
    state: web::Data<AppState>,
    query: web::Query<KeywordQuery>,
) -> Result<HttpResponse> {
    provider_search(state.search_service.providers().google_news.as_ref(), &query).await
}

async fn provider_search(provider: &dyn SearchProvider, query: &KeywordQuery) -> Result<HttpResponse> {
    let Some(keyword) = query.keyword() else {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
            "Keyword parameter is required",
        )));
    };

    match provider.search(keyword).await {
        Ok(results) => Ok(HttpResponse::Ok().json(ResultsResponse { results })),
        Err(e) => {
            error!("Error in {} search: {}", provider.kind(), e);
            Ok(provider_error_response(provider.kind(), e))
        }
    }
}

fn provider_error_response(kind: ProviderKind, err: ProviderError) -> HttpResponse {
    match err {
        ProviderError::Upstream { status, body, .. } => {
            let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            HttpResponse::build(code).json(ErrorResponse::upstream(
                format!("{} API error", kind),
                body,
                status,
            ))
        }
        other => HttpResponse::InternalServerError().json(ErrorResponse::new(other.to_string())),
    }
}

pub async fn search(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> Result<HttpResponse> {
    if let Err(e) = req.validate() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::with_details(
            "Invalid request",
            format!("Validation error: {}", e),
        )));
    }

    let req = req.into_inner();
    let mut keywords = match (req.keywords, req.text) {
        (Some(keywords), _) => Keywords::from_working_set(keywords),
        (None, Some(text)) => extract_keywords(&text),
        (None, None) => {
            return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
                "Either text or keywords is required",
            )));
        }
    };
    for removed in &req.exclude {
        keywords.remove(&removed.trim().to_lowercase());
    }

    let outcome = state.search_service.search_keywords(keywords).await;

    match outcome {
        Ok(report) => Ok(HttpResponse::Ok().json(report)),
        Err(e @ SearchError::NoKeywords) => {
            Ok(HttpResponse::UnprocessableEntity().json(ErrorResponse::new(e.to_string())))
        }
    }
}

pub async fn latest_search(state: web::Data<AppState>) -> Result<HttpResponse> {
    match state.search_service.latest().await {
        Some(report) => Ok(HttpResponse::Ok().json(report)),
        None => Ok(HttpResponse::NotFound().json(ErrorResponse::new(
            "No search has been run yet",
        ))),
    }
}
