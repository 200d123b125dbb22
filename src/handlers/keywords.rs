use actix_web::{web, HttpResponse, Result};
use validator::Validate;

use crate::models::{ErrorResponse, ExtractRequest, KeywordsResponse};
use crate::utils::extract_keywords;

/// Extraction only. Lets a client show the working set before searching.
pub async fn extract(req: web::Json<ExtractRequest>) -> Result<HttpResponse> {
    if let Err(e) = req.validate() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::with_details(
            "Invalid request",
            format!("Validation error: {}", e),
        )));
    }

    let keywords = extract_keywords(&req.text);
    Ok(HttpResponse::Ok().json(KeywordsResponse {
        keywords: keywords.into_vec(),
    }))
}
