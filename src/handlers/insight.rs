use actix_web::{web, HttpResponse};
use log::debug;
use crate::errors::AppError;
use crate::models::insight::SuggestionResponse;
use crate::store::LogStore;

// GET /progress/
pub async fn get_progress(store: web::Data<LogStore>) -> Result<HttpResponse, AppError> {
    let summary = store.progress();
    debug!("Progress: {:?}", summary);

    Ok(HttpResponse::Ok().json(summary))
}

// GET /suggest/
pub async fn suggest_activity(store: web::Data<LogStore>) -> Result<HttpResponse, AppError> {
    let suggestion = store.suggest();
    debug!("Suggestion: {:?}", suggestion);

    Ok(HttpResponse::Ok().json(SuggestionResponse::from(suggestion)))
}
