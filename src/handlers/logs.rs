use actix_web::{web, HttpResponse};
use log::{debug, info};
use crate::errors::AppError;
use crate::models::entry::EntryPayload;
use crate::store::LogStore;

// POST /logs/
pub async fn create_log(
    store: web::Data<LogStore>,
    payload: web::Json<EntryPayload>,
) -> Result<HttpResponse, AppError> {
    if let Some(id) = payload.id {
        debug!("Ignoring caller-supplied id {}", id);
    }
    let entry = store.create(payload.into_inner());
    info!("Created log {} ({})", entry.id, entry.activity);

    Ok(HttpResponse::Ok().json(entry))
}

// GET /logs/
pub async fn get_all_logs(store: web::Data<LogStore>) -> Result<HttpResponse, AppError> {
    let entries = store.list();
    debug!("Listing {} logs", entries.len());

    Ok(HttpResponse::Ok().json(entries))
}

// GET /logs/{log_id}
pub async fn get_log(
    store: web::Data<LogStore>,
    log_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let entry = store.get(log_id.into_inner())?;

    Ok(HttpResponse::Ok().json(entry))
}

// PUT /logs/{log_id}
pub async fn update_log(
    store: web::Data<LogStore>,
    log_id: web::Path<i64>,
    payload: web::Json<EntryPayload>,
) -> Result<HttpResponse, AppError> {
    let entry = store.update(log_id.into_inner(), payload.into_inner())?;
    info!("Updated log {}", entry.id);

    Ok(HttpResponse::Ok().json(entry))
}

// DELETE /logs/{log_id}
pub async fn delete_log(
    store: web::Data<LogStore>,
    log_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let log_id = log_id.into_inner();
    store.delete(log_id)?;
    info!("Deleted log {}", log_id);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Log {} deleted successfully", log_id)
    })))
}
