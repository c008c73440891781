use actix_cors::Cors;
use actix_web::web;
use log::warn;
use crate::errors::AppError;
use crate::handlers;

/// Cross-origin requests are allowed from any origin, with any method and header.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
}

// Collection routes answer with and without the trailing slash.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected request body: {}", err);
        AppError::UnprocessableEntity(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        warn!("Rejected path parameter: {}", err);
        AppError::UnprocessableEntity(err.to_string()).into()
    }))
    .service(web::resource("/").route(web::get().to(handlers::root::root)))
    .service(
        web::resource(vec!["/logs/", "/logs"])
            .route(web::get().to(handlers::logs::get_all_logs))
            .route(web::post().to(handlers::logs::create_log)),
    )
    .service(
        web::resource("/logs/{log_id}")
            .route(web::get().to(handlers::logs::get_log))
            .route(web::put().to(handlers::logs::update_log))
            .route(web::delete().to(handlers::logs::delete_log)),
    )
    .service(web::resource(vec!["/progress/", "/progress"]).route(web::get().to(handlers::insight::get_progress)))
    .service(web::resource(vec!["/suggest/", "/suggest"]).route(web::get().to(handlers::insight::suggest_activity)));
}
