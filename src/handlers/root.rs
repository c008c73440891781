use actix_web::HttpResponse;

pub const APP_NAME: &str = "Fitness Log API";

// GET /
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Welcome to the {}", APP_NAME),
        "name": APP_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
