use actix_web::{HttpResponse, Responder, get, web};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
