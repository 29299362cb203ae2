use actix_web::{HttpResponse, Responder, post, web};

use crate::handlers::webhook::flush_cache;
use crate::state::AppState;

// payload is not inspected; the provider is a trusted caller
#[post("/acuity")]
async fn acuity(state: web::Data<AppState>) -> impl Responder {
    flush_cache(&state);
    HttpResponse::Ok().body("ok")
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(acuity);
}
