pub mod appointment;
pub mod health;
pub mod webhook;

use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::init)
        .service(web::scope("/api").configure(appointment::init))
        .service(web::scope("/webhook").configure(webhook::init));
}
