pub mod confidence;
pub mod health;
pub mod pages;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(health::config)
            .configure(confidence::config),
    );
    pages::config(cfg);
}
