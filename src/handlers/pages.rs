//! 前端页面处理器
//!
//! 首页返回单页前端，/static 下提供 JS、CSS 等静态资源

use actix_files::{Files, NamedFile};
use actix_web::{web, Result};

pub async fn index() -> Result<NamedFile> {
    Ok(NamedFile::open_async("static/index.html").await?)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
    cfg.service(Files::new("/static", "static"));
}
