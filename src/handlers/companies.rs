use actix_web::{web, HttpResponse, Result};
use crate::services::registry;

/// GET /companies
pub async fn list_companies() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(registry::list_companies()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/companies", web::get().to(list_companies));
}
