use actix_web::{HttpResponse, get, web};

use utoipa_actix_web::service_config::ServiceConfig;

use crate::api::dto::index::{HealthDTO, ServiceInfoDTO};
use crate::api::error::method_not_allowed;

pub const SERVICE_NAME: &str = "Customer Accounts REST API Service";
pub const SERVICE_VERSION: &str = "1.0";

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(index)
        .service(health)
        .route("/", web::route().to(method_not_allowed))
        .route("/health", web::route().to(method_not_allowed));
}

#[utoipa::path(
    responses((status = 200, body = ServiceInfoDTO, description = "Service name and version")),
    tag = "Service",
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(ServiceInfoDTO {
        name: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
    })
}

#[utoipa::path(
    responses((status = 200, body = HealthDTO, description = "Service is up")),
    tag = "Service",
)]
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthDTO {
        status: "OK".to_string(),
    })
}
