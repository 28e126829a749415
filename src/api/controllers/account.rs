use std::sync::Arc;

use crate::api::error::{ApiResult, method_not_allowed};
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::services::account::AccountService;

use crate::api::dto::account::{AccountDTO, AccountPayloadDTO};

use actix_web::{
    HttpResponse, delete, get, post, put,
    web::{self, Data as State, Path},
};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(create_account)
        .service(list_accounts)
        .service(get_account)
        .service(update_account)
        .service(delete_account)
        .route("/accounts", web::route().to(method_not_allowed))
        .route("/accounts/{id}", web::route().to(method_not_allowed));
}

#[utoipa::path(
    responses(
        (status = 201, body = AccountDTO, description = "Account Created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 415, body = AppError, example = json!(AppError::example_415())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body(content = AccountPayloadDTO, content_type = "application/json"),
    tag = "Account",
)]
#[post("/accounts")]
pub async fn create_account(
    payload: Json<AccountPayloadDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    tracing::info!("Request to create an Account");

    let account = account_service.create(payload.into_inner().into()).await?;

    tracing::info!(id = account.id, "Account created");

    Ok(HttpResponse::Created().json(AccountDTO::from(account)))
}

#[utoipa::path(
    responses(
        (status = 200, body = Vec<AccountDTO>),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
)]
#[get("/accounts")]
pub async fn list_accounts(account_service: State<Arc<dyn AccountService>>) -> ApiResult {
    tracing::info!("Request to list Accounts");

    let accounts: Vec<AccountDTO> = account_service
        .list()
        .await?
        .into_iter()
        .map(AccountDTO::from)
        .collect();

    tracing::info!(count = accounts.len(), "Returning accounts");

    Ok(HttpResponse::Ok().json(accounts))
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, body = AccountDTO),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
)]
#[get("/accounts/{id}")]
pub async fn get_account(
    id: Path<i64>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let id = id.into_inner();

    tracing::info!(id, "Request to read an Account");

    let account = account_service.find(id).await?;

    Ok(HttpResponse::Ok().json(AccountDTO::from(account)))
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, body = AccountDTO, description = "Account Updated"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 415, body = AppError, example = json!(AppError::example_415())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body(content = AccountPayloadDTO, content_type = "application/json"),
    tag = "Account",
)]
#[put("/accounts/{id}")]
pub async fn update_account(
    id: Path<i64>,
    payload: Result<Json<AccountPayloadDTO>, AppError>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let id = id.into_inner();

    tracing::info!(id, "Request to update an Account");

    // an unknown id is reported before any problem with the body
    let account = account_service.find(id).await?;

    let updated = account_service
        .update(account, payload?.into_inner().into())
        .await?;

    tracing::info!(id, "Account updated");

    Ok(HttpResponse::Ok().json(AccountDTO::from(updated)))
}

#[utoipa::path(
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 204, description = "Account deleted, or never existed"),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
)]
#[delete("/accounts/{id}")]
pub async fn delete_account(
    id: Path<i64>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let id = id.into_inner();

    tracing::info!(id, "Request to delete an Account");

    account_service.delete(id).await?;

    Ok(HttpResponse::NoContent().finish())
}
