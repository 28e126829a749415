use actix_web::HttpResponse;

use crate::domain::error::{AppError, AppResult};

pub type ApiResult = AppResult<HttpResponse>;

/// Fallback for any verb a path does not define.
pub async fn method_not_allowed() -> ApiResult {
    Err(AppError::MethodNotAllowed())
}
