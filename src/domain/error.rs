use actix_web::{
    HttpResponse, ResponseError,
    http::{StatusCode, header::ContentType},
    web::Json,
};

use actix_web::error::{JsonPayloadError, PathError};

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::repositories::repository::RepositoryError;

pub type AppResult<T> = core::result::Result<T, AppError>;

macro_rules! static_error {
    ($name:ident, $status:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name(message: impl ToString) -> AppError {
            AppError {
                status: $status.as_u16(),
                error: reason($status),
                message: message.to_string(),
                trace: None,
            }
        }
    };

    ($name:ident, $status:expr, $default:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name() -> AppError {
            AppError {
                status: $status.as_u16(),
                error: reason($status),
                message: $default.to_string(),
                trace: None,
            }
        }
    };
}

/// Error body returned by every failing endpoint: `{status, error, message}`.
#[derive(Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct AppError {
    pub status: u16,
    pub error: String,
    pub message: String,
    #[serde(skip)]
    pub trace: Option<String>,
}

#[rustfmt::skip]
pub mod message {
    pub static NOT_FOUND: &str = "The server cannot find the requested resource";
    pub static METHOD_NOT_ALLOWED: &str = "The method is not allowed for the requested URL";
    pub static UNSUPPORTED_MEDIA_TYPE: &str = "Content-Type must be application/json";
    pub static BAD_REQUEST: &str = "The server would not process the request due to something the server considered to be a client error";
    pub static INTERNAL_ERROR: &str = "The server encountered an unexpected condition that prevented it from fulfilling the request";
}

fn reason(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("Unknown").to_string()
}

#[rustfmt::skip]
impl AppError {
    // 1. Errors with Custom Message
    static_error!(BadRequest, StatusCode::BAD_REQUEST);
    static_error!(NotFound, StatusCode::NOT_FOUND);

    // 2. Errors with Default Message
    static_error!(MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED, message::METHOD_NOT_ALLOWED);
    static_error!(UnsupportedMediaType, StatusCode::UNSUPPORTED_MEDIA_TYPE, message::UNSUPPORTED_MEDIA_TYPE);
    static_error!(InternalError, StatusCode::INTERNAL_SERVER_ERROR, message::INTERNAL_ERROR);

    pub fn trace(self, message: &str) -> AppError {
        AppError {
            trace: Some(message.to_owned()),
            ..self
        }
    }

    pub fn example_400() -> AppError {
        AppError::BadRequest(message::BAD_REQUEST)
    }

    pub fn example_404() -> AppError {
        AppError::NotFound(message::NOT_FOUND)
    }

    pub fn example_415() -> AppError {
        AppError::UnsupportedMediaType()
    }

    pub fn example_500() -> AppError {
        AppError::InternalError()
    }
}

impl std::error::Error for AppError {}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {}: {}", self.status, self.message)
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match (&self.trace, self.status_code().is_server_error()) {
            (Some(trace), true) => tracing::error!(status = self.status, trace = %trace, "{}", self.error),
            (_, true) => tracing::error!(status = self.status, "{}", self.message),
            _ => tracing::warn!(status = self.status, "{}: {}", self.error, self.message),
        }

        HttpResponse::build(self.status_code())
            .content_type(ContentType::json())
            .json(Json(self))
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<RepositoryError> for AppError {
    fn from(error: RepositoryError) -> Self {
        AppError::InternalError().trace(&error.to_string())
    }
}

impl From<JsonPayloadError> for AppError {
    fn from(error: JsonPayloadError) -> Self {
        AppError::BadRequest(error.to_string())
    }
}

impl From<PathError> for AppError {
    fn from(error: PathError) -> Self {
        AppError::NotFound(error.to_string())
    }
}
