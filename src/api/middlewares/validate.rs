use crate::api::dto::validation::FromPayload;
use crate::domain::error::AppError;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::{JsonBody, Payload};
use actix_web::http::header;
use futures::future::{FutureExt, LocalBoxFuture, ready};
use serde_json::Value;

/// JSON body extractor: requires `Content-Type: application/json` (415),
/// a well-formed JSON document (400) and a body accepted by
/// [`FromPayload::deserialize`] (400).
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for Json<T>
where
    T: FromPayload + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    #[inline]
    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if !is_json(req) {
            tracing::error!(
                content_type = ?req.headers().get(header::CONTENT_TYPE),
                "Invalid Content-Type"
            );
            return ready(Err(AppError::UnsupportedMediaType())).boxed_local();
        }

        JsonBody::new(
            req,
            payload,
            Some(&|mime| mime == mime::APPLICATION_JSON),
            true,
        )
        .limit(32768)
        .map(|res: Result<Value, _>| match res {
            Ok(data) => T::deserialize(data).map(Json).map_err(AppError::from),
            Err(err) => Err(AppError::from(err)),
        })
        .boxed_local()
    }
}

fn is_json(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == mime::APPLICATION_JSON.essence_str())
}
