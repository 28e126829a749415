use actix_web::{
    App, HttpMessage,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::header::{self, HeaderName, HeaderValue},
    middleware::{Next, from_fn},
    web,
};

use tracing_actix_web::{RequestId, TracingLogger};

use actix_cors::Cors;

use utoipa::openapi::{OpenApi, Server};
use utoipa_actix_web::AppExt;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::api::error::ApiResult;
use crate::container::Container;
use crate::domain::error::{AppError, message};

use std::sync::Arc;

const SECURITY_HEADERS: [(HeaderName, &str); 4] = [
    (header::X_FRAME_OPTIONS, "SAMEORIGIN"),
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (
        header::CONTENT_SECURITY_POLICY,
        "default-src 'self'; object-src 'none'",
    ),
    (header::REFERRER_POLICY, "strict-origin-when-cross-origin"),
];

pub fn create(
    container: Arc<Container>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = actix_web::Error,
    >,
> {
    App::new()
        .into_utoipa_app()
        .openapi(docs())
        .configure(api::routes)
        .openapi_service(|api| {
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", api)
        })
        .into_app()
        .default_service(web::to(not_found))
        .wrap(TracingLogger::default())
        .wrap(cors())
        .wrap(from_fn(response_headers))
        .app_data(
            web::PathConfig::default().error_handler(|err, _| AppError::from(err).into()),
        )
        .app_data(web::Data::new(container.account_service.clone()))
}

fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(&[header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}

async fn not_found() -> ApiResult {
    Err(AppError::NotFound(message::NOT_FOUND))
}

async fn response_headers(
    req: ServiceRequest,
    svc: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let mut res = svc.call(req).await?;

    let request_id = res.request().extensions().get::<RequestId>().copied();

    let headers = res.headers_mut();

    for (name, value) in SECURITY_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }

    if let Some(request_id) = request_id {
        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
            headers.insert(HeaderName::from_static("x-request-id"), value);
        }
    }

    Ok(res)
}

pub fn docs() -> OpenApi {
    let mut openapi = OpenApi::default();

    openapi.info.title = String::from("Customer Accounts API");
    openapi.info.description = Some(String::from(
        "CRUD REST service managing customer accounts",
    ));
    openapi.info.version = String::from(env!("CARGO_PKG_VERSION"));

    openapi.servers = Some(servers());

    openapi
}

fn servers() -> Vec<Server> {
    vec![server("http://localhost:8080", "Localhost")]
}

fn server(url: &str, description: &str) -> Server {
    Server::builder()
        .description(Some(description.to_owned()))
        .url(url.to_owned())
        .build()
}

#[cfg(test)]
mod tests {
    use actix_web::{
        http::StatusCode,
        test::{self, TestRequest},
    };
    use serde_json::Value;

    use super::*;
    use crate::infrastructure::repositories::account::mock::AccountRepositoryImpl;

    fn container() -> Arc<Container> {
        Arc::new(Container::with_repository(Arc::new(
            AccountRepositoryImpl::default(),
        )))
    }

    #[actix_web::test]
    async fn test_security_headers() {
        let app = test::init_service(create(container())).await;

        let res = TestRequest::get().uri("/").send_request(&app).await;

        assert_eq!(res.status(), StatusCode::OK);

        for (name, value) in SECURITY_HEADERS {
            assert_eq!(res.headers().get(&name).unwrap(), value);
        }
        assert!(res.headers().contains_key("x-request-id"));
    }

    #[actix_web::test]
    async fn test_security_headers_on_errors() {
        let app = test::init_service(create(container())).await;

        let res = TestRequest::get()
            .uri("/accounts/0")
            .send_request(&app)
            .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            res.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );
    }

    #[actix_web::test]
    async fn test_cors_wildcard() {
        let app = test::init_service(create(container())).await;

        let res = TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://example.com"))
            .send_request(&app)
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }

    #[actix_web::test]
    async fn test_unknown_route() {
        let app = test::init_service(create(container())).await;

        let res = TestRequest::get().uri("/customers").send_request(&app).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["status"], 404);
        assert_eq!(body["error"], "Not Found");
    }

    #[actix_web::test]
    async fn test_non_integer_id() {
        let app = test::init_service(create(container())).await;

        let res = TestRequest::get()
            .uri("/accounts/abc")
            .send_request(&app)
            .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["status"], 404);
    }

    #[actix_web::test]
    async fn test_openapi_document() {
        let app = test::init_service(create(container())).await;

        let res = TestRequest::get()
            .uri("/api-docs/openapi.json")
            .send_request(&app)
            .await;

        assert_eq!(res.status(), StatusCode::OK);

        let doc: Value = test::read_body_json(res).await;
        assert!(doc["paths"]["/accounts"].get("post").is_some());
        assert!(doc["paths"]["/accounts/{id}"].get("put").is_some());
        assert!(doc["paths"]["/health"].get("get").is_some());
    }
}
