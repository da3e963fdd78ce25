//! CORS middleware configuration for cross-origin requests.
//!
//! Origins come from `CORS_ORIGIN`. A `*` entry allows every origin, in
//! which case credentials are not supported.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use lp_shared::CorsConfig;

pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_TYPE,
        ])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        log::info!("CORS: allowing any origin");
        return cors.allow_any_origin();
    }

    config
        .allowed_origins
        .iter()
        .fold(cors.supports_credentials(), |cors, origin| {
            log::info!("CORS: adding allowed origin {}", origin);
            cors.allowed_origin(origin)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::HeaderValue;
    use actix_web::http::StatusCode;
    use actix_web::test::{call_service, init_service, TestRequest};
    use actix_web::{web, App, HttpResponse};

    fn config(origins: &[&str]) -> CorsConfig {
        CorsConfig {
            allowed_origins: origins.iter().map(|o| o.to_string()).collect(),
            max_age: 600,
        }
    }

    /// Status and allow-origin header of a preflight for `GET /users`
    async fn preflight(config: &CorsConfig, origin: &str) -> (StatusCode, Option<HeaderValue>) {
        let app = init_service(
            App::new()
                .wrap(create_cors(config))
                .route("/users", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/users")
            .insert_header((header::ORIGIN, origin))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
            .to_request();
        let response = call_service(&app, req).await;

        (
            response.status(),
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).cloned(),
        )
    }

    #[actix_web::test]
    async fn test_allowed_origin_preflight() {
        let config = config(&["http://localhost:3001"]);
        let (status, allow_origin) = preflight(&config, "http://localhost:3001").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(allow_origin.unwrap(), "http://localhost:3001");
    }

    #[actix_web::test]
    async fn test_wildcard_origin() {
        let config = config(&["*"]);
        let (status, allow_origin) = preflight(&config, "http://anywhere.test").await;

        assert_eq!(status, StatusCode::OK);
        assert!(allow_origin.is_some());
    }
}
