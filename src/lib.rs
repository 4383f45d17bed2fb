use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware, web, App,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod api;
pub mod config;
pub mod openapi;
pub mod routes;

use api::uploads;
use openapi::ApiDoc;

/// Registers every route the service exposes. The 404 fallback is attached
/// by [`build_app`] through `App::default_service`.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .service(
        web::scope("/api")
            .wrap(middleware::NormalizePath::trim())
            .configure(uploads::init_routes),
    );
}

/// The application exactly as the server runs it, middleware included.
pub fn build_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(middleware::Compress::default())
        // Log each incoming request with status, time, and size
        .wrap(middleware::Logger::new("%a \"%r\" %s %b %T"))
        .configure(configure_app)
        .default_service(web::route().to(routes::not_found))
}
