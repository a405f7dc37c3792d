use crate::error::ApiError;
use actix_web::{web, HttpRequest};

#[cfg(test)]
macro_rules! test_app {
    ($store:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($crate::app_state::AppState::new($store)))
                .configure($crate::controller::configure)
                .default_service(actix_web::web::to($crate::controller::not_found)),
        )
        .await
    };
}

pub mod companies;
pub mod invoices;

/// Registers both resources and routes extractor failures through `ApiError`
/// so they share the same error body as the handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(format!("Invalid request body: {err}")).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|_err, req| {
        ApiError::NotFound(format!("Not found: {}", req.path())).into()
    }))
    .service(
        web::scope("/companies")
            .route("", web::get().to(companies::list_companies))
            .route("", web::post().to(companies::create_company))
            .route("/{code}", web::get().to(companies::get_company))
            .route("/{code}", web::put().to(companies::update_company))
            .route("/{code}", web::delete().to(companies::delete_company)),
    )
    .service(
        web::scope("/invoices")
            .route("", web::get().to(invoices::list_invoices))
            .route("", web::post().to(invoices::create_invoice))
            .route("/{id}", web::get().to(invoices::get_invoice))
            .route("/{id}", web::put().to(invoices::update_invoice))
            .route("/{id}", web::delete().to(invoices::delete_invoice)),
    );
}

pub async fn not_found(req: HttpRequest) -> Result<&'static str, ApiError> {
    Err(ApiError::NotFound(format!("Not found: {}", req.path())))
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
