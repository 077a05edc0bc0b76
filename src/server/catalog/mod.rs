mod categories;
mod company;
mod products;
mod sections;
mod services;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::server::AppState;
use crate::server::multipart::UploadForm;
use crate::server::response::ApiError;

pub fn catalog_router() -> Router<Arc<AppState>> {
    Router::new()
        // Sections
        .route("/sections", get(sections::list_sections))
        .route("/sections", post(sections::create_section))
        .route("/sections/{id}", get(sections::get_section))
        .route("/sections/{id}", put(sections::update_section))
        .route("/sections/{id}", delete(sections::delete_section))
        // Categories
        .route("/categories", get(categories::list_categories))
        .route("/categories", post(categories::create_category))
        .route("/categories/{id}", get(categories::get_category))
        .route("/categories/{id}", put(categories::update_category))
        .route("/categories/{id}", delete(categories::delete_category))
        // Products
        .route("/products", get(products::list_products))
        .route("/products", post(products::create_product))
        .route("/products/{id}", get(products::get_product))
        .route("/products/{id}", put(products::update_product))
        .route("/products/{id}", delete(products::delete_product))
        // Services
        .route("/services", get(services::list_services))
        .route("/services", post(services::create_service))
        .route("/services/{id}", get(services::get_service))
        .route("/services/{id}", put(services::update_service))
        .route("/services/{id}", delete(services::delete_service))
        // Company profile (singleton)
        .route("/company", get(company::get_company))
        .route("/company", put(company::update_company))
}

/// Persists the form's image part, when one arrived, and returns its
/// reference. A storage fault after this point leaves the file orphaned;
/// that is accepted, not compensated.
pub(crate) async fn store_image(
    state: &AppState,
    form: &UploadForm,
) -> Result<Option<String>, ApiError> {
    let Some(file) = &form.image else {
        return Ok(None);
    };

    let reference = state
        .media
        .store(&file.data, &file.original_name)
        .await
        .map_err(|e| {
            tracing::error!("failed to store upload: {e}");
            ApiError::internal("Server error")
        })?;

    Ok(Some(reference))
}
