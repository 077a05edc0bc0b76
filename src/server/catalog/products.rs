use std::sync::Arc;

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::server::AppState;
use crate::server::multipart::{UploadForm, parse_upload_form};
use crate::server::response::{ApiError, StoreOptionExt, StoreResultExt};
use crate::server::validation::{optional_parent_id, parse_id, require_title, required_parent_id};
use crate::types::ProductFields;

use super::store_image;

fn product_fields(form: &UploadForm, category_id: Option<i64>) -> ProductFields {
    ProductFields {
        title_en: form.text("title_en"),
        title_ar: form.text("title_ar"),
        category_id,
    }
}

pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let products = state.store.list_products().api_err("Product")?;
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let product = state
        .store
        .get_product(id)
        .api_err("Product")?
        .or_not_found("Product not found")?;
    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = parse_upload_form(&mut multipart).await?;
    require_title(&form)?;
    let category_id = required_parent_id(&form, "category_id", "Category ID is required")?;

    let image = store_image(&state, &form).await?;
    let product = state
        .store
        .create_product(&product_fields(&form, Some(category_id)), image.as_deref())
        .api_err("Product")?;

    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let current = state
        .store
        .get_product(id)
        .api_err("Product")?
        .or_not_found("Product not found")?;

    let form = parse_upload_form(&mut multipart).await?;
    let category_id = optional_parent_id(&form, "category_id", "Category ID is required")?;

    let image = match store_image(&state, &form).await? {
        Some(reference) => Some(reference),
        None => current.image,
    };

    let product = state
        .store
        .replace_product(id, &product_fields(&form, category_id), image.as_deref())
        .api_err("Product")?;

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    state
        .store
        .get_product(id)
        .api_err("Product")?
        .or_not_found("Product not found")?;

    state.store.delete_product(id).api_err("Product")?;

    Ok(Json(json!({
        "success": true,
        "message": "Product deleted successfully"
    })))
}
