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
use crate::types::CategoryFields;

use super::store_image;

fn category_fields(form: &UploadForm, section_id: Option<i64>) -> CategoryFields {
    CategoryFields {
        title_en: form.text("title_en"),
        title_ar: form.text("title_ar"),
        description_en: form.text("description_en"),
        description_ar: form.text("description_ar"),
        section_id,
    }
}

pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = state.store.list_categories().api_err("Category")?;
    Ok(Json(categories))
}

pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let category = state
        .store
        .get_category(id)
        .api_err("Category")?
        .or_not_found("Category not found")?;
    Ok(Json(category))
}

pub async fn create_category(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = parse_upload_form(&mut multipart).await?;
    require_title(&form)?;
    // Presence only; the section's existence is not verified (dangling
    // references are accepted).
    let section_id = required_parent_id(&form, "section_id", "Section ID is required")?;

    let image = store_image(&state, &form).await?;
    let category = state
        .store
        .create_category(&category_fields(&form, Some(section_id)), image.as_deref())
        .api_err("Category")?;

    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let current = state
        .store
        .get_category(id)
        .api_err("Category")?
        .or_not_found("Category not found")?;

    let form = parse_upload_form(&mut multipart).await?;
    let section_id = optional_parent_id(&form, "section_id", "Section ID is required")?;

    let image = match store_image(&state, &form).await? {
        Some(reference) => Some(reference),
        None => current.image,
    };

    let category = state
        .store
        .replace_category(id, &category_fields(&form, section_id), image.as_deref())
        .api_err("Category")?;

    Ok(Json(category))
}

pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    state
        .store
        .get_category(id)
        .api_err("Category")?
        .or_not_found("Category not found")?;

    state.store.delete_category(id).api_err("Category")?;

    Ok(Json(json!({
        "success": true,
        "message": "Category deleted successfully"
    })))
}
