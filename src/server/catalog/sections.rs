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
use crate::server::validation::{parse_id, require_title};
use crate::types::SectionFields;

use super::store_image;

fn section_fields(form: &UploadForm) -> SectionFields {
    SectionFields {
        title_en: form.text("title_en"),
        title_ar: form.text("title_ar"),
        description_en: form.text("description_en"),
        description_ar: form.text("description_ar"),
    }
}

pub async fn list_sections(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let sections = state.store.list_sections().api_err("Section")?;
    Ok(Json(sections))
}

pub async fn get_section(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let section = state
        .store
        .get_section(id)
        .api_err("Section")?
        .or_not_found("Section not found")?;
    Ok(Json(section))
}

pub async fn create_section(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = parse_upload_form(&mut multipart).await?;
    require_title(&form)?;

    let image = store_image(&state, &form).await?;
    let section = state
        .store
        .create_section(&section_fields(&form), image.as_deref())
        .api_err("Section")?;

    Ok((StatusCode::CREATED, Json(section)))
}

pub async fn update_section(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let current = state
        .store
        .get_section(id)
        .api_err("Section")?
        .or_not_found("Section not found")?;

    let form = parse_upload_form(&mut multipart).await?;

    // Full replace, except image: the prior reference is carried over when
    // no new upload arrived.
    let image = match store_image(&state, &form).await? {
        Some(reference) => Some(reference),
        None => current.image,
    };

    let section = state
        .store
        .replace_section(id, &section_fields(&form), image.as_deref())
        .api_err("Section")?;

    Ok(Json(section))
}

pub async fn delete_section(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    state
        .store
        .get_section(id)
        .api_err("Section")?
        .or_not_found("Section not found")?;

    // No cascade: categories referencing this section stay behind.
    state.store.delete_section(id).api_err("Section")?;

    Ok(Json(json!({
        "success": true,
        "message": "Section deleted successfully"
    })))
}
