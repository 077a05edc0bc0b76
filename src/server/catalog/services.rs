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
use crate::types::ServiceFields;

use super::store_image;

fn service_fields(form: &UploadForm) -> ServiceFields {
    ServiceFields {
        title_en: form.text("title_en"),
        title_ar: form.text("title_ar"),
        description_en: form.text("description_en"),
        description_ar: form.text("description_ar"),
    }
}

pub async fn list_services(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let services = state.store.list_services().api_err("Service")?;
    Ok(Json(services))
}

pub async fn get_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let service = state
        .store
        .get_service(id)
        .api_err("Service")?
        .or_not_found("Service not found")?;
    Ok(Json(service))
}

pub async fn create_service(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = parse_upload_form(&mut multipart).await?;
    require_title(&form)?;

    let image = store_image(&state, &form).await?;
    let service = state
        .store
        .create_service(&service_fields(&form), image.as_deref())
        .api_err("Service")?;

    Ok((StatusCode::CREATED, Json(service)))
}

pub async fn update_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let current = state
        .store
        .get_service(id)
        .api_err("Service")?
        .or_not_found("Service not found")?;

    let form = parse_upload_form(&mut multipart).await?;

    let image = match store_image(&state, &form).await? {
        Some(reference) => Some(reference),
        None => current.image,
    };

    let service = state
        .store
        .replace_service(id, &service_fields(&form), image.as_deref())
        .api_err("Service")?;

    Ok(Json(service))
}

pub async fn delete_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    state
        .store
        .get_service(id)
        .api_err("Service")?
        .or_not_found("Service not found")?;

    state.store.delete_service(id).api_err("Service")?;

    Ok(Json(json!({
        "success": true,
        "message": "Service deleted successfully"
    })))
}
