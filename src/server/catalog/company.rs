use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    response::IntoResponse,
};

use crate::server::AppState;
use crate::server::response::{ApiError, StoreResultExt};
use crate::types::{Company, CompanyFields};

/// The company profile never 404s: an empty table surfaces the built-in
/// bilingual default instead.
pub async fn get_company(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let company = state
        .store
        .get_company()
        .api_err("Company")?
        .unwrap_or_else(Company::default_profile);
    Ok(Json(company))
}

pub async fn update_company(
    State(state): State<Arc<AppState>>,
    Json(fields): Json<CompanyFields>,
) -> Result<impl IntoResponse, ApiError> {
    let company = state.store.upsert_company(&fields).api_err("Company")?;
    Ok(Json(company))
}
