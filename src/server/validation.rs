use crate::server::multipart::UploadForm;
use crate::server::response::ApiError;

/// Path identifiers must parse as integers before any existence check runs;
/// callers depend on receiving the most specific applicable error.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid ID"))
}

/// At least one of the bilingual titles must be non-empty at creation.
pub fn require_title(form: &UploadForm) -> Result<(), ApiError> {
    if form.text_non_empty("title_en").is_none() && form.text_non_empty("title_ar").is_none() {
        return Err(ApiError::bad_request("Title is required"));
    }
    Ok(())
}

/// The parent-id field must be present at creation. Its existence against
/// the parent collection is deliberately not verified; a dangling reference
/// is accepted.
pub fn required_parent_id(
    form: &UploadForm,
    field: &str,
    message: &'static str,
) -> Result<i64, ApiError> {
    let raw = form
        .text_non_empty(field)
        .ok_or_else(|| ApiError::bad_request(message))?;
    raw.trim().parse().map_err(|_| ApiError::bad_request(message))
}

/// Replace semantics: an absent parent id overwrites with NULL.
pub fn optional_parent_id(
    form: &UploadForm,
    field: &str,
    message: &'static str,
) -> Result<Option<i64>, ApiError> {
    match form.text_non_empty(field) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ApiError::bad_request(message)),
    }
}
