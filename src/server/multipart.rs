use axum::extract::Multipart;

use crate::server::response::ApiError;

pub const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

pub struct UploadedFile {
    pub data: Vec<u8>,
    pub original_name: String,
}

/// A parsed multipart form: entity text fields plus the optional `image`
/// file part.
#[derive(Default)]
pub struct UploadForm {
    fields: Vec<(String, String)>,
    pub image: Option<UploadedFile>,
}

impl UploadForm {
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.clone())
    }

    /// A text field counts as present only when non-empty, matching how the
    /// bilingual title requirement treats empty strings.
    pub fn text_non_empty(&self, name: &str) -> Option<String> {
        self.text(name).filter(|value| !value.is_empty())
    }
}

pub async fn parse_upload_form(multipart: &mut Multipart) -> Result<UploadForm, ApiError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read multipart: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "image" {
            let original_name = field
                .file_name()
                .unwrap_or("upload")
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("Failed to read image: {e}")))?;
            if data.len() > MAX_UPLOAD_SIZE {
                return Err(ApiError::payload_too_large(format!(
                    "Image size ({} bytes) exceeds maximum allowed size ({MAX_UPLOAD_SIZE} bytes)",
                    data.len()
                )));
            }
            form.image = Some(UploadedFile {
                data: data.to_vec(),
                original_name,
            });
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| ApiError::bad_request(format!("Failed to read field {name}: {e}")))?;
            form.fields.push((name, value));
        }
    }

    Ok(form)
}
