use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;

use crate::error::Result;
use crate::server::AppState;

#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub full_name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub message: String,
}

/// Mail delivery is an external collaborator with a narrow interface; the
/// core only hands over the structured contact fields.
pub trait Mailer: Send + Sync {
    fn send_contact(&self, message: &ContactMessage) -> Result<()>;
}

/// Default mailer that records the submission in the server log instead of
/// relaying it, for deployments without an SMTP relay configured.
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send_contact(&self, message: &ContactMessage) -> Result<()> {
        tracing::info!(
            "contact form submission from {} <{}>: {}",
            message.full_name,
            message.email,
            message.message
        );
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ContactRequest>,
) -> impl IntoResponse {
    let (Some(full_name), Some(email), Some(message)) = (
        req.full_name.filter(|v| !v.is_empty()),
        req.email.filter(|v| !v.is_empty()),
        req.message.filter(|v| !v.is_empty()),
    ) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "Full name, email, and message are required"
            })),
        );
    };

    let contact = ContactMessage {
        full_name,
        email,
        company: req.company,
        phone: req.phone,
        message,
    };

    match state.mailer.send_contact(&contact) {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Thank you for your message. We will get back to you soon!"
            })),
        ),
        Err(e) => {
            tracing::error!("failed to send contact email: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": "Sorry, there was an error sending your message. Please try again later."
                })),
            )
        }
    }
}
