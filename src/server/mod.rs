pub mod auth;
pub mod catalog;
pub mod contact;
pub mod multipart;
pub mod response;
mod router;
pub mod validation;

pub use contact::{ContactMessage, LogMailer, Mailer};
pub use router::{AppState, create_router};
