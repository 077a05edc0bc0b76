//! # Sunbula
//!
//! A content-management backend for bilingual (English/Arabic) corporate
//! marketing sites, usable both as a standalone binary and as a library.
//!
//! The server owns a three-level catalog hierarchy (sections → categories →
//! products), a flat services list, a singleton company profile, image
//! uploads, and a contact-form mail relay.
//!
//! ## Library Usage
//!
//! ```rust,ignore
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use sunbula::media::MediaStore;
//! use sunbula::server::{AppState, LogMailer, create_router};
//! use sunbula::store::{SqliteStore, Store};
//!
//! let store = SqliteStore::new(&PathBuf::from("./data/sunbula.db")).unwrap();
//! store.initialize().unwrap();
//!
//! let media = MediaStore::new(&PathBuf::from("./data"), None);
//! let state = Arc::new(AppState {
//!     store: Arc::new(store),
//!     media,
//!     mailer: Arc::new(LogMailer),
//! });
//! let router = create_router(state);
//! // Serve with axum...
//! ```

pub mod config;
pub mod error;
pub mod media;
pub mod server;
pub mod store;
pub mod types;
