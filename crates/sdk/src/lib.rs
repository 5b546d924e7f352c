//! # Signaturit SDK
//!
//! Thin async client for the Signaturit v3 REST API, covering contacts and
//! signature requests.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use signaturit_sdk::{SignaturitClient, SignaturitResult};
//!
//! #[tokio::main]
//! async fn main() -> SignaturitResult<()> {
//!     let client = SignaturitClient::builder()
//!         .api_key("your-secret-token")
//!         .sandbox(true)
//!         .build()?;
//!
//!     let contacts = client.contacts().list().await?;
//!     println!("Found {} contacts", contacts.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! Every call performs exactly one HTTP exchange. Responses outside the
//! accepted status set surface as [`SignaturitError::Upstream`] with the raw
//! body preserved.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

// Re-export main client
pub use client::{SignaturitClient, SignaturitClientBuilder};
pub use config::{ClientConfig, Environment};
pub use error::{SignaturitError, SignaturitResult};
pub use transport::{HttpTransport, RawResponse};

// Re-export core types for convenience
pub use signaturit_core::types::{
    Contact, ContactId, DeliveryType, Document, DocumentEvent, DocumentFile, Recipient,
    SignatureId, SignatureRequest, SigningMode,
};
