//! Typed API endpoints.

pub mod contacts;
pub mod signatures;

pub use contacts::{ContactsApi, CreateContactRequest, UpdateContactRequest};
pub use signatures::{CancelSignatureRequest, CreateSignatureRequest, SignaturesApi};
