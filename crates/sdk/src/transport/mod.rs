//! Transport layer for the Signaturit SDK.

pub mod http;

pub use http::{HttpTransport, RawResponse, OK, OK_OR_CREATED};
