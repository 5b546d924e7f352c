// Core types for the Signaturit tool server

pub mod types;

pub use types::*;
