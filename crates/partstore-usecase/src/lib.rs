//! # Partstore Use Case Layer
//!
//! Application-specific business rules.
//! This layer orchestrates the flow of data between the domain and adapters.

pub mod error;
pub mod payload;
pub mod store_parts;

pub use partstore_domain;

pub use error::{Result, StorePartsError};
pub use payload::{LoaderId, LoaderPayload, PartPayload, StorePartsRequest};
pub use store_parts::{StorePartsOutcome, StorePartsUseCase};
