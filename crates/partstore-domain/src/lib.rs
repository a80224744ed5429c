//! # Partstore Domain Layer
//!
//! Suppliers, the parts they deliver, and the storage port the rest of the
//! workspace talks to.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Supplier, Part, PartType                      ││
//! │  │  repository/- StorePartsRepository (port, not an impl)      ││
//! │  │  service/   - SupplyPolicy (one part type per supplier)     ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    part::{Part, PartId},
    part_type::{PartType, UnknownPartType},
    supplier::{Supplier, SupplierId},
};

pub use repository::store_parts_repository::StorePartsRepository;

pub use service::supply_policy::{SupplyPolicy, SupplyViolation};
