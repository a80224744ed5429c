//! # Partstore Adapter Layer
//!
//! Implementations of the domain ports (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `repository/` - Storage implementations

pub mod repository;

pub use repository::in_memory::InMemoryStorePartsRepository;
