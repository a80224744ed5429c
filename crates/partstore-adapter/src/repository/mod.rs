//! Storage Adapters - Repository implementations
//!
//! These implement the repository traits from partstore-domain.

pub mod in_memory;
