//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define WHAT the domain needs from storage,
//! but NOT how it's actually done. That's the adapter's job.
//!
//! ```text
//! Domain Layer              │  Adapter Layer
//! ──────────────────────────┼────────────────────────────────
//! trait StorePartsRepository│  InMemoryStorePartsRepository
//!   fn insert_supplier()    │
//!   fn begin_transaction()  │
//! ```

pub mod store_parts_repository;
