//! Store Parts Repository - Suppliers, their parts, and transaction control
//!
//! A missing id is a normal outcome here: lookups return `Option`,
//! updates and deletes return `bool`. Errors are reserved for transaction
//! contract violations and a reset that gave up waiting.

use async_trait::async_trait;
use shared::Result;

use crate::model::part::{Part, PartId};
use crate::model::part_type::PartType;
use crate::model::supplier::{Supplier, SupplierId};

/// Store Parts Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// At most one transaction is open at a time. Mutations made inside a
/// transaction go to the live collections; rollback restores the snapshot
/// taken by `begin_transaction`.
#[async_trait]
pub trait StorePartsRepository: Send + Sync {
    // ========== Suppliers ==========

    /// Insert a supplier under the next supplier id
    async fn insert_supplier(&self, name: &str) -> Supplier;

    /// Find a supplier by id
    async fn get_supplier_by_id(&self, id: SupplierId) -> Option<Supplier>;

    /// All suppliers in insertion order
    async fn list_suppliers(&self) -> Vec<Supplier>;

    /// Rename a supplier. Returns false if it does not exist.
    async fn update_supplier(&self, id: SupplierId, new_name: &str) -> bool;

    /// Delete a supplier and every part it supplies.
    /// Returns false if it does not exist.
    async fn delete_supplier(&self, id: SupplierId) -> bool;

    /// Check if a supplier exists
    async fn supplier_exists(&self, id: SupplierId) -> bool {
        self.get_supplier_by_id(id).await.is_some()
    }

    // ========== Parts ==========

    /// Insert a part for an existing supplier.
    /// Returns `None`, and allocates no id, if the supplier is unknown.
    async fn insert_part(
        &self,
        part_type: PartType,
        material: &str,
        supplier_id: SupplierId,
    ) -> Option<Part>;

    /// Parts of one supplier in insertion order
    async fn get_parts_by_supplier_id(&self, supplier_id: SupplierId) -> Vec<Part>;

    /// All parts in insertion order
    async fn list_parts(&self) -> Vec<Part>;

    /// Replace type and material of a part. Returns false if it does not exist.
    async fn update_part(&self, id: PartId, new_type: PartType, new_material: &str) -> bool;

    /// Delete a part. Returns false if it does not exist.
    async fn delete_part(&self, id: PartId) -> bool;

    // ========== Transactions ==========

    /// Snapshot both collections and open a transaction
    async fn begin_transaction(&self) -> Result<()>;

    /// Keep the live state and drop the snapshot
    async fn commit_transaction(&self) -> Result<()>;

    /// Restore the live state from the snapshot
    async fn rollback_transaction(&self) -> Result<()>;

    /// Check if a transaction is open
    async fn is_transaction_active(&self) -> bool;

    /// Suppliers captured by the open transaction, empty if none is open
    async fn suppliers_snapshot(&self) -> Vec<Supplier>;

    // ========== Storage ==========

    /// Wait for the open transaction to finish, then clear everything
    /// and restart both id counters.
    async fn reset_store(&self) -> Result<()>;
}
