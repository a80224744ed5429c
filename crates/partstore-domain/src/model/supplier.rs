//! Supplier - The entity that delivers parts
//!
//! Supplier is an Entity with a store-assigned numeric id.

use serde::{Deserialize, Serialize};

/// Unique identifier for a Supplier, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(u64);

impl SupplierId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for SupplierId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Supplier record
///
/// Equality compares every field: rollback is checked by comparing
/// collections by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    id: SupplierId,
    name: String,
}

impl Supplier {
    pub fn new(id: SupplierId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> SupplierId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplier_rename() {
        let mut supplier = Supplier::new(SupplierId::new(1), "Supplier A");
        supplier.rename("Supplier B");

        assert_eq!(supplier.id().get(), 1);
        assert_eq!(supplier.name(), "Supplier B");
    }

    #[test]
    fn test_supplier_json_shape() {
        let supplier = Supplier::new(SupplierId::new(7), "Acme");
        let json = serde_json::to_value(&supplier).unwrap();

        assert_eq!(json, serde_json::json!({ "id": 7, "name": "Acme" }));
    }
}
