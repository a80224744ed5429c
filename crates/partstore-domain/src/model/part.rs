//! Part - A component delivered by exactly one supplier

use serde::{Deserialize, Serialize};

use super::part_type::PartType;
use super::supplier::SupplierId;

/// Unique identifier for a Part, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(u64);

impl PartId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for PartId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Part record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    id: PartId,
    #[serde(rename = "type")]
    part_type: PartType,
    material: String,
    /// Foreign key into the supplier collection
    supplier_id: SupplierId,
}

impl Part {
    pub fn new(
        id: PartId,
        part_type: PartType,
        material: impl Into<String>,
        supplier_id: SupplierId,
    ) -> Self {
        Self {
            id,
            part_type,
            material: material.into(),
            supplier_id,
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> PartId {
        self.id
    }

    pub fn part_type(&self) -> PartType {
        self.part_type
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn supplier_id(&self) -> SupplierId {
        self.supplier_id
    }

    // ========== Mutation ==========

    /// Replace type and material together
    pub fn update(&mut self, part_type: PartType, material: impl Into<String>) {
        self.part_type = part_type;
        self.material = material.into();
    }

    pub fn is_supplied_by(&self, supplier_id: SupplierId) -> bool {
        self.supplier_id == supplier_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_update() {
        let mut part = Part::new(PartId::new(1), PartType::Door, "Steel", SupplierId::new(3));
        part.update(PartType::Window, "Oak");

        assert_eq!(part.part_type(), PartType::Window);
        assert_eq!(part.material(), "Oak");
        assert!(part.is_supplied_by(SupplierId::new(3)));
    }

    #[test]
    fn test_part_json_shape() {
        let part = Part::new(PartId::new(2), PartType::Wheel, "rubber", SupplierId::new(1));
        let json = serde_json::to_value(&part).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 2,
                "type": "wheel",
                "material": "rubber",
                "supplierId": 1
            })
        );
    }
}
