//! Supply Policy - Each supplier delivers exactly one part type
//!
//! Pure domain logic - no I/O, no async. The use case layer asks the
//! repository for the current parts and lets this decide.

use crate::model::part::Part;
use crate::model::part_type::PartType;
use crate::model::supplier::SupplierId;

/// Why a supply request breaks the one-type rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupplyViolation {
    /// The request itself carries more than one part type
    MixedTypes { first: PartType, other: PartType },
    /// The supplier already delivers a different part type
    ConflictsWithExisting {
        supplier_id: SupplierId,
        existing: PartType,
        requested: PartType,
    },
}

impl core::fmt::Display for SupplyViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SupplyViolation::MixedTypes { first, other } => {
                write!(f, "parts mix types '{}' and '{}'", first, other)
            }
            SupplyViolation::ConflictsWithExisting {
                supplier_id,
                existing,
                requested,
            } => write!(
                f,
                "supplier {} already supplies '{}', cannot supply '{}'",
                supplier_id, existing, requested
            ),
        }
    }
}

impl std::error::Error for SupplyViolation {}

/// The one-type-per-supplier rule
#[derive(Debug, Clone, Copy, Default)]
pub struct SupplyPolicy;

impl SupplyPolicy {
    pub fn new() -> Self {
        Self
    }

    /// The single part type of a request, `None` for an empty request
    pub fn single_type(
        &self,
        requested: impl IntoIterator<Item = PartType>,
    ) -> Result<Option<PartType>, SupplyViolation> {
        let mut requested = requested.into_iter();
        let Some(first) = requested.next() else {
            return Ok(None);
        };

        match requested.find(|t| *t != first) {
            Some(other) => Err(SupplyViolation::MixedTypes { first, other }),
            None => Ok(Some(first)),
        }
    }

    /// Check a request against what the supplier already delivers
    pub fn check_supplier(
        &self,
        supplier_id: SupplierId,
        existing: &[Part],
        requested: PartType,
    ) -> Result<(), SupplyViolation> {
        match existing
            .iter()
            .find(|p| p.is_supplied_by(supplier_id) && p.part_type() != requested)
        {
            Some(part) => Err(SupplyViolation::ConflictsWithExisting {
                supplier_id,
                existing: part.part_type(),
                requested,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::part::PartId;

    #[test]
    fn test_single_type_empty() {
        let policy = SupplyPolicy::new();
        assert_eq!(policy.single_type([]), Ok(None));
    }

    #[test]
    fn test_single_type_uniform() {
        let policy = SupplyPolicy::new();
        let result = policy.single_type([PartType::Wheel, PartType::Wheel]);
        assert_eq!(result, Ok(Some(PartType::Wheel)));
    }

    #[test]
    fn test_single_type_mixed() {
        let policy = SupplyPolicy::new();
        let result = policy.single_type([PartType::Door, PartType::Door, PartType::Window]);
        assert_eq!(
            result,
            Err(SupplyViolation::MixedTypes {
                first: PartType::Door,
                other: PartType::Window,
            })
        );
    }

    #[test]
    fn test_check_supplier_conflict() {
        let policy = SupplyPolicy::new();
        let supplier = SupplierId::new(1);
        let existing = vec![Part::new(PartId::new(1), PartType::Wheel, "rubber", supplier)];

        assert!(policy
            .check_supplier(supplier, &existing, PartType::Wheel)
            .is_ok());

        let err = policy
            .check_supplier(supplier, &existing, PartType::Door)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "supplier 1 already supplies 'wheel', cannot supply 'door'"
        );
    }

    #[test]
    fn test_check_supplier_ignores_other_suppliers() {
        let policy = SupplyPolicy::new();
        let existing = vec![Part::new(
            PartId::new(1),
            PartType::Wheel,
            "rubber",
            SupplierId::new(2),
        )];

        assert!(policy
            .check_supplier(SupplierId::new(1), &existing, PartType::Door)
            .is_ok());
    }
}
