//! Errors raised while storing a loader's parts

use partstore_domain::{SupplierId, SupplyViolation};
use shared::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorePartsError {
    #[error("Request carries no parts")]
    EmptyParts,

    #[error("Supply policy violated: {0}")]
    Policy(#[from] SupplyViolation),

    #[error("Supplier {supplier_id} disappeared while its parts were being stored")]
    SupplierVanished { supplier_id: SupplierId },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorePartsError>;
