//! Store Parts - Record a loader and the parts it delivers
//!
//! The whole request is written inside one store transaction. Anything that
//! goes wrong after `begin_transaction` is rolled back, so a rejected request
//! leaves the store as it found it.

use std::collections::HashMap;
use std::sync::Arc;

use partstore_domain::{
    Part, PartType, StorePartsRepository, Supplier, SupplierId, SupplyPolicy,
};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::{Result, StorePartsError};
use crate::payload::{LoaderPayload, StorePartsRequest};

/// What a successful request stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorePartsOutcome {
    pub supplier: Supplier,
    pub parts: Vec<Part>,
}

/// Store Parts Use Case
///
/// The store allows one transaction at a time, so requests through the
/// same use case are queued behind `loaders`, which also remembers the
/// supplier registered for each loader id.
pub struct StorePartsUseCase<R: ?Sized> {
    repository: Arc<R>,
    policy: SupplyPolicy,
    loaders: Mutex<HashMap<String, SupplierId>>,
}

impl<R> StorePartsUseCase<R>
where
    R: StorePartsRepository + ?Sized,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            policy: SupplyPolicy::new(),
            loaders: Mutex::new(HashMap::new()),
        }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Parse a JSON request and execute it
    pub async fn execute_json(&self, json: &str) -> Result<StorePartsOutcome> {
        let request = StorePartsRequest::from_json(json)?;
        self.execute(&request).await
    }

    /// Store the loader and its parts, enforcing one part type per supplier
    pub async fn execute(&self, request: &StorePartsRequest) -> Result<StorePartsOutcome> {
        let part_type = self
            .policy
            .single_type(request.parts.iter().map(|p| p.part_type()))?
            .ok_or(StorePartsError::EmptyParts)?;

        let mut loaders = self.loaders.lock().await;
        self.repository.begin_transaction().await?;

        match self.apply(&mut loaders, request, part_type).await {
            Ok(outcome) => {
                self.repository.commit_transaction().await?;
                loaders.insert(request.loader.loader_id.key(), outcome.supplier.id());
                info!(
                    supplier_id = %outcome.supplier.id(),
                    parts = outcome.parts.len(),
                    %part_type,
                    "Stored parts"
                );
                Ok(outcome)
            }
            Err(err) => {
                warn!(error = %err, loader = %request.loader.loader_name, "Store parts rejected");
                if let Err(rollback_err) = self.repository.rollback_transaction().await {
                    warn!(error = %rollback_err, "Rollback of rejected request failed");
                }
                Err(err)
            }
        }
    }

    async fn apply(
        &self,
        loaders: &mut HashMap<String, SupplierId>,
        request: &StorePartsRequest,
        part_type: PartType,
    ) -> Result<StorePartsOutcome> {
        let supplier = self.resolve_supplier(loaders, &request.loader).await;
        let supplier_id = supplier.id();

        let existing = self.repository.get_parts_by_supplier_id(supplier_id).await;
        self.policy
            .check_supplier(supplier_id, &existing, part_type)?;

        let mut parts = Vec::with_capacity(request.parts.len());
        for payload in &request.parts {
            let part = self
                .repository
                .insert_part(payload.part_type(), payload.material(), supplier_id)
                .await
                .ok_or(StorePartsError::SupplierVanished { supplier_id })?;
            parts.push(part);
        }

        Ok(StorePartsOutcome { supplier, parts })
    }

    /// A loader seen before gets its supplier back (taking the payload's
    /// name); an unseen loader, or one whose supplier was deleted, gets a new
    /// supplier. The mapping itself is recorded on commit.
    async fn resolve_supplier(
        &self,
        loaders: &mut HashMap<String, SupplierId>,
        loader: &LoaderPayload,
    ) -> Supplier {
        let key = loader.loader_id.key();

        if let Some(&id) = loaders.get(&key) {
            match self.repository.get_supplier_by_id(id).await {
                Some(mut supplier) => {
                    if supplier.name() != loader.loader_name
                        && self.repository.update_supplier(id, &loader.loader_name).await
                    {
                        supplier.rename(loader.loader_name.as_str());
                    }
                    return supplier;
                }
                None => {
                    debug!(loader = %key, supplier_id = %id, "Dropping stale loader mapping");
                    loaders.remove(&key);
                }
            }
        }

        self.repository.insert_supplier(&loader.loader_name).await
    }
}
