//! In-Memory Store Parts Repository
//!
//! Both collections, both id counters and the transaction snapshot live
//! behind one async mutex, so every operation is serialized.
//!
//! Transactions snapshot by full copy. A `watch` channel mirrors whether a
//! transaction is open; `reset_store` parks on it instead of polling.

use std::sync::Arc;

use async_trait::async_trait;
use partstore_domain::model::part::{Part, PartId};
use partstore_domain::model::part_type::PartType;
use partstore_domain::model::supplier::{Supplier, SupplierId};
use partstore_domain::repository::store_parts_repository::StorePartsRepository;
use shared::{IllegalStateError, Result, StoreConfig, StoreError};
use tokio::sync::{watch, Mutex};
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

const FIRST_ID: u64 = 1;

/// Copy of the live state taken by `begin_transaction`
#[derive(Debug, Clone)]
struct Snapshot {
    suppliers: Vec<Supplier>,
    parts: Vec<Part>,
    next_supplier_id: u64,
    next_part_id: u64,
}

#[derive(Debug)]
struct StoreState {
    suppliers: Vec<Supplier>,
    parts: Vec<Part>,
    next_supplier_id: u64,
    next_part_id: u64,
    /// Present exactly while a transaction is open
    snapshot: Option<Snapshot>,
}

impl StoreState {
    fn new() -> Self {
        Self {
            suppliers: Vec::new(),
            parts: Vec::new(),
            next_supplier_id: FIRST_ID,
            next_part_id: FIRST_ID,
            snapshot: None,
        }
    }

    fn in_transaction(&self) -> bool {
        self.snapshot.is_some()
    }

    fn allocate_supplier_id(&mut self) -> SupplierId {
        let id = SupplierId::new(self.next_supplier_id);
        self.next_supplier_id += 1;
        id
    }

    fn allocate_part_id(&mut self) -> PartId {
        let id = PartId::new(self.next_part_id);
        self.next_part_id += 1;
        id
    }

    fn take_snapshot(&self) -> Snapshot {
        Snapshot {
            suppliers: self.suppliers.clone(),
            parts: self.parts.clone(),
            next_supplier_id: self.next_supplier_id,
            next_part_id: self.next_part_id,
        }
    }
}

#[derive(Debug)]
struct Inner {
    state: Mutex<StoreState>,
    /// `true` while a transaction is open. Only written with `state` locked.
    transaction: watch::Sender<bool>,
    config: StoreConfig,
}

/// In-memory Store Parts Repository
///
/// Cheap to clone; clones share the same store.
#[derive(Debug, Clone)]
pub struct InMemoryStorePartsRepository {
    inner: Arc<Inner>,
}

impl Default for InMemoryStorePartsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStorePartsRepository {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        let (transaction, _) = watch::channel(false);
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(StoreState::new()),
                transaction,
                config,
            }),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Close the open transaction, or fail if there is none
    fn finish_transaction(
        &self,
        state: &mut StoreState,
        operation: &'static str,
    ) -> Result<Snapshot> {
        let snapshot = state.snapshot.take().ok_or_else(|| {
            warn!(operation, "No active transaction");
            IllegalStateError::no_active_transaction(operation)
        })?;
        self.inner.transaction.send_replace(false);
        Ok(snapshot)
    }

    /// Park until no transaction is open. Returns immediately if the
    /// channel is already idle.
    async fn wait_until_idle(mut watcher: watch::Receiver<bool>) {
        loop {
            let active = *watcher.borrow_and_update();
            if !active {
                return;
            }
            if watcher.changed().await.is_err() {
                return;
            }
        }
    }
}

#[async_trait]
impl StorePartsRepository for InMemoryStorePartsRepository {
    async fn insert_supplier(&self, name: &str) -> Supplier {
        let mut state = self.inner.state.lock().await;
        let supplier = Supplier::new(state.allocate_supplier_id(), name);
        state.suppliers.push(supplier.clone());
        debug!(supplier_id = %supplier.id(), name, "Inserted supplier");
        supplier
    }

    async fn get_supplier_by_id(&self, id: SupplierId) -> Option<Supplier> {
        let state = self.inner.state.lock().await;
        state.suppliers.iter().find(|s| s.id() == id).cloned()
    }

    async fn list_suppliers(&self) -> Vec<Supplier> {
        self.inner.state.lock().await.suppliers.clone()
    }

    async fn update_supplier(&self, id: SupplierId, new_name: &str) -> bool {
        let mut state = self.inner.state.lock().await;
        match state.suppliers.iter_mut().find(|s| s.id() == id) {
            Some(supplier) => {
                supplier.rename(new_name);
                debug!(supplier_id = %id, new_name, "Renamed supplier");
                true
            }
            None => false,
        }
    }

    async fn delete_supplier(&self, id: SupplierId) -> bool {
        let mut state = self.inner.state.lock().await;
        let Some(index) = state.suppliers.iter().position(|s| s.id() == id) else {
            return false;
        };

        state.suppliers.remove(index);
        let before = state.parts.len();
        state.parts.retain(|p| !p.is_supplied_by(id));
        debug!(
            supplier_id = %id,
            cascaded_parts = before - state.parts.len(),
            "Deleted supplier"
        );
        true
    }

    async fn insert_part(
        &self,
        part_type: PartType,
        material: &str,
        supplier_id: SupplierId,
    ) -> Option<Part> {
        let mut state = self.inner.state.lock().await;
        if !state.suppliers.iter().any(|s| s.id() == supplier_id) {
            debug!(supplier_id = %supplier_id, "Part insert for unknown supplier");
            return None;
        }

        let part = Part::new(state.allocate_part_id(), part_type, material, supplier_id);
        state.parts.push(part.clone());
        debug!(part_id = %part.id(), supplier_id = %supplier_id, %part_type, "Inserted part");
        Some(part)
    }

    async fn get_parts_by_supplier_id(&self, supplier_id: SupplierId) -> Vec<Part> {
        let state = self.inner.state.lock().await;
        state
            .parts
            .iter()
            .filter(|p| p.is_supplied_by(supplier_id))
            .cloned()
            .collect()
    }

    async fn list_parts(&self) -> Vec<Part> {
        self.inner.state.lock().await.parts.clone()
    }

    async fn update_part(&self, id: PartId, new_type: PartType, new_material: &str) -> bool {
        let mut state = self.inner.state.lock().await;
        match state.parts.iter_mut().find(|p| p.id() == id) {
            Some(part) => {
                part.update(new_type, new_material);
                debug!(part_id = %id, %new_type, new_material, "Updated part");
                true
            }
            None => false,
        }
    }

    async fn delete_part(&self, id: PartId) -> bool {
        let mut state = self.inner.state.lock().await;
        let Some(index) = state.parts.iter().position(|p| p.id() == id) else {
            return false;
        };

        state.parts.remove(index);
        debug!(part_id = %id, "Deleted part");
        true
    }

    async fn begin_transaction(&self) -> Result<()> {
        let mut state = self.inner.state.lock().await;
        if state.in_transaction() {
            warn!("Begin rejected, transaction already active");
            return Err(IllegalStateError::transaction_already_active("begin").into());
        }

        state.snapshot = Some(state.take_snapshot());
        self.inner.transaction.send_replace(true);
        info!(
            suppliers = state.suppliers.len(),
            parts = state.parts.len(),
            "Transaction started"
        );
        Ok(())
    }

    async fn commit_transaction(&self) -> Result<()> {
        let mut state = self.inner.state.lock().await;
        self.finish_transaction(&mut state, "commit")?;
        info!("Transaction committed");
        Ok(())
    }

    async fn rollback_transaction(&self) -> Result<()> {
        let mut state = self.inner.state.lock().await;
        let snapshot = self.finish_transaction(&mut state, "rollback")?;

        state.suppliers = snapshot.suppliers;
        state.parts = snapshot.parts;
        if self.inner.config.restore_counters_on_rollback {
            state.next_supplier_id = snapshot.next_supplier_id;
            state.next_part_id = snapshot.next_part_id;
        }
        info!("Transaction rolled back");
        Ok(())
    }

    async fn is_transaction_active(&self) -> bool {
        self.inner.state.lock().await.in_transaction()
    }

    async fn suppliers_snapshot(&self) -> Vec<Supplier> {
        let state = self.inner.state.lock().await;
        state
            .snapshot
            .as_ref()
            .map(|s| s.suppliers.clone())
            .unwrap_or_default()
    }

    async fn reset_store(&self) -> Result<()> {
        let started = Instant::now();
        let limit = self.inner.config.reset_timeout();

        loop {
            // Subscribe while holding the lock so a commit cannot slip in
            // between the check and the wait.
            let watcher = {
                let mut state = self.inner.state.lock().await;
                if !state.in_transaction() {
                    *state = StoreState::new();
                    self.inner.transaction.send_replace(false);
                    info!("Store reset");
                    return Ok(());
                }
                self.inner.transaction.subscribe()
            };

            debug!("Reset waiting for active transaction");
            match limit {
                Some(limit) => {
                    let remaining = limit.saturating_sub(started.elapsed());
                    if time::timeout(remaining, Self::wait_until_idle(watcher))
                        .await
                        .is_err()
                    {
                        let waited = started.elapsed();
                        warn!(?waited, "Reset gave up waiting for transaction");
                        return Err(StoreError::ResetTimeout { waited });
                    }
                }
                None => Self::wait_until_idle(watcher).await,
            }
            // Another transaction may have opened before we got the lock back.
        }
    }
}
