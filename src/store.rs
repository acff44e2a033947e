//! In-memory receipt store.
//!
//! The store owns every scored receipt for the life of the process. It is
//! created once at startup and shared by reference (through `AppState`), so
//! it can be exercised directly in tests without a server.
//!
//! All access goes through one `RwLock` that is held only for the map
//! operation itself. Callers score a receipt before calling [`ReceiptStore::put`].

use crate::{Receipt, ScoreResult};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::RwLock;
use thiserror::Error;
use uuid::Uuid;

/// Fresh identifiers tried by [`ReceiptStore::put`] before giving up.
pub const MAX_ID_ATTEMPTS: usize = 8;

/// A scored receipt as kept by the store. Never mutated after insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReceipt {
    pub id: String,
    pub result: ScoreResult,
    /// The receipt as it was scored.
    pub receipt: Receipt,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not allocate a unique receipt id after {attempts} attempts")]
    IdCollision { attempts: usize },

    #[error("receipt store lock is poisoned")]
    Poisoned,
}

#[derive(Debug, Default)]
pub struct ReceiptStore {
    receipts: RwLock<HashMap<String, StoredReceipt>>,
}

impl ReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a scored receipt under a fresh random UUID and return the id.
    ///
    /// The entry is visible to every `get` that starts after this returns.
    pub fn put(&self, receipt: Receipt, result: ScoreResult) -> Result<String, StoreError> {
        self.put_with(receipt, result, || Uuid::new_v4().to_string())
    }

    pub(crate) fn put_with(
        &self,
        receipt: Receipt,
        result: ScoreResult,
        mut next_id: impl FnMut() -> String,
    ) -> Result<String, StoreError> {
        let mut receipts = self.receipts.write().map_err(|_| StoreError::Poisoned)?;

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = next_id();
            match receipts.entry(id) {
                Entry::Vacant(slot) => {
                    let id = slot.key().clone();
                    slot.insert(StoredReceipt { id: id.clone(), result, receipt });
                    return Ok(id);
                }
                Entry::Occupied(existing) => {
                    tracing::warn!(id = %existing.key(), attempt, "receipt id collision, retrying");
                }
            }
        }

        Err(StoreError::IdCollision { attempts: MAX_ID_ATTEMPTS })
    }

    /// Look up a receipt by id. Returns a copy.
    pub fn get(&self, id: &str) -> Result<Option<StoredReceipt>, StoreError> {
        let receipts = self.receipts.read().map_err(|_| StoreError::Poisoned)?;
        Ok(receipts.get(id).cloned())
    }

    /// Points for `id`, without cloning the stored receipt.
    pub fn points(&self, id: &str) -> Result<Option<u64>, StoreError> {
        let receipts = self.receipts.read().map_err(|_| StoreError::Poisoned)?;
        Ok(receipts.get(id).map(|stored| stored.result.points))
    }

    pub fn len(&self) -> usize {
        self.receipts.read().map(|r| r.len()).unwrap_or_else(|poisoned| poisoned.into_inner().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
