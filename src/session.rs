use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::engine::LedgerEngine;
use crate::error::Result;
use crate::models::{Inventory, SaleDraft, Transaction};
use crate::store::{BlobStore, INVENTORY_KEY, TRANSACTIONS_KEY};

/// Stored shape of the transaction blob: the sale records plus the monotonic
/// id counter, persisted together so ids survive restarts.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionLog {
    next_id: u64,
    records: Vec<Transaction>,
}

/// Borrowed counterpart of [`TransactionLog`] for writing without cloning
/// the log.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TransactionLogRef<'a> {
    next_id: u64,
    records: &'a [Transaction],
}

/// A ledger bound to a [`BlobStore`].
///
/// [`open`](Self::open) loads both collections or starts them empty; each
/// mutating call applies the engine transition and then [`commit`](Self::commit)s
/// the full state back to the store. A failed commit is reported to the
/// caller rather than swallowed.
pub struct LedgerSession<S: BlobStore> {
    engine: LedgerEngine,
    store: S,
}

impl<S: BlobStore> LedgerSession<S> {
    /// Load the ledger from `store`, defaulting each collection to empty when
    /// its blob is absent.
    ///
    /// A blob that is present but unparsable is logged as a warning and
    /// treated as absent; the session fails open to empty state instead of
    /// refusing to start.
    pub fn open(store: S) -> Result<Self> {
        let log: TransactionLog = decode(&store, TRANSACTIONS_KEY)?;
        let inventory: Inventory = decode(&store, INVENTORY_KEY)?;

        Ok(Self {
            engine: LedgerEngine::from_state(log.records, inventory, log.next_id),
            store,
        })
    }

    /// Record a sale and persist. Returns the new transaction's id.
    pub fn record_sale(&mut self, draft: SaleDraft) -> Result<u64> {
        let id = self.engine.record_sale(draft)?.id;
        self.commit()?;
        Ok(id)
    }

    /// Update a transaction's outstanding balance and persist. Returns the
    /// pending value rounded to two decimal places.
    pub fn edit_amount_pending(&mut self, id: u64, new_pending: Decimal) -> Result<Decimal> {
        let pending = self.engine.edit_amount_pending(id, new_pending)?;
        self.commit()?;
        Ok(pending)
    }

    /// Delete a sale record (stock is not restored) and persist.
    pub fn delete_transaction(&mut self, id: u64) -> Result<Transaction> {
        let removed = self.engine.delete_transaction(id)?;
        self.commit()?;
        Ok(removed)
    }

    /// Add stock for a medicine and persist.
    pub fn restock(&mut self, medicine: &str, quantity: u32) -> Result<()> {
        self.engine.restock(medicine, quantity)?;
        self.commit()
    }

    /// Drop a medicine from the inventory and persist.
    pub fn remove_medicine(&mut self, medicine: &str) -> Result<()> {
        self.engine.remove_medicine(medicine)?;
        self.commit()
    }

    /// Filtered, order-preserving view of the log. Read-only; nothing is
    /// persisted.
    pub fn search(&self, term: &str) -> Vec<&Transaction> {
        self.engine.search(term)
    }

    /// Read access to the underlying ledger state.
    pub fn engine(&self) -> &LedgerEngine {
        &self.engine
    }

    /// Serialize both collections and rewrite their blobs wholesale.
    ///
    /// The two writes are not atomic with each other; see
    /// [`BlobStore`](crate::store::BlobStore).
    pub fn commit(&mut self) -> Result<()> {
        let log = serde_json::to_string(&TransactionLogRef {
            next_id: self.engine.next_id(),
            records: self.engine.transactions(),
        })?;
        let inventory = serde_json::to_string(self.engine.inventory())?;

        self.store.write(TRANSACTIONS_KEY, &log)?;
        self.store.write(INVENTORY_KEY, &inventory)?;

        debug!(
            transactions = self.engine.transactions().len(),
            medicines = self.engine.inventory().len(),
            "committed ledger state"
        );
        Ok(())
    }

    /// Read access to the underlying store, for inspecting persisted blobs.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the session and return the store, for hosts that manage
    /// storage lifetime themselves.
    pub fn into_store(self) -> S {
        self.store
    }
}

/// Read and parse one blob, falling back to the default on a missing blob or
/// a malformed payload. Only a storage-level read failure propagates.
fn decode<S: BlobStore, T: Default + serde::de::DeserializeOwned>(store: &S, key: &str) -> Result<T> {
    match store.read(key)? {
        None => Ok(T::default()),
        Some(text) => match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(key, error = %err, "discarding malformed persisted blob");
                Ok(T::default())
            }
        },
    }
}
