//! Point-of-sale ledger for a small pharmacy.
//!
//! Two collections make up the state: an ordered log of sale
//! [`Transaction`]s and an [`Inventory`] map of medicine name to remaining
//! stock. [`LedgerEngine`] holds both in memory and applies the
//! invariant-preserving operations (stock decrement on sale, stock floored
//! at zero, pending-amount recomputation). [`LedgerSession`] binds an engine
//! to a [`store::BlobStore`] and rewrites both collections wholesale after
//! every mutation, so the stored blobs always mirror the in-memory state.
//!
//! The crate is a library only: rendering and user input belong to the host,
//! which consumes the snapshots in [`view`] and calls back into the session.

pub mod engine;
pub mod error;
pub mod models;
pub mod session;
pub mod store;
pub mod view;

pub use engine::LedgerEngine;
pub use error::{LedgerError, Result};
pub use models::{Inventory, SaleDraft, Transaction};
pub use session::LedgerSession;
