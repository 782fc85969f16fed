pub mod inventory;
pub mod transaction;

pub use inventory::Inventory;
pub use transaction::{SaleDraft, Transaction};
