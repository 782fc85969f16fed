use thiserror::Error;

/// Errors reported to the initiating actor.
///
/// Validation and business-rule failures abort the operation with no state
/// change. Lookups by id or name that find nothing are explicit errors here,
/// not silent no-ops, and storage failures surface instead of losing data.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("quantity must be a positive whole number")]
    InvalidQuantity,

    #[error("{0} must be a non-negative amount")]
    NegativeAmount(&'static str),

    #[error("insufficient stock of {medicine}: requested {requested}, available {available}")]
    InsufficientStock {
        medicine: String,
        requested: u32,
        available: u32,
    },

    #[error("no transaction with id {0}")]
    TransactionNotFound(u64),

    #[error("no medicine named '{0}' in inventory")]
    MedicineNotFound(String),

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
