use chrono::Local;
use rust_decimal::Decimal;

use crate::error::{LedgerError, Result};
use crate::models::{Inventory, SaleDraft, Transaction};

/// In-memory ledger core: the ordered sale log and the stock map.
///
/// Every operation is a pure state transition returning a `Result`; nothing
/// here touches storage or a display. Hosts wrap the engine in a
/// [`LedgerSession`](crate::session::LedgerSession) to get persistence.
pub struct LedgerEngine {
    /// Sale records in creation order.
    transactions: Vec<Transaction>,
    /// Remaining stock per medicine name.
    inventory: Inventory,
    /// Next transaction id. Monotonic and persisted with the log, so ids
    /// stay unique across deletions and across sessions.
    next_id: u64,
}

impl LedgerEngine {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            inventory: Inventory::new(),
            next_id: 1,
        }
    }

    /// Rebuild an engine from previously persisted state.
    ///
    /// `next_id` is bumped past the highest recorded id if the stored counter
    /// lags behind it, so a restored ledger can never hand out a duplicate.
    pub fn from_state(transactions: Vec<Transaction>, inventory: Inventory, next_id: u64) -> Self {
        let highest = transactions.iter().map(|tx| tx.id).max().unwrap_or(0);
        Self {
            transactions,
            inventory,
            next_id: next_id.max(highest + 1),
        }
    }

    /// Record a sale: validate the draft, check stock, assign the next id,
    /// stamp today's date, append to the log, and decrement inventory.
    ///
    /// Fails without any state change on a missing field, a zero quantity, a
    /// negative price or payment, or insufficient stock (an unknown medicine
    /// counts as stock 0).
    pub fn record_sale(&mut self, draft: SaleDraft) -> Result<&Transaction> {
        validate_draft(&draft)?;

        let available = self.inventory.stock(&draft.medicine);
        if draft.quantity > available {
            return Err(LedgerError::InsufficientStock {
                medicine: draft.medicine,
                requested: draft.quantity,
                available,
            });
        }

        let transaction = Transaction {
            id: self.next_id,
            date: today(),
            customer_name: draft.customer_name,
            customer_mobile: draft.customer_mobile,
            medicine: draft.medicine,
            quantity: draft.quantity,
            buying_price: draft.buying_price,
            selling_price: draft.selling_price,
            amount_paid: draft.amount_paid,
        };
        self.next_id += 1;

        self.inventory
            .adjust(&transaction.medicine, -i64::from(transaction.quantity));
        self.transactions.push(transaction);

        Ok(self.transactions.last().expect("just pushed"))
    }

    /// Set a transaction's outstanding balance.
    ///
    /// The new pending value is rounded to two decimal places, then
    /// `amount_paid` is recomputed as `total_amount - pending`. Quantity and
    /// prices are untouched. Returns the rounded pending value.
    pub fn edit_amount_pending(&mut self, id: u64, new_pending: Decimal) -> Result<Decimal> {
        if new_pending < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount("amount pending"));
        }

        let transaction = self
            .transactions
            .iter_mut()
            .find(|tx| tx.id == id)
            .ok_or(LedgerError::TransactionNotFound(id))?;

        let pending = new_pending.round_dp(2);
        transaction.amount_paid = transaction.total_amount() - pending;
        Ok(pending)
    }

    /// Remove the sale with the given id and return it.
    ///
    /// Deletion is not a sale reversal: the medicine's stock is not restored.
    pub fn delete_transaction(&mut self, id: u64) -> Result<Transaction> {
        let index = self
            .transactions
            .iter()
            .position(|tx| tx.id == id)
            .ok_or(LedgerError::TransactionNotFound(id))?;
        Ok(self.transactions.remove(index))
    }

    /// Case-insensitive substring search over customer names.
    ///
    /// Returns an order-preserving view of the log; an empty term matches
    /// everything.
    pub fn search(&self, term: &str) -> Vec<&Transaction> {
        let needle = term.trim().to_lowercase();
        self.transactions
            .iter()
            .filter(|tx| tx.customer_name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Add stock for a medicine, creating the entry on first restock.
    pub fn restock(&mut self, medicine: &str, quantity: u32) -> Result<()> {
        if medicine.trim().is_empty() {
            return Err(LedgerError::MissingField("medicine name"));
        }
        if quantity == 0 {
            return Err(LedgerError::InvalidQuantity);
        }
        self.inventory.adjust(medicine, i64::from(quantity));
        Ok(())
    }

    /// Drop a medicine from the inventory regardless of remaining stock.
    pub fn remove_medicine(&mut self, medicine: &str) -> Result<()> {
        if self.inventory.remove(medicine) {
            Ok(())
        } else {
            Err(LedgerError::MedicineNotFound(medicine.to_string()))
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

impl Default for LedgerEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_draft(draft: &SaleDraft) -> Result<()> {
    if draft.customer_name.trim().is_empty() {
        return Err(LedgerError::MissingField("customer name"));
    }
    if draft.customer_mobile.trim().is_empty() {
        return Err(LedgerError::MissingField("customer mobile"));
    }
    if draft.medicine.trim().is_empty() {
        return Err(LedgerError::MissingField("medicine"));
    }
    if draft.quantity == 0 {
        return Err(LedgerError::InvalidQuantity);
    }
    if draft.buying_price < Decimal::ZERO {
        return Err(LedgerError::NegativeAmount("buying price"));
    }
    if draft.selling_price < Decimal::ZERO {
        return Err(LedgerError::NegativeAmount("selling price"));
    }
    if draft.amount_paid < Decimal::ZERO {
        return Err(LedgerError::NegativeAmount("amount paid"));
    }
    Ok(())
}

/// Today's date as `DD/MM/YYYY`, zero-padded. Stamped once at creation and
/// kept as display text from then on.
fn today() -> String {
    Local::now().format("%d/%m/%Y").to_string()
}
