use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Inventory, Transaction};

/// One rendered line of the sales table: every stored field plus the derived
/// amounts, computed at snapshot time rather than stored.
///
/// `serial` is the 1-based row position within the rendered slice (which may
/// be a search result), distinct from the stable transaction `id`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRow {
    pub serial: usize,
    pub id: u64,
    pub date: String,
    pub customer_name: String,
    pub customer_mobile: String,
    pub medicine: String,
    pub quantity: u32,
    pub buying_price: Decimal,
    pub selling_price: Decimal,
    pub profit: Decimal,
    pub amount_paid: Decimal,
    pub amount_pending: Decimal,
    pub total_amount: Decimal,
}

impl TransactionRow {
    /// True when a balance is still owed on this sale. Hosts typically
    /// highlight such rows.
    pub fn outstanding(&self) -> bool {
        self.amount_pending > Decimal::ZERO
    }
}

/// One rendered line of the inventory table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRow {
    pub serial: usize,
    pub medicine: String,
    pub stock: u32,
}

/// Build display rows from a transaction slice (the full log or a search
/// result), preserving order.
pub fn transaction_rows<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Vec<TransactionRow> {
    transactions
        .into_iter()
        .enumerate()
        .map(|(index, tx)| TransactionRow {
            serial: index + 1,
            id: tx.id,
            date: tx.date.clone(),
            customer_name: tx.customer_name.clone(),
            customer_mobile: tx.customer_mobile.clone(),
            medicine: tx.medicine.clone(),
            quantity: tx.quantity,
            buying_price: tx.buying_price,
            selling_price: tx.selling_price,
            profit: tx.profit(),
            amount_paid: tx.amount_paid,
            amount_pending: tx.amount_pending(),
            total_amount: tx.total_amount(),
        })
        .collect()
}

/// Build display rows from the inventory, in its ascending name order.
pub fn inventory_rows(inventory: &Inventory) -> Vec<InventoryRow> {
    inventory
        .iter()
        .enumerate()
        .map(|(index, (medicine, stock))| InventoryRow {
            serial: index + 1,
            medicine: medicine.to_string(),
            stock,
        })
        .collect()
}
