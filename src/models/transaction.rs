use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One recorded medicine sale.
///
/// Field names serialize in camelCase so the stored layout matches the record
/// attributes one to one. `amount_paid` is the only field that may change
/// after creation (through the pending-amount edit); everything else is fixed
/// at the moment of sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: u64,
    /// Creation date, `DD/MM/YYYY`, zero-padded. Display-only; never parsed.
    pub date: String,
    pub customer_name: String,
    pub customer_mobile: String,
    pub medicine: String,
    pub quantity: u32,
    pub buying_price: Decimal,
    pub selling_price: Decimal,
    pub amount_paid: Decimal,
}

impl Transaction {
    /// Total sale value: `quantity * selling_price`.
    pub fn total_amount(&self) -> Decimal {
        Decimal::from(self.quantity) * self.selling_price
    }

    /// Margin on the sale: `(selling_price - buying_price) * quantity`.
    pub fn profit(&self) -> Decimal {
        (self.selling_price - self.buying_price) * Decimal::from(self.quantity)
    }

    /// Outstanding balance: `total_amount - amount_paid`.
    ///
    /// May be negative when an overpayment has been entered; no clamp is
    /// applied.
    pub fn amount_pending(&self) -> Decimal {
        self.total_amount() - self.amount_paid
    }
}

/// Input to [`record_sale`](crate::engine::LedgerEngine::record_sale):
/// everything the counter clerk types in, before an id and date are assigned.
#[derive(Debug, Clone)]
pub struct SaleDraft {
    pub customer_name: String,
    pub customer_mobile: String,
    pub medicine: String,
    pub quantity: u32,
    pub buying_price: Decimal,
    pub selling_price: Decimal,
    pub amount_paid: Decimal,
}
