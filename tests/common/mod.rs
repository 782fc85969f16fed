use pharmacy_ledger::{LedgerEngine, SaleDraft};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Build a sale draft with every field spelled out.
#[allow(clippy::too_many_arguments)]
pub fn make_draft(
    customer_name: &str,
    customer_mobile: &str,
    medicine: &str,
    quantity: u32,
    buying_price: Decimal,
    selling_price: Decimal,
    amount_paid: Decimal,
) -> SaleDraft {
    SaleDraft {
        customer_name: customer_name.to_string(),
        customer_mobile: customer_mobile.to_string(),
        medicine: medicine.to_string(),
        quantity,
        buying_price,
        selling_price,
        amount_paid,
    }
}

/// A Paracetamol sale draft with the usual test pricing (buy 2.0, sell 5.0).
pub fn paracetamol_sale(quantity: u32, amount_paid: Decimal) -> SaleDraft {
    make_draft(
        "Alice",
        "9999999999",
        "Paracetamol",
        quantity,
        dec!(2.0),
        dec!(5.0),
        amount_paid,
    )
}

/// Engine pre-stocked with 100 units of Paracetamol.
pub fn stocked_engine() -> LedgerEngine {
    let mut engine = LedgerEngine::new();
    engine.restock("Paracetamol", 100).unwrap();
    engine
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_draft() {
        let draft = make_draft("Bob", "1234", "Aspirin", 3, dec!(1.5), dec!(2), dec!(6));
        assert_eq!(draft.customer_name, "Bob");
        assert_eq!(draft.medicine, "Aspirin");
        assert_eq!(draft.quantity, 3);
        assert_eq!(draft.amount_paid, dec!(6));
    }

    #[test]
    fn test_stocked_engine() {
        let engine = stocked_engine();
        assert_eq!(engine.inventory().stock("Paracetamol"), 100);
    }
}
