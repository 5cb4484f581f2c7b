// 📊 Canonical Dataset - The fixed six-transaction sample
// Four traders, six transactions, built once at startup

use std::sync::Arc;

use crate::entities::{Trader, Transaction};

/// Build the canonical six-transaction dataset.
///
/// Each trader is one shared handle referenced by all of their transactions,
/// so identity is preserved across the sequence.
pub fn sample_transactions() -> Vec<Transaction> {
    let raoul = Arc::new(Trader::new("Raoul", "Cambridge"));
    let mario = Arc::new(Trader::new("Mario", "Milan"));
    let alan = Arc::new(Trader::new("Alan", "Cambridge"));
    let brian = Arc::new(Trader::new("Brian", "Cambridge"));

    vec![
        Transaction::new(brian, 2011, 300),
        Transaction::new(Arc::clone(&raoul), 2012, 1000),
        Transaction::new(raoul, 2011, 400),
        Transaction::new(Arc::clone(&mario), 2012, 710),
        Transaction::new(mario, 2012, 700),
        Transaction::new(alan, 2012, 950),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_six_transactions() {
        assert_eq!(sample_transactions().len(), 6);
    }

    #[test]
    fn test_traders_share_one_handle() {
        let txs = sample_transactions();

        // Both Raoul transactions point at the same trader, not a copy
        assert!(Arc::ptr_eq(txs[1].trader(), txs[2].trader()));
        assert!(Arc::ptr_eq(txs[3].trader(), txs[4].trader()));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let values: Vec<i64> = sample_transactions().iter().map(Transaction::value).collect();

        assert_eq!(values, vec![300, 1000, 400, 710, 700, 950]);
    }
}
