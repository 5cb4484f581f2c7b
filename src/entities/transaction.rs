// 💳 Transaction Entity - Immutable record referencing a Trader
// One trader may back any number of transactions, so the trader side is a
// shared handle rather than a duplicated copy

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::trader::Trader;

// ============================================================================
// TRANSACTION ENTITY
// ============================================================================

/// Transaction record - constructed once, immutable thereafter.
///
/// The trader handle is non-nullable by construction and stays valid for the
/// lifetime of the transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    trader: Arc<Trader>,
    year: i32,
    value: i64,
}

impl Transaction {
    pub fn new(trader: Arc<Trader>, year: i32, value: i64) -> Self {
        Transaction {
            trader,
            year,
            value,
        }
    }

    pub fn trader(&self) -> &Arc<Trader> {
        &self.trader
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let raoul = Arc::new(Trader::new("Raoul", "Cambridge"));
        let tx = Transaction::new(raoul, 2012, 1000);

        assert_eq!(tx.trader().name(), "Raoul");
        assert_eq!(tx.trader().city(), "Cambridge");
        assert_eq!(tx.year(), 2012);
        assert_eq!(tx.value(), 1000);
    }

    #[test]
    fn test_trader_handle_is_shared() {
        let raoul = Arc::new(Trader::new("Raoul", "Cambridge"));
        let tx1 = Transaction::new(Arc::clone(&raoul), 2012, 1000);
        let tx2 = Transaction::new(Arc::clone(&raoul), 2011, 400);

        assert!(Arc::ptr_eq(tx1.trader(), tx2.trader()));
    }

    #[test]
    fn test_serializes_with_nested_trader() {
        let mario = Arc::new(Trader::new("Mario", "Milan"));
        let tx = Transaction::new(mario, 2012, 710);

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["trader"]["name"], "Mario");
        assert_eq!(json["trader"]["city"], "Milan");
        assert_eq!(json["year"], 2012);
        assert_eq!(json["value"], 710);
    }
}
