// 🔎 Query Engine - Read-only queries over the transaction list
// Filter, map, sort, distinct and reduce passes; every query is a pure
// function of the sequence and independent of the others

use crate::entities::{Trader, Transaction};
use std::fmt;
use std::sync::Arc;

// ============================================================================
// EMPTY MAXIMUM ERROR
// ============================================================================

/// Raised when the maximum transaction value is requested over an empty
/// sequence. There is no sensible default maximum, so the caller must handle
/// (or propagate) the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyMaximumError;

impl fmt::Display for EmptyMaximumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no maximum: transaction sequence is empty")
    }
}

impl std::error::Error for EmptyMaximumError {}

// ============================================================================
// QUERY ENGINE
// ============================================================================

/// Holds the transaction sequence and answers read-only queries against it.
///
/// Ordering policy for every sort: stable (original relative order preserved
/// among equal keys), ascending, with case-sensitive byte-wise string
/// comparison.
pub struct QueryEngine {
    transactions: Vec<Transaction>,
}

impl QueryEngine {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        QueryEngine { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Transactions from the given year, ascending by value.
    pub fn transactions_in_year_by_value(&self, year: i32) -> Vec<Transaction> {
        let mut matching: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|tx| tx.year() == year)
            .cloned()
            .collect();
        matching.sort_by_key(|tx| tx.value());
        matching
    }

    /// Unique cities where the traders work, first-occurrence order.
    pub fn distinct_cities(&self) -> Vec<String> {
        let mut cities: Vec<String> = Vec::new();
        for tx in &self.transactions {
            let city = tx.trader().city();
            if !cities.iter().any(|c| c == city) {
                cities.push(city.to_string());
            }
        }
        cities
    }

    /// Traders from the given city, ascending by name.
    ///
    /// One entry per matching transaction: a trader referenced by several
    /// matching transactions appears once per occurrence.
    pub fn traders_in_city_by_name(&self, city: &str) -> Vec<Arc<Trader>> {
        let mut traders: Vec<Arc<Trader>> = self
            .transactions
            .iter()
            .map(Transaction::trader)
            .filter(|trader| trader.city() == city)
            .map(Arc::clone)
            .collect();
        traders.sort_by(|a, b| a.name().cmp(b.name()));
        traders
    }

    /// All distinct trader names, sorted alphabetically, concatenated into
    /// one string with no separator.
    pub fn distinct_names_joined(&self) -> String {
        let mut names: Vec<&str> = self
            .transactions
            .iter()
            .map(|tx| tx.trader().name())
            .collect();
        names.sort_unstable();
        names.dedup();
        names.concat()
    }

    /// Whether at least one transaction's trader is based in the given city.
    pub fn any_trader_in(&self, city: &str) -> bool {
        self.transactions
            .iter()
            .any(|tx| tx.trader().city() == city)
    }

    /// Values of the transactions whose trader is in the given city, in
    /// original relative order. No deduplication.
    pub fn values_in_city(&self, city: &str) -> Vec<i64> {
        self.transactions
            .iter()
            .filter(|tx| tx.trader().city() == city)
            .map(Transaction::value)
            .collect()
    }

    /// Highest value across all transactions.
    pub fn max_value(&self) -> Result<i64, EmptyMaximumError> {
        self.transactions
            .iter()
            .map(Transaction::value)
            .max()
            .ok_or(EmptyMaximumError)
    }
}

// ============================================================================
// TESTS
// ============================================================================
