// Entity Models - Passive data records
//
// Both entities are immutable after construction:
// - Trader: identity record (name, city), value equality
// - Transaction: a trader handle plus year and value

pub mod trader;
pub mod transaction;

pub use trader::Trader;
pub use transaction::Transaction;
