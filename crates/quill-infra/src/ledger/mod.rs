//! Expense ledger implementations.

mod memory;

pub use memory::InMemoryExpenseLedger;
