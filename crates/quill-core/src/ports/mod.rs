//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod ledger;
mod repository;

pub use ledger::ExpenseLedger;
pub use repository::{BaseRepository, Mutation, PostRepository, UserRepository};
