use async_trait::async_trait;

use crate::domain::{Amount, Expense};

/// Expense ledger - process-lifetime expense storage plus its HTML mirror.
#[async_trait]
pub trait ExpenseLedger: Send + Sync {
    /// Append an expense, assigning the next sequential ID.
    async fn record(&self, name: String, amount: Amount) -> Expense;

    /// All expenses in insertion order.
    async fn list(&self) -> Vec<Expense>;

    /// The `<div id="expenses">` fragment with one line per expense.
    async fn render_html(&self) -> String;

    /// Sum of all amounts coerced to numbers.
    async fn total(&self) -> f64;

    /// Drop all expenses and fragment lines.
    async fn reset(&self);
}
