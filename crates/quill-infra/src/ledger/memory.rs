//! In-memory expense ledger.

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{Amount, Expense, render_fragment};
use quill_core::ports::ExpenseLedger;

#[derive(Default)]
struct LedgerState {
    expenses: Vec<Expense>,
    fragment: Vec<String>,
}

/// Expenses and their HTML fragment held for the lifetime of the process.
///
/// IDs are assigned under the write lock, so concurrent requests never share one.
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryExpenseLedger {
    state: RwLock<LedgerState>,
}

impl InMemoryExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExpenseLedger for InMemoryExpenseLedger {
    async fn record(&self, name: String, amount: Amount) -> Expense {
        let mut state = self.state.write().await;
        let expense = Expense {
            id: state.expenses.len() as u64 + 1,
            name,
            amount,
        };
        state.fragment.push(expense.fragment_line());
        state.expenses.push(expense.clone());
        expense
    }

    async fn list(&self) -> Vec<Expense> {
        self.state.read().await.expenses.clone()
    }

    async fn render_html(&self) -> String {
        render_fragment(&self.state.read().await.fragment)
    }

    async fn total(&self) -> f64 {
        self.state
            .read()
            .await
            .expenses
            .iter()
            .filter_map(|e| e.amount.as_number())
            .sum()
    }

    async fn reset(&self) {
        let mut state = self.state.write().await;
        *state = LedgerState::default();
    }
}
