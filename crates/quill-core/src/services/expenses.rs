use std::sync::Arc;

use crate::domain::{Expense, ExpenseTotal, NewExpense};
use crate::error::DomainError;
use crate::ports::ExpenseLedger;

/// Expense tracking on top of an injected ledger.
#[derive(Clone)]
pub struct ExpenseService {
    ledger: Arc<dyn ExpenseLedger>,
}

impl ExpenseService {
    pub fn new(ledger: Arc<dyn ExpenseLedger>) -> Self {
        Self { ledger }
    }

    pub async fn record(&self, input: NewExpense) -> Result<Expense, DomainError> {
        let (name, amount) = input.validate()?;
        let expense = self.ledger.record(name, amount).await;
        tracing::info!(expense_id = expense.id, "Expense recorded");
        Ok(expense)
    }

    pub async fn list(&self) -> Vec<Expense> {
        self.ledger.list().await
    }

    pub async fn render_html(&self) -> String {
        self.ledger.render_html().await
    }

    pub async fn total(&self) -> ExpenseTotal {
        ExpenseTotal {
            total: self.ledger.total().await,
        }
    }

    pub async fn reset(&self) {
        self.ledger.reset().await;
        tracing::info!("Expense ledger reset");
    }
}
