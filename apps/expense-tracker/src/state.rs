use std::sync::Arc;

use quill_core::services::ExpenseService;
use quill_infra::InMemoryExpenseLedger;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub expenses: ExpenseService,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            expenses: ExpenseService::new(Arc::new(InMemoryExpenseLedger::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
