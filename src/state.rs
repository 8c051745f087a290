use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    accounts::repo_types::AccountBill,
    auth::repo::{PgUserStore, UserStore},
    config::AppConfig,
    dashboard::repo::{PgSummaryStore, SummaryStore},
    entries::repo_types::Entry,
    expenses::repo_types::Expense,
    ledger::{OwnedRepo, PgLedger},
    savings::repo_types::Saving,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserStore>,
    pub entries: Arc<dyn OwnedRepo<Entry>>,
    pub expenses: Arc<dyn OwnedRepo<Expense>>,
    pub bills: Arc<dyn OwnedRepo<AccountBill>>,
    pub savings: Arc<dyn OwnedRepo<Saving>>,
    pub summaries: Arc<dyn SummaryStore>,
}

impl AppState {
    /// Postgres-backed stores sharing one pool.
    pub fn from_pool(db: PgPool, config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            users: Arc::new(PgUserStore::new(db.clone())),
            entries: Arc::new(PgLedger::<Entry>::new(db.clone())),
            expenses: Arc::new(PgLedger::<Expense>::new(db.clone())),
            bills: Arc::new(PgLedger::<AccountBill>::new(db.clone())),
            savings: Arc::new(PgLedger::<Saving>::new(db.clone())),
            summaries: Arc::new(PgSummaryStore::new(db)),
        }
    }

    #[cfg(test)]
    pub fn fake() -> (Self, Arc<crate::memory::MemoryStore>) {
        let store = Arc::new(crate::memory::MemoryStore::new());
        let config = AppConfig::from_lookup(|key| match key {
            "JWT_SECRET" => Some("test-secret".into()),
            _ => None,
        })
        .expect("test config");

        let state = Self {
            config: Arc::new(config),
            users: store.clone(),
            entries: store.entries.clone(),
            expenses: store.expenses.clone(),
            bills: store.bills.clone(),
            savings: store.savings.clone(),
            summaries: store.clone(),
        };
        (state, store)
    }
}
