//! In-memory implementations of the store traits, used by tests to drive the
//! services and the router without a database.

use std::{cmp::Ordering, collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use rust_decimal::Decimal;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    accounts::repo_types::{AccountBill, NewAccountBill},
    auth::{
        repo::UserStore,
        repo_types::{NewUser, User},
    },
    dashboard::{
        repo::SummaryStore,
        repo_types::{GroupTotal, MonthlyTotals},
        window::MonthWindow,
    },
    entries::repo_types::{Entry, NewEntry},
    expenses::repo_types::{Expense, NewExpense},
    ledger::{LedgerRecord, OwnedRepo},
    savings::repo_types::{NewSaving, Saving},
};

/// What the in-memory ledger needs on top of [`LedgerRecord`].
pub trait MemoryRecord: LedgerRecord + Clone {
    fn build(id: Uuid, owner_id: Uuid, new: Self::New, now: OffsetDateTime) -> Self;
    fn id(&self) -> Uuid;
    fn owner_id(&self) -> Uuid;
    /// Mirrors the entity's `ORDER BY`.
    fn list_order(a: &Self, b: &Self) -> Ordering;
}

pub struct MemoryLedger<T> {
    rows: Mutex<Vec<T>>,
}

impl<T: MemoryRecord> MemoryLedger<T> {
    fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }

    async fn owned_by(&self, owner_id: Uuid) -> Vec<T> {
        self.rows
            .lock()
            .await
            .iter()
            .filter(|r| r.owner_id() == owner_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl<T: MemoryRecord> OwnedRepo<T> for MemoryLedger<T> {
    async fn list(&self, owner_id: Uuid) -> anyhow::Result<Vec<T>> {
        let mut rows = self.owned_by(owner_id).await;
        rows.sort_by(T::list_order);
        Ok(rows)
    }

    async fn insert(&self, owner_id: Uuid, id: Uuid, new: T::New) -> anyhow::Result<T> {
        let row = T::build(id, owner_id, new, OffsetDateTime::now_utc());
        self.rows.lock().await.push(row.clone());
        Ok(row)
    }

    async fn delete(&self, owner_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|r| !(r.id() == id && r.owner_id() == owner_id));
        Ok(rows.len() != before)
    }
}

fn newest_first(a: (time::Date, OffsetDateTime), b: (time::Date, OffsetDateTime)) -> Ordering {
    b.cmp(&a)
}

impl MemoryRecord for Entry {
    fn build(id: Uuid, user_id: Uuid, new: NewEntry, now: OffsetDateTime) -> Self {
        Self {
            id,
            user_id,
            name: new.name,
            value: new.value,
            date: new.date,
            created_at: now,
            updated_at: now,
        }
    }
    fn id(&self) -> Uuid {
        self.id
    }
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
    fn list_order(a: &Self, b: &Self) -> Ordering {
        newest_first((a.date, a.created_at), (b.date, b.created_at))
    }
}

impl MemoryRecord for Expense {
    fn build(id: Uuid, user_id: Uuid, new: NewExpense, now: OffsetDateTime) -> Self {
        Self {
            id,
            user_id,
            category: new.category,
            payment_method: new.payment_method,
            value: new.value,
            date: new.date,
            essential: new.essential,
            installments: new.installments,
            created_at: now,
            updated_at: now,
        }
    }
    fn id(&self) -> Uuid {
        self.id
    }
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
    fn list_order(a: &Self, b: &Self) -> Ordering {
        newest_first((a.date, a.created_at), (b.date, b.created_at))
    }
}

impl MemoryRecord for AccountBill {
    fn build(id: Uuid, user_id: Uuid, new: NewAccountBill, now: OffsetDateTime) -> Self {
        Self {
            id,
            user_id,
            name: new.name,
            planned_value: new.planned_value,
            paid_value: new.paid_value,
            paid_date: new.paid_date,
            is_paid: new.is_paid,
            created_at: now,
            updated_at: now,
        }
    }
    fn id(&self) -> Uuid {
        self.id
    }
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
    fn list_order(a: &Self, b: &Self) -> Ordering {
        a.name
            .cmp(&b.name)
            .then_with(|| b.created_at.cmp(&a.created_at))
    }
}

impl MemoryRecord for Saving {
    fn build(id: Uuid, user_id: Uuid, new: NewSaving, now: OffsetDateTime) -> Self {
        Self {
            id,
            user_id,
            name: new.name,
            saving_type: new.saving_type,
            value: new.value,
            date: new.date,
            created_at: now,
            updated_at: now,
        }
    }
    fn id(&self) -> Uuid {
        self.id
    }
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
    fn list_order(a: &Self, b: &Self) -> Ordering {
        newest_first((a.date, a.created_at), (b.date, b.created_at))
    }
}

pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    pub entries: Arc<MemoryLedger<Entry>>,
    pub expenses: Arc<MemoryLedger<Expense>>,
    pub bills: Arc<MemoryLedger<AccountBill>>,
    pub savings: Arc<MemoryLedger<Saving>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            entries: Arc::new(MemoryLedger::new()),
            expenses: Arc::new(MemoryLedger::new()),
            bills: Arc::new(MemoryLedger::new()),
            savings: Arc::new(MemoryLedger::new()),
        }
    }

    pub async fn set_active(&self, email: &str, active: bool) {
        for user in self.users.lock().await.iter_mut() {
            if user.email == email {
                user.is_active = active;
            }
        }
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn insert_first_admin(&self, new: NewUser) -> anyhow::Result<Option<User>> {
        let mut users = self.users.lock().await;
        if !users.is_empty() {
            return Ok(None);
        }
        let now = OffsetDateTime::now_utc();
        let user = User {
            id: new.id,
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            is_admin: true,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(Some(user))
    }
}

fn group_by<F>(rows: &[Expense], key: F) -> Vec<GroupTotal>
where
    F: Fn(&Expense) -> &str,
{
    let mut groups: BTreeMap<String, Decimal> = BTreeMap::new();
    for row in rows {
        *groups.entry(key(row).to_string()).or_default() += row.value;
    }
    groups
        .into_iter()
        .map(|(key, total)| GroupTotal { key, total })
        .collect()
}

impl MemoryStore {
    async fn expenses_in(&self, owner_id: Uuid, window: MonthWindow) -> Vec<Expense> {
        let mut rows = self.expenses.owned_by(owner_id).await;
        rows.retain(|e| window.contains(e.date));
        rows
    }
}

#[async_trait]
impl SummaryStore for MemoryStore {
    async fn monthly_totals(
        &self,
        owner_id: Uuid,
        window: MonthWindow,
    ) -> anyhow::Result<MonthlyTotals> {
        let entries: Decimal = self
            .entries
            .owned_by(owner_id)
            .await
            .iter()
            .filter(|e| window.contains(e.date))
            .map(|e| e.value)
            .sum();
        let expenses = self.expenses_in(owner_id, window).await;
        let bills = self.bills.owned_by(owner_id).await;
        let savings: Decimal = self
            .savings
            .owned_by(owner_id)
            .await
            .iter()
            .filter(|s| window.contains(s.date))
            .map(|s| s.value)
            .sum();

        Ok(MonthlyTotals {
            entries,
            expenses: expenses.iter().map(|e| e.value).sum(),
            expenses_by_payment_method: group_by(&expenses, |e| e.payment_method.as_str()),
            expenses_by_category: group_by(&expenses, |e| e.category.as_str()),
            bills_planned: bills.iter().map(|b| b.planned_value).sum(),
            bills_paid: bills
                .iter()
                .filter(|b| b.is_paid)
                .map(|b| b.paid_value.unwrap_or_default())
                .sum(),
            savings,
        })
    }

    async fn expense_totals_by_category(
        &self,
        owner_id: Uuid,
        window: MonthWindow,
    ) -> anyhow::Result<Vec<GroupTotal>> {
        let expenses = self.expenses_in(owner_id, window).await;
        let mut totals = group_by(&expenses, |e| e.category.as_str());
        totals.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.key.cmp(&b.key)));
        Ok(totals)
    }
}
