use tracing::{info, warn};
use uuid::Uuid;

use super::{LedgerRecord, OwnedRepo};
use crate::error::AppError;

pub async fn list<T: LedgerRecord>(
    repo: &dyn OwnedRepo<T>,
    owner_id: Uuid,
) -> Result<Vec<T>, AppError> {
    Ok(repo.list(owner_id).await?)
}

/// Stores `new` under a fresh id owned by `owner_id`.
pub async fn create<T: LedgerRecord>(
    repo: &dyn OwnedRepo<T>,
    owner_id: Uuid,
    new: T::New,
) -> Result<T, AppError> {
    let id = Uuid::new_v4();
    let row = repo.insert(owner_id, id, new).await?;
    info!(user_id = %owner_id, %id, table = T::TABLE, "ledger row created");
    Ok(row)
}

/// Deletes the row `raw_id` if the caller owns it.
///
/// Malformed ids, missing rows and rows owned by someone else all come back
/// as the same `NotFound`.
pub async fn delete<T: LedgerRecord>(
    repo: &dyn OwnedRepo<T>,
    owner_id: Uuid,
    raw_id: &str,
) -> Result<(), AppError> {
    let not_found = || AppError::NotFound(format!("{} not found", T::LABEL));

    let Ok(id) = Uuid::parse_str(raw_id) else {
        warn!(user_id = %owner_id, raw_id, table = T::TABLE, "delete with malformed id");
        return Err(not_found());
    };

    if !repo.delete(owner_id, id).await? {
        warn!(user_id = %owner_id, %id, table = T::TABLE, "delete missed");
        return Err(not_found());
    }
    info!(user_id = %owner_id, %id, table = T::TABLE, "ledger row deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        accounts::repo_types::{AccountBill, NewAccountBill},
        entries::repo_types::{Entry, NewEntry},
        memory::MemoryStore,
    };
    use rust_decimal::Decimal;
    use time::macros::date;

    fn entry(name: &str, cents: i64, date: time::Date) -> NewEntry {
        NewEntry {
            name: name.into(),
            value: Decimal::new(cents, 2),
            date,
        }
    }

    fn bill(name: &str) -> NewAccountBill {
        NewAccountBill {
            name: name.into(),
            planned_value: Decimal::new(10000, 2),
            paid_value: None,
            paid_date: None,
            is_paid: false,
        }
    }

    #[tokio::test]
    async fn create_assigns_fresh_id_and_owner() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();
        let a = create::<Entry>(&*store.entries, owner, entry("Salary", 500000, date!(2024 - 03 - 05)))
            .await
            .unwrap();
        let b = create::<Entry>(&*store.entries, owner, entry("Salary", 500000, date!(2024 - 03 - 05)))
            .await
            .unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.user_id, owner);
        assert_eq!(a.value, Decimal::new(500000, 2));
    }

    #[tokio::test]
    async fn list_is_scoped_to_owner_and_newest_first() {
        let store = MemoryStore::new();
        let ana = Uuid::new_v4();
        let bob = Uuid::new_v4();
        create::<Entry>(&*store.entries, ana, entry("Old", 100, date!(2024 - 01 - 01))).await.unwrap();
        create::<Entry>(&*store.entries, ana, entry("New", 100, date!(2024 - 02 - 01))).await.unwrap();
        create::<Entry>(&*store.entries, bob, entry("Bob's", 100, date!(2024 - 03 - 01))).await.unwrap();

        let rows = list::<Entry>(&*store.entries, ana).await.unwrap();
        let names: Vec<_> = rows.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["New", "Old"]);
    }

    #[tokio::test]
    async fn bills_list_by_name() {
        let store = MemoryStore::new();
        let ana = Uuid::new_v4();
        for name in ["Water", "Electricity", "Rent"] {
            create::<AccountBill>(&*store.bills, ana, bill(name)).await.unwrap();
        }
        let rows = list::<AccountBill>(&*store.bills, ana).await.unwrap();
        let names: Vec<_> = rows.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Electricity", "Rent", "Water"]);
    }

    #[tokio::test]
    async fn delete_of_foreign_row_is_not_found_and_keeps_row() {
        let store = MemoryStore::new();
        let ana = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let row = create::<Entry>(&*store.entries, ana, entry("Salary", 100, date!(2024 - 01 - 01)))
            .await
            .unwrap();

        let err = delete::<Entry>(&*store.entries, bob, &row.id.to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(list::<Entry>(&*store.entries, ana).await.unwrap().len(), 1);

        delete::<Entry>(&*store.entries, ana, &row.id.to_string()).await.unwrap();
        assert!(list::<Entry>(&*store.entries, ana).await.unwrap().is_empty());

        // Second delete of the same id is rejected, not a no-op.
        let err = delete::<Entry>(&*store.entries, ana, &row.id.to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_with_malformed_id_is_not_found() {
        let store = MemoryStore::new();
        let err = delete::<Entry>(&*store.entries, Uuid::new_v4(), "not-a-uuid")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
