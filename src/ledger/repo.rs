use std::marker::PhantomData;

use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::LedgerRecord;

/// Storage for one ledger entity, always filtered by owner.
#[async_trait]
pub trait OwnedRepo<T: LedgerRecord>: Send + Sync {
    /// All rows owned by `owner_id`, in the entity's list order.
    async fn list(&self, owner_id: Uuid) -> anyhow::Result<Vec<T>>;

    async fn insert(&self, owner_id: Uuid, id: Uuid, new: T::New) -> anyhow::Result<T>;

    /// Removes the row only if `owner_id` owns it. Returns whether a row was removed.
    async fn delete(&self, owner_id: Uuid, id: Uuid) -> anyhow::Result<bool>;
}

pub struct PgLedger<T> {
    db: PgPool,
    _record: PhantomData<fn() -> T>,
}

impl<T> PgLedger<T> {
    pub fn new(db: PgPool) -> Self {
        Self {
            db,
            _record: PhantomData,
        }
    }
}

fn insert_sql<T: LedgerRecord>() -> String {
    let placeholders = (0..T::INSERT_COLUMNS.len())
        .map(|i| format!("${}", i + 3))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} (id, user_id, {}) VALUES ($1, $2, {}) RETURNING {}",
        T::TABLE,
        T::INSERT_COLUMNS.join(", "),
        placeholders,
        T::COLUMNS
    )
}

#[async_trait]
impl<T: LedgerRecord> OwnedRepo<T> for PgLedger<T> {
    async fn list(&self, owner_id: Uuid) -> anyhow::Result<Vec<T>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE user_id = $1 ORDER BY {}",
            T::COLUMNS,
            T::TABLE,
            T::ORDER_BY
        );
        let rows = sqlx::query_as::<_, T>(&sql)
            .bind(owner_id)
            .fetch_all(&self.db)
            .await
            .with_context(|| format!("list {}", T::TABLE))?;
        Ok(rows)
    }

    async fn insert(&self, owner_id: Uuid, id: Uuid, new: T::New) -> anyhow::Result<T> {
        let sql = insert_sql::<T>();
        let query = sqlx::query_as::<_, T>(&sql).bind(id).bind(owner_id);
        let row = T::bind_new(query, new)
            .fetch_one(&self.db)
            .await
            .with_context(|| format!("insert into {}", T::TABLE))?;
        Ok(row)
    }

    async fn delete(&self, owner_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let sql = format!("DELETE FROM {} WHERE id = $1 AND user_id = $2", T::TABLE);
        let res = sqlx::query(&sql)
            .bind(id)
            .bind(owner_id)
            .execute(&self.db)
            .await
            .with_context(|| format!("delete from {}", T::TABLE))?;
        Ok(res.rows_affected() > 0)
    }
}
