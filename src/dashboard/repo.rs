use anyhow::Context;
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use super::{
    repo_types::{GroupTotal, MonthlyTotals},
    window::MonthWindow,
};

/// Read-only aggregate queries over the ledger tables.
#[async_trait]
pub trait SummaryStore: Send + Sync {
    async fn monthly_totals(
        &self,
        owner_id: Uuid,
        window: MonthWindow,
    ) -> anyhow::Result<MonthlyTotals>;

    /// In-window expense totals per category, largest first.
    async fn expense_totals_by_category(
        &self,
        owner_id: Uuid,
        window: MonthWindow,
    ) -> anyhow::Result<Vec<GroupTotal>>;
}

#[derive(Clone)]
pub struct PgSummaryStore {
    db: PgPool,
}

impl PgSummaryStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

async fn windowed_sum(
    conn: &mut PgConnection,
    table: &str,
    owner_id: Uuid,
    window: MonthWindow,
) -> anyhow::Result<Decimal> {
    let sql = format!(
        "SELECT COALESCE(SUM(value), 0) FROM {table} \
         WHERE user_id = $1 AND date BETWEEN $2 AND $3"
    );
    sqlx::query_scalar::<_, Decimal>(&sql)
        .bind(owner_id)
        .bind(window.start)
        .bind(window.end)
        .fetch_one(conn)
        .await
        .with_context(|| format!("sum {table}"))
}

async fn expense_groups(
    conn: &mut PgConnection,
    column: &str,
    order_by: &str,
    owner_id: Uuid,
    window: MonthWindow,
) -> anyhow::Result<Vec<GroupTotal>> {
    let sql = format!(
        "SELECT {column} AS key, COALESCE(SUM(value), 0) AS total FROM expenses \
         WHERE user_id = $1 AND date BETWEEN $2 AND $3 \
         GROUP BY {column} ORDER BY {order_by}"
    );
    sqlx::query_as::<_, GroupTotal>(&sql)
        .bind(owner_id)
        .bind(window.start)
        .bind(window.end)
        .fetch_all(conn)
        .await
        .with_context(|| format!("expenses grouped by {column}"))
}

#[async_trait]
impl SummaryStore for PgSummaryStore {
    async fn monthly_totals(
        &self,
        owner_id: Uuid,
        window: MonthWindow,
    ) -> anyhow::Result<MonthlyTotals> {
        let mut tx = self.db.begin().await.context("begin tx")?;
        // One snapshot for every figure on the dashboard.
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await
            .context("set isolation")?;

        let entries = windowed_sum(&mut tx, "entries", owner_id, window).await?;
        let expenses = windowed_sum(&mut tx, "expenses", owner_id, window).await?;
        let expenses_by_payment_method =
            expense_groups(&mut tx, "payment_method", "key ASC", owner_id, window).await?;
        let expenses_by_category =
            expense_groups(&mut tx, "category", "key ASC", owner_id, window).await?;

        let (bills_planned, bills_paid): (Decimal, Decimal) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(planned_value), 0),
                   COALESCE(SUM(paid_value) FILTER (WHERE is_paid), 0)
              FROM account_bills
             WHERE user_id = $1
            "#,
        )
        .bind(owner_id)
        .fetch_one(&mut *tx)
        .await
        .context("sum account_bills")?;

        let savings = windowed_sum(&mut tx, "savings", owner_id, window).await?;

        tx.commit().await.context("commit tx")?;

        Ok(MonthlyTotals {
            entries,
            expenses,
            expenses_by_payment_method,
            expenses_by_category,
            bills_planned,
            bills_paid,
            savings,
        })
    }

    async fn expense_totals_by_category(
        &self,
        owner_id: Uuid,
        window: MonthWindow,
    ) -> anyhow::Result<Vec<GroupTotal>> {
        let mut conn = self.db.acquire().await.context("acquire connection")?;
        expense_groups(&mut conn, "category", "total DESC, key ASC", owner_id, window).await
    }
}
