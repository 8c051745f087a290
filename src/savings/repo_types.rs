use rust_decimal::Decimal;
use sqlx::{postgres::PgArguments, query::QueryAs, FromRow, Postgres};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::ledger::LedgerRecord;

/// Savings / investment contribution row.
#[derive(Debug, Clone, FromRow)]
pub struct Saving {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub saving_type: String, // e.g. "Emergency fund"
    pub value: Decimal,
    pub date: Date,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewSaving {
    pub name: String,
    pub saving_type: String,
    pub value: Decimal,
    pub date: Date,
}

impl LedgerRecord for Saving {
    type New = NewSaving;

    const LABEL: &'static str = "Saving";
    const TABLE: &'static str = "savings";
    const COLUMNS: &'static str =
        "id, user_id, name, saving_type, value, date, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] = &["name", "saving_type", "value", "date"];
    const ORDER_BY: &'static str = "date DESC, created_at DESC";

    fn bind_new<'q>(
        query: QueryAs<'q, Postgres, Self, PgArguments>,
        new: NewSaving,
    ) -> QueryAs<'q, Postgres, Self, PgArguments> {
        query
            .bind(new.name)
            .bind(new.saving_type)
            .bind(new.value)
            .bind(new.date)
    }
}
