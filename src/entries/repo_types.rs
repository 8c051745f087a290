use rust_decimal::Decimal;
use sqlx::{postgres::PgArguments, query::QueryAs, FromRow, Postgres};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::ledger::LedgerRecord;

/// Income entry row.
#[derive(Debug, Clone, FromRow)]
pub struct Entry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub value: Decimal,
    pub date: Date,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewEntry {
    pub name: String,
    pub value: Decimal,
    pub date: Date,
}

impl LedgerRecord for Entry {
    type New = NewEntry;

    const LABEL: &'static str = "Entry";
    const TABLE: &'static str = "entries";
    const COLUMNS: &'static str = "id, user_id, name, value, date, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] = &["name", "value", "date"];
    const ORDER_BY: &'static str = "date DESC, created_at DESC";

    fn bind_new<'q>(
        query: QueryAs<'q, Postgres, Self, PgArguments>,
        new: NewEntry,
    ) -> QueryAs<'q, Postgres, Self, PgArguments> {
        query.bind(new.name).bind(new.value).bind(new.date)
    }
}
