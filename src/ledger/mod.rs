//! Owner-scoped storage shared by the four ledger entities.
//!
//! Every entity table has the same shape at the edges: a UUID primary key,
//! a `user_id` owner reference and the usual timestamps. [`LedgerRecord`]
//! describes the entity-specific middle (columns, ordering, insert binds) and
//! [`repo::OwnedRepo`] is the only way handlers reach those tables, so every
//! read and write is filtered by the caller's id.

use serde::Serialize;
use sqlx::{postgres::PgArguments, postgres::PgRow, query::QueryAs, FromRow, Postgres};

pub mod repo;
pub mod services;

pub use repo::{OwnedRepo, PgLedger};

pub trait LedgerRecord: for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin + 'static {
    /// Validated payload for a new row, minus id and owner.
    type New: Send + 'static;

    /// Human name used in error messages.
    const LABEL: &'static str;
    const TABLE: &'static str;
    /// Columns selected and returned, in `FromRow` order.
    const COLUMNS: &'static str;
    /// Columns bound by [`LedgerRecord::bind_new`], in bind order.
    const INSERT_COLUMNS: &'static [&'static str];
    const ORDER_BY: &'static str;

    fn bind_new<'q>(
        query: QueryAs<'q, Postgres, Self, PgArguments>,
        new: Self::New,
    ) -> QueryAs<'q, Postgres, Self, PgArguments>;
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
}
