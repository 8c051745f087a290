use rust_decimal::Decimal;
use sqlx::{postgres::PgArguments, query::QueryAs, FromRow, Postgres};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::ledger::LedgerRecord;

/// Recurring bill row. `paid_value` and `paid_date` are independent of `is_paid`.
#[derive(Debug, Clone, FromRow)]
pub struct AccountBill {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub planned_value: Decimal,
    pub paid_value: Option<Decimal>,
    pub paid_date: Option<Date>,
    pub is_paid: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewAccountBill {
    pub name: String,
    pub planned_value: Decimal,
    pub paid_value: Option<Decimal>,
    pub paid_date: Option<Date>,
    pub is_paid: bool,
}

impl LedgerRecord for AccountBill {
    type New = NewAccountBill;

    const LABEL: &'static str = "Bill";
    const TABLE: &'static str = "account_bills";
    const COLUMNS: &'static str = "id, user_id, name, planned_value, paid_value, paid_date, \
                                   is_paid, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] =
        &["name", "planned_value", "paid_value", "paid_date", "is_paid"];
    const ORDER_BY: &'static str = "name ASC, created_at DESC";

    fn bind_new<'q>(
        query: QueryAs<'q, Postgres, Self, PgArguments>,
        new: NewAccountBill,
    ) -> QueryAs<'q, Postgres, Self, PgArguments> {
        query
            .bind(new.name)
            .bind(new.planned_value)
            .bind(new.paid_value)
            .bind(new.paid_date)
            .bind(new.is_paid)
    }
}
