use rust_decimal::Decimal;
use sqlx::{postgres::PgArguments, query::QueryAs, FromRow, Postgres};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::ledger::LedgerRecord;

/// Expense row.
#[derive(Debug, Clone, FromRow)]
pub struct Expense {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: String,
    pub payment_method: String, // "Credit", "Debit", "Pix", ...
    pub value: Decimal,
    pub date: Date,
    pub essential: bool,
    pub installments: Option<String>, // free text such as "2/10"
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewExpense {
    pub category: String,
    pub payment_method: String,
    pub value: Decimal,
    pub date: Date,
    pub essential: bool,
    pub installments: Option<String>,
}

impl LedgerRecord for Expense {
    type New = NewExpense;

    const LABEL: &'static str = "Expense";
    const TABLE: &'static str = "expenses";
    const COLUMNS: &'static str = "id, user_id, category, payment_method, value, date, essential, \
                                   installments, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "category",
        "payment_method",
        "value",
        "date",
        "essential",
        "installments",
    ];
    const ORDER_BY: &'static str = "date DESC, created_at DESC";

    fn bind_new<'q>(
        query: QueryAs<'q, Postgres, Self, PgArguments>,
        new: NewExpense,
    ) -> QueryAs<'q, Postgres, Self, PgArguments> {
        query
            .bind(new.category)
            .bind(new.payment_method)
            .bind(new.value)
            .bind(new.date)
            .bind(new.essential)
            .bind(new.installments)
    }
}
