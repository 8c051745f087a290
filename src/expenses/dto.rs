use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::{
    error::AppError,
    expenses::repo_types::{Expense, NewExpense},
    money,
};

const MAX_CATEGORY_LEN: usize = 100;
const MAX_PAYMENT_METHOD_LEN: usize = 30;
const MAX_INSTALLMENTS_LEN: usize = 20;

#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    pub category: String,
    pub payment_method: String,
    pub value: Decimal,
    #[serde(with = "crate::iso_date")]
    pub date: Date,
    #[serde(default)]
    pub essential: bool,
    #[serde(default)]
    pub installments: Option<String>,
}

impl CreateExpenseRequest {
    pub fn validate(self) -> Result<NewExpense, AppError> {
        Ok(NewExpense {
            category: money::text("category", &self.category, MAX_CATEGORY_LEN)?,
            payment_method: money::text(
                "payment_method",
                &self.payment_method,
                MAX_PAYMENT_METHOD_LEN,
            )?,
            value: money::amount("value", self.value)?,
            date: self.date,
            essential: self.essential,
            installments: money::optional_text(
                "installments",
                self.installments.as_deref(),
                MAX_INSTALLMENTS_LEN,
            )?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    pub id: Uuid,
    pub category: String,
    pub payment_method: String,
    pub value: f64,
    #[serde(with = "crate::iso_date")]
    pub date: Date,
    pub essential: bool,
    pub installments: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Expense> for ExpenseResponse {
    fn from(e: Expense) -> Self {
        Self {
            id: e.id,
            category: e.category,
            payment_method: e.payment_method,
            value: money::to_display(e.value),
            date: e.date,
            essential: e.essential,
            installments: e.installments,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

/// `?year=&month=` for the category summary.
#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    pub year: i32,
    pub month: u8,
}
