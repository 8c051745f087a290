use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::{
    accounts::repo_types::{AccountBill, NewAccountBill},
    error::AppError,
    money,
};

const MAX_NAME_LEN: usize = 150;

#[derive(Debug, Deserialize)]
pub struct CreateAccountBillRequest {
    pub name: String,
    pub planned_value: Decimal,
    #[serde(default)]
    pub paid_value: Option<Decimal>,
    #[serde(default, with = "crate::iso_date::option")]
    pub paid_date: Option<Date>,
    #[serde(default)]
    pub is_paid: bool,
}

impl CreateAccountBillRequest {
    pub fn validate(self) -> Result<NewAccountBill, AppError> {
        Ok(NewAccountBill {
            name: money::text("name", &self.name, MAX_NAME_LEN)?,
            planned_value: money::amount("planned_value", self.planned_value)?,
            paid_value: self
                .paid_value
                .map(|v| money::amount("paid_value", v))
                .transpose()?,
            paid_date: self.paid_date,
            is_paid: self.is_paid,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct AccountBillResponse {
    pub id: Uuid,
    pub name: String,
    pub planned_value: f64,
    pub paid_value: Option<f64>,
    #[serde(with = "crate::iso_date::option")]
    pub paid_date: Option<Date>,
    pub is_paid: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<AccountBill> for AccountBillResponse {
    fn from(b: AccountBill) -> Self {
        Self {
            id: b.id,
            name: b.name,
            planned_value: money::to_display(b.planned_value),
            paid_value: b.paid_value.map(money::to_display),
            paid_date: b.paid_date,
            is_paid: b.is_paid,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}
