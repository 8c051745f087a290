use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::{
    entries::repo_types::{Entry, NewEntry},
    error::AppError,
    money,
};

const MAX_NAME_LEN: usize = 150;

#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    pub name: String,
    pub value: Decimal,
    #[serde(with = "crate::iso_date")]
    pub date: Date,
}

impl CreateEntryRequest {
    pub fn validate(self) -> Result<NewEntry, AppError> {
        Ok(NewEntry {
            name: money::text("name", &self.name, MAX_NAME_LEN)?,
            value: money::amount("value", self.value)?,
            date: self.date,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub id: Uuid,
    pub name: String,
    pub value: f64,
    #[serde(with = "crate::iso_date")]
    pub date: Date,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Entry> for EntryResponse {
    fn from(e: Entry) -> Self {
        Self {
            id: e.id,
            name: e.name,
            value: money::to_display(e.value),
            date: e.date,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}
