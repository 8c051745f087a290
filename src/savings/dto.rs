use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::{
    error::AppError,
    money,
    savings::repo_types::{NewSaving, Saving},
};

const MAX_NAME_LEN: usize = 150;
const MAX_SAVING_TYPE_LEN: usize = 80;

#[derive(Debug, Deserialize)]
pub struct CreateSavingRequest {
    pub name: String,
    pub saving_type: String,
    pub value: Decimal,
    #[serde(with = "crate::iso_date")]
    pub date: Date,
}

impl CreateSavingRequest {
    pub fn validate(self) -> Result<NewSaving, AppError> {
        Ok(NewSaving {
            name: money::text("name", &self.name, MAX_NAME_LEN)?,
            saving_type: money::text("saving_type", &self.saving_type, MAX_SAVING_TYPE_LEN)?,
            value: money::amount("value", self.value)?,
            date: self.date,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct SavingResponse {
    pub id: Uuid,
    pub name: String,
    pub saving_type: String,
    pub value: f64,
    #[serde(with = "crate::iso_date")]
    pub date: Date,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Saving> for SavingResponse {
    fn from(s: Saving) -> Self {
        Self {
            id: s.id,
            name: s.name,
            saving_type: s.saving_type,
            value: money::to_display(s.value),
            date: s.date,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}
