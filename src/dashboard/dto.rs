use serde::Serialize;

use crate::{
    dashboard::{repo_types::GroupTotal, services::MonthlySummary},
    money::to_display,
};

#[derive(Debug, Serialize)]
pub struct PaymentMethodValue {
    pub payment_method: String,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct CategoryValue {
    pub category: String,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct BillsTotals {
    pub total_planned: f64,
    pub total_paid: f64,
}

/// Body of `GET /dashboard/{year}/{month}`.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_entries: f64,
    pub total_expenses: f64,
    pub remaining_to_spend: f64,
    pub expenses_by_payment: Vec<PaymentMethodValue>,
    pub expenses_by_category: Vec<CategoryValue>,
    pub bills: BillsTotals,
    pub savings_month: f64,
}

impl From<MonthlySummary> for DashboardResponse {
    fn from(s: MonthlySummary) -> Self {
        Self {
            total_entries: to_display(s.total_entries),
            total_expenses: to_display(s.total_expenses),
            remaining_to_spend: to_display(s.remaining_to_spend),
            expenses_by_payment: s
                .expenses_by_payment_method
                .into_iter()
                .map(|g| PaymentMethodValue {
                    payment_method: g.key,
                    value: to_display(g.total),
                })
                .collect(),
            expenses_by_category: s
                .expenses_by_category
                .into_iter()
                .map(|g| CategoryValue {
                    category: g.key,
                    value: to_display(g.total),
                })
                .collect(),
            bills: BillsTotals {
                total_planned: to_display(s.total_planned),
                total_paid: to_display(s.total_paid),
            },
            savings_month: to_display(s.savings_month),
        }
    }
}

/// Item of `GET /expenses/summary/by-category`.
#[derive(Debug, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

impl From<GroupTotal> for CategoryTotal {
    fn from(g: GroupTotal) -> Self {
        Self {
            category: g.key,
            total: to_display(g.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn dashboard_json_shape() {
        let summary = MonthlySummary {
            total_entries: Decimal::new(100000, 2),
            total_expenses: Decimal::new(5050, 2),
            remaining_to_spend: Decimal::new(94950, 2),
            expenses_by_payment_method: vec![GroupTotal {
                key: "Pix".into(),
                total: Decimal::new(5050, 2),
            }],
            expenses_by_category: vec![GroupTotal {
                key: "Food".into(),
                total: Decimal::new(5050, 2),
            }],
            total_planned: Decimal::new(120000, 2),
            total_paid: Decimal::ZERO,
            savings_month: Decimal::new(10000, 2),
        };
        let body = serde_json::to_value(DashboardResponse::from(summary)).unwrap();
        assert_eq!(
            body,
            json!({
                "total_entries": 1000.0,
                "total_expenses": 50.5,
                "remaining_to_spend": 949.5,
                "expenses_by_payment": [{"payment_method": "Pix", "value": 50.5}],
                "expenses_by_category": [{"category": "Food", "value": 50.5}],
                "bills": {"total_planned": 1200.0, "total_paid": 0.0},
                "savings_month": 100.0
            })
        );
    }
}
