use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use super::{repo::SummaryStore, repo_types::GroupTotal, window::MonthWindow};
use crate::error::AppError;

/// Monthly figures, still in fixed-point.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub total_entries: Decimal,
    pub total_expenses: Decimal,
    pub remaining_to_spend: Decimal,
    pub expenses_by_payment_method: Vec<GroupTotal>,
    pub expenses_by_category: Vec<GroupTotal>,
    pub total_planned: Decimal,
    pub total_paid: Decimal,
    pub savings_month: Decimal,
}

/// Income, spending and savings for `year`/`month`, plus the lifetime bill totals.
///
/// Bills are a standing balance rather than a monthly flow, so
/// `total_planned`/`total_paid` ignore the window on purpose.
pub async fn compute_monthly_summary(
    store: &dyn SummaryStore,
    owner_id: Uuid,
    year: i32,
    month: u8,
) -> Result<MonthlySummary, AppError> {
    let window = MonthWindow::new(year, month)?;
    let totals = store.monthly_totals(owner_id, window).await?;

    let summary = MonthlySummary {
        total_entries: totals.entries,
        total_expenses: totals.expenses,
        remaining_to_spend: totals.entries - totals.expenses,
        expenses_by_payment_method: totals.expenses_by_payment_method,
        expenses_by_category: totals.expenses_by_category,
        total_planned: totals.bills_planned,
        total_paid: totals.bills_paid,
        savings_month: totals.savings,
    };
    debug!(user_id = %owner_id, year, month, remaining = %summary.remaining_to_spend, "monthly summary");
    Ok(summary)
}

/// In-window expense totals per category, largest first.
pub async fn summary_by_category(
    store: &dyn SummaryStore,
    owner_id: Uuid,
    year: i32,
    month: u8,
) -> Result<Vec<GroupTotal>, AppError> {
    let window = MonthWindow::new(year, month)?;
    Ok(store.expense_totals_by_category(owner_id, window).await?)
}
