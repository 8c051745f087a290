use rust_decimal::Decimal;
use sqlx::FromRow;

/// One `GROUP BY` bucket: the grouping key and the summed value.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct GroupTotal {
    pub key: String,
    pub total: Decimal,
}

/// Raw sums for one owner and month, every missing sum already zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyTotals {
    pub entries: Decimal,
    pub expenses: Decimal,
    pub expenses_by_payment_method: Vec<GroupTotal>,
    pub expenses_by_category: Vec<GroupTotal>,
    /// Lifetime, not windowed.
    pub bills_planned: Decimal,
    /// Lifetime, not windowed; only bills flagged paid.
    pub bills_paid: Decimal,
    pub savings: Decimal,
}
