use serde::{Deserialize, Serialize};

use crate::record::{ExtraFields, RecordId};

/// Money movement recorded by the platform.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    /// Platform identifier.
    #[serde(alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Movement kind (`booking`, `payout`, `refund`, `fee`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Amount in baht; negative for outgoing money.
    pub amount: f64,
    /// Settlement status.
    pub status: String,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Paying customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Receiving trainer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer_name: Option<String>,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Uninterpreted platform fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Finance overview totals in baht.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinanceSummary {
    /// Gross booking revenue.
    pub total_revenue: f64,
    /// Paid out to trainers.
    pub total_payouts: f64,
    /// Owed to trainers but not yet paid.
    pub pending_payouts: f64,
    /// Platform commission.
    pub platform_fees: f64,
    /// Revenue minus payouts and refunds.
    pub net_income: f64,
    /// Uninterpreted platform fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}
