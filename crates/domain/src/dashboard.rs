use serde::{Deserialize, Serialize};

use crate::record::{ExtraFields, RecordId};

/// Headline platform metrics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardMetrics {
    /// Registered members.
    pub total_users: u64,
    /// Registered trainers.
    pub total_trainers: u64,
    /// Bookings made.
    pub total_bookings: u64,
    /// Gross revenue in baht.
    pub total_revenue: f64,
    /// Month-over-month growth, percent.
    pub monthly_growth: f64,
    /// Uninterpreted platform fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// One entry in the recent activity feed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Activity {
    /// Platform identifier.
    #[serde(alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Activity kind.
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable summary.
    pub message: String,
    /// Acting user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// When it happened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Uninterpreted platform fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Trainer ranked by bookings and revenue.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopTrainer {
    /// Platform identifier.
    #[serde(alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Display name.
    pub name: String,
    /// Average rating out of five.
    pub rating: f64,
    /// Completed sessions.
    pub total_sessions: u64,
    /// Revenue in baht.
    pub revenue: f64,
    /// Contact phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Avatar URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Uninterpreted platform fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Operational counters shown next to the metrics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuickStats {
    /// Trainer applications awaiting review.
    pub pending_approvals: u64,
    /// Sessions happening now.
    pub active_sessions: u64,
    /// Sign-ups since midnight.
    pub new_signups_today: u64,
    /// Open support tickets.
    pub open_tickets: u64,
    /// Uninterpreted platform fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// One point of the revenue chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevenuePoint {
    /// Bucket label.
    #[serde(alias = "month", alias = "date")]
    pub label: String,
    /// Revenue in baht.
    pub revenue: f64,
    /// Bookings in the bucket.
    pub bookings: u64,
}

/// Everything the dashboard renders, fetched in one batch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Headline metrics.
    pub metrics: DashboardMetrics,
    /// Recent activity.
    pub activities: Vec<Activity>,
    /// Best performing trainers.
    pub top_trainers: Vec<TopTrainer>,
    /// Operational counters.
    pub quick_stats: QuickStats,
    /// Revenue series.
    pub revenue_chart: Vec<RevenuePoint>,
    /// Widgets that fell back to defaults because their fetch failed.
    pub degraded_widgets: Vec<String>,
}
