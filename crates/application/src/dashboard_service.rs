use std::sync::Arc;

use coachdesk_core::{AccessToken, AppError, AppResult};
use coachdesk_domain::{DashboardSnapshot, RevenuePoint, format_thai_phone};
use tracing::warn;

use crate::gateway_ports::DashboardGateway;

/// Revenue chart periods understood by the platform.
pub const REVENUE_PERIODS: [&str; 3] = ["week", "month", "year"];

/// Dashboard aggregation.
#[derive(Clone)]
pub struct DashboardService {
    dashboard: Arc<dyn DashboardGateway>,
}

impl DashboardService {
    /// Creates a dashboard service.
    #[must_use]
    pub fn new(dashboard: Arc<dyn DashboardGateway>) -> Self {
        Self { dashboard }
    }

    /// Fetches every widget concurrently.
    ///
    /// A failing widget falls back to its empty default and is listed in
    /// `degraded_widgets`. Only an expired session fails the whole batch.
    pub async fn snapshot(&self, token: &AccessToken) -> AppResult<DashboardSnapshot> {
        let (metrics, activities, top_trainers, quick_stats, revenue_chart) = tokio::join!(
            self.dashboard.metrics(token),
            self.dashboard.activities(token),
            self.dashboard.top_trainers(token),
            self.dashboard.quick_stats(token),
            self.dashboard.revenue_chart(token, None),
        );

        let mut degraded_widgets = Vec::new();
        let metrics = widget_or_default("metrics", metrics, &mut degraded_widgets)?;
        let activities = widget_or_default("activities", activities, &mut degraded_widgets)?;
        let mut top_trainers =
            widget_or_default("top_trainers", top_trainers, &mut degraded_widgets)?;
        let quick_stats = widget_or_default("quick_stats", quick_stats, &mut degraded_widgets)?;
        let revenue_chart =
            widget_or_default("revenue_chart", revenue_chart, &mut degraded_widgets)?;

        for trainer in &mut top_trainers {
            if let Some(phone) = trainer.phone.as_mut() {
                *phone = format_thai_phone(phone);
            }
        }

        Ok(DashboardSnapshot {
            metrics,
            activities,
            top_trainers,
            quick_stats,
            revenue_chart,
            degraded_widgets,
        })
    }

    /// Fetches the revenue series for one period.
    pub async fn revenue_chart(
        &self,
        token: &AccessToken,
        period: Option<&str>,
    ) -> AppResult<Vec<RevenuePoint>> {
        let period = period.map(str::trim).filter(|period| !period.is_empty());
        if let Some(period) = period
            && !REVENUE_PERIODS.contains(&period)
        {
            return Err(AppError::Validation(format!(
                "unknown revenue period '{period}', expected one of: {}",
                REVENUE_PERIODS.join(", ")
            )));
        }

        self.dashboard.revenue_chart(token, period).await
    }
}

fn widget_or_default<T: Default>(
    widget: &'static str,
    result: AppResult<T>,
    degraded: &mut Vec<String>,
) -> AppResult<T> {
    match result {
        Ok(value) => Ok(value),
        Err(error @ AppError::Unauthorized(_)) => Err(error),
        Err(error) => {
            warn!(widget, error = %error, "dashboard widget unavailable, using defaults");
            degraded.push(widget.to_owned());
            Ok(T::default())
        }
    }
}
