mod common;
mod hero_banners;
mod listing;

pub use common::{
    HealthResponse, LogoutResponse, SessionRequest, SessionStatusResponse, ThemeResponse,
};
pub use hero_banners::{CreateLayerRequest, MoveRequest, ReorderSlidesRequest};
pub use listing::{AnalyticsQueryRequest, ListQueryRequest, RevenueChartQueryRequest};
