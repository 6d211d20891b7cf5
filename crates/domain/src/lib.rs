//! Domain entities, invariants and pure helpers.

#![forbid(unsafe_code)]

mod content;
mod coupon;
mod dashboard;
mod event;
mod finance;
mod formatting;
mod geo;
mod hero_banner;
mod listing;
mod notification;
mod record;
mod settings;
mod slug;
mod theme;

pub use content::{Article, ArticleStats, Category, DEFAULT_ARTICLE_STATUS};
pub use coupon::{
    AnalyticsRange, Coupon, CouponAnalytics, CouponSettings, CouponState, CouponStats,
    DISCOUNT_FIXED, DISCOUNT_PERCENTAGE, RedemptionPoint,
};
pub use dashboard::{
    Activity, DashboardMetrics, DashboardSnapshot, QuickStats, RevenuePoint, TopTrainer,
};
pub use event::{DEFAULT_EVENT_STATUS, Event, EventStats, UploadedImage};
pub use finance::{FinanceSummary, Transaction};
pub use formatting::{
    BUDDHIST_ERA_OFFSET, ThaiDateStyle, escape_html, format_baht, format_number,
    format_thai_date, format_thai_phone, parse_platform_date,
};
pub use geo::{EARTH_RADIUS_KM, GeoPoint, calculate_distance};
pub use hero_banner::{
    CLONE_TITLE_SUFFIX, DEFAULT_SLIDE_DURATION_MS, DEFAULT_TEXT_COLOR, DEFAULT_TEXT_FONT_SIZE,
    DeviceOverride, Layer, LayerKind, LayerPatch,
    MoveDirection, ResponsiveSettings, Slide, SlideAnimation, SlideEditor, SlideTransition,
    apply_ordering, find_order_collisions, next_order, reordered_ids, sort_for_display,
    validate_ordering,
};
pub use listing::{ListFilter, Page, Pagination, SortDirection, paginate};
pub use notification::{Notification, NotificationFeed};
pub use record::{ExtraFields, RecordId};
pub use settings::SettingsSection;
pub use slug::slugify;
pub use theme::ThemeConfig;
