use std::str::FromStr;

use chrono::NaiveDate;
use coachdesk_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::formatting::parse_platform_date;
use crate::record::{ExtraFields, RecordId};

/// Percentage discount type.
pub const DISCOUNT_PERCENTAGE: &str = "percentage";
/// Fixed-amount discount type.
pub const DISCOUNT_FIXED: &str = "fixed";

/// Discount coupon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Coupon {
    /// Platform identifier.
    #[serde(alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Redemption code.
    pub code: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `percentage` or `fixed`.
    pub discount_type: String,
    /// Percentage points or baht, depending on `discount_type`.
    pub discount_value: f64,
    /// Minimum order amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_purchase: Option<f64>,
    /// Cap for percentage discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<f64>,
    /// Redemption cap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u64>,
    /// Redemptions so far.
    pub used_count: u64,
    /// First valid day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Last valid day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Whether the coupon can be redeemed.
    pub is_active: bool,
    /// Uninterpreted platform fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Default for Coupon {
    fn default() -> Self {
        Self {
            id: None,
            code: String::new(),
            description: None,
            discount_type: DISCOUNT_PERCENTAGE.to_owned(),
            discount_value: 0.0,
            min_purchase: None,
            max_discount: None,
            usage_limit: None,
            used_count: 0,
            start_date: None,
            end_date: None,
            is_active: true,
            extra: ExtraFields::new(),
        }
    }
}

/// Derived coupon state used by list filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouponState {
    /// Redeemable today.
    Active,
    /// Switched off by an operator.
    Inactive,
    /// Past its end date or usage limit.
    Expired,
}

impl FromStr for CouponState {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "expired" => Ok(Self::Expired),
            _ => Err(AppError::Validation(format!(
                "unknown coupon state '{value}'"
            ))),
        }
    }
}

impl Coupon {
    /// Normalises the code and validates the discount.
    pub fn prepare_for_submit(&mut self) -> AppResult<()> {
        self.code = self.code.trim().to_uppercase();
        if self.code.is_empty() {
            return Err(AppError::Validation("coupon code must not be empty".to_owned()));
        }

        if self.discount_value <= 0.0 {
            return Err(AppError::Validation(
                "coupon discount must be greater than zero".to_owned(),
            ));
        }

        match self.discount_type.as_str() {
            DISCOUNT_PERCENTAGE if self.discount_value > 100.0 => Err(AppError::Validation(
                "percentage discount must not exceed 100".to_owned(),
            )),
            DISCOUNT_PERCENTAGE | DISCOUNT_FIXED => Ok(()),
            other => Err(AppError::Validation(format!(
                "unknown discount type '{other}'"
            ))),
        }?;

        if let (Some(start), Some(end)) = (
            self.start_date.as_deref().and_then(parse_platform_date),
            self.end_date.as_deref().and_then(parse_platform_date),
        ) && end < start
        {
            return Err(AppError::Validation(
                "coupon end date must not precede its start date".to_owned(),
            ));
        }

        Ok(())
    }

    /// Returns the coupon state as of `today`.
    #[must_use]
    pub fn state_on(&self, today: NaiveDate) -> CouponState {
        let past_end = self
            .end_date
            .as_deref()
            .and_then(parse_platform_date)
            .is_some_and(|end| end < today);
        let exhausted = self
            .usage_limit
            .is_some_and(|limit| self.used_count >= limit);

        if past_end || exhausted {
            CouponState::Expired
        } else if self.is_active {
            CouponState::Active
        } else {
            CouponState::Inactive
        }
    }
}

/// Aggregate coupon counters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CouponStats {
    /// All coupons.
    pub total: u64,
    /// Currently redeemable coupons.
    pub active: u64,
    /// Expired coupons.
    pub expired: u64,
    /// Redemptions across all coupons.
    pub total_usage: u64,
    /// Discount granted across all redemptions, in baht.
    pub total_discount: f64,
    /// Uninterpreted platform fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Time window for coupon analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnalyticsRange {
    /// Last seven days.
    #[serde(rename = "7d")]
    Week,
    /// Last thirty days.
    #[default]
    #[serde(rename = "30d")]
    Month,
    /// Last ninety days.
    #[serde(rename = "90d")]
    Quarter,
    /// Last year.
    #[serde(rename = "1y")]
    Year,
}

impl AnalyticsRange {
    /// Returns stable query-string value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
            Self::Year => "1y",
        }
    }
}

impl FromStr for AnalyticsRange {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "7d" => Ok(Self::Week),
            "30d" => Ok(Self::Month),
            "90d" => Ok(Self::Quarter),
            "1y" => Ok(Self::Year),
            _ => Err(AppError::Validation(format!(
                "unknown analytics range '{value}'"
            ))),
        }
    }
}

/// One bucket of coupon redemptions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RedemptionPoint {
    /// Bucket label, usually a date.
    pub date: String,
    /// Redemptions in the bucket.
    pub count: u64,
    /// Discount granted in the bucket, in baht.
    pub amount: f64,
}

/// Coupon redemption analytics for one range.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CouponAnalytics {
    /// Redemption series.
    pub redemptions: Vec<RedemptionPoint>,
    /// Uninterpreted platform fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Platform-wide coupon policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CouponSettings {
    /// Whether several coupons may apply to one order.
    pub allow_stacking: bool,
    /// Maximum coupons per order.
    pub max_coupons_per_order: u32,
    /// Validity applied to new coupons without an end date.
    pub default_expiry_days: u32,
    /// Uninterpreted platform fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Default for CouponSettings {
    fn default() -> Self {
        Self {
            allow_stacking: false,
            max_coupons_per_order: 1,
            default_expiry_days: 30,
            extra: ExtraFields::new(),
        }
    }
}

impl CouponSettings {
    /// Validates settings before saving.
    pub fn validate(&self) -> AppResult<()> {
        if self.max_coupons_per_order == 0 {
            return Err(AppError::Validation(
                "max coupons per order must be at least 1".to_owned(),
            ));
        }

        if !self.allow_stacking && self.max_coupons_per_order > 1 {
            return Err(AppError::Validation(
                "more than one coupon per order requires stacking".to_owned(),
            ));
        }

        Ok(())
    }
}
