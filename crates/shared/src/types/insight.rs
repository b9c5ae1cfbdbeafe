//! Insight and projection types.
//!
//! All values here are computed server-side; the client only merges and
//! renders them. Shapes mirror the backend's insight payloads, with unknown
//! detail (goal progress) carried as raw JSON.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Time-of-day spending pattern for an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeOfDayPattern {
    /// Human-readable dominant period, e.g. "Evening (4 - 9 PM)".
    pub dominant_period: String,
    /// Share of spending that falls in the dominant period.
    pub percentage: Decimal,
    /// Average amount spent per transaction in that period.
    pub average_amount: Decimal,
    /// Impact score in `[0, 1]`.
    pub impact_score: f64,
}

/// Weekend-focused spending detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekendFocus {
    /// Peak spending day name.
    pub day: String,
    /// Share of spending on the peak day.
    pub percentage: Decimal,
    /// Human-readable summary.
    pub message: String,
}

/// Day-of-week spending pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayOfWeekPattern {
    /// Present when spending skews to the weekend.
    #[serde(default)]
    pub weekend_focus: Option<WeekendFocus>,
}

/// Spending cadence pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendingVelocity {
    /// Average days between expenses.
    pub average_days_between: f64,
    /// Interval consistency in `[0, 1]`.
    pub consistency: f64,
    /// Cadence label: "frequent", "regular", or "occasional".
    pub pattern: String,
    /// Human-readable summary.
    pub message: String,
}

/// Heterogeneous pattern findings for one account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimePatterns {
    /// Time-of-day distribution, when significant.
    #[serde(default)]
    pub time_of_day: Option<TimeOfDayPattern>,
    /// Day-of-week peak, when significant.
    #[serde(default)]
    pub day_of_week: Option<DayOfWeekPattern>,
    /// Spending cadence, when enough data exists.
    #[serde(default)]
    pub spending_velocity: Option<SpendingVelocity>,
}

/// Projected balance for one horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projection {
    /// Projected balance at the end of the horizon.
    pub projected_balance: Decimal,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
}

/// Balance projections keyed by horizon.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Projections {
    /// One-week projection.
    #[serde(rename = "1_week", default)]
    pub one_week: Option<Projection>,
    /// One-month projection.
    #[serde(rename = "1_month", default)]
    pub one_month: Option<Projection>,
}

/// Per-account enrichment payload from the insights endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightBundle {
    /// Spending pattern findings.
    #[serde(default)]
    pub time_patterns: Option<TimePatterns>,
    /// Balance projections.
    #[serde(default)]
    pub projections: Option<Projections>,
    /// Goal progress detail (goal accounts only); opaque to this client.
    #[serde(default)]
    pub goal_progress: Option<serde_json::Value>,
}

/// Dashboard-level insight bundle for one account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightGroup {
    /// Account display name.
    pub account_name: String,
    /// Icon glyph shown on the insight card.
    #[serde(default)]
    pub account_icon: String,
    /// Pattern findings for the account.
    #[serde(default)]
    pub insights: Option<TimePatterns>,
}
