//! # Dashboard View-Model
//!
//! The single aggregate a dashboard load produces. It is rebuilt from scratch
//! on every successful load and never patched in place.
//!
//! ## Example Usage
//!
//! ```rust
//! use shared::dto::dashboard::DashboardView;
//!
//! # let json = r#"{
//! #   "rangeDays": 30,
//! #   "user": {"login": "alice", "email": "alice@example.com", "name": "Alice Liddell"},
//! #   "xp": {"total": 1500.0, "daily": [{"date": "2024-03-01", "amount": 1500.0}], "topProjects": []},
//! #   "audit": {"up": 120.0, "down": 60.0, "ratio": "2.00"},
//! #   "skills": [],
//! #   "latestProjects": []
//! # }"#;
//! let view: DashboardView = serde_json::from_str(json).unwrap();
//! assert_eq!(view.audit.ratio, "2.00");
//! assert_eq!(view.xp.daily[0].date.to_string(), "2024-03-01");
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs for one dashboard screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// Day range the XP section covers
    pub range_days: u32,
    pub user: UserProfile,
    pub xp: XpSummary,
    pub audit: AuditSummary,
    /// Top skills, one per skill type
    pub skills: Vec<Skill>,
    /// Most recent project XP, newest first
    pub latest_projects: Vec<LatestProject>,
}

/// Identity section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub login: String,
    pub email: String,
    /// Full name, falling back to the login and then to `Unknown`
    pub name: String,
}

/// XP earned within the selected range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct XpSummary {
    pub total: f64,
    /// One bucket per UTC day, ascending
    pub daily: Vec<DailyXp>,
    /// At most five projects, highest XP first
    pub top_projects: Vec<ProjectXp>,
}

/// XP summed over one UTC calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyXp {
    pub date: NaiveDate,
    pub amount: f64,
}

/// XP summed over one project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectXp {
    pub name: String,
    pub amount: f64,
}

/// Audit totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    pub up: f64,
    pub down: f64,
    /// `up / down` to two decimals, `∞` when only `up` is non-zero
    pub ratio: String,
}

/// One skill with its best recorded amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub amount: f64,
}

/// A recent project XP transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LatestProject {
    pub name: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}
