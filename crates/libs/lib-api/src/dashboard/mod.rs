//! # Dashboard Aggregator
//!
//! Runs the five dashboard queries concurrently under one token and shapes
//! their rows into a [`DashboardView`].
//!
//! A load is all-or-nothing: the first failing query fails the whole load and
//! no partial view is produced.

pub mod queries;
pub mod rows;
pub mod shaping;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use lib_core::error::{AppError, Result};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use shared::dto::dashboard::DashboardView;
use uuid::Uuid;

use crate::client::operation_name;
use crate::transport::Transport;
use queries::{LATEST_LIMIT, SKILL_LIMIT, XP_LIMIT};
use rows::{AuditData, LatestRow, RawRows, SkillRow, TransactionData, UserData, XpRow};

/// Loads dashboard view-models over a [`Transport`].
#[derive(Clone)]
pub struct Aggregator {
    transport: Arc<dyn Transport>,
}

impl Aggregator {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Load the dashboard for the last `range_days` days.
    pub async fn load_dashboard(&self, token: &str, range_days: u32) -> Result<DashboardView> {
        self.load_dashboard_at(token, range_days, lib_utils::time::now_utc())
            .await
    }

    /// Load the dashboard for the `range_days` days before `now`.
    #[tracing::instrument(skip(self, token, now), fields(load_id = %Uuid::new_v4()))]
    pub async fn load_dashboard_at(
        &self,
        token: &str,
        range_days: u32,
        now: DateTime<Utc>,
    ) -> Result<DashboardView> {
        let start = std::time::Instant::now();
        let from = lib_utils::time::lower_bound_iso(now, range_days).map_err(|_| {
            AppError::InvalidInput(format!("A range of {range_days} days is out of bounds."))
        })?;
        tracing::debug!(%from, "Loading dashboard");

        let (user, xp, audit, skills, latest) = tokio::try_join!(
            self.fetch::<UserData>(queries::USER_PROFILE, json!({}), token),
            self.fetch::<TransactionData<XpRow>>(
                queries::XP_BY_RANGE,
                json!({ "from": from, "limit": XP_LIMIT }),
                token
            ),
            self.fetch::<AuditData>(queries::AUDIT_STATS, json!({}), token),
            self.fetch::<TransactionData<SkillRow>>(
                queries::TOP_SKILLS,
                json!({ "limit": SKILL_LIMIT }),
                token
            ),
            self.fetch::<TransactionData<LatestRow>>(
                queries::LATEST_PROJECTS,
                json!({ "limit": LATEST_LIMIT }),
                token
            ),
        )
        .map_err(|e| {
            tracing::warn!(error = %e, "Dashboard load failed");
            e
        })?;

        let rows = RawRows {
            user,
            xp: xp.transaction,
            audit,
            skills: skills.transaction,
            latest: latest.transaction,
        };
        let view = shaping::build_view(range_days, &rows);

        tracing::info!(
            xp_rows = rows.xp.len(),
            total_xp = view.xp.total,
            duration_ms = start.elapsed().as_millis(),
            "Dashboard loaded"
        );
        Ok(view)
    }

    async fn fetch<T: DeserializeOwned>(&self, query: &str, variables: Value, token: &str) -> Result<T> {
        let data = self.transport.run_query(query, variables, token).await?;
        serde_json::from_value(data)
            .map_err(|e| AppError::Decoding(format!("{} response: {}", operation_name(query), e)))
    }
}
