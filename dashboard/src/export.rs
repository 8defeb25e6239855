//! # JSON Export
//!
//! Writes the loaded view-model as pretty-printed JSON, the same camelCase
//! shape the view-model serializes to everywhere else.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use lib_core::error::Result;
use shared::dto::dashboard::DashboardView;

/// `dashboard-stats-<YYYY-MM-DD>.json`
pub fn default_file_name(date: NaiveDate) -> String {
    format!("dashboard-stats-{}.json", date.format("%Y-%m-%d"))
}

pub fn to_pretty_json(view: &DashboardView) -> Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}

/// Write `view` to `path`, creating parent directories as needed.
#[tracing::instrument(skip(view), fields(path = %path.display()))]
pub fn write_export(view: &DashboardView, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_pretty_json(view)?)?;

    tracing::info!("Dashboard exported");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::Value;
    use shared::dto::dashboard::*;

    fn view() -> DashboardView {
        DashboardView {
            range_days: 7,
            user: UserProfile {
                login: "bob".to_string(),
                email: "-".to_string(),
                name: "bob".to_string(),
            },
            xp: XpSummary {
                total: 0.0,
                daily: Vec::new(),
                top_projects: Vec::new(),
            },
            audit: AuditSummary {
                up: 5.0,
                down: 0.0,
                ratio: "∞".to_string(),
            },
            skills: Vec::new(),
            latest_projects: vec![LatestProject {
                name: "Unnamed project".to_string(),
                amount: 10.0,
                created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            }],
        }
    }

    #[test]
    fn test_default_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(default_file_name(date), "dashboard-stats-2024-03-09.json");
    }

    #[test]
    fn test_write_export_uses_camel_case_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.json");

        let written = write_export(&view(), &path).unwrap();
        assert_eq!(written, path);

        let json: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["rangeDays"], 7);
        assert_eq!(json["audit"]["ratio"], "∞");
        assert_eq!(json["latestProjects"][0]["createdAt"], "2024-01-02T03:04:05Z");
        assert!(json["xp"]["topProjects"].as_array().unwrap().is_empty());
    }
}
