//! Pure functions from raw query rows to the dashboard view-model.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use shared::dto::dashboard::{
    AuditSummary, DailyXp, DashboardView, LatestProject, ProjectXp, Skill, UserProfile, XpSummary,
};

use super::rows::{AmountAggregate, LatestRow, ObjectRef, RawRows, SkillRow, UserRow, XpRow};

/// Projects kept in the XP breakdown.
pub const TOP_PROJECTS: usize = 5;

/// Name used for transactions without a related object name.
pub const UNNAMED_PROJECT: &str = "Unnamed project";

const SKILL_PREFIX: &str = "skill_";
const UNKNOWN_SKILL: &str = "unknown";
const UNKNOWN_NAME: &str = "Unknown";
const MISSING_FIELD: &str = "-";

/// Anything that contributes an amount to one UTC day.
pub trait DailyAmount {
    fn day(&self) -> NaiveDate;
    fn amount(&self) -> f64;
}

impl DailyAmount for XpRow {
    fn day(&self) -> NaiveDate {
        lib_utils::time::day_key(&self.created_at)
    }

    fn amount(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }
}

impl DailyAmount for DailyXp {
    fn day(&self) -> NaiveDate {
        self.date
    }

    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Sum amounts per UTC day, ascending by day.
pub fn group_xp_by_day<R: DailyAmount>(rows: &[R]) -> Vec<DailyXp> {
    let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for row in rows {
        *buckets.entry(row.day()).or_insert(0.0) += row.amount();
    }

    buckets
        .into_iter()
        .map(|(date, amount)| DailyXp { date, amount })
        .collect()
}

/// Sum amounts per project name and keep the [`TOP_PROJECTS`] largest.
///
/// Equal totals keep the order in which their projects first appeared.
pub fn project_totals(rows: &[XpRow]) -> Vec<ProjectXp> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<ProjectXp> = Vec::new();

    for row in rows {
        let name = ObjectRef::name_of(&row.object).unwrap_or(UNNAMED_PROJECT);
        let amount = row.amount.unwrap_or(0.0);
        match index.get(name) {
            Some(&i) => totals[i].amount += amount,
            None => {
                index.insert(name, totals.len());
                totals.push(ProjectXp {
                    name: name.to_string(),
                    amount,
                });
            }
        }
    }

    totals.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    totals.truncate(TOP_PROJECTS);
    totals
}

pub fn total_xp(rows: &[XpRow]) -> f64 {
    rows.iter().map(|row| row.amount.unwrap_or(0.0)).sum()
}

/// `up / down` to two decimals; `∞` when only `up` is non-zero.
pub fn audit_ratio(up: f64, down: f64) -> String {
    if down > 0.0 {
        format!("{:.2}", up / down)
    } else if up > 0.0 {
        "∞".to_string()
    } else {
        "0.00".to_string()
    }
}

/// `skill_prog-lang` → `prog lang`.
pub fn clean_skill_name(kind: Option<&str>) -> String {
    let name = kind.unwrap_or_default().replacen(SKILL_PREFIX, "", 1).replace('-', " ");
    if name.is_empty() {
        UNKNOWN_SKILL.to_string()
    } else {
        name
    }
}

/// Full name, else login, else `Unknown`.
pub fn display_name(user: &UserRow) -> String {
    let full = format!(
        "{} {}",
        user.first_name.as_deref().unwrap_or_default(),
        user.last_name.as_deref().unwrap_or_default()
    );
    let full = full.trim();

    if !full.is_empty() {
        full.to_string()
    } else {
        non_empty(&user.login).unwrap_or(UNKNOWN_NAME).to_string()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn profile(user: Option<&UserRow>) -> UserProfile {
    let user = user.cloned().unwrap_or_default();
    UserProfile {
        login: non_empty(&user.login).unwrap_or(MISSING_FIELD).to_string(),
        email: non_empty(&user.email).unwrap_or(MISSING_FIELD).to_string(),
        name: display_name(&user),
    }
}

fn skill(row: &SkillRow) -> Skill {
    Skill {
        name: clean_skill_name(row.kind.as_deref()),
        amount: row.amount.unwrap_or(0.0),
    }
}

fn latest_project(row: &LatestRow) -> LatestProject {
    LatestProject {
        name: ObjectRef::name_of(&row.object)
            .unwrap_or(UNNAMED_PROJECT)
            .to_string(),
        amount: row.amount.unwrap_or(0.0),
        created_at: row.created_at,
    }
}

/// Assemble the view-model for one load.
pub fn build_view(range_days: u32, rows: &RawRows) -> DashboardView {
    let up = AmountAggregate::sum_of(&rows.audit.audit_up);
    let down = AmountAggregate::sum_of(&rows.audit.audit_down);

    DashboardView {
        range_days,
        user: profile(rows.user.user.first()),
        xp: XpSummary {
            total: total_xp(&rows.xp),
            daily: group_xp_by_day(&rows.xp),
            top_projects: project_totals(&rows.xp),
        },
        audit: AuditSummary {
            up,
            down,
            ratio: audit_ratio(up, down),
        },
        skills: rows.skills.iter().map(skill).collect(),
        latest_projects: rows.latest.iter().map(latest_project).collect(),
    }
}
