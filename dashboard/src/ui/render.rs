//! Plain-text dashboard renderer.

use std::fmt::Write;

use shared::dto::dashboard::DashboardView;
use shared::utils::short_xp;

pub const NO_SKILLS: &str = "No skills found for current account.";
pub const NO_PROJECTS: &str = "No projects found.";
pub const NO_XP: &str = "No XP in selected range.";

/// Render every dashboard section as text.
pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_dashboard(&mut out, view);
    out
}

fn write_dashboard(out: &mut String, view: &DashboardView) -> std::fmt::Result {
    writeln!(out, "{} ({})", view.user.name, view.user.login)?;
    writeln!(out, "  Email: {}", view.user.email)?;
    writeln!(out)?;

    writeln!(out, "XP (last {} days): {}", view.range_days, short_xp(view.xp.total))?;
    writeln!(
        out,
        "Audit ratio: {}  (up {} / down {})",
        view.audit.ratio,
        short_xp(view.audit.up),
        short_xp(view.audit.down)
    )?;
    writeln!(out)?;

    writeln!(out, "Top skills")?;
    if view.skills.is_empty() {
        writeln!(out, "  {}", NO_SKILLS)?;
    }
    for skill in &view.skills {
        writeln!(out, "  {:<24} {}%", skill.name, skill.amount)?;
    }
    writeln!(out)?;

    writeln!(out, "Latest projects")?;
    if view.latest_projects.is_empty() {
        writeln!(out, "  {}", NO_PROJECTS)?;
    }
    for project in &view.latest_projects {
        writeln!(
            out,
            "  {:<24} {:>10}  {}",
            project.name,
            short_xp(project.amount),
            project.created_at.format("%Y-%m-%d")
        )?;
    }
    writeln!(out)?;

    writeln!(out, "XP per day")?;
    if view.xp.daily.is_empty() {
        writeln!(out, "  {}", NO_XP)?;
    }
    for day in &view.xp.daily {
        writeln!(out, "  {}  {:>10}", day.date, short_xp(day.amount))?;
    }

    if !view.xp.top_projects.is_empty() {
        writeln!(out)?;
        writeln!(out, "Top projects in range")?;
        for project in &view.xp.top_projects {
            writeln!(out, "  {:<24} {:>10}", project.name, short_xp(project.amount))?;
        }
    }

    Ok(())
}
