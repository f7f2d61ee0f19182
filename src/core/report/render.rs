use super::template::{LOGS_PLACEHOLDER, parse_template};
use crate::models::report_log::ReportLog;
use chrono::{Datelike, NaiveDate};

/// Text emitted instead of the log block when the day has no entries.
pub const NO_ENTRIES: &str = "(実績なし)";

/// Localizable strings used by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLocale {
    pub no_entries: String,
    /// Monday first.
    pub weekday_names: [String; 7],
}

impl Default for ReportLocale {
    fn default() -> Self {
        Self {
            no_entries: NO_ENTRIES.to_string(),
            weekday_names: ["月", "火", "水", "木", "金", "土", "日"].map(String::from),
        }
    }
}

impl ReportLocale {
    pub fn weekday_name(&self, date: &NaiveDate) -> &str {
        &self.weekday_names[date.weekday().num_days_from_monday() as usize]
    }
}

/// Progress placeholder forms removed when zero progress is hidden,
/// most specific first so no stray space or parenthesis is left behind.
const PROGRESS_FORMS: [&str; 5] = [
    " ({progress}%)",
    "({progress}%)",
    " {progress}%",
    "{progress}%",
    "{progress}",
];

/// Expand the fixed placeholder set in a single line.
///
/// Substitution is literal: unknown `{tokens}` are left as they are.
pub fn format_line(fmt: &str, log: &ReportLog, hide_zero: bool) -> String {
    let progress = log.progress();

    let mut result = fmt
        .replace("{project_cd}", &log.project_cd)
        .replace("{project_name}", &log.project_name)
        .replace("{issue_cd}", &log.issue_cd)
        .replace("{issue_name}", &log.issue_name)
        .replace("{task_name}", &log.task_name)
        .replace("{hours}", &format!("{:.2}", log.hours));

    if hide_zero && progress == 0 {
        for form in PROGRESS_FORMS {
            result = result.replace(form, "");
        }
    } else {
        result = result.replace("{progress}", &progress.to_string());
    }

    result
}

/// Render the log block: a project header whenever the project name
/// changes, an issue header whenever the issue code changes (or the project
/// did), and one task line per entry.
///
/// `logs` must already be ordered by project, issue and task; nothing is
/// sorted here. Empty formats suppress their lines.
pub fn format_logs(
    logs: &[ReportLog],
    project_fmt: &str,
    issue_fmt: &str,
    task_fmt: &str,
    hide_zero: bool,
    locale: &ReportLocale,
) -> String {
    if logs.is_empty() {
        return locale.no_entries.clone();
    }

    let mut lines = Vec::new();
    let mut current_project: Option<&str> = None;
    let mut current_issue: Option<&str> = None;

    for log in logs {
        if !project_fmt.is_empty() && current_project != Some(log.project_name.as_str()) {
            current_project = Some(log.project_name.as_str());
            current_issue = None;
            lines.push(format_line(project_fmt, log, hide_zero));
        }

        if !issue_fmt.is_empty() && current_issue != Some(log.issue_cd.as_str()) {
            current_issue = Some(log.issue_cd.as_str());
            lines.push(format_line(issue_fmt, log, hide_zero));
        }

        if !task_fmt.is_empty() {
            lines.push(format_line(task_fmt, log, hide_zero));
        }
    }

    lines.join("\n")
}

/// Everything a report needs besides the template and the logs.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    pub total_hours: f64,
    pub target_date: NaiveDate,
    pub user_cd: &'a str,
    pub user_name: &'a str,
    pub hide_zero: bool,
}

/// Render a complete report.
///
/// Replacement order is fixed: `{total_hours}`, the log block, `{date}`,
/// `{date_jp}`, `{user_cd}`, `{user_name}`. Text coming from the logs is
/// therefore still subject to the later replacements.
pub fn generate_report(
    template: &str,
    logs: &[ReportLog],
    ctx: &ReportContext<'_>,
    locale: &ReportLocale,
) -> String {
    let parsed = parse_template(template);
    let logs_text = format_logs(
        logs,
        &parsed.project_fmt,
        &parsed.issue_fmt,
        &parsed.task_fmt,
        ctx.hide_zero,
        locale,
    );

    let date = ctx.target_date.format("%Y/%m/%d").to_string();
    let date_jp = format!("{}({})", date, locale.weekday_name(&ctx.target_date));

    parsed
        .base
        .replace("{total_hours}", &format!("{:.1}", ctx.total_hours))
        .replace(LOGS_PLACEHOLDER, &logs_text)
        .replace("{date}", &date)
        .replace("{date_jp}", &date_jp)
        .replace("{user_cd}", ctx.user_cd)
        .replace("{user_name}", ctx.user_name)
}
