use crate::config::Config;
use crate::core::lookup;
use crate::core::report::{ReportContext, ReportLocale, generate_report};
use crate::db::log::audit_log_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::settings::{self, REPORT_TEMPLATE_KEY};
use crate::db::queries::work_logs;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// Where the template of a report came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSource {
    File,
    UserSetting,
    Config,
}

/// Read a template file, normalising Windows line endings.
pub fn read_template_file(path: &Path) -> AppResult<String> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::Other(format!("Cannot read template {}: {}", path.display(), e))
    })?;
    Ok(raw.replace("\r\n", "\n"))
}

/// Template precedence: explicit file, the user's saved template, config.
pub fn resolve_template(
    conn: &Connection,
    cfg: &Config,
    user_id: i64,
    file: Option<&Path>,
) -> AppResult<(String, TemplateSource)> {
    if let Some(path) = file {
        return Ok((read_template_file(path)?, TemplateSource::File));
    }
    if let Some(saved) = settings::get_setting(conn, user_id, REPORT_TEMPLATE_KEY)? {
        return Ok((saved, TemplateSource::UserSetting));
    }
    Ok((cfg.report_template.clone(), TemplateSource::Config))
}

pub fn locale_from(cfg: &Config) -> ReportLocale {
    ReportLocale {
        no_entries: cfg.no_entries_text.clone(),
        weekday_names: cfg.weekday_table(),
    }
}

#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub text: String,
    pub source: TemplateSource,
    pub total_hours: f64,
}

pub struct ReportLogic;

impl ReportLogic {
    /// Render a user's daily report.
    pub fn render(
        pool: &mut DbPool,
        cfg: &Config,
        user_key: &str,
        on: NaiveDate,
        template_file: Option<&Path>,
        hide_zero: bool,
    ) -> AppResult<RenderedReport> {
        let conn = &pool.conn;
        let user = lookup::user(conn, user_key)?;
        let logs = work_logs::daily_report_logs(conn, user.id, &on.to_string())?;
        let total_hours: f64 = logs.iter().map(|l| l.hours).sum();

        let (template, source) = resolve_template(conn, cfg, user.id, template_file)?;

        let ctx = ReportContext {
            total_hours,
            target_date: on,
            user_cd: &user.cd,
            user_name: &user.name,
            hide_zero,
        };
        let text = generate_report(&template, &logs, &ctx, &locale_from(cfg));

        Ok(RenderedReport {
            text,
            source,
            total_hours,
        })
    }

    /// Store the file as the user's own template.
    pub fn save_template(pool: &mut DbPool, user_key: &str, file: &Path) -> AppResult<()> {
        let user = lookup::user(&pool.conn, user_key)?;
        let template = read_template_file(file)?;
        settings::set_setting(&pool.conn, user.id, REPORT_TEMPLATE_KEY, &template)?;
        audit_log_quiet(
            &pool.conn,
            "edit",
            &format!("report template {}", user.cd),
            &file.display().to_string(),
        );
        Ok(())
    }

    /// Drop the user's own template. Returns false when none was saved.
    pub fn reset_template(pool: &mut DbPool, user_key: &str) -> AppResult<bool> {
        let user = lookup::user(&pool.conn, user_key)?;
        let removed = settings::delete_setting(&pool.conn, user.id, REPORT_TEMPLATE_KEY)? > 0;
        if removed {
            audit_log_quiet(
                &pool.conn,
                "del",
                &format!("report template {}", user.cd),
                "reset to default",
            );
        }
        Ok(removed)
    }
}
