use crate::core::calculator::comparison::Comparison;
use crate::core::lookup;
use crate::db::log::audit_log_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{issues, projects};
use crate::errors::{AppError, AppResult};
use crate::models::issue::{Issue, IssueSummary};
use crate::models::project::DEFAULT_ISSUE_STATUS;
use rusqlite::Connection;

/// Issue summary with its estimate-vs-actual comparison.
#[derive(Debug, Clone)]
pub struct IssueProgress {
    pub summary: IssueSummary,
    pub comparison: Comparison,
}

fn ensure_status(conn: &Connection, project_id: i64, status: &str) -> AppResult<()> {
    if projects::status_exists(conn, project_id, status)? {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Unknown status '{status}' for this project"
        )))
    }
}

pub struct IssueLogic;

impl IssueLogic {
    pub fn add(
        pool: &mut DbPool,
        project_cd: &str,
        cd: &str,
        name: &str,
        description: &str,
        status: Option<&str>,
    ) -> AppResult<i64> {
        let project = lookup::project(&pool.conn, project_cd)?;
        let status = status.unwrap_or(DEFAULT_ISSUE_STATUS);
        ensure_status(&pool.conn, project.id, status)?;

        let id = issues::insert_issue(&pool.conn, project.id, cd, name, description, status)
            .map_err(|e| AppError::from_unique(e, &format!("Issue '{cd}'")))?;
        audit_log_quiet(&pool.conn, "add", &format!("issue {project_cd}/{cd}"), name);
        Ok(id)
    }

    /// Issues of one project (or all) with estimate, actual and overrun.
    pub fn list(pool: &mut DbPool, project_cd: Option<&str>) -> AppResult<Vec<IssueProgress>> {
        let project_id = match project_cd {
            Some(cd) => Some(lookup::project(&pool.conn, cd)?.id),
            None => None,
        };

        let out = issues::list_issue_summaries(&pool.conn, project_id)?
            .into_iter()
            .map(|summary| IssueProgress {
                comparison: Comparison::calculate(summary.estimate_hours, summary.actual_hours),
                summary,
            })
            .collect();
        Ok(out)
    }

    pub fn edit(
        pool: &mut DbPool,
        id: i64,
        name: Option<&str>,
        description: Option<&str>,
        status: Option<&str>,
    ) -> AppResult<Issue> {
        let current = lookup::issue(&pool.conn, id)?;
        let name = name.unwrap_or(&current.name).to_string();
        let description = description.unwrap_or(&current.description).to_string();
        let status = status.unwrap_or(&current.status).to_string();

        ensure_status(&pool.conn, current.project_id, &status)?;

        issues::update_issue(&pool.conn, id, &name, &description, &status)?;
        audit_log_quiet(&pool.conn, "edit", &format!("issue #{id}"), &name);

        Ok(Issue {
            name,
            description,
            status,
            ..current
        })
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<Issue> {
        let issue = lookup::issue(&pool.conn, id)?;
        issues::delete_issue(&pool.conn, id)?;
        audit_log_quiet(&pool.conn, "del", &format!("issue #{id}"), &issue.name);
        Ok(issue)
    }
}
