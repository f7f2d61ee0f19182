use crate::core::calculator::comparison::Comparison;
use crate::core::lookup;
use crate::db::log::audit_log_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{monthly, projects, users, work_logs};
use crate::errors::{AppError, AppResult};
use crate::models::UpsertOutcome;
use crate::utils::date;
use std::collections::BTreeMap;

/// Planned versus actual hours of one user on one project.
#[derive(Debug, Clone)]
pub struct PlanLine {
    /// `None` when hours were logged without a plan.
    pub assignment_id: Option<i64>,
    pub user_cd: String,
    pub user_name: String,
    pub comparison: Comparison,
}

#[derive(Debug, Clone)]
pub struct ProjectPlan {
    pub project_cd: String,
    pub project_name: String,
    pub lines: Vec<PlanLine>,
    pub total: Comparison,
}

/// A month of planning, grouped by project code.
#[derive(Debug, Clone)]
pub struct MonthPlan {
    pub year_month: String,
    pub projects: Vec<ProjectPlan>,
    pub total: Comparison,
}

pub struct PlanLogic;

impl PlanLogic {
    /// Set the planned hours of a user on a project for a month.
    ///
    /// Zero removes the assignment; negative hours are rejected. Inactive
    /// users keep their existing plans but cannot get new ones.
    pub fn set(
        pool: &mut DbPool,
        user_key: &str,
        project_cd: &str,
        year_month: &str,
        hours: f64,
    ) -> AppResult<UpsertOutcome> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(AppError::InvalidHours(format!(
                "{hours} (planned hours must not be negative)"
            )));
        }
        let month = date::month_key(&date::parse_month(year_month)?);

        let user = lookup::user(&pool.conn, user_key)?;
        let project = lookup::project(&pool.conn, project_cd)?;
        let existing = monthly::find_assignment(&pool.conn, user.id, project.id, &month)?;

        if existing.is_none() && hours > 0.0 && !user.is_active {
            return Err(AppError::Validation(format!(
                "User '{}' is inactive and cannot be planned",
                user.cd
            )));
        }

        let outcome = match (existing, hours == 0.0) {
            (Some(a), true) => {
                monthly::delete_assignment(&pool.conn, a.id)?;
                UpsertOutcome::Deleted
            }
            (None, true) => UpsertOutcome::Unchanged,
            (Some(a), false) => {
                monthly::update_assignment(&pool.conn, a.id, hours)?;
                UpsertOutcome::Updated(a.id)
            }
            (None, false) => {
                let id =
                    monthly::insert_assignment(&pool.conn, user.id, project.id, &month, hours)?;
                UpsertOutcome::Inserted(id)
            }
        };

        if outcome != UpsertOutcome::Unchanged {
            audit_log_quiet(
                &pool.conn,
                "plan",
                &format!("{month} {} {}", user.cd, project.cd),
                &format!("{hours:.2}h"),
            );
        }
        Ok(outcome)
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        let rows = monthly::delete_assignment(&pool.conn, id)?;
        lookup::ensure_touched(rows, || format!("Monthly assignment #{id}"))?;
        audit_log_quiet(&pool.conn, "del", &format!("plan #{id}"), "");
        Ok(())
    }

    /// Planned and actual hours of every (user, project) pair that has
    /// either in the month.
    pub fn month(pool: &mut DbPool, year_month: &str) -> AppResult<MonthPlan> {
        let first = date::parse_month(year_month)?;
        let (from, to) = date::month_bounds(&first);
        let month = date::month_key(&first);

        let conn = &pool.conn;
        let plans = monthly::list_for_month(conn, &month)?;
        let mut actuals =
            work_logs::actuals_by_user_project(conn, &from.to_string(), &to.to_string())?;

        // project cd -> (name, user cd -> line)
        let mut grouped: BTreeMap<String, (String, BTreeMap<String, PlanLine>)> = BTreeMap::new();

        for p in plans {
            let actual = actuals.remove(&(p.user_id, p.project_id)).unwrap_or(0.0);
            let entry = grouped
                .entry(p.project_cd.clone())
                .or_insert_with(|| (p.project_name.clone(), BTreeMap::new()));
            entry.1.insert(
                p.user_cd.clone(),
                PlanLine {
                    assignment_id: Some(p.id),
                    user_cd: p.user_cd,
                    user_name: p.user_name,
                    comparison: Comparison::calculate(p.planned_hours, actual),
                },
            );
        }

        // actuals without a plan
        for ((user_id, project_id), actual) in actuals {
            let (Some(user), Some(project)) = (
                users::find_user(conn, user_id)?,
                projects::find_project(conn, project_id)?,
            ) else {
                continue;
            };
            let entry = grouped
                .entry(project.cd.clone())
                .or_insert_with(|| (project.name.clone(), BTreeMap::new()));
            entry.1.insert(
                user.cd.clone(),
                PlanLine {
                    assignment_id: None,
                    user_cd: user.cd,
                    user_name: user.name,
                    comparison: Comparison::calculate(0.0, actual),
                },
            );
        }

        let mut planned_sum = 0.0;
        let mut actual_sum = 0.0;
        let projects = grouped
            .into_iter()
            .map(|(project_cd, (project_name, lines))| {
                let lines: Vec<PlanLine> = lines.into_values().collect();
                let planned: f64 = lines.iter().map(|l| l.comparison.planned).sum();
                let actual: f64 = lines.iter().map(|l| l.comparison.actual).sum();
                planned_sum += planned;
                actual_sum += actual;
                ProjectPlan {
                    project_cd,
                    project_name,
                    lines,
                    total: Comparison::calculate(planned, actual),
                }
            })
            .collect();

        Ok(MonthPlan {
            year_month: month,
            projects,
            total: Comparison::calculate(planned_sum, actual_sum),
        })
    }
}
