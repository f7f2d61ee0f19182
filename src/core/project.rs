use crate::core::calculator::comparison::Comparison;
use crate::core::lookup;
use crate::db::log::audit_log_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::projects;
use crate::errors::{AppError, AppResult};
use crate::models::project::{Project, ProjectSort, ProjectStatus};

/// Project with its estimate-vs-actual figures.
#[derive(Debug, Clone)]
pub struct ProjectOverview {
    pub project: Project,
    pub statuses: Vec<ProjectStatus>,
    pub comparison: Comparison,
}

pub struct ProjectLogic;

impl ProjectLogic {
    pub fn add(pool: &mut DbPool, cd: &str, name: &str, description: &str) -> AppResult<i64> {
        let id = projects::insert_project(&pool.conn, cd, name, description)
            .map_err(|e| AppError::from_unique(e, &format!("Project '{cd}'")))?;
        audit_log_quiet(&pool.conn, "add", &format!("project {cd}"), name);
        Ok(id)
    }

    pub fn list(
        pool: &mut DbPool,
        q: Option<&str>,
        sort: ProjectSort,
        desc: bool,
    ) -> AppResult<Vec<Project>> {
        let q = q.map(str::trim).filter(|s| !s.is_empty());
        Ok(projects::list_projects(&pool.conn, q, sort, desc)?)
    }

    /// Change name and/or description; omitted fields keep their value.
    pub fn edit(
        pool: &mut DbPool,
        cd: &str,
        name: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<Project> {
        let current = lookup::project(&pool.conn, cd)?;
        let name = name.unwrap_or(&current.name).to_string();
        let description = description.unwrap_or(&current.description).to_string();

        projects::update_project(&pool.conn, current.id, &name, &description)?;
        audit_log_quiet(&pool.conn, "edit", &format!("project {cd}"), &name);

        Ok(Project {
            name,
            description,
            ..current
        })
    }

    /// Delete a project with all of its issues, tasks and logs.
    pub fn delete(pool: &mut DbPool, cd: &str) -> AppResult<()> {
        let project = lookup::project(&pool.conn, cd)?;
        projects::delete_project(&pool.conn, project.id)?;
        audit_log_quiet(&pool.conn, "del", &format!("project {cd}"), &project.name);
        Ok(())
    }

    pub fn show(pool: &mut DbPool, cd: &str) -> AppResult<ProjectOverview> {
        let project = lookup::project(&pool.conn, cd)?;
        let statuses = projects::list_statuses(&pool.conn, project.id)?;
        let (estimate, actual) = projects::project_hour_totals(&pool.conn, project.id)?;

        Ok(ProjectOverview {
            project,
            statuses,
            comparison: Comparison::calculate(estimate, actual),
        })
    }
}

pub struct StatusLogic;

impl StatusLogic {
    pub fn list(pool: &mut DbPool, project_cd: &str) -> AppResult<Vec<ProjectStatus>> {
        let project = lookup::project(&pool.conn, project_cd)?;
        Ok(projects::list_statuses(&pool.conn, project.id)?)
    }

    pub fn add(
        pool: &mut DbPool,
        project_cd: &str,
        code: &str,
        name: &str,
        sort_order: i64,
    ) -> AppResult<i64> {
        let project = lookup::project(&pool.conn, project_cd)?;
        let id = projects::insert_status(&pool.conn, project.id, code, name, sort_order)
            .map_err(|e| AppError::from_unique(e, &format!("Status '{code}'")))?;
        audit_log_quiet(
            &pool.conn,
            "add",
            &format!("status {project_cd}/{code}"),
            name,
        );
        Ok(id)
    }

    pub fn edit(
        pool: &mut DbPool,
        id: i64,
        name: Option<&str>,
        sort_order: Option<i64>,
    ) -> AppResult<ProjectStatus> {
        let current = projects::find_status(&pool.conn, id)?
            .ok_or_else(|| AppError::NotFound(format!("Status #{id}")))?;
        let name = name.unwrap_or(&current.name).to_string();
        let sort_order = sort_order.unwrap_or(current.sort_order);

        projects::update_status(&pool.conn, id, &name, sort_order)?;
        audit_log_quiet(&pool.conn, "edit", &format!("status #{id}"), &name);

        Ok(ProjectStatus {
            name,
            sort_order,
            ..current
        })
    }

    /// Statuses still referenced by an issue cannot be deleted.
    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        let status = projects::find_status(&pool.conn, id)?
            .ok_or_else(|| AppError::NotFound(format!("Status #{id}")))?;

        if projects::status_in_use(&pool.conn, id)? {
            return Err(AppError::Validation(format!(
                "Status '{}' is used by at least one issue",
                status.code
            )));
        }

        projects::delete_status(&pool.conn, id)?;
        audit_log_quiet(&pool.conn, "del", &format!("status #{id}"), &status.code);
        Ok(())
    }
}
