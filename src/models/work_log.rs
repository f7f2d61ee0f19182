use serde::Serialize;

/// Hours a user spent on a task on a given day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkLog {
    pub id: i64,
    pub task_id: i64,
    pub user_id: i64,
    /// `YYYY-MM-DD`
    pub work_date: String,
    pub hours: f64,
}

/// Work log joined with the codes and names needed for listings and exports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkLogEntry {
    pub id: i64,
    pub work_date: String,
    pub user_cd: String,
    pub user_name: String,
    pub project_cd: String,
    pub issue_cd: String,
    pub task_id: i64,
    pub task_name: String,
    pub hours: f64,
}

/// Optional filters of a work-log listing; `None` means "any".
#[derive(Debug, Clone, Default)]
pub struct WorkLogFilter {
    pub user_id: Option<i64>,
    pub project_id: Option<i64>,
    pub issue_id: Option<i64>,
    pub from: Option<String>,
    pub to: Option<String>,
}
