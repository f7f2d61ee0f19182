use serde::Serialize;

/// One materialized (task, user) assignment, pre-joined with the display
/// fields of its task, issue, project and user.
///
/// Only the four ids take part in aggregation; everything else is carried
/// through unchanged for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentRow {
    pub assignee_id: i64,
    pub project_id: i64,
    pub project_cd: String,
    pub project_name: String,
    pub issue_id: i64,
    pub issue_cd: String,
    pub issue_name: String,
    pub task_id: i64,
    pub task_cd: String,
    pub task_name: String,
    pub progress_rate: Option<i64>,
    pub user_id: i64,
    pub user_cd: String,
    pub user_name: String,
}

impl AssignmentRow {
    /// Row carrying only ids, with empty display fields.
    pub fn from_ids(project_id: i64, issue_id: i64, task_id: i64, user_id: i64) -> Self {
        Self {
            assignee_id: 0,
            project_id,
            project_cd: String::new(),
            project_name: String::new(),
            issue_id,
            issue_cd: String::new(),
            issue_name: String::new(),
            task_id,
            task_cd: String::new(),
            task_name: String::new(),
            progress_rate: None,
            user_id,
            user_cd: String::new(),
            user_name: String::new(),
        }
    }
}

/// Narrowing of the assignment rows shown by the grid; `None` means "any".
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentFilter {
    pub user_id: Option<i64>,
    pub project_id: Option<i64>,
    pub issue_id: Option<i64>,
}
