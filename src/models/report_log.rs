use serde::Serialize;

/// One work-log line of a user's day, as consumed by the report renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLog {
    pub project_cd: String,
    pub project_name: String,
    pub issue_cd: String,
    pub issue_name: String,
    pub task_name: String,
    /// `None` when the task has no progress recorded (rendered as 0).
    pub progress_rate: Option<i64>,
    pub hours: f64,
}

impl ReportLog {
    pub fn progress(&self) -> i64 {
        self.progress_rate.unwrap_or(0)
    }
}
