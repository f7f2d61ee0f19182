use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub id: i64,
    pub cd: String,
    pub project_id: i64,
    pub name: String,
    pub description: String,
    /// Code of one of the project's statuses.
    pub status: String,
}

/// Issue joined with its project, status label and hour totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueSummary {
    pub issue: Issue,
    pub project_cd: String,
    pub status_name: Option<String>,
    pub estimate_hours: f64,
    pub actual_hours: f64,
}

/// One line of an issue's work estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateItem {
    pub id: i64,
    pub issue_id: i64,
    pub name: String,
    pub hours: f64,
    pub sort_order: i64,
}
