use serde::Serialize;

/// Planned hours of a user on a project for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyAssignment {
    pub id: i64,
    pub user_id: i64,
    pub project_id: i64,
    /// `YYYY-MM`
    pub year_month: String,
    pub planned_hours: f64,
}

/// Monthly assignment joined with user and project codes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanRow {
    pub id: i64,
    pub user_id: i64,
    pub user_cd: String,
    pub user_name: String,
    pub project_id: i64,
    pub project_cd: String,
    pub project_name: String,
    pub planned_hours: f64,
}
