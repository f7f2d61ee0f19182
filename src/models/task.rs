use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: i64,
    pub cd: String,
    pub issue_id: i64,
    pub name: String,
    pub description: String,
    pub sort_order: i64,
    pub estimate_hours: Option<f64>,
    /// Percentage in `0..=100`, `None` until first set.
    pub progress_rate: Option<i64>,
}

pub const MAX_PROGRESS: i64 = 100;
