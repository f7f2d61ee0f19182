// src/export/model.rs

use crate::models::work_log::WorkLogEntry;
use serde::Serialize;

/// Flat work-log row written by every export format.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WorkLogExport {
    pub id: i64,
    pub date: String,
    pub user_cd: String,
    pub user_name: String,
    pub project_cd: String,
    pub issue_cd: String,
    pub task_id: i64,
    pub task_name: String,
    pub hours: f64,
}

impl From<WorkLogEntry> for WorkLogExport {
    fn from(e: WorkLogEntry) -> Self {
        Self {
            id: e.id,
            date: e.work_date,
            user_cd: e.user_cd,
            user_name: e.user_name,
            project_cd: e.project_cd,
            issue_cd: e.issue_cd,
            task_id: e.task_id,
            task_name: e.task_name,
            hours: e.hours,
        }
    }
}

/// Typed spreadsheet cell; codes stay text even when they look numeric.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Cell {
    Text(String),
    Number(f64),
    Date(String),
}

/// Header per XLSX (CSV / JSON take field names from serde).
pub(crate) fn get_headers() -> [&'static str; 9] {
    [
        "id",
        "date",
        "user_cd",
        "user_name",
        "project_cd",
        "issue_cd",
        "task_id",
        "task_name",
        "hours",
    ]
}

pub(crate) fn to_cells(e: &WorkLogExport) -> [Cell; 9] {
    [
        Cell::Number(e.id as f64),
        Cell::Date(e.date.clone()),
        Cell::Text(e.user_cd.clone()),
        Cell::Text(e.user_name.clone()),
        Cell::Text(e.project_cd.clone()),
        Cell::Text(e.issue_cd.clone()),
        Cell::Number(e.task_id as f64),
        Cell::Text(e.task_name.clone()),
        Cell::Number(e.hours),
    ]
}
