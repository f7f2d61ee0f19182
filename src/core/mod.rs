//! Business logic between the CLI handlers and the query layer.

pub mod assignee;
pub mod attribute;
pub mod backup;
pub mod calculator;
pub mod daily_report;
pub mod dashboard;
pub mod estimate;
pub mod grid;
pub mod issue;
pub mod log;
pub mod lookup;
pub mod plan;
pub mod project;
pub mod report;
pub mod task;
pub mod user;
pub mod worklog;
