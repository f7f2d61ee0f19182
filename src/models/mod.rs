pub mod assignment_row;
pub mod issue;
pub mod plan;
pub mod project;
pub mod report_log;
pub mod task;
pub mod user;
pub mod user_attribute;
pub mod work_log;

/// What an upsert-or-delete write ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted(i64),
    Updated(i64),
    Deleted,
    /// Zero was written where nothing existed.
    Unchanged,
}
