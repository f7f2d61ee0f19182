//! Parameterised queries, one submodule per table family.
//!
//! Functions here return `rusqlite::Result` and never print; validation and
//! user feedback live in `core`.

pub mod assignees;
pub mod attributes;
pub mod estimates;
pub mod issues;
pub mod monthly;
pub mod projects;
pub mod settings;
pub mod tasks;
pub mod users;
pub mod work_logs;
