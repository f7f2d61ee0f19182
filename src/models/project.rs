use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: i64,
    pub cd: String,
    pub name: String,
    pub description: String,
}

/// A workflow status an issue of the project can be in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectStatus {
    pub id: i64,
    pub project_id: i64,
    pub code: String,
    pub name: String,
    pub sort_order: i64,
}

/// Statuses created together with every new project: (code, name, sort order).
pub const DEFAULT_STATUSES: [(&str, &str, i64); 3] = [
    ("open", "未着手", 0),
    ("in_progress", "進行中", 1),
    ("closed", "完了", 2),
];

/// Status assigned to new issues when none is given.
pub const DEFAULT_ISSUE_STATUS: &str = "open";

/// Sort keys accepted by `project list --sort`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ProjectSort {
    #[default]
    Cd,
    Name,
    Description,
}

impl ProjectSort {
    /// Column name; only ever one of a fixed set, safe to splice into SQL.
    pub fn column(&self) -> &'static str {
        match self {
            ProjectSort::Cd => "cd",
            ProjectSort::Name => "name",
            ProjectSort::Description => "description",
        }
    }
}
