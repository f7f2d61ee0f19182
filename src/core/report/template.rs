//! Parser for the report template mini-language.
//!
//! A template is free text. Lines starting with `@project`, `@issue` or
//! `@task` are loop markers: their remainder is the format repeated per
//! project, per issue and per log entry. All other lines are static.

pub const PROJECT_MARKER: &str = "@project";
pub const ISSUE_MARKER: &str = "@issue";
pub const TASK_MARKER: &str = "@task";

/// Placeholder left in the base template where the rendered logs go.
pub const LOGS_PLACEHOLDER: &str = "{__LOGS__}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateLine {
    Static(String),
    ProjectHeader(String),
    IssueHeader(String),
    TaskLine(String),
}

impl TemplateLine {
    /// Classify a single template line.
    ///
    /// The marker is matched as a plain prefix (`@projects` is still a
    /// project marker); the format is the rest of the line without leading
    /// whitespace.
    pub fn classify(line: &str) -> Self {
        if let Some(rest) = line.strip_prefix(PROJECT_MARKER) {
            TemplateLine::ProjectHeader(rest.trim_start().to_string())
        } else if let Some(rest) = line.strip_prefix(ISSUE_MARKER) {
            TemplateLine::IssueHeader(rest.trim_start().to_string())
        } else if let Some(rest) = line.strip_prefix(TASK_MARKER) {
            TemplateLine::TaskLine(rest.trim_start().to_string())
        } else {
            TemplateLine::Static(line.to_string())
        }
    }

    pub fn is_marker(&self) -> bool {
        !matches!(self, TemplateLine::Static(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTemplate {
    /// Static lines joined by `\n`, with [`LOGS_PLACEHOLDER`] at the position
    /// of the first loop marker (if any).
    pub base: String,
    pub project_fmt: String,
    pub issue_fmt: String,
    pub task_fmt: String,
}

impl ParsedTemplate {
    pub fn has_loop(&self) -> bool {
        self.base.split('\n').any(|l| l == LOGS_PLACEHOLDER)
    }
}

/// Split a template into its base text and the three loop formats.
///
/// Never fails: unknown lines and malformed placeholders pass through as
/// static text. When a marker is declared more than once the last
/// declaration wins.
pub fn parse_template(template: &str) -> ParsedTemplate {
    let mut parsed = ParsedTemplate::default();
    let mut base_lines: Vec<String> = Vec::new();
    let mut insert_at: Option<usize> = None;

    for line in template.split('\n').map(TemplateLine::classify) {
        if line.is_marker() && insert_at.is_none() {
            insert_at = Some(base_lines.len());
        }

        match line {
            TemplateLine::Static(text) => base_lines.push(text),
            TemplateLine::ProjectHeader(fmt) => parsed.project_fmt = fmt,
            TemplateLine::IssueHeader(fmt) => parsed.issue_fmt = fmt,
            TemplateLine::TaskLine(fmt) => parsed.task_fmt = fmt,
        }
    }

    if let Some(idx) = insert_at {
        base_lines.insert(idx, LOGS_PLACEHOLDER.to_string());
    }

    parsed.base = base_lines.join("\n");
    parsed
}
