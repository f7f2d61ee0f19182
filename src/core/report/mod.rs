//! Daily report template engine.
//!
//! [`template`] splits a template into static text and loop formats,
//! [`render`] expands them against a day's work logs.

pub mod render;
pub mod template;

pub use render::{
    NO_ENTRIES, ReportContext, ReportLocale, format_line, format_logs, generate_report,
};
pub use template::{LOGS_PLACEHOLDER, ParsedTemplate, TemplateLine, parse_template};
