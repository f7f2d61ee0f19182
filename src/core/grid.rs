use crate::config::Config;
use crate::core::calculator::grid::{
    DailyTotals, HoursByKey, IssueTotals, ProjectTotals, aggregate, column_totals, date_key,
    row_hours,
};
use crate::core::lookup;
use crate::db::pool::DbPool;
use crate::db::queries::{assignees, work_logs};
use crate::errors::AppResult;
use crate::models::assignment_row::{AssignmentFilter, AssignmentRow};
use crate::utils::date;
use crate::utils::formatting::{hours_cell, progress_label};
use crate::utils::table::{Column, Table};
use chrono::{Datelike, NaiveDate};

/// Date span shown by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridPeriod {
    /// Monday to Sunday around the date.
    Week(NaiveDate),
    /// Every day of the month of the date.
    Month(NaiveDate),
}

impl GridPeriod {
    pub fn dates(&self) -> Vec<NaiveDate> {
        match self {
            GridPeriod::Week(d) => date::week_days(d),
            GridPeriod::Month(d) => date::all_days_of_month(d.year(), d.month()),
        }
    }

    /// `default_view` of the configuration decides between week and month.
    pub fn from_config(cfg: &Config, around: NaiveDate) -> Self {
        if cfg.default_view.eq_ignore_ascii_case("month") {
            GridPeriod::Month(around)
        } else {
            GridPeriod::Week(around)
        }
    }
}

/// Everything the grid table is rendered from.
#[derive(Debug, Clone)]
pub struct GridView {
    pub dates: Vec<NaiveDate>,
    pub rows: Vec<AssignmentRow>,
    pub hours: HoursByKey,
    pub projects: ProjectTotals,
    pub issues: IssueTotals,
    pub totals: DailyTotals,
}

impl GridView {
    pub fn build(dates: Vec<NaiveDate>, rows: Vec<AssignmentRow>, hours: HoursByKey) -> Self {
        let (projects, issues) = aggregate(&rows, &dates, &hours);
        let totals = column_totals(&rows, &dates, &hours);
        Self {
            dates,
            rows,
            hours,
            projects,
            issues,
            totals,
        }
    }

    /// Plain-text table: project subtotal, issue subtotal and assignment
    /// rows in load order, then the daily totals.
    pub fn render(&self, weekday_names: &[String; 7]) -> String {
        let mut columns = vec![
            Column::left("Project / Issue / Task"),
            Column::left("User"),
            Column::right("Progress"),
        ];
        for d in &self.dates {
            let wd = &weekday_names[d.weekday().num_days_from_monday() as usize];
            columns.push(Column::right(format!("{}({})", d.format("%m/%d"), wd)));
        }
        columns.push(Column::right("Total"));

        let mut table = Table::new(columns);
        let mut current_project: Option<i64> = None;
        let mut current_issue: Option<(i64, i64)> = None;

        for row in &self.rows {
            if current_project != Some(row.project_id) {
                current_project = Some(row.project_id);
                current_issue = None;
                if let Some(t) = self.projects.get(&row.project_id) {
                    let label = format!("{} {}", row.project_cd, row.project_name);
                    table.add_row(self.cells(label, String::new(), String::new(), t));
                }
            }

            let issue_key = (row.project_id, row.issue_id);
            if current_issue != Some(issue_key) {
                current_issue = Some(issue_key);
                if let Some(t) = self.issues.get(&issue_key) {
                    let label = format!("  {} {}", row.issue_cd, row.issue_name);
                    table.add_row(self.cells(label, String::new(), String::new(), t));
                }
            }

            let t = row_hours(row, &self.dates, &self.hours);
            table.add_row(self.cells(
                format!("    {} {}", row.task_cd, row.task_name),
                row.user_name.clone(),
                progress_label(row.progress_rate),
                &t,
            ));
        }

        table.add_row(self.cells(
            "Total".to_string(),
            String::new(),
            String::new(),
            &self.totals,
        ));

        table.render()
    }

    fn cells(&self, label: String, user: String, progress: String, t: &DailyTotals) -> Vec<String> {
        let mut out = vec![label, user, progress];
        out.extend(self.dates.iter().map(|d| hours_cell(t.get(&date_key(d)))));
        out.push(hours_cell(t.total));
        out
    }
}

pub struct GridLogic;

impl GridLogic {
    pub fn load(
        pool: &mut DbPool,
        period: GridPeriod,
        user_key: Option<&str>,
        project_cd: Option<&str>,
        issue_id: Option<i64>,
    ) -> AppResult<GridView> {
        let conn = &pool.conn;
        let filter = AssignmentFilter {
            user_id: user_key.map(|k| lookup::user(conn, k)).transpose()?.map(|u| u.id),
            project_id: project_cd
                .map(|cd| lookup::project(conn, cd))
                .transpose()?
                .map(|p| p.id),
            issue_id,
        };

        let dates = period.dates();
        let rows = assignees::load_assignment_rows(conn, &filter)?;

        let hours = match (dates.first(), dates.last()) {
            (Some(first), Some(last)) => {
                work_logs::hours_by_key(conn, &date_key(first), &date_key(last))?
            }
            _ => HoursByKey::new(),
        };

        Ok(GridView::build(dates, rows, hours))
    }
}
