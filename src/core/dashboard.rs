use crate::core::calculator::comparison::Comparison;
use crate::db::pool::DbPool;
use crate::db::queries::{monthly, projects, users, work_logs};
use crate::errors::AppResult;
use crate::utils::date;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub date: NaiveDate,
    /// Hours logged on `date` by everyone.
    pub day_hours: f64,
    pub year_month: String,
    /// Planned vs actual over the month containing `date`.
    pub month: Comparison,
    pub project_count: i64,
    pub active_user_count: i64,
}

pub struct DashboardLogic;

impl DashboardLogic {
    pub fn load(pool: &mut DbPool, on: NaiveDate) -> AppResult<Dashboard> {
        let conn = &pool.conn;
        let day = on.to_string();
        let (from, to) = date::month_bounds(&on);
        let year_month = date::month_key(&on);

        let day_hours = work_logs::sum_hours(conn, None, &day, &day)?;
        let planned = monthly::sum_planned(conn, &year_month)?;
        let actual = work_logs::sum_hours(conn, None, &from.to_string(), &to.to_string())?;

        Ok(Dashboard {
            date: on,
            day_hours,
            year_month,
            month: Comparison::calculate(planned, actual),
            project_count: projects::count_projects(conn)?,
            active_user_count: users::count_active_users(conn)?,
        })
    }
}
