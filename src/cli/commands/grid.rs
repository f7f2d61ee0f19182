use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::{GridLogic, GridPeriod};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Grid {
        week,
        month,
        user,
        project,
        issue,
    } = cmd
    {
        let period = match (week, month) {
            (Some(d), _) => GridPeriod::Week(date::parse_date(d)?),
            (None, Some(ym)) => GridPeriod::Month(date::parse_month(ym)?),
            (None, None) => GridPeriod::from_config(cfg, date::today()),
        };

        let mut pool = open_pool(cfg)?;
        let view = GridLogic::load(
            &mut pool,
            period,
            user.as_deref(),
            project.as_deref(),
            *issue,
        )?;

        if view.rows.is_empty() {
            info("No assignments to show.");
            return Ok(());
        }

        print!("{}", view.render(&cfg.weekday_table()));
    }

    Ok(())
}
