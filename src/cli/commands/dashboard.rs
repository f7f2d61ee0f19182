use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::DashboardLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{CYAN, RESET, color_for_remaining};
use crate::utils::date;
use crate::utils::formatting::man_months;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { date: day } = cmd {
        let on = date::parse_date_or_today(day.as_deref())?;
        let mut pool = open_pool(cfg)?;
        let d = DashboardLogic::load(&mut pool, on)?;
        let (planned, actual, remaining, rate) = d.month.display();

        header(format!("Dashboard {}", d.date));
        println!("{CYAN}• Today:{RESET} {:.2}h", d.day_hours);
        println!("{CYAN}• Month {}:{RESET}", d.year_month);
        println!(
            "    planned:   {planned} ({} man-months)",
            man_months(d.month.planned, cfg.man_month_hours)
        );
        println!("    actual:    {actual}");
        println!(
            "    remaining: {}{remaining}{RESET}",
            color_for_remaining(d.month.remaining)
        );
        println!("    rate:      {rate}");
        println!("{CYAN}• Projects:{RESET} {}", d.project_count);
        println!("{CYAN}• Active users:{RESET} {}", d.active_user_count);

        if d.month.is_overrun {
            warning("Logged hours exceed the monthly plan.");
        }
    }

    Ok(())
}
