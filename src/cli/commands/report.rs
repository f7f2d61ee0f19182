use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::daily_report::ReportLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        user,
        date: day,
        template,
        hide_zero,
        save_template,
        reset_template,
    } = cmd
    {
        let mut pool = open_pool(cfg)?;
        let template_path = template.as_deref().map(expand_tilde);

        if *reset_template {
            if ReportLogic::reset_template(&mut pool, user)? {
                success(format!("Report template of '{user}' reset to the default."));
            } else {
                info(format!("'{user}' has no saved report template."));
            }
            return Ok(());
        }

        if *save_template && let Some(path) = &template_path {
            ReportLogic::save_template(&mut pool, user, path)?;
            success(format!(
                "Saved {} as the report template of '{user}'.",
                path.display()
            ));
            return Ok(());
        }

        let on = date::parse_date_or_today(day.as_deref())?;
        let report = ReportLogic::render(
            &mut pool,
            cfg,
            user,
            on,
            template_path.as_deref(),
            *hide_zero,
        )?;

        println!("{}", report.text);
    }

    Ok(())
}
