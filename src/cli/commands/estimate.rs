use crate::cli::commands::open_pool;
use crate::cli::parser::EstimateCmd;
use crate::config::Config;
use crate::core::estimate::EstimateLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::formatting::{hours_label, man_months};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &EstimateCmd, cfg: &Config) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;

    match cmd {
        EstimateCmd::List { issue } => {
            let items = EstimateLogic::list(&mut pool, *issue)?;
            if items.is_empty() {
                info(format!("No estimate items for issue #{issue}."));
                return Ok(());
            }

            let total: f64 = items.iter().map(|i| i.hours).sum();
            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Name"),
                Column::right("Hours"),
            ]);
            for i in items {
                table.add_row(vec![i.id.to_string(), i.name, format!("{:.2}", i.hours)]);
            }
            print!("{}", table.render());
            println!(
                "Total: {} ({} man-months)",
                hours_label(total),
                man_months(total, cfg.man_month_hours)
            );
        }

        EstimateCmd::Add { issue, name, hours } => {
            let id = EstimateLogic::add(&mut pool, *issue, name, *hours)?;
            success(format!("Estimate item '{name}' added to issue #{issue} (id {id})."));
        }

        EstimateCmd::Edit { id, name, hours } => {
            let item = EstimateLogic::edit(&mut pool, *id, name.as_deref(), *hours)?;
            success(format!(
                "Estimate item #{} updated: {} {}",
                item.id,
                item.name,
                hours_label(item.hours)
            ));
        }

        EstimateCmd::Del { id } => {
            EstimateLogic::delete(&mut pool, *id)?;
            success(format!("Estimate item #{id} has been deleted."));
        }
    }

    Ok(())
}
