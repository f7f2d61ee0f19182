use crate::cli::commands::open_pool;
use crate::cli::parser::StatusCmd;
use crate::config::Config;
use crate::core::project::StatusLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &StatusCmd, cfg: &Config) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;

    match cmd {
        StatusCmd::List { project } => {
            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Code"),
                Column::left("Name"),
                Column::right("Order"),
            ]);
            for s in StatusLogic::list(&mut pool, project)? {
                table.add_row(vec![
                    s.id.to_string(),
                    s.code,
                    s.name,
                    s.sort_order.to_string(),
                ]);
            }
            print!("{}", table.render());
        }

        StatusCmd::Add {
            project,
            code,
            name,
            sort_order,
        } => {
            let id = StatusLogic::add(&mut pool, project, code, name, *sort_order)?;
            success(format!("Status '{code}' added to '{project}' (id {id})."));
        }

        StatusCmd::Edit {
            id,
            name,
            sort_order,
        } => {
            let s = StatusLogic::edit(&mut pool, *id, name.as_deref(), *sort_order)?;
            success(format!("Status #{} updated: {} ({})", s.id, s.name, s.code));
        }

        StatusCmd::Del { id } => {
            StatusLogic::delete(&mut pool, *id)?;
            success(format!("Status #{id} has been deleted."));
        }
    }

    Ok(())
}
