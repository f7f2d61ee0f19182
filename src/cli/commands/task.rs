use crate::cli::commands::open_pool;
use crate::cli::parser::TaskCmd;
use crate::config::Config;
use crate::core::task::TaskLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::formatting::{hours_label, progress_label};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &TaskCmd, cfg: &Config) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;

    match cmd {
        TaskCmd::Add {
            issue,
            cd,
            name,
            description,
            estimate,
        } => {
            let id = TaskLogic::add(&mut pool, *issue, cd, name, description, *estimate)?;
            success(format!("Task '{cd}' added to issue #{issue} (id {id})."));
        }

        TaskCmd::List { issue } => {
            let tasks = TaskLogic::list(&mut pool, *issue)?;
            if tasks.is_empty() {
                info(format!("No tasks for issue #{issue}."));
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Code"),
                Column::left("Name"),
                Column::right("Estimate"),
                Column::right("Progress"),
            ]);
            for t in tasks {
                table.add_row(vec![
                    t.id.to_string(),
                    t.cd,
                    t.name,
                    t.estimate_hours.map(hours_label).unwrap_or_else(|| "-".into()),
                    progress_label(t.progress_rate),
                ]);
            }
            print!("{}", table.render());
        }

        TaskCmd::Edit {
            id,
            name,
            description,
            estimate,
        } => {
            let t = TaskLogic::edit(
                &mut pool,
                *id,
                name.as_deref(),
                description.as_deref(),
                *estimate,
            )?;
            success(format!("Task #{} updated: {}", t.id, t.name));
        }

        TaskCmd::Progress { id, rate } => {
            let t = TaskLogic::set_progress(&mut pool, *id, *rate)?;
            success(format!(
                "Task #{} '{}' progress set to {}.",
                t.id,
                t.name,
                progress_label(t.progress_rate)
            ));
        }

        TaskCmd::Del { id, force } => {
            let prompt =
                format!("Delete task #{id} with its work logs? This action is irreversible.");
            if !*force && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
            let t = TaskLogic::delete(&mut pool, *id)?;
            success(format!("Task #{} '{}' has been deleted.", t.id, t.cd));
        }
    }

    Ok(())
}
