use crate::cli::commands::open_pool;
use crate::cli::parser::AssignCmd;
use crate::config::Config;
use crate::core::assignee::AssigneeLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::formatting::progress_label;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &AssignCmd, cfg: &Config) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;

    match cmd {
        AssignCmd::List { project } => {
            let rows = AssigneeLogic::list(&mut pool, project)?;
            if rows.is_empty() {
                info(format!("No assignments in project '{project}'."));
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Issue"),
                Column::right("Task"),
                Column::left("Task name"),
                Column::right("Progress"),
                Column::left("User"),
            ]);
            for r in rows {
                table.add_row(vec![
                    r.assignee_id.to_string(),
                    r.issue_cd,
                    r.task_id.to_string(),
                    format!("{} {}", r.task_cd, r.task_name),
                    progress_label(r.progress_rate),
                    format!("{} ({})", r.user_cd, r.user_name),
                ]);
            }
            print!("{}", table.render());
        }

        AssignCmd::Toggle { task, user } => {
            if AssigneeLogic::toggle(&mut pool, *task, user)? {
                success(format!("User '{user}' assigned to task #{task}."));
            } else {
                success(format!("User '{user}' removed from task #{task}."));
            }
        }

        AssignCmd::Add { task, user } => {
            let id = AssigneeLogic::add(&mut pool, *task, user)?;
            success(format!("User '{user}' assigned to task #{task} (id {id})."));
        }

        AssignCmd::Del { id } => {
            AssigneeLogic::delete(&mut pool, *id)?;
            success(format!("Assignment #{id} has been deleted."));
        }
    }

    Ok(())
}
