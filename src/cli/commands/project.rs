use crate::cli::commands::open_pool;
use crate::cli::parser::ProjectCmd;
use crate::config::Config;
use crate::core::project::ProjectLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};
use crate::ui::prompt::ask_confirmation;
use crate::utils::colors::{RESET, color_for_remaining};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &ProjectCmd, cfg: &Config) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;

    match cmd {
        ProjectCmd::Add {
            cd,
            name,
            description,
        } => {
            let id = ProjectLogic::add(&mut pool, cd, name, description)?;
            success(format!("Project '{cd}' added (id {id})."));
        }

        ProjectCmd::List { q, sort, desc } => {
            let projects = ProjectLogic::list(&mut pool, q.as_deref(), *sort, *desc)?;
            if projects.is_empty() {
                info("No projects found.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Code"),
                Column::left("Name"),
                Column::left("Description"),
            ]);
            for p in projects {
                table.add_row(vec![p.id.to_string(), p.cd, p.name, p.description]);
            }
            print!("{}", table.render());
        }

        ProjectCmd::Edit {
            cd,
            name,
            description,
        } => {
            let p = ProjectLogic::edit(&mut pool, cd, name.as_deref(), description.as_deref())?;
            success(format!("Project '{}' updated: {}", p.cd, p.name));
        }

        ProjectCmd::Del { cd, force } => {
            let prompt = format!(
                "Delete project '{cd}' with all its issues, tasks and work logs? This action is irreversible."
            );
            if !*force && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
            ProjectLogic::delete(&mut pool, cd)?;
            success(format!("Project '{cd}' has been deleted."));
        }

        ProjectCmd::Show { cd } => {
            let o = ProjectLogic::show(&mut pool, cd)?;
            let (estimate, actual, remaining, rate) = o.comparison.display();

            header(format!("{} {}", o.project.cd, o.project.name));
            if !o.project.description.is_empty() {
                println!("{}\n", o.project.description);
            }

            let statuses: Vec<String> = o
                .statuses
                .iter()
                .map(|s| format!("{}={}", s.code, s.name))
                .collect();
            println!("Statuses : {}", statuses.join(", "));
            println!("Estimate : {estimate}");
            println!("Actual   : {actual}");
            println!(
                "Remaining: {}{}{}",
                color_for_remaining(o.comparison.remaining),
                remaining,
                RESET
            );
            println!("Rate     : {rate}");

            if o.comparison.is_overrun {
                warning("Actual hours exceed the estimate.");
            }
        }
    }

    Ok(())
}
