use crate::cli::commands::open_pool;
use crate::cli::parser::IssueCmd;
use crate::config::Config;
use crate::core::issue::IssueLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::ask_confirmation;
use crate::utils::colors::{RESET, color_for_remaining};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &IssueCmd, cfg: &Config) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;

    match cmd {
        IssueCmd::Add {
            project,
            cd,
            name,
            description,
            status,
        } => {
            let id = IssueLogic::add(&mut pool, project, cd, name, description, status.as_deref())?;
            success(format!("Issue '{project}/{cd}' added (id {id})."));
        }

        IssueCmd::List { project } => {
            let issues = IssueLogic::list(&mut pool, project.as_deref())?;
            if issues.is_empty() {
                info("No issues found.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Project"),
                Column::left("Code"),
                Column::left("Name"),
                Column::left("Status"),
                Column::right("Estimate"),
                Column::right("Actual"),
                Column::right("Remaining"),
                Column::right("Rate"),
            ]);

            let mut overruns = 0;
            for p in issues {
                let (estimate, actual, remaining, rate) = p.comparison.display();
                if p.comparison.is_overrun {
                    overruns += 1;
                }
                let s = p.summary;
                table.add_row(vec![
                    s.issue.id.to_string(),
                    s.project_cd,
                    s.issue.cd,
                    s.issue.name,
                    s.status_name.unwrap_or(s.issue.status),
                    estimate,
                    actual,
                    format!(
                        "{}{}{}",
                        color_for_remaining(p.comparison.remaining),
                        remaining,
                        RESET
                    ),
                    rate,
                ]);
            }
            print!("{}", table.render());

            if overruns > 0 {
                warning(format!("{overruns} issue(s) over their estimate."));
            }
        }

        IssueCmd::Edit {
            id,
            name,
            description,
            status,
        } => {
            let i = IssueLogic::edit(
                &mut pool,
                *id,
                name.as_deref(),
                description.as_deref(),
                status.as_deref(),
            )?;
            success(format!("Issue #{} updated: {} [{}]", i.id, i.name, i.status));
        }

        IssueCmd::Del { id, force } => {
            let prompt = format!(
                "Delete issue #{id} with its tasks and work logs? This action is irreversible."
            );
            if !*force && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
            let i = IssueLogic::delete(&mut pool, *id)?;
            success(format!("Issue #{} '{}' has been deleted.", i.id, i.cd));
        }
    }

    Ok(())
}
