use crate::cli::commands::open_pool;
use crate::cli::parser::HoursCmd;
use crate::config::Config;
use crate::core::worklog::WorklogLogic;
use crate::errors::AppResult;
use crate::models::UpsertOutcome;
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::formatting::{hours_label, man_months};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &HoursCmd, cfg: &Config) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;

    match cmd {
        HoursCmd::Set {
            task,
            user,
            date: day,
            hours,
        } => {
            let on = date::parse_date(day)?;
            match WorklogLogic::set_hours(&mut pool, cfg, *task, user, on, *hours)? {
                UpsertOutcome::Inserted(id) => success(format!(
                    "Logged {:.2}h for '{user}' on task #{task} ({on}) (id {id}).",
                    hours
                )),
                UpsertOutcome::Updated(id) => success(format!(
                    "Updated work log #{id}: {:.2}h for '{user}' on task #{task} ({on}).",
                    hours
                )),
                UpsertOutcome::Deleted => {
                    success(format!("Removed the hours of '{user}' on task #{task} ({on})."))
                }
                UpsertOutcome::Unchanged => info("Nothing to change."),
            }
        }

        HoursCmd::Del { id } => {
            WorklogLogic::delete(&mut pool, *id)?;
            success(format!("Work log #{id} has been deleted."));
        }

        HoursCmd::List {
            user,
            project,
            issue,
            from,
            to,
        } => {
            let entries = WorklogLogic::list(
                &mut pool,
                user.as_deref(),
                project.as_deref(),
                *issue,
                from.as_deref(),
                to.as_deref(),
            )?;
            if entries.is_empty() {
                info("No work logs found.");
                return Ok(());
            }

            let total: f64 = entries.iter().map(|e| e.hours).sum();
            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Date"),
                Column::left("User"),
                Column::left("Project"),
                Column::left("Issue"),
                Column::left("Task"),
                Column::right("Hours"),
            ]);
            for e in entries {
                table.add_row(vec![
                    e.id.to_string(),
                    e.work_date,
                    e.user_cd,
                    e.project_cd,
                    e.issue_cd,
                    format!("#{} {}", e.task_id, e.task_name),
                    format!("{:.2}", e.hours),
                ]);
            }
            print!("{}", table.render());
            println!(
                "Total: {} ({} man-months)",
                hours_label(total),
                man_months(total, cfg.man_month_hours)
            );
        }

        HoursCmd::Total {
            user,
            date: day,
            month,
        } => {
            let (from, to, label) = match month {
                Some(ym) => {
                    let first = date::parse_month(ym)?;
                    let (from, to) = date::month_bounds(&first);
                    (from, to, date::month_key(&first))
                }
                None => {
                    let on = date::parse_date_or_today(day.as_deref())?;
                    (on, on, on.to_string())
                }
            };

            let total = WorklogLogic::total(&mut pool, user, from, to)?;
            println!("{user} {label}: {total:.2}h");
        }
    }

    Ok(())
}
