use crate::cli::commands::open_pool;
use crate::cli::parser::PlanCmd;
use crate::config::Config;
use crate::core::calculator::comparison::Comparison;
use crate::core::plan::PlanLogic;
use crate::errors::AppResult;
use crate::models::UpsertOutcome;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{RESET, color_for_remaining};
use crate::utils::date;
use crate::utils::formatting::{hours_label, man_months};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &PlanCmd, cfg: &Config) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;

    match cmd {
        PlanCmd::Set {
            user,
            project,
            month,
            hours,
        } => match PlanLogic::set(&mut pool, user, project, month, *hours)? {
            UpsertOutcome::Inserted(id) | UpsertOutcome::Updated(id) => success(format!(
                "Planned {} for '{user}' on '{project}' in {month} (id {id}).",
                hours_label(*hours)
            )),
            UpsertOutcome::Deleted => {
                success(format!("Removed the plan of '{user}' on '{project}' in {month}."))
            }
            UpsertOutcome::Unchanged => info("Nothing to change."),
        },

        PlanCmd::Del { id } => {
            PlanLogic::delete(&mut pool, *id)?;
            success(format!("Monthly assignment #{id} has been deleted."));
        }

        PlanCmd::Show { month, detail } => {
            let ym = match month {
                Some(m) => m.clone(),
                None => date::month_key(&date::today()),
            };
            let plan = PlanLogic::month(&mut pool, &ym)?;

            header(format!("Plan {}", plan.year_month));
            if plan.projects.is_empty() {
                info("Nothing planned or logged in this month.");
                return Ok(());
            }

            let mut columns = vec![
                Column::left("Project / User"),
                Column::right("Planned"),
                Column::right("Man-months"),
            ];
            if *detail {
                columns.push(Column::right("Actual"));
                columns.push(Column::right("Remaining"));
                columns.push(Column::right("Rate"));
            }

            let mut table = Table::new(columns);
            let mm = cfg.man_month_hours;
            for p in &plan.projects {
                table.add_row(plan_cells(
                    format!("{} {}", p.project_cd, p.project_name),
                    &p.total,
                    mm,
                    *detail,
                ));
                for line in &p.lines {
                    let label = match line.assignment_id {
                        Some(id) => format!("  {} {} (#{id})", line.user_cd, line.user_name),
                        None => format!("  {} {}", line.user_cd, line.user_name),
                    };
                    table.add_row(plan_cells(label, &line.comparison, mm, *detail));
                }
            }
            table.add_row(plan_cells("Total".to_string(), &plan.total, mm, *detail));
            print!("{}", table.render());

            if *detail && plan.total.is_overrun {
                warning("Actual hours exceed the plan for this month.");
            }
        }
    }

    Ok(())
}

fn plan_cells(label: String, c: &Comparison, man_month_hours: f64, detail: bool) -> Vec<String> {
    let mut out = vec![
        label,
        format!("{:.2}", c.planned),
        man_months(c.planned, man_month_hours),
    ];
    if detail {
        let (_, actual, remaining, rate) = c.display();
        out.push(actual);
        out.push(format!("{}{}{}", color_for_remaining(c.remaining), remaining, RESET));
        out.push(rate);
    }
    out
}
