use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::{strip_ansi, visible_width};
use ansi_term::Colour;

/// Widest operation/target column before truncation.
const MAX_OP_WIDTH: usize = 60;

/// One row of the internal audit log.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Colour of an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "hours" => Colour::Cyan,
        "plan" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "backup" | "export" => Colour::RGB(153, 153, 255),
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `operation (target)` with only the operation coloured, cut to
/// [`MAX_OP_WIDTH`] visible characters.
fn op_target_cell(e: &LogEntry) -> String {
    let color = color_for_operation(&e.operation);
    let colored = if e.target.is_empty() {
        color.paint(e.operation.as_str()).to_string()
    } else {
        format!("{} ({})", color.paint(e.operation.as_str()), e.target)
    };

    let visible = strip_ansi(&colored);
    if visible.chars().count() <= MAX_OP_WIDTH {
        return colored;
    }

    let mut cut: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
    cut.push_str("...");
    match cut.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(cut.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn entries(pool: &mut DbPool) -> AppResult<Vec<LogEntry>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogEntry {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = Self::entries(pool)?;

        let cells: Vec<String> = entries.iter().map(op_target_cell).collect();
        let op_w = cells.iter().map(|c| visible_width(c)).max().unwrap_or(10);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (e, cell) in entries.iter().zip(&cells) {
            let padding = " ".repeat(op_w.saturating_sub(visible_width(cell)));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                cell,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
