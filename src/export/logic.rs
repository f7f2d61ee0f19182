// src/export/logic.rs

use crate::db::log::audit_log_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::work_logs;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::WorkLogExport;
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::models::work_log::WorkLogFilter;
use crate::ui::messages::warning;
use crate::ui::prompt::confirm_overwrite;
use crate::utils::path::expand_tilde;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export dei work log.
    ///
    /// - `file`: path assoluto del file di output (`~/` ammesso)
    /// - `range`: `None`, `"all"` oppure un'espressione accettata da
    ///   [`parse_range`]
    ///
    /// Returns the number of exported rows.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let mut filter = WorkLogFilter::default();
        if let Some(r) = range.filter(|r| !r.eq_ignore_ascii_case("all")) {
            let (from, to) = parse_range(r)?;
            filter.from = Some(from.to_string());
            filter.to = Some(to.to_string());
        }

        let rows: Vec<WorkLogExport> = work_logs::list_entries(&pool.conn, &filter)?
            .into_iter()
            .map(WorkLogExport::from)
            .collect();

        if rows.is_empty() {
            warning("No work logs found for the selected range.");
            return Ok(0);
        }

        if !confirm_overwrite(&path, force) {
            return Err(AppError::Export(
                "export cancelled, existing file not overwritten".into(),
            ));
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &path)?,
        }

        audit_log_quiet(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("{} work logs ({:?})", rows.len(), format),
        );
        Ok(rows.len())
    }
}
