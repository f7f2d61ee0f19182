// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{Cell, get_headers, to_cells};
use crate::export::{WorkLogExport, notify_export_success};
use crate::ui::messages::info;
use chrono::NaiveDate;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX con styling, riga totale e auto-larghezza colonne.
pub(crate) fn export_xlsx(rows: &[WorkLogExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("work_log").map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Righe
    // ---------------------------
    for (row_index, r) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, cell) in to_cells(r).iter().enumerate() {
            let shown = write_cell(worksheet, row, col as u16, cell, band_color)?;
            col_widths[col] = col_widths[col].max(shown);
        }
    }

    // ---------------------------
    // Totale ore
    // ---------------------------
    let total: f64 = rows.iter().map(|r| r.hours).sum();
    let total_row = (rows.len() + 1) as u32;
    let hours_col = (headers.len() - 1) as u16;
    let bold = Format::new().set_bold().set_border(FormatBorder::Thin);

    worksheet
        .write_with_format(total_row, hours_col - 1, "total", &bold)
        .map_err(to_export_error)?;
    worksheet
        .write_with_format(
            total_row,
            hours_col,
            total,
            &bold.clone().set_num_format("0.00"),
        )
        .map_err(to_export_error)?;

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write one typed cell; returns its display width.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    bg: Color,
) -> AppResult<usize> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match cell {
        Cell::Date(s) => match excel_serial(s) {
            Some(serial) => {
                worksheet
                    .write_with_format(row, col, serial, &base.set_num_format("yyyy-mm-dd"))
                    .map_err(to_export_error)?;
                Ok(10)
            }
            None => write_text(worksheet, row, col, s, &base),
        },
        Cell::Number(n) => {
            let fmt = base.set_align(FormatAlign::Right);
            worksheet
                .write_with_format(row, col, *n, &fmt)
                .map_err(to_export_error)?;
            Ok(n.to_string().len())
        }
        Cell::Text(s) => write_text(worksheet, row, col, s, &base),
    }
}

fn write_text(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    fmt: &Format,
) -> AppResult<usize> {
    worksheet
        .write_with_format(row, col, s, fmt)
        .map_err(to_export_error)?;
    Ok(UnicodeWidthStr::width(s))
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

/// Days since 1899-12-30, the epoch spreadsheet dates count from.
fn excel_serial(s: &str) -> Option<f64> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - epoch).num_days() as f64)
}
