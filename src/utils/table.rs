//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{pad_left, pad_right, visible_width};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            align: Align::Left,
        }
    }

    pub fn right(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            align: Align::Right,
        }
    }
}

/// Plain-text table; column widths follow the widest cell.
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Missing trailing cells render empty; extra cells are dropped.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_width(c))
                    .chain(std::iter::once(visible_width(&col.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // header
        render_line(
            self.columns.iter().map(|c| (c.header.as_str(), Align::Left)),
            &widths,
            &mut out,
        );

        let total: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
        out.push_str(&"-".repeat(total));
        out.push('\n');

        // rows
        for row in &self.rows {
            render_line(
                self.columns
                    .iter()
                    .enumerate()
                    .map(|(i, c)| (row.get(i).map(String::as_str).unwrap_or(""), c.align)),
                &widths,
                &mut out,
            );
        }

        out
    }
}

fn render_line<'a>(
    cells: impl Iterator<Item = (&'a str, Align)>,
    widths: &[usize],
    out: &mut String,
) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|((cell, align), w)| match align {
            Align::Left => pad_right(cell, *w),
            Align::Right => pad_left(cell, *w),
        })
        .collect();
    out.push_str(line.join(" ").trim_end());
    out.push('\n');
}
