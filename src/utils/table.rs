//! Table rendering utilities for CLI outputs.
//!
//! Column widths follow the widest cell, capped by `max_width`; longer cells
//! are wrapped onto extra lines instead of being cut.

use super::formatting::{pad_right, visible_width};

pub struct Column {
    pub header: String,
    pub max_width: usize,
}

impl Column {
    pub fn new(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width,
        }
    }
}

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

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_width(c))
                    .chain(std::iter::once(visible_width(&col.header)))
                    .max()
                    .unwrap_or(0);
                widest.min(col.max_width.max(1))
            })
            .collect()
    }

    fn render_line(out: &mut String, cells: &[Vec<String>], widths: &[usize]) {
        let height = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
        for line in 0..height {
            let mut text = String::new();
            for (i, width) in widths.iter().enumerate() {
                let part = cells
                    .get(i)
                    .and_then(|c| c.get(line))
                    .map(String::as_str)
                    .unwrap_or("");
                text.push_str(&pad_right(part, *width));
                text.push_str("  ");
            }
            out.push_str(text.trim_end());
            out.push('\n');
        }
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let header: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|c| vec![c.header.clone()])
            .collect();
        Self::render_line(&mut out, &header, &widths);

        let rule: Vec<Vec<String>> = widths.iter().map(|w| vec!["-".repeat(*w)]).collect();
        Self::render_line(&mut out, &rule, &widths);

        for row in &self.rows {
            let cells: Vec<Vec<String>> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    let cell = row.get(i).map(String::as_str).unwrap_or("");
                    if visible_width(cell) <= *w {
                        vec![cell.to_string()]
                    } else {
                        textwrap::wrap(cell, *w)
                            .into_iter()
                            .map(|c| c.into_owned())
                            .collect()
                    }
                })
                .collect();
            Self::render_line(&mut out, &cells, &widths);
        }

        out
    }
}
