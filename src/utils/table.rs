//! Table rendering utilities for CLI outputs.
//!
//! Column widths come from the widest visible cell: ANSI sequences are
//! stripped before measuring, and widths use terminal display width rather
//! than char count.

use crate::utils::formatting::strip_ansi;
use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<&str>) -> Self {
        Self {
            headers: headers.into_iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn visible_width(s: &str) -> usize {
        UnicodeWidthStr::width(strip_ansi(s).as_str())
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| Self::visible_width(h)).collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(Self::visible_width(cell));
                }
            }
        }

        widths
    }

    pub fn render(&self, separator_char: &str) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        // Header
        for (i, h) in self.headers.iter().enumerate() {
            out.push_str(h);
            out.push_str(&" ".repeat(widths[i] - Self::visible_width(h) + 2));
        }
        out.push('\n');

        // Separator line sized to the full table width
        let total: usize = widths.iter().map(|w| w + 2).sum();
        out.push_str(&separator_char.repeat(total.max(1)));
        out.push('\n');

        // Rows (padding computed on visible width so colored cells align)
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                out.push_str(cell);
                let pad = widths[i].saturating_sub(Self::visible_width(cell)) + 2;
                out.push_str(&" ".repeat(pad));
            }
            out.push('\n');
        }

        out
    }
}
