use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const SEPARATOR: &str = " | ";

/// Plain-text tables: a banner, an optional header line, and `|`-separated
/// rows padded to the widest visible cell of each column.
#[derive(Debug, Default, Clone)]
pub struct TablePrinter {
    util: WidthUtil,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    fn write_rule<W: Write + ?Sized>(&self, out: &mut W, width: usize) -> io::Result<()> {
        writeln!(out, "{}", "-".repeat(width.max(1)))
    }

    pub fn render_banner<W: Write + ?Sized>(
        &self,
        title: &str,
        width: usize,
        out: &mut W,
    ) -> io::Result<()> {
        let w = width.max(self.util.visible_width(title));
        self.write_rule(out, w)?;
        writeln!(out, "{}", title.to_uppercase())?;
        self.write_rule(out, w)
    }

    pub fn compute_table_width<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> usize {
        natural_width(&self.col_widths(headers, rows))
    }

    /// Renders one table. With no rows and an `empty_message`, the message
    /// replaces header and rows.
    pub fn render_table<T: AsRef<str>, W: Write + ?Sized>(
        &self,
        table_name: &str,
        headers: &[&str],
        rows: &[Vec<T>],
        empty_message: Option<&str>,
        min_width: Option<usize>,
        out: &mut W,
    ) -> io::Result<()> {
        let widths = self.col_widths(headers, rows);
        let total = natural_width(&widths).max(min_width.unwrap_or(0));

        if rows.is_empty() {
            if let Some(msg) = empty_message {
                let total = total.max(self.util.visible_width(msg));
                self.render_banner(table_name, total, out)?;
                writeln!(out, "{msg}")?;
                return self.write_rule(out, total.max(self.util.visible_width(table_name)));
            }
        }

        let total = total.max(self.util.visible_width(table_name));
        self.render_banner(table_name, total, out)?;
        if !headers.is_empty() {
            writeln!(out, "{}", self.join_padded(headers, &widths))?;
            self.write_rule(out, total)?;
        }
        for row in rows {
            writeln!(out, "{}", self.join_padded(row, &widths))?;
        }
        self.write_rule(out, total)
    }

    fn col_widths<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> Vec<usize> {
        let mut widths: Vec<usize> = headers.iter().map(|h| self.util.visible_width(h)).collect();
        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(self.util.visible_width(cell.as_ref()));
            }
        }
        widths
    }

    fn join_padded<T: AsRef<str>>(&self, cells: &[T], widths: &[usize]) -> String {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| self.util.pad_visible(cell.as_ref(), *w))
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        line.trim_end().to_string()
    }
}

fn natural_width(widths: &[usize]) -> usize {
    match widths.len() {
        0 => 0,
        n => widths.iter().sum::<usize>() + (n - 1) * SEPARATOR.len(),
    }
}
