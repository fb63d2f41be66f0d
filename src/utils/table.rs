//! Table rendering utilities for CLI outputs.
//! Column widths are measured on the visible text, ANSI escapes excluded.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap());
    re.replace_all(s, "").into_owned()
}

fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| visible_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(visible_width(cell));
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let push_line = |out: &mut String, cells: &[String]| {
            let mut line = String::new();
            for (i, w) in widths.iter().enumerate() {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                let pad = w.saturating_sub(visible_width(cell));
                line.push_str(cell);
                line.push_str(&" ".repeat(pad + 2));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        };

        push_line(&mut out, &self.headers);
        let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &sep);
        for row in &self.rows {
            push_line(&mut out, row);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_on_visible_width() {
        let mut t = Table::new(&["ID", "STATE"]);
        t.add_row(vec!["a".into(), "\x1b[32mon\x1b[0m".into()]);
        t.add_row(vec!["bbbb".into(), "off".into()]);
        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "ID    STATE");
        assert_eq!(lines[1], "----  -----");
        assert_eq!(strip_ansi(lines[2]), "a     on");
        assert_eq!(lines[3], "bbbb  off");
    }
}
