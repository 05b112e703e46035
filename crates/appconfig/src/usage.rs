//! Usage text rendering
//!
//! Output is two left-aligned columns, one row per declared parameter in
//! declaration order:
//!
//! ```text
//!   --debug        Debug mode. (default: false)
//!   -buffer_size   Read buffer size. (default: 1024)
//! ```
//!
//! The first column is padded to the longest switch spelling in the catalog.
//! The text is meant for humans and is not stable for parsing.

use crate::param::Catalog;
use std::io;

/// Render `header` followed by one row per parameter.
pub fn render(catalog: &Catalog, header: &str) -> String {
    let switches: Vec<String> = catalog.iter().map(|spec| spec.switch()).collect();
    let width = switches.iter().map(|s| s.chars().count()).max().unwrap_or(0);

    let mut out = String::from(header);
    for (spec, switch) in catalog.iter().zip(&switches) {
        let mut row = format!("  {switch:<width$}   {}", spec.usage_text());
        if let Some(default) = spec.default() {
            row.push_str(&format!(" (default: {default})"));
        }
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

/// Write the rendered usage to `out`.
pub fn write(catalog: &Catalog, out: &mut impl io::Write, header: &str) -> io::Result<()> {
    out.write_all(render(catalog, header).as_bytes())
}

impl Catalog {
    /// See [`render`].
    pub fn render_usage(&self, header: &str) -> String {
        render(self, header)
    }

    /// Print the rendered usage to standard output.
    pub fn print_usage(&self, header: &str) -> io::Result<()> {
        write(self, &mut io::stdout().lock(), header)
    }
}
