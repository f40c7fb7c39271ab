//! The fixed report sequence
//!
//! Six lines, in order: greeting, separator, timestamp, working directory,
//! sample calculation, closing success line. Rendering is split from the
//! values it displays so tests can pin the instant and the directory.

use std::fmt::Write;

use chrono::{Local, NaiveDateTime};

use crate::consts::{SEPARATOR_WIDTH, TIMESTAMP_FORMAT};
use crate::math::add;
use crate::workdir;

/// Renders the full report against the current instant and working
/// directory and writes it to stdout.
pub(crate) fn run() {
    let report = render_report(Local::now().naive_local(), &workdir::resolve());
    print!("{report}");
}

/// Builds the report document for a given instant and working directory.
pub(crate) fn render_report(now: NaiveDateTime, workdir: &str) -> String {
    let mut out = String::new();
    out.push_str("🚀 Hello from Go!\n");
    out.push_str(&separator());
    out.push('\n');
    let _ = writeln!(out, "📅 Tarih: {}", now.format(TIMESTAMP_FORMAT));
    let _ = writeln!(out, "🏠 Çalışma dizini: {workdir}");
    let _ = writeln!(out, "🧮 10 + 5 = {}", add(10, 5));
    out.push_str("\n✅ Go uygulaması başarıyla çalıştı!\n");
    out
}

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}
