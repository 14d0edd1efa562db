//! Console and file reports for finished searches.
//!
//! The record file lists one field per line (starting state, final state,
//! strategy, depth, node counts) followed by the move path, which starts with
//! `Start` and wraps every [`ReportConfig::wrap_width`] entries.
use crate::engine::Board;
use crate::error::{Error, Result};
use crate::solver::SearchResult;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Default record file name.
pub const DEFAULT_REPORT_PATH: &str = "results.csv";
/// Default number of move-path entries per line in the record file.
pub const DEFAULT_WRAP_WIDTH: usize = 25;

/// Where and how the record file is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    pub path: PathBuf,
    pub wrap_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_REPORT_PATH),
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}

/// Summary printed to the console after a successful search.
pub fn render(result: &SearchResult) -> String {
    let mut lines = vec!["Search successful!".to_string()];
    lines.extend(field_lines(result));
    lines.join("\n")
}

/// Summary printed to the console when a search returned an error.
pub fn render_failure(start: &Board, err: &Error) -> String {
    format!(
        "Solution was not found\nStarting State: {}\nReason: {}",
        start, err
    )
}

fn field_lines(result: &SearchResult) -> Vec<String> {
    vec![
        format!("Starting State: {}", result.start),
        format!("Final State: {}", result.final_state),
        format!("Search Strategy: {}", result.strategy),
        format!("Search Depth: {}", result.depth),
        format!("Node Count: {}", result.generation_order),
        format!("Nodes Generated: {}", result.nodes_generated),
    ]
}

/// Joins `Start` and the move descriptors with `", "`, breaking the line
/// after every `wrap_width` entries. A width of 0 disables wrapping.
///
/// ```
/// use puzzle_slider::report::format_move_path;
/// let moves = vec!["8 to 9".to_string()];
/// assert_eq!(format_move_path(&moves, 25), "Start, 8 to 9");
/// ```
pub fn format_move_path(descriptors: &[String], wrap_width: usize) -> String {
    let entries = std::iter::once("Start").chain(descriptors.iter().map(String::as_str));
    let mut output = String::new();
    for (i, entry) in entries.enumerate() {
        if i > 0 {
            if wrap_width > 0 && i % wrap_width == 0 {
                output.push_str(",\n");
            } else {
                output.push_str(", ");
            }
        }
        output.push_str(entry);
    }
    output
}

/// Writes the full record of `result` to `writer`.
pub fn write_report<W: Write>(writer: &mut W, result: &SearchResult, config: &ReportConfig) -> Result<()> {
    let write_err = |e| Error::io("write search report", e);
    for line in field_lines(result) {
        writeln!(writer, "{}", line).map_err(write_err)?;
    }
    writeln!(
        writer,
        "{}",
        format_move_path(&result.move_descriptors(), config.wrap_width)
    )
    .map_err(write_err)?;
    writer.flush().map_err(write_err)
}

/// Writes the record of `result` to `config.path`, replacing any previous
/// report.
pub fn save_report(result: &SearchResult, config: &ReportConfig) -> Result<()> {
    let file = File::create(&config.path)
        .map_err(|e| Error::io(format!("create {}", config.path.display()), e))?;
    let mut writer = BufWriter::new(file);
    write_report(&mut writer, result, config)?;
    debug!("wrote search report to {}", config.path.display());
    Ok(())
}
