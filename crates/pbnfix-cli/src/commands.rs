//! The convert command: read, extract, write, report.

use std::path::Path;

use colored::Colorize;
use tracing::debug;

use pbnfix_blocks::{LinePattern, extract};

use crate::error::Result;

/// Run the conversion: read `input` in full, copy the patterned lines out
/// of each block, and atomically write them to `output`.
///
/// The output file is not touched if reading the input fails.
pub fn run_convert(input: &Path, output: &Path, pattern: &LinePattern) -> Result<()> {
    let content = pbnfix_fs::read_text(input)?;

    let converted = extract(&content, pattern);
    debug!(
        input_lines = content.lines().count(),
        output_lines = converted.lines().count(),
        block_size = pattern.block_size(),
        "extraction complete"
    );

    pbnfix_fs::write_text(output, &converted)?;

    println!(
        "Patterned lines {} were written to '{}'.",
        pattern.to_string().cyan(),
        output.display().to_string().green()
    );

    Ok(())
}
