//! Block-wise extraction of patterned lines.
//!
//! The document is segmented into consecutive blocks of
//! [`LinePattern::block_size`] lines; from each block the pattern's
//! positions are copied in pattern order. When a block is cut short by the
//! end of the document, the first out-of-bounds position abandons the rest
//! of that block.

use tracing::debug;

use crate::pattern::LinePattern;

/// Splits content into lines, keeping each line's terminator.
///
/// A final line without a terminator is kept as-is, so joining the pieces
/// reproduces the input byte for byte.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

/// Computes the global line indices selected by `pattern` over a document
/// of `line_count` lines.
///
/// Blocks start at offsets `0, block_size, 2 * block_size, …`. For a block
/// starting at `start`, position `p` maps to index `start + p - 1`. An
/// in-bounds index is selected; an out-of-bounds one ends the scan of that
/// block (remaining positions are not tried) and iteration moves to the
/// next block start.
pub fn selected_indices(line_count: usize, pattern: &LinePattern) -> Vec<usize> {
    let mut selected = Vec::new();

    let mut start = 0;
    while start < line_count {
        for &position in pattern.positions() {
            let target = start + position - 1;
            if target >= line_count {
                debug!(
                    block_start = start + 1,
                    position, "reached end of input before completing pattern"
                );
                break;
            }
            selected.push(target);
        }
        start += pattern.block_size();
    }

    selected
}

/// Copies the patterned lines out of `content`, block by block.
///
/// The operation is a pure positional filter: selected lines are emitted
/// verbatim with their original terminators, and the content is never
/// parsed or validated.
pub fn extract(content: &str, pattern: &LinePattern) -> String {
    let lines = split_lines(content);
    selected_indices(lines.len(), pattern)
        .into_iter()
        .map(|index| lines[index])
        .collect()
}
