//! Line patterns describing which positions to copy out of each block.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// An ordered sequence of 1-based line positions within a block.
///
/// Order is significant: the pattern `(2, 1)` copies the second line of
/// every block before the first. The block width defaults to the largest
/// position in the pattern and can be widened (never narrowed) with
/// [`LinePattern::with_block_size`].
///
/// # Example
/// ```
/// use pbnfix_blocks::LinePattern;
///
/// let pattern = LinePattern::new(vec![1, 2, 3, 4, 9, 10, 11, 40]).unwrap();
/// assert_eq!(pattern.block_size(), 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePattern {
    positions: Vec<usize>,
    block_size: usize,
}

impl LinePattern {
    /// Creates a pattern whose block size is the largest position.
    ///
    /// # Errors
    /// Returns `Error::EmptyPattern` for an empty sequence and
    /// `Error::ZeroPosition` if any position is 0.
    pub fn new(positions: Vec<usize>) -> Result<Self> {
        let max = validate_positions(&positions)?;
        Ok(Self {
            positions,
            block_size: max,
        })
    }

    /// Creates a pattern with an explicit block size.
    ///
    /// The block size may exceed the largest position (selecting only from
    /// the top of a wider block) but may not be smaller than any position.
    ///
    /// # Errors
    /// Returns `Error::ZeroBlockSize` for a zero width and
    /// `Error::PositionOutOfRange` if a position does not fit the block,
    /// in addition to the validation errors of [`LinePattern::new`].
    pub fn with_block_size(positions: Vec<usize>, block_size: usize) -> Result<Self> {
        let max = validate_positions(&positions)?;
        if block_size == 0 {
            return Err(Error::ZeroBlockSize);
        }
        if max > block_size {
            return Err(Error::PositionOutOfRange {
                position: max,
                block_size,
            });
        }
        Ok(Self {
            positions,
            block_size,
        })
    }

    /// The positions in emission order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// The number of lines in each block.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Consumes the pattern, returning the positions in emission order.
    pub fn into_positions(self) -> Vec<usize> {
        self.positions
    }
}

/// Validates positions and returns the largest one.
fn validate_positions(positions: &[usize]) -> Result<usize> {
    let max = positions.iter().copied().max().ok_or(Error::EmptyPattern)?;
    if positions.contains(&0) {
        return Err(Error::ZeroPosition);
    }
    Ok(max)
}

impl FromStr for LinePattern {
    type Err = Error;

    /// Parses the comma-separated CLI form, e.g. `"1,2,3,4,9,10,11,40"`.
    /// Whitespace around entries is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let positions = s
            .split(',')
            .map(|token| {
                let token = token.trim();
                token.parse::<usize>().map_err(|_| Error::PatternParse {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<usize>>>()?;
        Self::new(positions)
    }
}

impl fmt::Display for LinePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.positions)
    }
}
