//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Convert PBN hand-record files from the BridgeMate line layout to the
/// layout used by tournament calculators and Dealer4
///
/// The input is read as fixed-size blocks of lines; from each block the
/// lines named by --pattern are copied to the output, in pattern order.
/// Line content is never parsed or validated.
///
/// Examples:
///   pbnfix 241015.pbn output.pbn
///   pbnfix 241015.pbn output.pbn --pattern 1,2,5
///   pbnfix 241015.pbn output.pbn --pattern 1,2 --block-size 10
#[derive(Parser, Debug)]
#[command(name = "pbnfix")]
#[command(author, version, about, verbatim_doc_comment)]
pub struct Cli {
    /// Path to the input hand-record file
    pub inputfile: PathBuf,

    /// Path to the output file (truncated and overwritten)
    pub outputfile: PathBuf,

    /// Comma-separated 1-based line positions to copy from each block,
    /// in emission order
    #[arg(short, long, default_value = "1,2,3,4,9,10,11,40")]
    pub pattern: String,

    /// Block width in lines; defaults to the largest pattern position
    #[arg(short, long)]
    pub block_size: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
