//! End-to-end pipeline tests: read a hand-record file, extract the
//! patterned lines, write the converted file, and check what a downstream
//! consumer would see.

use pbnfix_blocks::{LinePattern, extract};
use pbnfix_fs::{read_text, write_text};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

/// One 40-line block in the BridgeMate layout: header tags up front, the
/// deal tags at lines 9-11, auxiliary scoring lines between, and a blank
/// separator line at position 40.
fn bridgemate_block(board: u32) -> Vec<String> {
    let mut lines = vec![
        "[Event \"Monday Pairs\"]".to_string(),
        "[Site \"Warsaw\"]".to_string(),
        "[Date \"2024.11.05\"]".to_string(),
        format!("[Board \"{board}\"]"),
    ];
    for n in 5..=8 {
        lines.push(format!("aux line {n} of board {board}"));
    }
    lines.push(
        "[Deal \"N:K843.T542.J6.863 AQJ7.K.Q75.AT942 962.AJ7.KT82.J75 T5.Q9863.A943.KQ\"]"
            .to_string(),
    );
    lines.push("[Declarer \"S\"]".to_string());
    lines.push("[Contract \"3NT\"]".to_string());
    for n in 12..=39 {
        lines.push(format!("aux line {n} of board {board}"));
    }
    lines.push(String::new());
    assert_eq!(lines.len(), 40);
    lines
}

fn bridgemate_file(boards: u32) -> String {
    (1..=boards)
        .flat_map(bridgemate_block)
        .map(|line| format!("{line}\n"))
        .collect()
}

/// The lines the standard layout keeps from one block.
fn standard_block(board: u32) -> String {
    format!(
        "[Event \"Monday Pairs\"]\n\
         [Site \"Warsaw\"]\n\
         [Date \"2024.11.05\"]\n\
         [Board \"{board}\"]\n\
         [Deal \"N:K843.T542.J6.863 AQJ7.K.Q75.AT942 962.AJ7.KT82.J75 T5.Q9863.A943.KQ\"]\n\
         [Declarer \"S\"]\n\
         [Contract \"3NT\"]\n\
         \n"
    )
}

#[test]
fn test_full_conversion_pipeline() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("241015.pbn");
    let output = temp.path().join("output.pbn");
    fs::write(&input, bridgemate_file(3)).unwrap();

    let pattern = LinePattern::new(vec![1, 2, 3, 4, 9, 10, 11, 40]).unwrap();

    let content = read_text(&input).unwrap();
    let converted = extract(&content, &pattern);
    write_text(&output, &converted).unwrap();

    let expected: String = (1..=3).map(standard_block).collect();
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn test_conversion_with_trailing_partial_block() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("truncated.pbn");
    let output = temp.path().join("output.pbn");

    // A full block followed by the first nine lines of the next one, as
    // happens when a session is cut short mid-record.
    let mut content = bridgemate_file(1);
    for line in bridgemate_block(2).into_iter().take(9) {
        content.push_str(&line);
        content.push('\n');
    }
    fs::write(&input, &content).unwrap();

    let pattern = LinePattern::new(vec![1, 2, 3, 4, 9, 10, 11, 40]).unwrap();
    let converted = extract(&read_text(&input).unwrap(), &pattern);
    write_text(&output, &converted).unwrap();

    // Block 2 contributes its tag lines up to [Deal] at position 9; the
    // scan stops at position 10, which is past the end of the file.
    let expected = format!(
        "{}{}",
        standard_block(1),
        "[Event \"Monday Pairs\"]\n\
         [Site \"Warsaw\"]\n\
         [Date \"2024.11.05\"]\n\
         [Board \"2\"]\n\
         [Deal \"N:K843.T542.J6.863 AQJ7.K.Q75.AT942 962.AJ7.KT82.J75 T5.Q9863.A943.KQ\"]\n"
    );
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn test_converted_file_is_stable_under_reconversion() {
    // Re-running the identity pattern over an already-converted file is a
    // no-op, so accidental double conversion with pattern 1..=N is safe.
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("converted.pbn");

    let pattern = LinePattern::new(vec![1, 2, 3, 4, 9, 10, 11, 40]).unwrap();
    let converted = extract(&bridgemate_file(2), &pattern);
    write_text(&path, &converted).unwrap();

    let identity = LinePattern::new((1..=8).collect()).unwrap();
    let reconverted = extract(&read_text(&path).unwrap(), &identity);
    assert_eq!(reconverted, converted);
}
