// src/extractors/block.rs

// --- Imports ---
use crate::utils::error::ExtractError;

// --- Data Structures ---

/// A brace-balanced block sliced out of the source document.
///
/// `text` borrows directly from the source: the lines from the marker line
/// through the closing line, joined by the `'\n'` separators they had in the
/// source (so `"\r\n"` input keeps its `'\r'` characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub text: &'a str,
    pub start_line: usize, // 1-based, the line containing the marker
    pub end_line: usize,   // 1-based, the line where the balance returned to zero
}

/// Splits the source on `'\n'`, keeping each line's byte offset.
fn indexed_lines(source: &str) -> Vec<(usize, &str)> {
    let mut offset = 0;
    source
        .split('\n')
        .map(|line| {
            let start = offset;
            offset += line.len() + 1;
            (start, line)
        })
        .collect()
}

fn brace_delta(line: &str) -> i64 {
    line.chars().fold(0, |acc, c| match c {
        '{' => acc + 1,
        '}' => acc - 1,
        _ => acc,
    })
}

/// Extracts the first balanced block that starts on a line containing `marker`.
///
/// Accumulation starts at the marker line, whose own braces count immediately.
/// It stops after the first line at which the running `{`/`}` balance is zero
/// and at least one `{` has been seen.
pub fn extract_block<'a>(source: &'a str, marker: &str) -> Result<Block<'a>, ExtractError> {
    let lines = indexed_lines(source);
    scan_block(source, &lines, marker, 0)?
        .map(|(block, _)| block)
        .ok_or_else(|| ExtractError::marker_not_found(marker))
}

/// Extracts every independent balanced block whose first line contains `marker`.
///
/// After each block closes, scanning resumes on the following line, so a
/// marker occurring inside an already captured block does not start a new one.
pub fn extract_blocks<'a>(source: &'a str, marker: &str) -> Result<Vec<Block<'a>>, ExtractError> {
    let lines = indexed_lines(source);
    let mut blocks = Vec::new();
    let mut from = 0;

    while let Some((block, next)) = scan_block(source, &lines, marker, from)? {
        tracing::trace!(
            "Block for {:?} spans lines {}-{}",
            marker,
            block.start_line,
            block.end_line
        );
        blocks.push(block);
        from = next;
    }

    if blocks.is_empty() {
        return Err(ExtractError::marker_not_found(marker));
    }
    Ok(blocks)
}

/// Scans from line index `from`. Returns the block and the index of the line
/// after it, or `None` when no remaining line contains the marker.
fn scan_block<'a>(
    source: &'a str,
    lines: &[(usize, &'a str)],
    marker: &str,
    from: usize,
) -> Result<Option<(Block<'a>, usize)>, ExtractError> {
    let Some(start_idx) = lines
        .iter()
        .skip(from)
        .position(|(_, line)| line.contains(marker))
        .map(|pos| pos + from)
    else {
        return Ok(None);
    };

    let start_offset = lines[start_idx].0;
    let mut balance: i64 = 0;
    let mut opened = false;

    // The marker line is checked too, so a one-line block ends on its own
    // line. The legacy migration script skipped this check on the marker line.
    for (idx, (offset, line)) in lines.iter().enumerate().skip(start_idx) {
        balance += brace_delta(line);
        opened |= line.contains('{');

        if opened && balance == 0 {
            let block = Block {
                text: &source[start_offset..offset + line.len()],
                start_line: start_idx + 1,
                end_line: idx + 1,
            };
            return Ok(Some((block, idx + 1)));
        }
    }

    Err(ExtractError::UnbalancedBlock {
        marker: marker.to_string(),
        start_line: start_idx + 1,
        balance,
    })
}
