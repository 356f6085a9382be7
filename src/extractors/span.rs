// src/extractors/span.rs
use crate::utils::error::ExtractError;

/// Returns the text from the first occurrence of `start` up to the first
/// occurrence of `end`, with surrounding whitespace trimmed.
///
/// Brace structure is ignored. The start marker itself is included in the
/// result, the end marker is not. Both offsets are first occurrences in the
/// whole source; an end marker that first appears before the start marker
/// is an `InvertedSpan` error rather than a search for a later occurrence.
pub fn extract_span<'a>(
    source: &'a str,
    start: &str,
    end: &str,
) -> Result<&'a str, ExtractError> {
    let start_offset = source
        .find(start)
        .ok_or_else(|| ExtractError::marker_not_found(start))?;

    let end_offset = source
        .find(end)
        .ok_or_else(|| ExtractError::marker_not_found(end))?;

    if end_offset < start_offset {
        return Err(ExtractError::InvertedSpan {
            start: start.to_string(),
            end: end.to_string(),
            start_offset,
            end_offset,
        });
    }

    tracing::debug!(
        "Span {:?}..{:?} covers bytes {}..{}",
        start,
        end,
        start_offset,
        end_offset
    );

    Ok(source[start_offset..end_offset].trim())
}
