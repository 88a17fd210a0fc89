//! Locates the `ytInitialData` JSON blob inside a search results page
//!
//! The page embeds its data as `var ytInitialData = {...};</script>`.
//! Everything that depends on that textual shape lives in this module.

use regex::Regex;

use crate::error::{LibreSearchError, Result};

/// Marker preceding the embedded data block
pub const INITIAL_DATA_MARKER: &str = "var ytInitialData";

/// Bytes from the start of the marker to the first byte of the JSON value
///
/// Assumes the literal prefix `var ytInitialData = ` (marker, space, `=`,
/// space). Any other spacing shifts the slice and the JSON fails to parse.
pub const INITIAL_DATA_PREFIX_LEN: usize = 20;

const SCRIPT_END: &str = "</script>";

/// How the JSON value is cut out of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractionStrategy {
    /// Skip [`INITIAL_DATA_PREFIX_LEN`] bytes past the marker start and stop
    /// one byte before the next `</script>`
    #[default]
    FixedOffset,
    /// Find the `=` after the marker and match braces up to the end of the
    /// object, ignoring braces inside string literals
    BalancedBraces,
}

/// Returns the raw JSON text of the embedded data block
///
/// # Arguments
/// * `html` - Full search results page
/// * `strategy` - How to find the boundaries of the JSON value
///
/// # Errors
/// Returns `ParseError` if the marker is missing or the boundaries cannot be found
pub fn locate_initial_data(html: &str, strategy: ExtractionStrategy) -> Result<&str> {
    match strategy {
        ExtractionStrategy::FixedOffset => locate_fixed_offset(html),
        ExtractionStrategy::BalancedBraces => locate_balanced(html),
    }
}

fn marker_not_found() -> LibreSearchError {
    LibreSearchError::ParseError(format!("`{}` marker not found", INITIAL_DATA_MARKER))
}

fn locate_fixed_offset(html: &str) -> Result<&str> {
    let marker = html.find(INITIAL_DATA_MARKER).ok_or_else(marker_not_found)?;
    let start = marker + INITIAL_DATA_PREFIX_LEN;

    let rest = html.get(start..).ok_or_else(|| {
        LibreSearchError::ParseError("data block start is out of range".to_string())
    })?;
    let script_end = rest.find(SCRIPT_END).ok_or_else(|| {
        LibreSearchError::ParseError(format!("no `{}` after data block", SCRIPT_END))
    })?;

    // Drop the statement terminator before `</script>`
    let end = (start + script_end).checked_sub(1).filter(|end| *end > start).ok_or_else(|| {
        LibreSearchError::ParseError("data block is empty".to_string())
    })?;

    html.get(start..end).ok_or_else(|| {
        LibreSearchError::ParseError("data block boundaries split a character".to_string())
    })
}

fn locate_balanced(html: &str) -> Result<&str> {
    let Ok(re) = Regex::new(r"var\s+ytInitialData\s*=\s*") else {
        return Err(LibreSearchError::ParseError("Invalid marker pattern".to_string()));
    };
    let start = re.find(html).ok_or_else(marker_not_found)?.end();

    if !html[start..].starts_with('{') {
        return Err(LibreSearchError::ParseError(
            "data block is not a JSON object".to_string(),
        ));
    }

    let end = matching_brace(&html.as_bytes()[start..]).ok_or_else(|| {
        LibreSearchError::ParseError("data block object is not terminated".to_string())
    })?;

    Ok(&html[start..=start + end])
}

/// Index of the brace closing the object that starts at `bytes[0]`
///
/// Works on bytes: every delimiter is ASCII and UTF-8 continuation bytes
/// never collide with ASCII.
fn matching_brace(bytes: &[u8]) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }

    None
}
