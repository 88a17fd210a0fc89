//! Search results parser for YouTube
//!
//! Parses the embedded `ytInitialData` blob from a search results page and
//! extracts video information from its result list.

use std::fmt::Write as _;

use serde_json::Value;

use crate::error::{LibreSearchError, Result};
use crate::parser::initial_data::{ExtractionStrategy, locate_initial_data};
use crate::types::VideoInformation;

/// One navigation step through the untyped data
#[derive(Debug, Clone, Copy)]
enum Step {
    Key(&'static str),
    Index(usize),
}

use Step::{Index, Key};

/// Path from the root of `ytInitialData` to the list of result entries
const RESULTS_PATH: &[Step] = &[
    Key("contents"),
    Key("twoColumnSearchResultsRenderer"),
    Key("primaryContents"),
    Key("sectionListRenderer"),
    Key("contents"),
    Index(0),
    Key("itemSectionRenderer"),
    Key("contents"),
];

const VIDEO_ID_PATH: &[Step] = &[Key("videoRenderer"), Key("videoId")];
const VIDEO_NAME_PATH: &[Step] = &[Key("videoRenderer"), Key("title"), Key("runs"), Index(0), Key("text")];
const VIDEO_OWNER_PATH: &[Step] = &[
    Key("videoRenderer"),
    Key("longBylineText"),
    Key("runs"),
    Index(0),
    Key("text"),
];
const VIDEO_LENGTH_PATH: &[Step] = &[Key("videoRenderer"), Key("lengthText"), Key("simpleText")];
const VIDEO_THUMBNAIL_PATH: &[Step] = &[
    Key("videoRenderer"),
    Key("thumbnail"),
    Key("thumbnails"),
    Index(1),
    Key("url"),
];

/// Parses a search results page and returns the video entries
///
/// Uses [`ExtractionStrategy::FixedOffset`] to find the data block.
///
/// # Arguments
/// * `html` - Raw HTML string from the search results page
///
/// # Returns
/// Video entries in page order. Entries that are not videos (channels,
/// shelves, ads) or lack any expected field are skipped.
///
/// # Errors
/// - `ParseError` if the data block is missing or is not valid JSON
/// - `MissingKey` if the data has no result list at the expected path
pub fn parse_search_results(html: &str) -> Result<Vec<VideoInformation>> {
    parse_search_results_with(html, ExtractionStrategy::default())
}

/// Parses a search results page using the given extraction strategy
pub fn parse_search_results_with(
    html: &str,
    strategy: ExtractionStrategy,
) -> Result<Vec<VideoInformation>> {
    let raw = locate_initial_data(html, strategy)?;

    let data: Value = serde_json::from_str(raw)
        .map_err(|e| LibreSearchError::ParseError(format!("Invalid ytInitialData JSON: {}", e)))?;

    let entries = result_entries(&data)?;

    Ok(entries.iter().filter_map(parse_video_entry).collect())
}

/// Interprets one result entry as a video
///
/// # Returns
/// `Some(VideoInformation)` if the entry is a `videoRenderer` with all
/// fields present as strings, `None` otherwise
pub fn parse_video_entry(entry: &Value) -> Option<VideoInformation> {
    Some(VideoInformation {
        video_id: text_at(entry, VIDEO_ID_PATH)?,
        video_name: text_at(entry, VIDEO_NAME_PATH)?,
        video_owner: text_at(entry, VIDEO_OWNER_PATH)?,
        video_length: text_at(entry, VIDEO_LENGTH_PATH)?,
        video_thumbnail: text_at(entry, VIDEO_THUMBNAIL_PATH)?,
    })
}

/// Walks [`RESULTS_PATH`], naming the first missing step on failure
fn result_entries(data: &Value) -> Result<&Vec<Value>> {
    let mut current = data;

    for (depth, step) in RESULTS_PATH.iter().enumerate() {
        current = follow(current, *step)
            .ok_or_else(|| LibreSearchError::MissingKey(describe(&RESULTS_PATH[..=depth])))?;
    }

    current.as_array().ok_or_else(|| {
        LibreSearchError::MissingKey(format!("{} is not an array", describe(RESULTS_PATH)))
    })
}

fn follow(value: &Value, step: Step) -> Option<&Value> {
    match step {
        Key(key) => value.get(key),
        Index(index) => value.get(index),
    }
}

fn text_at(value: &Value, path: &[Step]) -> Option<String> {
    path.iter()
        .try_fold(value, |current, step| follow(current, *step))?
        .as_str()
        .map(str::to_owned)
}

/// Renders a path as `a.b[0].c`
fn describe(path: &[Step]) -> String {
    let mut out = String::new();
    for step in path {
        match step {
            Key(key) if out.is_empty() => out.push_str(key),
            Key(key) => {
                let _ = write!(out, ".{}", key);
            }
            Index(index) => {
                let _ = write!(out, "[{}]", index);
            }
        }
    }
    out
}
