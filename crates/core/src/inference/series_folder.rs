//! Per-series subfolders.
//!
//! When a release title carries a season marker, the chosen path can be
//! extended with a folder named after the series, e.g.
//! `The.OutCast.2016.S01.Complete.2160p` under `/downloads/tv` becomes
//! `/downloads/tv/The OutCast 2016 S01`.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use tracing::debug;

use crate::inference::patterns;
use crate::inference::types::Suggestion;

/// Maximum length of a series folder name, in characters.
pub const MAX_SERIES_NAME_CHARS: usize = 100;

/// Names shorter than this fall back to the leading title tokens.
const MIN_SERIES_NAME_CHARS: usize = 3;

/// Everything before the first season marker, and the season number.
static SERIES_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(.+?)[\s._-]*(?:s(\d{1,2})|season[\s._]*(\d{1,2}))(?:\D|$)")
        .expect("valid series prefix pattern")
});

static BRACKET_TAGS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]]*\]|【[^】]*】").expect("valid bracket pattern"));

/// Codecs, resolutions, audio formats, years and sources.
static NOISE_TOKENS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:",
        r"x26[45]|h\.?26[45]|hevc|avc|av1|10bit|8bit",
        r"|\d{3,4}[pi]|4k|uhd|hdr(?:10)?",
        r"|aac(?:\d\.\d)?|e?ac3|flac|dts(?:-hd)?|truehd|atmos|ddp?\d\.\d",
        r"|(?:19|20)\d{2}",
        r"|blu-?ray|bdrip|brrip|web-?dl|webrip|hdtv|remux|dvdrip",
        r")\b"
    ))
    .expect("valid noise pattern")
});

static ILLEGAL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("valid illegal char pattern"));

static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s._]+").expect("valid separator pattern"));

/// Extend the suggestion's path with a series folder.
///
/// Returns the suggestion untouched when it has no path, the title has no
/// season marker, or no usable series name can be derived.
pub fn apply_series_subfolder(suggestion: Suggestion, title: &str) -> Suggestion {
    if suggestion.path.is_empty() || !patterns::has_season(title) {
        return suggestion;
    }

    let Some(series) = extract_series_name(title) else {
        return suggestion;
    };

    let path = join_path_segment(&suggestion.path, &series);
    debug!(base = %suggestion.path, series = %series, "appending series subfolder");

    let original_path = suggestion.path.clone();
    Suggestion {
        path,
        original_path: Some(original_path),
        series_subfolder: Some(series),
        ..suggestion
    }
}

/// Derive a filesystem-safe series folder name from a release title.
pub fn extract_series_name(title: &str) -> Option<String> {
    let raw = match season_prefix(title) {
        Some(name) => name,
        None => strip_noise(title),
    };

    let mut name = sanitize(&raw);
    if name.chars().count() < MIN_SERIES_NAME_CHARS {
        name = sanitize(&leading_tokens(title, 3));
    }

    let name: String = name.chars().take(MAX_SERIES_NAME_CHARS).collect();
    let name = name.trim_end().to_string();

    (!name.is_empty()).then_some(name)
}

/// `Show.Name.Season 1...` -> `Show.Name S01`.
fn season_prefix(title: &str) -> Option<String> {
    let caps = SERIES_PREFIX.captures(title)?;
    let prefix = caps.get(1)?.as_str();
    let number: u32 = caps
        .get(2)
        .or_else(|| caps.get(3))?
        .as_str()
        .parse()
        .ok()?;

    Some(format!("{} S{:02}", prefix, number))
}

fn strip_noise(title: &str) -> String {
    let without_tags = BRACKET_TAGS.replace_all(title, " ");
    NOISE_TOKENS.replace_all(&without_tags, " ").into_owned()
}

/// Drop illegal characters and collapse separators to single spaces.
fn sanitize(name: &str) -> String {
    let legal = ILLEGAL_CHARS.replace_all(name, "");
    let collapsed = SEPARATORS.replace_all(&legal, " ");
    collapsed
        .trim_matches(|c: char| c.is_whitespace() || c == '-')
        .to_string()
}

fn leading_tokens(title: &str, count: usize) -> String {
    title
        .split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .filter(|t| !t.is_empty())
        .take(count)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Append a segment using the separator the base path already uses.
pub fn join_path_segment(base: &str, segment: &str) -> String {
    let separator = if base.contains('\\') && !base.contains('/') {
        '\\'
    } else {
        '/'
    };

    format!("{}{}{}", base.trim_end_matches(separator), separator, segment)
}
