//! Release-title patterns shared by the scorer and the series finalizer.

use once_cell::sync::Lazy;
use regex_lite::Regex;

/// `S01`, `s1` (not followed by another digit) or `Season 2`.
static SEASON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:s\d{1,2}(?:\D|$)|season\s*\d{1,2})").expect("valid season pattern")
});

/// `E05`, `EP12` or the word `Episode`.
static EPISODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:ep?\d{1,3}|episode)").expect("valid episode pattern"));

static YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\D)(?:19|20)\d{2}(?:\D|$)").expect("valid year pattern")
});

static RELEASE_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)bluray|bdrip|remux|hdtv").expect("valid format pattern"));

/// `[Group] Title - 12`, `[Group] Title 03v` or `[Group] Title 12p` fansub naming.
static FANSUB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\[[^\]]+\].*\d{2}[vp]?$").expect("valid fansub pattern")
});

pub fn has_season(name: &str) -> bool {
    SEASON.is_match(name)
}

pub fn has_episode(name: &str) -> bool {
    EPISODE.is_match(name)
}

/// A year between 1900 and 2099 not embedded in a longer number.
pub fn has_year(name: &str) -> bool {
    YEAR.is_match(name)
}

pub fn has_release_format(name: &str) -> bool {
    RELEASE_FORMAT.is_match(name)
}

/// Fansub bracket naming, or an OVA/ONA marker.
pub fn looks_like_anime_release(name: &str) -> bool {
    if FANSUB.is_match(name.trim()) {
        return true;
    }
    let lower = name.to_lowercase();
    lower.contains("ova") || lower.contains("ona")
}
