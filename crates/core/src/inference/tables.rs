//! Static lookup data: canonical categories, their aliases and keywords.

use std::collections::BTreeMap;

/// A canonical content category known to the engine.
#[derive(Debug)]
pub struct CanonicalCategory {
    /// Primary label, also the key of the built-in keyword table.
    pub label: &'static str,
    /// Labels a storage path name is compared against (primary label first).
    pub labels: &'static [&'static str],
    /// Site category spellings that map onto this category.
    pub aliases: &'static [&'static str],
    /// Title keywords for the built-in keyword table.
    pub keywords: &'static [&'static str],
}

impl CanonicalCategory {
    /// Returns true if a storage path name refers to this category.
    pub fn matches_path_name(&self, path_name: &str) -> bool {
        self.labels.iter().any(|label| names_match(path_name, label))
    }

    /// Returns true if a lower-cased site category is one of this category's aliases.
    pub fn matches_site_category(&self, category: &str) -> bool {
        self.aliases
            .iter()
            .any(|alias| category == *alias || category.contains(*alias))
    }
}

pub const MOVIE: CanonicalCategory = CanonicalCategory {
    label: "电影",
    labels: &["电影", "movie"],
    aliases: &["电影", "movie", "movies", "film", "films", "影片", "原盘", "bluray", "remux"],
    keywords: &["电影", "movie", "film", "bluray", "blu-ray", "bdrip", "remux", "dvdrip"],
};

pub const TV: CanonicalCategory = CanonicalCategory {
    label: "剧集",
    labels: &["剧集", "series", "tv"],
    aliases: &[
        "剧集", "电视剧", "连续剧", "美剧", "日剧", "韩剧", "英剧", "国产剧", "tv", "series",
        "tvshow", "tv-show", "episode",
    ],
    keywords: &["剧集", "series", "season", "episode", "complete", "全集", "hdtv", "s0", "e0"],
};

pub const ANIME: CanonicalCategory = CanonicalCategory {
    label: "动画",
    labels: &["动画", "anime"],
    aliases: &["动画", "动漫", "番剧", "新番", "anime", "animation", "cartoon", "acg"],
    keywords: &["动画", "动漫", "番剧", "anime", "ova", "ona"],
};

pub const MUSIC: CanonicalCategory = CanonicalCategory {
    label: "音乐",
    labels: &["音乐", "music"],
    aliases: &["音乐", "music", "audio", "album", "演唱会", "concert", "lossless", "flac", "mv"],
    keywords: &["音乐", "music", "album", "flac", "mp3", "lossless", "discography"],
};

pub const DOCUMENTARY: CanonicalCategory = CanonicalCategory {
    label: "纪录片",
    labels: &["纪录片", "documentary"],
    aliases: &["纪录片", "记录片", "纪实", "documentary", "documentaries", "docu"],
    keywords: &["纪录片", "documentary", "docu", "bbc", "national geographic", "discovery"],
};

pub const VARIETY: CanonicalCategory = CanonicalCategory {
    label: "综艺",
    labels: &["综艺", "variety"],
    aliases: &["综艺", "真人秀", "variety", "show", "reality"],
    keywords: &["综艺", "variety", "真人秀"],
};

pub const SOFTWARE: CanonicalCategory = CanonicalCategory {
    label: "软件",
    labels: &["软件", "software", "game"],
    aliases: &["软件", "应用", "游戏", "software", "game", "games", "pc"],
    keywords: &["软件", "游戏", "software", "game", "repack", "setup"],
};

pub const EBOOK: CanonicalCategory = CanonicalCategory {
    label: "电子书",
    labels: &["电子书", "ebook"],
    aliases: &["电子书", "书籍", "ebook", "e-book", "book", "books", "epub", "pdf"],
    keywords: &["电子书", "ebook", "epub", "mobi", "azw3", "pdf"],
};

/// All canonical categories, in the order the category matcher consults them.
pub static CANONICAL_CATEGORIES: [CanonicalCategory; 8] =
    [MOVIE, TV, ANIME, MUSIC, DOCUMENTARY, VARIETY, SOFTWARE, EBOOK];

/// Path-name comparison used throughout the engine.
///
/// Case-insensitive equality or containment in either direction. Blank names
/// never match.
pub fn names_match(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a == b || a.contains(&b) || b.contains(&a)
}

/// One keyword category used by the scorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCategory {
    pub name: String,
    /// Lower-cased keywords, blanks removed.
    pub keywords: Vec<String>,
}

/// Active keyword table: either built-in or user-supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    categories: Vec<KeywordCategory>,
}

impl KeywordTable {
    /// The built-in table, keyed by the canonical Chinese labels.
    pub fn builtin() -> Self {
        Self {
            categories: CANONICAL_CATEGORIES
                .iter()
                .map(|c| KeywordCategory {
                    name: c.label.to_string(),
                    keywords: c.keywords.iter().map(|k| k.to_string()).collect(),
                })
                .collect(),
        }
    }

    /// Build a table from a user `category_map`.
    pub fn from_map(map: &BTreeMap<String, Vec<String>>) -> Self {
        Self {
            categories: map
                .iter()
                .map(|(name, keywords)| KeywordCategory {
                    name: name.clone(),
                    keywords: keywords
                        .iter()
                        .map(|k| k.trim().to_lowercase())
                        .filter(|k| !k.is_empty())
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn categories(&self) -> &[KeywordCategory] {
        &self.categories
    }
}
