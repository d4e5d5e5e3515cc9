//! Heuristic path scorer.
//!
//! Scores every configured path against the release title and picks the best.
//! Works entirely offline on the title, the site category and the path names.
//!
//! Weights:
//! - site category matches the path name: +30
//! - a keyword of a table category matching the path name occurs in the title: +10 per category
//! - TV paths: season marker +15, episode marker +8
//! - movie paths: year +5, release format +3
//! - anime paths: fansub naming or OVA/ONA +8, plus +12 with a season marker
//! - the path name itself occurs in the title: +15

use tracing::debug;

use crate::inference::patterns;
use crate::inference::tables::{names_match, KeywordTable, ANIME, MOVIE, TV};
use crate::inference::traits::PathStrategy;
use crate::inference::types::{PathScore, StoragePath, Suggestion, TorrentDescriptor};

const SITE_CATEGORY_BONUS: i32 = 30;
const KEYWORD_BONUS: i32 = 10;
const SEASON_BONUS: i32 = 15;
const EPISODE_BONUS: i32 = 8;
const YEAR_BONUS: i32 = 5;
const RELEASE_FORMAT_BONUS: i32 = 3;
const ANIME_RELEASE_BONUS: i32 = 8;
const ANIME_SEASON_BONUS: i32 = 12;
const PATH_NAME_BONUS: i32 = 15;

/// Scores paths by keywords and structural title signals.
#[derive(Debug, Clone)]
pub struct KeywordScorer {
    table: KeywordTable,
}

impl KeywordScorer {
    pub fn new(table: KeywordTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &KeywordTable {
        &self.table
    }

    /// Score a single path.
    fn score_path(
        &self,
        index: usize,
        path: &StoragePath,
        title: &str,
        category: Option<&str>,
    ) -> PathScore {
        let path_name = path.name_lower();
        let mut score = 0;
        let mut reasons = Vec::new();

        if let Some(category) = category {
            if names_match(category, &path_name) {
                score += SITE_CATEGORY_BONUS;
                reasons.push(format!("site category +{}", SITE_CATEGORY_BONUS));
            }
        }

        for entry in self.table.categories() {
            if !names_match(&entry.name, &path_name) {
                continue;
            }
            if let Some(keyword) = entry.keywords.iter().find(|k| title.contains(k.as_str())) {
                score += KEYWORD_BONUS;
                reasons.push(format!(
                    "keyword '{}' ({}) +{}",
                    keyword, entry.name, KEYWORD_BONUS
                ));
            }
        }

        if TV.matches_path_name(&path_name) {
            if patterns::has_season(title) {
                score += SEASON_BONUS;
                reasons.push(format!("season pattern +{}", SEASON_BONUS));
            }
            if patterns::has_episode(title) {
                score += EPISODE_BONUS;
                reasons.push(format!("episode pattern +{}", EPISODE_BONUS));
            }
        }

        if MOVIE.matches_path_name(&path_name) {
            if patterns::has_year(title) {
                score += YEAR_BONUS;
                reasons.push(format!("year +{}", YEAR_BONUS));
            }
            if patterns::has_release_format(title) {
                score += RELEASE_FORMAT_BONUS;
                reasons.push(format!("release format +{}", RELEASE_FORMAT_BONUS));
            }
        }

        if ANIME.matches_path_name(&path_name) && patterns::looks_like_anime_release(title) {
            score += ANIME_RELEASE_BONUS;
            reasons.push(format!("anime release naming +{}", ANIME_RELEASE_BONUS));
            if patterns::has_season(title) {
                score += ANIME_SEASON_BONUS;
                reasons.push(format!("anime season pattern +{}", ANIME_SEASON_BONUS));
            }
        }

        if !path_name.is_empty() && title.contains(&path_name) {
            score += PATH_NAME_BONUS;
            reasons.push(format!("path name in title +{}", PATH_NAME_BONUS));
        }

        PathScore {
            index,
            name: path.name.clone(),
            score,
            reasons,
        }
    }

    /// Score every path, in the order given.
    pub fn score_all(&self, torrent: &TorrentDescriptor, paths: &[StoragePath]) -> Vec<PathScore> {
        let title = torrent.name.to_lowercase();
        let category = torrent.category_lower();

        paths
            .iter()
            .enumerate()
            .map(|(index, path)| self.score_path(index, path, &title, category.as_deref()))
            .collect()
    }

    /// Pick the winning score.
    ///
    /// Highest score wins. On a tie for the maximum, a series-like path name
    /// ("剧集" or "series") is preferred, otherwise the earliest path.
    /// A non-positive maximum means no match.
    fn pick_best(scores: &[PathScore]) -> Option<&PathScore> {
        let max = scores.iter().map(|s| s.score).max()?;
        if max <= 0 {
            return None;
        }

        let first = scores.iter().find(|s| s.score == max);
        scores
            .iter()
            .filter(|s| s.score == max)
            .find(|s| is_series_like(&s.name))
            .or(first)
    }
}

fn is_series_like(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.contains("剧集") || lower.contains("series")
}

impl PathStrategy for KeywordScorer {
    fn name(&self) -> &str {
        "keyword"
    }

    fn suggest(&self, torrent: &TorrentDescriptor, paths: &[StoragePath]) -> Option<Suggestion> {
        let scores = self.score_all(torrent, paths);
        for s in &scores {
            debug!(path = %s.name, score = s.score, reasons = ?s.reasons, "path scored");
        }

        let best = Self::pick_best(&scores)?;
        paths.get(best.index).map(Suggestion::from)
    }
}

/// Score paths against a torrent with the given keyword table.
///
/// Exposes the scorer's breakdown for callers that want to explain a decision.
pub fn score_paths(
    torrent: &TorrentDescriptor,
    paths: &[StoragePath],
    table: &KeywordTable,
) -> Vec<PathScore> {
    KeywordScorer::new(table.clone()).score_all(torrent, paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn make_torrent(name: &str) -> TorrentDescriptor {
        TorrentDescriptor::new(name)
    }

    fn scorer() -> KeywordScorer {
        KeywordScorer::new(KeywordTable::builtin())
    }

    fn score_of(name: &str, path_name: &str) -> i32 {
        let paths = vec![StoragePath::new("1", path_name, "/p")];
        scorer().score_all(&make_torrent(name), &paths)[0].score
    }

    #[test]
    fn test_tv_structural_bonuses() {
        // keyword "s0" +10, season +15, episode +8
        assert_eq!(score_of("Westworld.S03E01.1080p.WEB-DL", "剧集"), 33);
    }

    #[test]
    fn test_english_series_path_gets_structural_only() {
        // "Series" is not a key of the built-in table but is a TV label
        assert_eq!(score_of("Show.Name.S02E05.1080p", "Series"), 23);
    }

    #[test]
    fn test_movie_bonuses() {
        // keyword "bluray" +10, year +5, format +3
        assert_eq!(score_of("Inception.2010.BluRay.2160p", "电影"), 18);
    }

    #[test]
    fn test_anime_bonuses() {
        // keyword "ova" +10, ova token +8
        assert_eq!(score_of("Title.OVA.1080p", "动画"), 18);
        assert_eq!(score_of("Title.OVA2.1080p", "动画"), 18);
        // fansub naming +8, season +12, no keyword
        assert_eq!(score_of("[Group] Title S2 - 05", "动画"), 20);
    }

    #[test]
    fn test_year_separated_by_underscores() {
        // keyword "movie" +10, year +5
        assert_eq!(score_of("Movie_Name_2010_1080p", "电影"), 15);
    }

    #[test]
    fn test_anime_season_requires_anime_naming() {
        assert_eq!(score_of("Westworld.S03E01.1080p", "Anime"), 0);
    }

    #[test]
    fn test_path_name_in_title() {
        assert_eq!(score_of("Westworld.S03E01", "Westworld"), 15);
    }

    #[test]
    fn test_site_category_bonus() {
        let torrent = make_torrent("Some.Thing").with_category("Docs");
        let paths = vec![StoragePath::new("1", "docs", "/p")];
        let scores = scorer().score_all(&torrent, &paths);
        assert_eq!(scores[0].score, 30);
        assert_eq!(scores[0].reasons, vec!["site category +30"]);
    }

    #[test]
    fn test_keyword_counted_once_per_category() {
        // Both "season" and "complete" occur, still +10
        let paths = vec![StoragePath::new("1", "剧集", "/p")];
        let scores = scorer().score_all(&make_torrent("Season Complete"), &paths);
        let keyword_reasons = scores[0]
            .reasons
            .iter()
            .filter(|r| r.starts_with("keyword"))
            .count();
        assert_eq!(keyword_reasons, 1);
    }

    #[test]
    fn test_no_positive_score_defers() {
        let paths = vec![
            StoragePath::new("1", "电影", "/m"),
            StoragePath::new("2", "剧集", "/t"),
        ];
        assert!(scorer().suggest(&make_torrent("random"), &paths).is_none());
        assert!(scorer().suggest(&make_torrent(""), &paths).is_none());
    }

    #[test]
    fn test_tie_prefers_series_like_name() {
        // "Show" gets +15 from its name, "Series" +15 from the season marker
        let paths = vec![
            StoragePath::new("1", "Show", "/show"),
            StoragePath::new("2", "Series", "/series"),
        ];
        let suggestion = scorer()
            .suggest(&make_torrent("Show.Name.S02.1080p"), &paths)
            .unwrap();
        assert_eq!(suggestion.path, "/series");
    }

    #[test]
    fn test_tie_without_series_keeps_first() {
        let paths = vec![
            StoragePath::new("1", "Alpha", "/a"),
            StoragePath::new("2", "Beta", "/b"),
        ];
        let suggestion = scorer()
            .suggest(&make_torrent("alpha.beta.release"), &paths)
            .unwrap();
        assert_eq!(suggestion.path, "/a");
    }

    #[test]
    fn test_season_path_outranks_name_only_path() {
        let paths = vec![
            StoragePath::new("1", "Show", "/show"),
            StoragePath::new("2", "剧集", "/tv"),
        ];
        let suggestion = scorer()
            .suggest(&make_torrent("Show.Name.S02E05.1080p"), &paths)
            .unwrap();
        assert_eq!(suggestion.path, "/tv");
    }

    #[test]
    fn test_custom_table_routes_by_keyword() {
        let mut map = BTreeMap::new();
        map.insert("4K".to_string(), vec!["2160p".to_string()]);
        let scorer = KeywordScorer::new(KeywordTable::from_map(&map));
        let paths = vec![
            StoragePath::new("1", "剧集", "/tv"),
            StoragePath::new("2", "4K", "/uhd"),
        ];

        let scores = scorer.score_all(&make_torrent("Movie.2019.2160p"), &paths);
        assert_eq!(scores[0].score, 0);
        assert_eq!(scores[1].score, 10);
    }

    #[test]
    fn test_custom_table_does_not_decouple_structural_bonus() {
        // A "4K" path never gets season/episode bonuses
        let mut map = BTreeMap::new();
        map.insert("4K".to_string(), vec!["nothing-matches".to_string()]);
        let scorer = KeywordScorer::new(KeywordTable::from_map(&map));
        let paths = vec![StoragePath::new("1", "4K", "/uhd")];

        let scores = scorer.score_all(&make_torrent("Show.S01E01.2160p"), &paths);
        assert_eq!(scores[0].score, 0);
    }

    #[test]
    fn test_score_paths_matches_scorer() {
        let paths = vec![StoragePath::new("1", "剧集", "/tv")];
        let torrent = make_torrent("Westworld.S03E01");
        let table = KeywordTable::builtin();
        assert_eq!(
            score_paths(&torrent, &paths, &table),
            KeywordScorer::new(table).score_all(&torrent, &paths)
        );
    }
}
