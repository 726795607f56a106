//! Deterministic placeholder heuristics.
//!
//! The score is derived from the image file name only: a base value chosen by
//! recognizable substrings plus a small jitter from the token's character
//! codes. Same input, same output.

use async_trait::async_trait;

use crate::domain::score::clamp_unit;
use crate::domain::ScoreKind;
use crate::port::outbound::HeuristicScorer;

const WARM_TABLE: &[(&str, f64)] = &[
    ("fire", 0.85),
    ("red", 0.8),
    ("orange", 0.75),
    ("char", 0.72),
    ("gold", 0.7),
];
const COOL_TABLE: &[(&str, f64)] = &[
    ("blue", 0.8),
    ("water", 0.78),
    ("ice", 0.75),
    ("purple", 0.7),
    ("teal", 0.7),
];
const NEUTRAL_TABLE: &[(&str, f64)] = &[
    ("grey", 0.75),
    ("gray", 0.75),
    ("silver", 0.72),
    ("black", 0.7),
    ("white", 0.68),
];

/// Placeholder scorer for one [`ScoreKind`].
#[derive(Debug, Clone, Copy)]
pub struct TokenHeuristic {
    kind: ScoreKind,
}

impl TokenHeuristic {
    #[must_use]
    pub const fn new(kind: ScoreKind) -> Self {
        Self { kind }
    }

    fn table(&self) -> (&'static [(&'static str, f64)], f64) {
        match self.kind {
            ScoreKind::WarmTone => (WARM_TABLE, 0.45),
            ScoreKind::CoolTone => (COOL_TABLE, 0.45),
            ScoreKind::Neutral => (NEUTRAL_TABLE, 0.5),
        }
    }

    /// Base score for `token`: first table entry it contains, else the default.
    #[must_use]
    pub fn base_score(&self, token: &str) -> f64 {
        let (table, default) = self.table();
        let lowered = token.to_ascii_lowercase();
        table
            .iter()
            .find(|(needle, _)| lowered.contains(needle))
            .map_or(default, |(_, base)| *base)
    }

    /// Synchronous form of [`HeuristicScorer::score`].
    #[must_use]
    pub fn score_sync(&self, image_ref: &str) -> f64 {
        let token = image_token(image_ref);
        clamp_unit(self.base_score(token) + jitter(token))
    }
}

#[async_trait]
impl HeuristicScorer for TokenHeuristic {
    async fn score(&self, image_ref: &str) -> f64 {
        self.score_sync(image_ref)
    }

    fn name(&self) -> &'static str {
        self.kind.as_str()
    }
}

/// File-name stem of the last path segment, without query or fragment.
///
/// Falls back to the whole segment when stripping the extension would leave
/// nothing (e.g. `.hidden`).
#[must_use]
pub fn image_token(image_ref: &str) -> &str {
    let path = image_ref
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or(image_ref);
    let segment = path.rsplit('/').next().unwrap_or(path);
    match segment.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => segment,
    }
}

/// `(Σ char codes mod 100) / 1000 − 0.05`, within `[-0.05, 0.049]`.
///
/// Char codes are UTF-16 code units, so a character outside the BMP
/// contributes both halves of its surrogate pair.
#[must_use]
pub fn jitter(token: &str) -> f64 {
    let sum: u64 = token.encode_utf16().map(u64::from).sum();
    (sum % 100) as f64 / 1000.0 - 0.05
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_file_stem() {
        assert_eq!(image_token("https://i.example/g/AbC/s-l1600.webp"), "s-l1600");
        assert_eq!(image_token("https://i.example/red-dragon.jpg?w=200#x"), "red-dragon");
        assert_eq!(image_token("plain"), "plain");
        assert_eq!(image_token("https://i.example/dir/.hidden"), ".hidden");
        assert_eq!(image_token(""), "");
    }

    #[test]
    fn jitter_matches_char_code_formula() {
        // 'a' = 97, 'b' = 98 → 195 mod 100 = 95 → 0.095 − 0.05
        assert!((jitter("ab") - 0.045).abs() < 1e-12);
        assert!((jitter("") + 0.05).abs() < 1e-12);
    }

    #[test]
    fn jitter_counts_surrogate_pairs() {
        // U+1F525 → 0xD83D + 0xDD25 = 111970 → 70 → 0.070 − 0.05
        assert!((jitter("\u{1F525}") - 0.02).abs() < 1e-12);
    }

    #[test]
    fn base_score_uses_first_matching_entry() {
        let warm = TokenHeuristic::new(ScoreKind::WarmTone);
        assert_eq!(warm.base_score("Fire-RED"), 0.85);
        assert_eq!(warm.base_score("golden"), 0.7);
        assert_eq!(warm.base_score("s-l1600"), 0.45);

        let neutral = TokenHeuristic::new(ScoreKind::Neutral);
        assert_eq!(neutral.base_score("silver-foil"), 0.72);
        assert_eq!(neutral.base_score("nothing"), 0.5);
    }

    #[test]
    fn score_is_deterministic_and_bounded() {
        let refs = [
            "https://i.example/g/x/s-l225.jpg",
            "https://i.example/g/y/blue-ice.png",
            "https://i.example/g/z/fire.webp",
            "",
            "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz",
        ];
        for kind in [ScoreKind::WarmTone, ScoreKind::CoolTone, ScoreKind::Neutral] {
            let scorer = TokenHeuristic::new(kind);
            for image in refs {
                let first = scorer.score_sync(image);
                let second = scorer.score_sync(image);
                assert_eq!(first, second);
                assert!((0.0..=1.0).contains(&first), "{kind} {image} -> {first}");
            }
        }
    }

    #[tokio::test]
    async fn async_score_matches_sync_score() {
        let scorer = TokenHeuristic::new(ScoreKind::CoolTone);
        let image = "https://i.example/g/q/water-type.jpg";

        assert_eq!(scorer.score(image).await, scorer.score_sync(image));
        assert_eq!(scorer.name(), "cool");
    }
}
