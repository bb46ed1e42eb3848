//! Superhero name generation
//!
//! A single pass over the submitted real name and keyword:
//! - Preprocess into [`NameParts`] (tokens, cleaned keyword)
//! - Pick one of six [`Strategy`] templates at random
//! - Fill it from the fixed vocabularies and the [`blend`] primitive
//! - Enforce the [`MAX_HERO_NAME_CHARS`] cap
//!
//! All randomness flows through the caller's [`Rng`], so a seeded or
//! constant generator pins every outcome.

use crate::types::MAX_HERO_NAME_CHARS;
use crate::vocabulary::{first_suffix_starting_with, lower_initial, PREFIXES, SUFFIXES};
use rand::Rng;

/// Preprocessed generator input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    /// First whitespace-separated token of the real name
    pub first_token: String,
    /// Last whitespace-separated token of the real name
    pub last_token: String,
    /// Trimmed, lower-cased keyword
    pub clean_keyword: String,
    /// Clean keyword with its first character upper-cased
    pub capitalized_keyword: String,
}

impl NameParts {
    /// Split the real name and normalize the keyword
    #[must_use]
    pub fn new(real_name: &str, keyword: &str) -> Self {
        let mut tokens = real_name.split_whitespace();
        let first_token = tokens.next().unwrap_or_default();
        let last_token = tokens.last().unwrap_or(first_token);

        let clean_keyword = keyword.trim().to_lowercase();
        let capitalized_keyword = capitalize(&clean_keyword);

        Self {
            first_token: first_token.to_string(),
            last_token: last_token.to_string(),
            clean_keyword,
            capitalized_keyword,
        }
    }
}

/// Name composition template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// `{prefix} {Keyword} {suffix}`
    PrefixKeywordSuffix,
    /// `{blend(Keyword, first)} {suffix}`
    KeywordNameBlend,
    /// `{prefix} {blend(first, Keyword)}`
    PrefixNameBlend,
    /// `The {blend(Keyword, last)}`
    DefiniteBlend,
    /// `{Keyword} {suffix}`
    KeywordSuffix,
    /// `{Keyword} {suffix sharing the first name's initial}`
    Alliteration,
}

impl Strategy {
    /// Every strategy, in selection order
    pub const ALL: [Self; 6] = [
        Self::PrefixKeywordSuffix,
        Self::KeywordNameBlend,
        Self::PrefixNameBlend,
        Self::DefiniteBlend,
        Self::KeywordSuffix,
        Self::Alliteration,
    ];

    /// Pick a strategy uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Strategy name (for logging)
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::PrefixKeywordSuffix => "prefix_keyword_suffix",
            Self::KeywordNameBlend => "keyword_name_blend",
            Self::PrefixNameBlend => "prefix_name_blend",
            Self::DefiniteBlend => "definite_blend",
            Self::KeywordSuffix => "keyword_suffix",
            Self::Alliteration => "alliteration",
        }
    }

    /// Compose a name with this strategy
    ///
    /// The length cap is not applied here; see [`generate`].
    pub fn compose<R: Rng + ?Sized>(self, rng: &mut R, parts: &NameParts) -> String {
        let keyword = &parts.capitalized_keyword;
        match self {
            Self::PrefixKeywordSuffix => {
                let prefix = pick(rng, &PREFIXES);
                let suffix = pick(rng, &SUFFIXES);
                format!("{prefix} {keyword} {suffix}")
            }
            Self::KeywordNameBlend => {
                let suffix = pick(rng, &SUFFIXES);
                format!("{} {suffix}", blend(keyword, &parts.first_token))
            }
            Self::PrefixNameBlend => {
                let prefix = pick(rng, &PREFIXES);
                format!("{prefix} {}", blend(&parts.first_token, keyword))
            }
            Self::DefiniteBlend => format!("The {}", blend(keyword, &parts.last_token)),
            Self::KeywordSuffix => keyword_with_suffix(rng, keyword),
            Self::Alliteration => {
                let initial = lower_initial(&parts.first_token);
                if lower_initial(&parts.clean_keyword) == initial {
                    return keyword_with_suffix(rng, keyword);
                }
                match first_suffix_starting_with(&initial) {
                    Some(suffix) => format!("{keyword} {suffix}"),
                    None => keyword_with_suffix(rng, keyword),
                }
            }
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Generate a superhero name
///
/// Never fails. For any keyword of at most 50 characters the result is
/// non-empty and at most [`MAX_HERO_NAME_CHARS`] characters long.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, real_name: &str, keyword: &str) -> String {
    let parts = NameParts::new(real_name, keyword);
    let strategy = Strategy::random(rng);
    let name = strategy.compose(rng, &parts);
    tracing::trace!(strategy = %strategy, name = %name, "composed hero name");
    enforce_length(rng, name, &parts)
}

/// Replace over-long names with `{Keyword} {suffix}`
///
/// When even that exceeds the cap the keyword alone is used, cut to fit.
fn enforce_length<R: Rng + ?Sized>(rng: &mut R, name: String, parts: &NameParts) -> String {
    if char_len(&name) <= MAX_HERO_NAME_CHARS {
        return name;
    }
    let fallback = keyword_with_suffix(rng, &parts.capitalized_keyword);
    if char_len(&fallback) <= MAX_HERO_NAME_CHARS {
        return fallback;
    }
    parts
        .capitalized_keyword
        .chars()
        .take(MAX_HERO_NAME_CHARS)
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Splice a prefix of `a` with a suffix of `b`
///
/// Both words are lower-cased first. Of the two candidate splices the shorter
/// wins (ties go to the half/half splice), then the first character is
/// upper-cased. Empty inputs yield short or empty blends.
#[must_use]
pub fn blend(a: &str, b: &str) -> String {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let mid_a = a.len() / 2;
    let mid_b = b.len() / 2;

    let halves: String = a[..mid_a].iter().chain(&b[mid_b..]).collect();

    let head = mid_a.max(2).min(a.len());
    let tail = (b.len() - mid_b).max(2).min(b.len());
    let ends: String = a[..head].iter().chain(&b[b.len() - tail..]).collect();

    let chosen = if char_len(&halves) <= char_len(&ends) {
        halves
    } else {
        ends
    };
    capitalize(&chosen)
}

/// Upper-case the first character
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn keyword_with_suffix<R: Rng + ?Sized>(rng: &mut R, keyword: &str) -> String {
    format!("{keyword} {}", pick(rng, &SUFFIXES))
}

fn pick<R: Rng + ?Sized>(rng: &mut R, words: &[&'static str]) -> &'static str {
    words[rng.gen_range(0..words.len())]
}

#[inline]
fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Always draws index 0: first strategy, "Captain", "Man".
    fn first_pick() -> StepRng {
        StepRng::new(0, 0)
    }

    #[test]
    fn parts_split_and_normalize() {
        let parts = NameParts::new("  Peter   Parker  ", "  SPIDER  ");
        assert_eq!(parts.first_token, "Peter");
        assert_eq!(parts.last_token, "Parker");
        assert_eq!(parts.clean_keyword, "spider");
        assert_eq!(parts.capitalized_keyword, "Spider");
    }

    #[test]
    fn parts_single_token_is_first_and_last() {
        let parts = NameParts::new("Superman", "strength");
        assert_eq!(parts.first_token, "Superman");
        assert_eq!(parts.last_token, "Superman");
    }

    #[test]
    fn parts_empty_inputs() {
        let parts = NameParts::new("   ", "   ");
        assert_eq!(parts.first_token, "");
        assert_eq!(parts.last_token, "");
        assert_eq!(parts.capitalized_keyword, "");
    }

    #[test]
    fn blend_takes_half_and_half() {
        assert_eq!(blend("Fire", "John"), "Fihn");
        assert_eq!(blend("Spider", "Peter"), "Spiter");
        assert_eq!(blend("John", "Fire"), "Jore");
    }

    #[test]
    fn blend_lowercases_inputs() {
        assert_eq!(blend("FIRE", "SMITH"), "Fiith");
    }

    #[test]
    fn blend_empty_words() {
        assert_eq!(blend("", "john"), "Hn");
        assert_eq!(blend("ab", ""), "A");
        assert_eq!(blend("", ""), "");
    }

    #[test]
    fn blend_single_characters() {
        assert_eq!(blend("a", "b"), "B");
    }

    #[test]
    fn capitalize_first_char_only() {
        assert_eq!(capitalize("fire storm"), "Fire storm");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "Éclair");
    }

    #[test]
    fn pinned_strategies() {
        let parts = NameParts::new("John Smith", "fire");
        let cases = [
            (Strategy::PrefixKeywordSuffix, "Captain Fire Man"),
            (Strategy::KeywordNameBlend, "Fihn Man"),
            (Strategy::PrefixNameBlend, "Captain Jore"),
            (Strategy::DefiniteBlend, "The Fiith"),
            (Strategy::KeywordSuffix, "Fire Man"),
            // no suffix starts with "j": random fallback
            (Strategy::Alliteration, "Fire Man"),
        ];
        for (strategy, expected) in cases {
            assert_eq!(strategy.compose(&mut first_pick(), &parts), expected, "{strategy}");
        }
    }

    #[test]
    fn alliteration_finds_matching_suffix() {
        let parts = NameParts::new("Sam Wilson", "fire");
        assert_eq!(
            Strategy::Alliteration.compose(&mut first_pick(), &parts),
            "Fire Star"
        );

        let parts = NameParts::new("hank pym", "ant");
        assert_eq!(
            Strategy::Alliteration.compose(&mut first_pick(), &parts),
            "Ant Hero"
        );
    }

    #[test]
    fn alliteration_same_initial_uses_random_suffix() {
        let parts = NameParts::new("Frank Castle", "fire");
        assert_eq!(
            Strategy::Alliteration.compose(&mut first_pick(), &parts),
            "Fire Man"
        );
    }

    #[test]
    fn constant_rng_picks_first_strategy() {
        assert_eq!(Strategy::random(&mut first_pick()), Strategy::PrefixKeywordSuffix);
        assert_eq!(generate(&mut first_pick(), "John Smith", "fire"), "Captain Fire Man");
    }

    #[test]
    fn long_result_falls_back_to_keyword_suffix() {
        // "Captain " + 40 chars + " Man" is 52 characters
        let keyword = "k".repeat(40);
        let name = generate(&mut first_pick(), "John", &keyword);
        assert_eq!(name, format!("K{} Man", "k".repeat(39)));
    }

    #[test]
    fn keyword_at_cap_is_cut_to_fit() {
        let keyword = "a".repeat(50);
        let name = generate(&mut first_pick(), "John", &keyword);
        assert_eq!(name.chars().count(), MAX_HERO_NAME_CHARS);
        assert_eq!(name, format!("A{}", "a".repeat(49)));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generate(&mut StdRng::seed_from_u64(7), "Diana Prince", "wisdom");
        let b = generate(&mut StdRng::seed_from_u64(7), "Diana Prince", "wisdom");
        assert_eq!(a, b);
    }

    #[test]
    fn every_strategy_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(Strategy::random(&mut rng));
        }
        assert_eq!(seen.len(), Strategy::ALL.len());
    }
}
