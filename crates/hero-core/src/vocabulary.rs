//! Fixed hero vocabularies
//!
//! Order is significant: alliteration picks the first matching suffix.

/// Title prefixes, 20 entries
pub const PREFIXES: [&str; 20] = [
    "Captain",
    "The Mighty",
    "Agent",
    "Doctor",
    "Professor",
    "Master",
    "Lord",
    "Lady",
    "The Amazing",
    "Super",
    "Ultra",
    "The Incredible",
    "Commander",
    "The Great",
    "Admiral",
    "General",
    "The Legendary",
    "Cosmic",
    "Shadow",
    "The Invincible",
];

/// Name suffixes, 23 entries
pub const SUFFIXES: [&str; 23] = [
    "Man",
    "Woman",
    "Guardian",
    "Master",
    "Star",
    "Knight",
    "Warrior",
    "Hero",
    "Defender",
    "Protector",
    "Champion",
    "Avenger",
    "Hunter",
    "Ranger",
    "Force",
    "Storm",
    "Fire",
    "Lightning",
    "Thunder",
    "Shadow",
    "Light",
    "Wing",
    "Blade",
];

/// First suffix whose lower-cased initial equals `initial`
#[must_use]
pub fn first_suffix_starting_with(initial: &str) -> Option<&'static str> {
    if initial.is_empty() {
        return None;
    }
    SUFFIXES
        .iter()
        .copied()
        .find(|suffix| lower_initial(suffix) == initial)
}

/// Lower-cased first character, or empty string
pub(crate) fn lower_initial(word: &str) -> String {
    word.chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_default()
}
