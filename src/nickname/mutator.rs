//! Randomized rewriting of a base word into a candidate nickname.
//!
//! Stages run in a fixed order and each one observes the output of the
//! previous one:
//!
//! 1. prefix (20%), optionally joined with `_`
//! 2. suffix (20%), optionally joined with `_`
//! 3. letter to digit substitution (20% per character)
//! 4. leading underscore (30%)
//! 5. trailing underscore (30%)
//! 6. capitalization: first letter (50%), else all caps (10%), else random
//!    per-character caps (20%), else untouched
//!
//! Every stage draws from the same [`RandomSource`], so a seeded source
//! reproduces the exact same names.

use super::random::RandomSource;

const AFFIX_CHANCE: f64 = 0.2;
const DIGIT_CHANCE: f64 = 0.2;
const UNDERSCORE_CHANCE: f64 = 0.3;
const ALL_CAPS_CHANCE: f64 = 0.1;
const MIXED_CAPS_CHANCE: f64 = 0.2;

pub const DEFAULT_PREFIXES: &[&str] = &["the", "get", "not", "great", "good", "bad"];
pub const DEFAULT_SUFFIXES: &[&str] = &["lol", "xd", "error", "4k", "2k", "ed"];

/// Lowercase letters and the digit that stands in for them. Uppercase
/// letters are never substituted.
fn homoglyph(c: char) -> Option<char> {
    match c {
        'o' => Some('0'),
        'i' | 'l' => Some('1'),
        'f' | 'a' => Some('4'),
        's' => Some('5'),
        'e' => Some('3'),
        _ => None,
    }
}

/// Applies the mutation stages to base words.
#[derive(Debug, Clone)]
pub struct NameMutator {
    prefixes: Vec<String>,
    suffixes: Vec<String>,
}

impl Default for NameMutator {
    fn default() -> Self {
        Self::new(
            DEFAULT_PREFIXES.iter().map(|s| s.to_string()).collect(),
            DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl NameMutator {
    /// An empty prefix or suffix set disables that stage's token, but its
    /// trigger is still drawn so the random sequence keeps its shape.
    pub fn new(prefixes: Vec<String>, suffixes: Vec<String>) -> Self {
        Self { prefixes, suffixes }
    }

    /// Run every stage once, in order. The result may still be too long or
    /// too short; that is the validator's concern.
    pub fn mutate(&self, word: &str, rng: &mut impl RandomSource) -> String {
        let mut name = word.to_string();

        self.add_prefix(&mut name, rng);
        self.add_suffix(&mut name, rng);
        tracing::debug!("After affixes: {}", name);

        substitute_digits(&mut name, rng);
        tracing::debug!("After digit substitution: {}", name);

        add_underscores(&mut name, rng);
        tracing::debug!("After underscores: {}", name);

        capitalize(&mut name, rng);
        tracing::debug!("After capitalization: {}", name);

        name
    }

    fn add_prefix(&self, name: &mut String, rng: &mut impl RandomSource) {
        if !rng.chance(AFFIX_CHANCE) {
            return;
        }
        let Some(prefix) = pick(&self.prefixes, rng) else { return };
        let separator = if rng.coin() { "_" } else { "" };
        name.insert_str(0, &format!("{}{}", prefix, separator));
    }

    fn add_suffix(&self, name: &mut String, rng: &mut impl RandomSource) {
        if !rng.chance(AFFIX_CHANCE) {
            return;
        }
        let Some(suffix) = pick(&self.suffixes, rng) else { return };
        if rng.coin() {
            name.push('_');
        }
        name.push_str(suffix);
    }
}

fn pick<'a>(tokens: &'a [String], rng: &mut impl RandomSource) -> Option<&'a str> {
    if tokens.is_empty() {
        return None;
    }
    Some(tokens[rng.index(tokens.len())].as_str())
}

/// One trigger is drawn per character, whether or not it has a digit form.
fn substitute_digits(name: &mut String, rng: &mut impl RandomSource) {
    *name = name
        .chars()
        .map(|c| {
            let fire = rng.chance(DIGIT_CHANCE);
            match homoglyph(c) {
                Some(digit) if fire => digit,
                _ => c,
            }
        })
        .collect();
}

fn add_underscores(name: &mut String, rng: &mut impl RandomSource) {
    if rng.chance(UNDERSCORE_CHANCE) {
        name.insert(0, '_');
    }
    if rng.chance(UNDERSCORE_CHANCE) {
        name.push('_');
    }
}

fn capitalize(name: &mut String, rng: &mut impl RandomSource) {
    if rng.coin() {
        let mut chars = name.chars();
        if let Some(first) = chars.next() {
            *name = first.to_uppercase().chain(chars).collect();
        }
    } else if rng.chance(ALL_CAPS_CHANCE) {
        *name = name.to_uppercase();
    } else if rng.chance(MIXED_CAPS_CHANCE) {
        let mut mixed = String::with_capacity(name.len());
        for c in name.chars() {
            if rng.coin() {
                mixed.extend(c.to_uppercase());
            } else {
                mixed.push(c);
            }
        }
        *name = mixed;
    }
}
