//! Name/group reconciliation against a roster
//!
//! Folder names are often a concatenation or truncation of the real name,
//! and sometimes carry typos or a different ordering. Matching runs in two
//! passes over the roster slugs:
//!
//! 1. containment (one slug is a substring of the other)
//! 2. similarity ratio, accepted when at or above the threshold
//!
//! Without a match the raw identifier is returned with an empty group.

use crate::error::{Error, Result};
use crate::roster::{Roster, RosterEntry};
use crate::slug::slugify_name;
use serde::{Deserialize, Serialize};
use similar::{Algorithm, DiffOp, TextDiff};

/// Default similarity threshold
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// How the containment pass picks among qualifying roster entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainmentPolicy {
    /// First qualifying entry in roster order
    #[default]
    First,
    /// Qualifying entry with the highest similarity ratio
    Best,
    /// Skip the containment pass
    Off,
}

impl std::str::FromStr for ContainmentPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "first" => Ok(ContainmentPolicy::First),
            "best" => Ok(ContainmentPolicy::Best),
            "off" | "none" => Ok(ContainmentPolicy::Off),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

impl std::fmt::Display for ContainmentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainmentPolicy::First => write!(f, "first"),
            ContainmentPolicy::Best => write!(f, "best"),
            ContainmentPolicy::Off => write!(f, "off"),
        }
    }
}

/// Matching parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOptions {
    threshold: f64,
    containment: ContainmentPolicy,
}

impl MatchOptions {
    /// `threshold` must lie in `0.0..=1.0`.
    pub fn new(threshold: f64, containment: ContainmentPolicy) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            containment,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn containment(&self) -> ContainmentPolicy {
        self.containment
    }
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            containment: ContainmentPolicy::First,
        }
    }
}

/// Which pass produced the result
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchKind {
    /// Roster index of the containment match
    Containment(usize),
    /// Roster index and ratio of the similarity match
    Similarity(usize, f64),
    Unmatched,
}

/// Reconciled name and group
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub name: String,
    pub group: String,
    pub kind: MatchKind,
}

impl MatchOutcome {
    fn unmatched(raw: &str) -> Self {
        Self {
            name: raw.to_string(),
            group: String::new(),
            kind: MatchKind::Unmatched,
        }
    }

    fn from_entry(entry: &RosterEntry, kind: MatchKind) -> Self {
        Self {
            name: entry.name.clone(),
            group: entry.group.clone(),
            kind,
        }
    }

    pub fn is_match(&self) -> bool {
        !matches!(self.kind, MatchKind::Unmatched)
    }
}

/// Similarity of two strings in `0.0..=1.0`: `2 * matches / (len(a) + len(b))`
/// over a character-level Myers diff. Identical inputs score 1.0.
///
/// Computed in `f64` from the diff ops so that exact fractions compare
/// equal to a threshold of the same value.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 1.0;
    }

    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_chars(a, b);
    let matched: usize = diff
        .ops()
        .iter()
        .map(|op| match op {
            DiffOp::Equal { len, .. } => *len,
            _ => 0,
        })
        .sum();

    2.0 * matched as f64 / total as f64
}

/// Map a raw identifier taken from a folder name to a roster entry.
pub fn reconcile(raw: &str, roster: &Roster, options: &MatchOptions) -> MatchOutcome {
    if roster.is_empty() {
        return MatchOutcome::unmatched(raw);
    }

    let raw_slug = slugify_name(raw);
    if raw_slug.is_empty() {
        return MatchOutcome::unmatched(raw);
    }

    if let Some(index) = containment_match(&raw_slug, roster, options.containment) {
        return MatchOutcome::from_entry(&roster.entries()[index], MatchKind::Containment(index));
    }

    match best_ratio(&raw_slug, roster.iter().enumerate()) {
        Some((index, ratio)) if ratio >= options.threshold => MatchOutcome::from_entry(
            &roster.entries()[index],
            MatchKind::Similarity(index, ratio),
        ),
        _ => MatchOutcome::unmatched(raw),
    }
}

fn contains_either(raw_slug: &str, slug: &str) -> bool {
    !slug.is_empty() && (slug.contains(raw_slug) || raw_slug.contains(slug))
}

fn containment_match(raw_slug: &str, roster: &Roster, policy: ContainmentPolicy) -> Option<usize> {
    match policy {
        ContainmentPolicy::Off => None,
        ContainmentPolicy::First => roster
            .iter()
            .position(|entry| contains_either(raw_slug, entry.slug())),
        ContainmentPolicy::Best => {
            let candidates = roster
                .iter()
                .enumerate()
                .filter(|(_, entry)| contains_either(raw_slug, entry.slug()));
            // A containing slug always has a positive ratio, so this never
            // drops a candidate.
            best_ratio(raw_slug, candidates).map(|(index, _)| index)
        }
    }
}

/// Highest ratio with strict `>`, so the earliest entry wins ties.
/// Entries scoring 0.0 are never selected.
fn best_ratio<'a>(
    raw_slug: &str,
    entries: impl Iterator<Item = (usize, &'a RosterEntry)>,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    let mut best_ratio = 0.0;

    for (index, entry) in entries {
        if entry.slug().is_empty() {
            continue;
        }
        let ratio = similarity_ratio(raw_slug, entry.slug());
        if ratio > best_ratio {
            best_ratio = ratio;
            best = Some((index, ratio));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::from_pairs([
            ("1", "Martin Kalanda-Phiri"),
            ("3", "Khlaf Alshammari"),
            ("7", "Ann Lee"),
            ("8", "Ann Leeson"),
        ])
    }

    #[test]
    fn test_similarity_ratio() {
        assert!((similarity_ratio("abc", "abc") - 1.0).abs() < 1e-9);
        assert!((similarity_ratio("", "") - 1.0).abs() < 1e-9);
        assert!(similarity_ratio("abcd", "wxyz").abs() < 1e-9);
        // 2 * 2 / 6
        assert!((similarity_ratio("abx", "abd") - 2.0 / 3.0).abs() < 1e-6);
        assert!(similarity_ratio("martinkalandaphriri", "martinkalandaphiri") > 0.9);
    }

    #[test]
    fn test_empty_roster_returns_input() {
        let outcome = reconcile("Whoever_42", &Roster::default(), &MatchOptions::default());
        assert_eq!(outcome.name, "Whoever_42");
        assert_eq!(outcome.group, "");
        assert_eq!(outcome.kind, MatchKind::Unmatched);
    }

    #[test]
    fn test_empty_slug_returns_input() {
        let outcome = reconcile("1234", &roster(), &MatchOptions::default());
        assert_eq!(outcome.name, "1234");
        assert_eq!(outcome.group, "");
        assert!(!outcome.is_match());
    }

    #[test]
    fn test_containment_first_wins() {
        let outcome = reconcile("annleeson", &roster(), &MatchOptions::default());
        // "annlee" is contained in "annleeson" and comes first
        assert_eq!(outcome.name, "Ann Lee");
        assert_eq!(outcome.group, "7");
        assert_eq!(outcome.kind, MatchKind::Containment(2));
    }

    #[test]
    fn test_containment_truncated_raw() {
        let outcome = reconcile("alshammari", &roster(), &MatchOptions::default());
        assert_eq!(outcome.name, "Khlaf Alshammari");
        assert_eq!(outcome.group, "3");
    }

    #[test]
    fn test_containment_best_policy() {
        let options = MatchOptions::new(0.5, ContainmentPolicy::Best).unwrap();
        let outcome = reconcile("annleeson", &roster(), &options);
        assert_eq!(outcome.name, "Ann Leeson");
        assert_eq!(outcome.kind, MatchKind::Containment(3));
    }

    #[test]
    fn test_containment_off_policy() {
        let roster = Roster::from_pairs([("4", "Ann Leeson Smithfield")]);
        let first = reconcile("annlee", &roster, &MatchOptions::default());
        assert_eq!(first.group, "4");

        let options = MatchOptions::new(0.5, ContainmentPolicy::Off).unwrap();
        let off = reconcile("annlee", &roster, &options);
        // 2 * 6 / 25 = 0.48
        assert_eq!(off.name, "annlee");
        assert!(!off.is_match());
    }

    #[test]
    fn test_similarity_match() {
        let outcome = reconcile("martinkalandaphriri", &roster(), &MatchOptions::default());
        assert_eq!(outcome.name, "Martin Kalanda-Phiri");
        assert_eq!(outcome.group, "1");
        assert!(matches!(outcome.kind, MatchKind::Similarity(0, r) if r > 0.9));
    }

    #[test]
    fn test_similarity_tie_keeps_earliest() {
        let roster = Roster::from_pairs([("1", "abc"), ("2", "abd")]);
        let outcome = reconcile("abx", &roster, &MatchOptions::default());
        assert_eq!(outcome.group, "1");
    }

    #[test]
    fn test_below_threshold_unmatched() {
        let outcome = reconcile("zzzz", &roster(), &MatchOptions::default());
        assert_eq!(outcome.name, "zzzz");
        assert_eq!(outcome.group, "");
    }

    #[test]
    fn test_ratio_on_threshold_is_accepted() {
        // 7 of 10 characters shared: 2 * 7 / 20 = 0.7
        assert_eq!(similarity_ratio("abcdefghuv", "abcdefgnop"), 0.7);
        let roster = Roster::from_pairs([("1", "abcdefgnop")]);
        let options = MatchOptions::new(0.7, ContainmentPolicy::Off).unwrap();
        let outcome = reconcile("abcdefghuv", &roster, &options);
        assert_eq!(outcome.group, "1");
        assert_eq!(outcome.kind, MatchKind::Similarity(0, 0.7));

        // 2 * 9 / 20 = 0.9
        let roster = Roster::from_pairs([("2", "abcdefghiv")]);
        let options = MatchOptions::new(0.9, ContainmentPolicy::Off).unwrap();
        assert_eq!(reconcile("abcdefghiu", &roster, &options).group, "2");
    }

    #[test]
    fn test_threshold_is_configurable() {
        let strict = MatchOptions::new(0.99, ContainmentPolicy::First).unwrap();
        let outcome = reconcile("martinkalandaphriri", &roster(), &strict);
        assert!(!outcome.is_match());
    }

    #[test]
    fn test_skips_empty_roster_slugs() {
        let roster = Roster::from_pairs([("9", "张伟"), ("2", "Bob Stone")]);
        let outcome = reconcile("bobstone", &roster, &MatchOptions::default());
        assert_eq!(outcome.group, "2");
    }

    #[test]
    fn test_reconcile_is_deterministic() {
        let roster = roster();
        let options = MatchOptions::default();
        let first = reconcile("kalandaphri", &roster, &options);
        for _ in 0..5 {
            assert_eq!(reconcile("kalandaphri", &roster, &options), first);
        }
    }

    #[test]
    fn test_invalid_threshold() {
        assert!(MatchOptions::new(1.5, ContainmentPolicy::First).is_err());
        assert!(MatchOptions::new(-0.1, ContainmentPolicy::First).is_err());
        assert!(MatchOptions::new(f64::NAN, ContainmentPolicy::First).is_err());
        assert!(MatchOptions::new(0.0, ContainmentPolicy::First).is_ok());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("First".parse::<ContainmentPolicy>().unwrap(), ContainmentPolicy::First);
        assert_eq!("best".parse::<ContainmentPolicy>().unwrap(), ContainmentPolicy::Best);
        assert_eq!("off".parse::<ContainmentPolicy>().unwrap(), ContainmentPolicy::Off);
        assert!("sometimes".parse::<ContainmentPolicy>().is_err());
        assert_eq!(ContainmentPolicy::Best.to_string(), "best");
    }
}
