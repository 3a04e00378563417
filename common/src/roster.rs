//! Roster of canonical student names and group numbers

use crate::slug::slugify_name;

/// One roster row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    pub group: String,
    slug: String,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>, group: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify_name(&name);
        Self {
            name,
            group: group.into(),
            slug,
        }
    }

    /// Matching key derived from `name`
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

/// Immutable, ordered roster. Order matters: the containment pass
/// returns the first qualifying entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    /// Build from `(group, name)` pairs, the column order of the spreadsheet.
    pub fn from_pairs<G, N>(pairs: impl IntoIterator<Item = (G, N)>) -> Self
    where
        G: Into<String>,
        N: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(group, name)| RosterEntry::new(name, group))
                .collect(),
        }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RosterEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a RosterEntry;
    type IntoIter = std::slice::Iter<'a, RosterEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
