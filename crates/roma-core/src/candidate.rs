use std::collections::BTreeSet;

use serde::Serialize;

/// Every accepted spelling for one typing unit, sorted and deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CandidateSet {
    spellings: Vec<String>,
}

impl CandidateSet {
    pub fn single(spelling: impl Into<String>) -> Self {
        Self {
            spellings: vec![spelling.into()],
        }
    }

    pub fn contains(&self, spelling: &str) -> bool {
        self.spellings
            .binary_search_by(|s| s.as_str().cmp(spelling))
            .is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.spellings.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.spellings
    }

    pub fn len(&self) -> usize {
        self.spellings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spellings.is_empty()
    }

    /// The spelling shown to the typist: shortest, ties broken alphabetically.
    pub fn preferred(&self) -> Option<&str> {
        self.spellings
            .iter()
            .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
            .map(String::as_str)
    }

    /// Distinct first characters across all spellings.
    pub fn first_keys(&self) -> Vec<char> {
        let keys: BTreeSet<char> = self.iter().filter_map(|s| s.chars().next()).collect();
        keys.into_iter().collect()
    }
}

impl FromIterator<String> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let set: BTreeSet<String> = iter.into_iter().collect();
        Self {
            spellings: set.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.spellings.iter()
    }
}
