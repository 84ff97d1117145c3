//! Cascading lookup maps (region → country → subregion → locality).
//!
//! Each map is built once by grouping the record set on a parent column and
//! collecting the distinct child values seen alongside it. The maps back the
//! dependent dropdowns: selecting regions narrows the country options,
//! selecting countries narrows the subregion options, and so on.

use std::collections::{BTreeMap, BTreeSet};

/// Parent value → distinct child values observed with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupMap {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl LookupMap {
    /// Builds a map from `(parent, child)` pairs.
    ///
    /// Pairs where either side is blank are skipped, so unknown
    /// administrative areas never surface as selectable options.
    #[must_use]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut entries: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for (parent, child) in pairs {
            let parent = parent.trim();
            let child = child.trim();
            if parent.is_empty() || child.is_empty() {
                continue;
            }
            entries
                .entry(parent.to_owned())
                .or_default()
                .insert(child.to_owned());
        }

        Self { entries }
    }

    /// Returns the children recorded for a single parent value.
    #[must_use]
    pub fn get(&self, parent: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(parent)
    }

    /// Iterates over the parent values in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of distinct parent values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the sorted union of children reachable from `selected`.
    ///
    /// Selected values that are not in the map contribute nothing; an empty
    /// result is a valid "no options" state rather than an error.
    #[must_use]
    pub fn resolve<S: AsRef<str>>(&self, selected: &[S]) -> Vec<String> {
        let union: BTreeSet<&String> = selected
            .iter()
            .filter_map(|parent| self.entries.get(parent.as_ref()))
            .flatten()
            .collect();

        union.into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions() -> LookupMap {
        LookupMap::from_pairs([
            ("South Asia", "India"),
            ("South Asia", "Pakistan"),
            ("South Asia", "India"),
            ("Western Europe", "France"),
            ("Western Europe", ""),
            ("", "Atlantis"),
        ])
    }

    #[test]
    fn groups_distinct_children_by_parent() {
        let map = regions();
        assert_eq!(map.len(), 2);
        let south_asia: Vec<&str> = map
            .get("South Asia")
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(south_asia, ["India", "Pakistan"]);
    }

    #[test]
    fn skips_blank_parents_and_children() {
        let map = regions();
        assert!(map.keys().all(|k| !k.is_empty()));
        assert_eq!(map.get("Western Europe").unwrap().len(), 1);
    }

    #[test]
    fn resolves_union_of_selected_parents() {
        let map = regions();
        let countries = map.resolve(&["Western Europe", "South Asia"]);
        assert_eq!(countries, ["France", "India", "Pakistan"]);
    }

    #[test]
    fn unknown_parent_resolves_to_nothing() {
        let map = regions();
        assert!(map.resolve(&["Antarctica"]).is_empty());
        assert_eq!(map.resolve(&["Antarctica", "Western Europe"]), ["France"]);
        assert!(map.resolve::<&str>(&[]).is_empty());
    }
}
