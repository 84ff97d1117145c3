//! Filter engine for the map view.
//!
//! Criteria are compiled into an [`IncidentFilter`] once, then every
//! record is tested against it in a single pass. The year window is
//! checked first since it is the cheapest and usually the most selective
//! predicate; the remaining membership tests are independent, so the
//! result does not depend on their order.

use terror_insights_analytics_models::FilterCriteria;
use terror_insights_dataset::Dataset;
use terror_insights_incident_models::Incident;

/// Compiled form of [`FilterCriteria`] with year bounds resolved.
#[derive(Debug, Clone)]
pub struct IncidentFilter<'c> {
    year_start: Option<i32>,
    year_end: Option<i32>,
    criteria: &'c FilterCriteria,
}

impl<'c> IncidentFilter<'c> {
    /// Compiles `criteria`, filling absent year bounds from `default_bounds`.
    #[must_use]
    pub fn new(criteria: &'c FilterCriteria, default_bounds: Option<(i32, i32)>) -> Self {
        Self {
            year_start: criteria.year_start.or(default_bounds.map(|(min, _)| min)),
            year_end: criteria.year_end.or(default_bounds.map(|(_, max)| max)),
            criteria,
        }
    }

    /// Whether the year window is inverted and can never match.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        matches!((self.year_start, self.year_end), (Some(start), Some(end)) if start > end)
    }

    /// Whether `incident` falls inside the inclusive year window.
    #[must_use]
    pub fn matches_year(&self, incident: &Incident) -> bool {
        self.year_start.is_none_or(|start| incident.year >= start)
            && self.year_end.is_none_or(|end| incident.year <= end)
    }

    /// Whether `incident` satisfies every non-empty constraint.
    #[must_use]
    pub fn matches(&self, incident: &Incident) -> bool {
        let c = self.criteria;

        self.matches_year(incident)
            && contains_text(&c.region, &incident.region)
            && contains_text(&c.country, &incident.country)
            && contains_text(&c.subregion, &incident.subregion)
            && contains_text(&c.locality, &incident.locality)
            && contains_text(&c.attack_type, &incident.attack_type)
            && contains_number(&c.month, incident.month)
            && contains_number(&c.day, incident.day)
    }
}

/// Empty `allowed` means no restriction.
fn contains_text(allowed: &[String], value: &str) -> bool {
    allowed.is_empty() || allowed.iter().any(|a| a == value)
}

/// Empty `allowed` means no restriction; an unknown value never matches a
/// non-empty selection.
fn contains_number(allowed: &[u8], value: Option<u8>) -> bool {
    allowed.is_empty() || value.is_some_and(|v| allowed.contains(&v))
}

/// Returns every incident in `dataset` that matches `criteria`.
///
/// Absent year bounds default to the dataset's earliest and latest years.
/// An inverted range (`year_start > year_end`) matches nothing. No match
/// is a normal outcome and yields an empty vector.
#[must_use]
pub fn filter<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> Vec<&'a Incident> {
    let compiled = IncidentFilter::new(criteria, dataset.year_bounds());

    if compiled.is_inverted() {
        log::debug!(
            "Inverted year range {:?}..={:?}; no incidents match",
            compiled.year_start,
            compiled.year_end
        );
        return Vec::new();
    }

    let matches: Vec<&Incident> = dataset
        .incidents()
        .iter()
        .filter(|incident| compiled.matches(incident))
        .collect();

    log::debug!(
        "Filter matched {} of {} incidents",
        matches.len(),
        dataset.len()
    );

    matches
}

/// Result of a filter as seen by a renderer: either rows to draw or an
/// explicit "nothing matched" state.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome<'a> {
    /// At least one incident matched.
    Matches(Vec<&'a Incident>),
    /// Nothing matched the selected filters.
    NoData,
}

impl<'a> From<Vec<&'a Incident>> for FilterOutcome<'a> {
    fn from(matches: Vec<&'a Incident>) -> Self {
        if matches.is_empty() {
            Self::NoData
        } else {
            Self::Matches(matches)
        }
    }
}

impl<'a> FilterOutcome<'a> {
    /// Runs [`filter`] and classifies the result.
    #[must_use]
    pub fn of(dataset: &'a Dataset, criteria: &FilterCriteria) -> Self {
        filter(dataset, criteria).into()
    }

    /// The matching incidents; empty for [`Self::NoData`].
    #[must_use]
    pub fn into_matches(self) -> Vec<&'a Incident> {
        match self {
            Self::Matches(matches) => matches,
            Self::NoData => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::fixtures::{three_records, varied};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    fn positions(dataset: &Dataset, matches: &[&Incident]) -> BTreeSet<usize> {
        matches
            .iter()
            .map(|m| {
                dataset
                    .incidents()
                    .iter()
                    .position(|i| std::ptr::eq(i, *m))
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn empty_criteria_returns_everything() {
        let ds = varied();
        let matches = filter(&ds, &FilterCriteria::default());
        assert_eq!(matches.len(), ds.len());
    }

    #[test]
    fn region_filter_on_three_records() {
        let ds = three_records();
        let criteria = FilterCriteria {
            region: strings(&["Asia"]),
            ..FilterCriteria::default()
        };
        let matches = filter(&ds, &criteria);
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|m| m.region == "Asia"));
    }

    #[test]
    fn inverted_year_range_is_empty() {
        let ds = three_records();
        let matches = filter(&ds, &FilterCriteria::years(2000, 1990));
        assert!(matches.is_empty());
        assert_eq!(
            FilterOutcome::of(&ds, &FilterCriteria::years(2000, 1990)),
            FilterOutcome::NoData
        );
    }

    #[test]
    fn year_bounds_default_to_dataset_range() {
        let ds = varied();
        let only_start = FilterCriteria {
            year_start: Some(1990),
            ..FilterCriteria::default()
        };
        let matches = filter(&ds, &only_start);
        assert_eq!(matches.len(), 4);
        assert!(matches.iter().all(|m| m.year >= 1990));

        let only_end = FilterCriteria {
            year_end: Some(1975),
            ..FilterCriteria::default()
        };
        assert_eq!(filter(&ds, &only_end).len(), 2);
    }

    #[test]
    fn every_match_satisfies_every_constraint() {
        let ds = varied();
        let criteria = FilterCriteria {
            region: strings(&["South Asia", "Western Europe"]),
            attack_type: strings(&["Bombing/Explosion", "Assassination"]),
            year_start: Some(1970),
            year_end: Some(1990),
            ..FilterCriteria::default()
        };
        let matches = filter(&ds, &criteria);
        assert_eq!(matches.len(), 4);
        for m in &matches {
            assert!(criteria.region.contains(&m.region));
            assert!(criteria.attack_type.contains(&m.attack_type));
            assert!((1970..=1990).contains(&m.year));
        }
    }

    #[test]
    fn cascading_geography_filters() {
        let ds = varied();
        let criteria = FilterCriteria {
            country: strings(&["India"]),
            subregion: strings(&["Punjab"]),
            locality: strings(&["Ludhiana"]),
            ..FilterCriteria::default()
        };
        let matches = filter(&ds, &criteria);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].year, 1995);
    }

    #[test]
    fn month_and_day_filters_skip_unknown_dates() {
        let ds = varied();
        let march = FilterCriteria {
            month: vec![3],
            ..FilterCriteria::default()
        };
        let matches = filter(&ds, &march);
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|m| m.month == Some(3)));

        let june_second = FilterCriteria {
            month: vec![6],
            day: vec![2],
            ..FilterCriteria::default()
        };
        let matches = filter(&ds, &june_second);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].country, "France");
    }

    #[test]
    fn constraint_order_does_not_matter() {
        let ds = varied();
        let region = strings(&["South Asia"]);
        let attack = strings(&["Armed Assault"]);

        let combined = filter(
            &ds,
            &FilterCriteria {
                region: region.clone(),
                attack_type: attack.clone(),
                ..FilterCriteria::default()
            },
        );

        let by_region = positions(
            &ds,
            &filter(
                &ds,
                &FilterCriteria {
                    region,
                    ..FilterCriteria::default()
                },
            ),
        );
        let by_attack = positions(
            &ds,
            &filter(
                &ds,
                &FilterCriteria {
                    attack_type: attack,
                    ..FilterCriteria::default()
                },
            ),
        );
        let region_then_attack: BTreeSet<usize> =
            by_region.intersection(&by_attack).copied().collect();
        let attack_then_region: BTreeSet<usize> =
            by_attack.intersection(&by_region).copied().collect();

        assert_eq!(positions(&ds, &combined), region_then_attack);
        assert_eq!(region_then_attack, attack_then_region);
        assert_eq!(region_then_attack.len(), 2);
    }

    #[test]
    fn disjoint_year_ranges_union_to_combined_range() {
        let ds = varied();
        let base = FilterCriteria {
            region: strings(&["South Asia"]),
            ..FilterCriteria::default()
        };

        for split in 1970..=2000 {
            let low = filter(
                &ds,
                &FilterCriteria {
                    year_start: Some(1970),
                    year_end: Some(split),
                    ..base.clone()
                },
            );
            let high = filter(
                &ds,
                &FilterCriteria {
                    year_start: Some(split + 1),
                    year_end: Some(2000),
                    ..base.clone()
                },
            );
            let all = filter(
                &ds,
                &FilterCriteria {
                    year_start: Some(1970),
                    year_end: Some(2000),
                    ..base.clone()
                },
            );

            let mut union = positions(&ds, &low);
            union.extend(positions(&ds, &high));
            assert_eq!(union, positions(&ds, &all), "split at {split}");
        }
    }

    #[test]
    fn no_match_is_no_data_not_error() {
        let ds = varied();
        let criteria = FilterCriteria {
            country: strings(&["Atlantis"]),
            ..FilterCriteria::default()
        };
        let outcome = FilterOutcome::of(&ds, &criteria);
        assert_eq!(outcome, FilterOutcome::NoData);
        assert!(outcome.into_matches().is_empty());
    }

    #[test]
    fn empty_dataset_filters_to_nothing() {
        let ds = Dataset::from_incidents(Vec::new());
        assert!(filter(&ds, &FilterCriteria::default()).is_empty());
    }
}
