//! Reports printed by the `options` and `filter` subcommands.

use serde::Serialize;
use terror_insights_analytics::FilterOutcome;
use terror_insights_dataset::Dataset;
use terror_insights_dataset::options::day_options;
use terror_insights_incident_models::Incident;

/// Every dropdown's options given the current upstream selections.
#[derive(Debug, Serialize)]
pub struct OptionsReport {
    pub regions: Vec<String>,
    pub attack_types: Vec<String>,
    pub years: Vec<i32>,
    pub countries: Vec<String>,
    pub subregions: Vec<String>,
    pub localities: Vec<String>,
    pub days: Vec<u8>,
}

impl OptionsReport {
    /// Resolves each cascading level from the selection one level above it.
    pub fn build(
        dataset: &Dataset,
        regions: &[String],
        countries: &[String],
        subregions: &[String],
        months: &[u8],
    ) -> Self {
        Self {
            regions: dataset.regions().to_vec(),
            attack_types: dataset.attack_types().to_vec(),
            years: dataset.years().to_vec(),
            countries: dataset.countries_for(regions),
            subregions: dataset.subregions_for(countries),
            localities: dataset.localities_for(subregions),
            days: day_options(months),
        }
    }
}

/// Output of the `filter` subcommand. Serializes as a bare number or a
/// bare array, so an empty match still prints `[]`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FilterReport<'a> {
    Count(usize),
    Matches(Vec<&'a Incident>),
}

impl<'a> FilterReport<'a> {
    pub fn build(outcome: FilterOutcome<'a>, count: bool) -> Self {
        let matches = outcome.into_matches();
        if count {
            Self::Count(matches.len())
        } else {
            Self::Matches(matches)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use terror_insights_analytics_models::FilterCriteria;

    use super::*;

    fn incident(year: i32, region: &str, country: &str, subregion: &str, city: &str) -> Incident {
        Incident {
            year,
            month: Some(1),
            day: Some(1),
            region: region.to_string(),
            country: country.to_string(),
            subregion: subregion.to_string(),
            locality: city.to_string(),
            attack_type: "Facility/Infrastructure Attack".to_string(),
            target_nationality: country.to_string(),
            target_type: "Business".to_string(),
            weapon_type: "Incendiary".to_string(),
            organization: "Unknown".to_string(),
            fatalities: Some(0),
            latitude: None,
            longitude: None,
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_incidents(vec![
            incident(2001, "South Asia", "India", "Assam", "Guwahati"),
            incident(2002, "South Asia", "Nepal", "Bagmati", "Kathmandu"),
            incident(2003, "Western Europe", "Ireland", "Dublin", "Dublin"),
        ])
    }

    #[test]
    fn cascades_each_level_from_its_parent_selection() {
        let ds = dataset();
        let report = OptionsReport::build(
            &ds,
            &["South Asia".to_string()],
            &["Nepal".to_string()],
            &["Dublin".to_string(), "Atlantis".to_string()],
            &[4],
        );
        assert_eq!(report.regions, ["South Asia", "Western Europe"]);
        assert_eq!(report.countries, ["India", "Nepal"]);
        assert_eq!(report.subregions, ["Bagmati"]);
        assert_eq!(report.localities, ["Dublin"]);
        assert_eq!(report.days.len(), 31);
    }

    #[test]
    fn empty_selection_leaves_dependent_levels_empty() {
        let report = OptionsReport::build(&dataset(), &[], &[], &[], &[]);
        assert_eq!(report.years, [2001, 2002, 2003]);
        assert!(report.countries.is_empty());
        assert!(report.subregions.is_empty());
        assert!(report.localities.is_empty());
        assert!(report.days.is_empty());
    }

    #[test]
    fn no_matches_still_prints_json() {
        let ds = dataset();
        let criteria = FilterCriteria {
            country: vec!["Atlantis".to_string()],
            ..FilterCriteria::default()
        };

        let outcome = FilterOutcome::of(&ds, &criteria);
        assert_eq!(outcome, FilterOutcome::NoData);
        let report = FilterReport::build(outcome.clone(), false);
        assert_eq!(serde_json::to_value(&report).unwrap(), json!([]));
        let report = FilterReport::build(outcome, true);
        assert_eq!(serde_json::to_value(&report).unwrap(), json!(0));
    }

    #[test]
    fn matches_print_as_incident_array() {
        let ds = dataset();
        let criteria = FilterCriteria {
            region: vec!["South Asia".to_string()],
            ..FilterCriteria::default()
        };

        let report = FilterReport::build(FilterOutcome::of(&ds, &criteria), false);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["country"], "Nepal");

        let report = FilterReport::build(FilterOutcome::of(&ds, &criteria), true);
        assert_eq!(serde_json::to_value(&report).unwrap(), json!(2));
    }
}
