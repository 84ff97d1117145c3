#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! In-memory terrorism incident dataset.
//!
//! The dataset is loaded once at startup from the GTD CSV export and is
//! read-only afterwards. Alongside the records it keeps the derived
//! structures the dashboard needs on every request: the cascading
//! region → country → subregion → locality lookup maps, the distinct years
//! that bound the year sliders, and the distinct attack types and regions
//! that populate the filter dropdowns.

pub mod load;
pub mod lookup;
pub mod options;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use terror_insights_incident_models::Incident;
use thiserror::Error;

pub use lookup::LookupMap;

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// The file could not be opened or read.
    #[error("Failed to read dataset {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid CSV or a row could not be decoded.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header row.
    #[error("Dataset is missing required column '{column}'")]
    MissingColumn {
        /// Name of the missing column.
        column: String,
    },

    /// The file has a header but no records.
    #[error("Dataset {} contains no records", path.display())]
    Empty {
        /// Path that was read.
        path: PathBuf,
    },
}

/// High-level description of a loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Number of incident records.
    pub incident_count: usize,
    /// Earliest year present.
    pub min_year: Option<i32>,
    /// Latest year present.
    pub max_year: Option<i32>,
    /// Number of distinct regions.
    pub region_count: usize,
    /// Number of distinct countries.
    pub country_count: usize,
    /// Number of distinct attack types.
    pub attack_type_count: usize,
}

/// Immutable incident table plus its derived lookup structures.
#[derive(Debug, Clone)]
pub struct Dataset {
    incidents: Vec<Incident>,
    countries_by_region: LookupMap,
    subregions_by_country: LookupMap,
    localities_by_subregion: LookupMap,
    years: Vec<i32>,
    attack_types: Vec<String>,
    regions: Vec<String>,
}

impl Dataset {
    /// Loads the dataset from a GTD CSV export.
    ///
    /// # Errors
    ///
    /// Returns [`DataLoadError`] if the file is missing, is not valid CSV,
    /// lacks a required column, or holds no records.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let start = Instant::now();

        log::info!("Loading dataset from {}...", path.display());
        let incidents = load::read_incidents(path)?;

        if incidents.is_empty() {
            return Err(DataLoadError::Empty {
                path: path.to_path_buf(),
            });
        }

        let dataset = Self::from_incidents(incidents);

        log::info!(
            "Loaded {} incidents ({} regions, years {:?}) in {:.2?}",
            dataset.len(),
            dataset.regions.len(),
            dataset.year_bounds(),
            start.elapsed(),
        );

        Ok(dataset)
    }

    /// Builds a dataset from records already in memory.
    ///
    /// An empty record set is accepted; its [`Self::year_bounds`] is `None`.
    #[must_use]
    pub fn from_incidents(incidents: Vec<Incident>) -> Self {
        let countries_by_region = LookupMap::from_pairs(
            incidents
                .iter()
                .map(|i| (i.region.as_str(), i.country.as_str())),
        );
        let subregions_by_country = LookupMap::from_pairs(
            incidents
                .iter()
                .map(|i| (i.country.as_str(), i.subregion.as_str())),
        );
        let localities_by_subregion = LookupMap::from_pairs(
            incidents
                .iter()
                .map(|i| (i.subregion.as_str(), i.locality.as_str())),
        );

        let years: BTreeSet<i32> = incidents.iter().map(|i| i.year).collect();
        let attack_types = distinct(incidents.iter().map(|i| i.attack_type.as_str()));
        let regions = distinct(incidents.iter().map(|i| i.region.as_str()));

        Self {
            incidents,
            countries_by_region,
            subregions_by_country,
            localities_by_subregion,
            years: years.into_iter().collect(),
            attack_types,
            regions,
        }
    }

    /// All incident records, in file order.
    #[must_use]
    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    /// Number of incident records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    /// Whether the dataset holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    /// Distinct years present, ascending.
    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Earliest and latest year present, used as default year bounds.
    #[must_use]
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        Some((*self.years.first()?, *self.years.last()?))
    }

    /// Distinct attack types, sorted.
    #[must_use]
    pub fn attack_types(&self) -> &[String] {
        &self.attack_types
    }

    /// Distinct regions, sorted.
    #[must_use]
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Region → countries lookup.
    #[must_use]
    pub const fn countries_by_region(&self) -> &LookupMap {
        &self.countries_by_region
    }

    /// Country → subregions lookup.
    #[must_use]
    pub const fn subregions_by_country(&self) -> &LookupMap {
        &self.subregions_by_country
    }

    /// Subregion → localities lookup.
    #[must_use]
    pub const fn localities_by_subregion(&self) -> &LookupMap {
        &self.localities_by_subregion
    }

    /// Country options for the selected regions.
    #[must_use]
    pub fn countries_for<S: AsRef<str>>(&self, regions: &[S]) -> Vec<String> {
        self.countries_by_region.resolve(regions)
    }

    /// Subregion options for the selected countries.
    #[must_use]
    pub fn subregions_for<S: AsRef<str>>(&self, countries: &[S]) -> Vec<String> {
        self.subregions_by_country.resolve(countries)
    }

    /// Locality options for the selected subregions.
    #[must_use]
    pub fn localities_for<S: AsRef<str>>(&self, subregions: &[S]) -> Vec<String> {
        self.localities_by_subregion.resolve(subregions)
    }

    /// Summarizes the dataset's size and coverage.
    #[must_use]
    pub fn summary(&self) -> DatasetSummary {
        let bounds = self.year_bounds();
        DatasetSummary {
            incident_count: self.len(),
            min_year: bounds.map(|(min, _)| min),
            max_year: bounds.map(|(_, max)| max),
            region_count: self.regions.len(),
            country_count: distinct(self.incidents.iter().map(|i| i.country.as_str())).len(),
            attack_type_count: self.attack_types.len(),
        }
    }
}

/// Sorted distinct non-blank values.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}
