#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filter criteria and aggregation result types.
//!
//! Defines the inputs and outputs of the filter and aggregation engines.
//! The field names double as the JSON contract used by the dashboard, so
//! the original `state`/`city` keys are accepted as aliases.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use terror_insights_incident_models::{ChartDimension, NO_DATA_LABEL};

/// Constraints selecting a subset of incidents.
///
/// An empty list or absent bound imposes no restriction. Constraints on
/// different fields are combined with AND; values within one list are
/// combined with OR.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Regions to include.
    pub region: Vec<String>,
    /// Countries to include.
    pub country: Vec<String>,
    /// Provinces/states to include.
    #[serde(alias = "state")]
    pub subregion: Vec<String>,
    /// Cities to include.
    #[serde(alias = "city")]
    pub locality: Vec<String>,
    /// Attack types to include.
    pub attack_type: Vec<String>,
    /// First year to include. Defaults to the dataset's earliest year.
    pub year_start: Option<i32>,
    /// Last year to include. Defaults to the dataset's latest year.
    pub year_end: Option<i32>,
    /// Months (1-12) to include.
    pub month: Vec<u8>,
    /// Days of month (1-31) to include.
    pub day: Vec<u8>,
}

impl FilterCriteria {
    /// Criteria restricted to an inclusive year range.
    #[must_use]
    pub fn years(start: i32, end: i32) -> Self {
        Self {
            year_start: Some(start),
            year_end: Some(end),
            ..Self::default()
        }
    }

    /// Whether no constraint is set at all.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.region.is_empty()
            && self.country.is_empty()
            && self.subregion.is_empty()
            && self.locality.is_empty()
            && self.attack_type.is_empty()
            && self.year_start.is_none()
            && self.year_end.is_none()
            && self.month.is_empty()
            && self.day.is_empty()
    }
}

/// One aggregated chart row: the number of incidents for a dimension value
/// in a given year.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearCount {
    /// Year of the incidents.
    pub year: i32,
    /// Value of the grouping dimension.
    pub dimension_value: String,
    /// Number of incidents.
    pub count: u64,
}

impl YearCount {
    /// The sentinel row returned when an aggregation has nothing to plot.
    ///
    /// Downstream charts always receive at least one row, so an empty
    /// selection renders as a flat "No Data" series instead of failing.
    #[must_use]
    pub fn no_data() -> Self {
        Self {
            year: 0,
            dimension_value: NO_DATA_LABEL.to_string(),
            count: 0,
        }
    }

    /// Whether this row is the no-data sentinel.
    #[must_use]
    pub fn is_no_data(&self) -> bool {
        self.year == 0 && self.count == 0 && self.dimension_value == NO_DATA_LABEL
    }
}

/// Geographic preset applied to charts and maps.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ChartScope {
    /// Every incident in the dataset.
    #[default]
    World,
    /// Incidents in India only.
    India,
}

impl ChartScope {
    /// Applies this preset's region/country restriction to `criteria`.
    ///
    /// Presets replace any region and country selection already present.
    #[must_use]
    pub fn restrict(self, mut criteria: FilterCriteria) -> FilterCriteria {
        match self {
            Self::World => {}
            Self::India => {
                criteria.region = vec!["South Asia".to_string()];
                criteria.country = vec!["India".to_string()];
            }
        }
        criteria
    }
}

/// Parameters for a chart: a year window, a preset scope, the grouping
/// dimension and an optional search over dimension values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRequest {
    /// Dimension to group by.
    pub dimension: ChartDimension,
    /// Case-insensitive substring the dimension value must contain.
    #[serde(default)]
    pub search_text: Option<String>,
    /// First year to include.
    #[serde(default)]
    pub year_start: Option<i32>,
    /// Last year to include.
    #[serde(default)]
    pub year_end: Option<i32>,
    /// Geographic preset.
    #[serde(default)]
    pub scope: ChartScope,
}

impl ChartRequest {
    /// A world-scoped request over all years with no search.
    #[must_use]
    pub const fn new(dimension: ChartDimension) -> Self {
        Self {
            dimension,
            search_text: None,
            year_start: None,
            year_end: None,
            scope: ChartScope::World,
        }
    }

    /// Filter criteria selecting the incidents this chart counts.
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        self.scope.restrict(FilterCriteria {
            year_start: self.year_start,
            year_end: self.year_end,
            ..FilterCriteria::default()
        })
    }
}
