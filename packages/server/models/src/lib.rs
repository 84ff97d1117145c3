#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the terror insights server.
//!
//! Field names are snake_case to match the payloads the dashboard already
//! sends to `/api/filter-data`. Incident rows and aggregation rows are
//! returned using the engine types directly.

use serde::{Deserialize, Serialize};
use terror_insights_incident_models::{ChartDimension, Incident, Month};

pub use terror_insights_analytics_models::{ChartRequest, ChartScope, FilterCriteria, YearCount};

/// Body of `POST /api/filter-data`.
pub type FilterRequest = FilterCriteria;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Server version.
    pub version: String,
}

/// Error body returned for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable description of what went wrong.
    pub error: String,
}

/// A dropdown option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiOption<T> {
    /// Text shown to the user.
    pub label: String,
    /// Value submitted when selected.
    pub value: T,
}

impl From<Month> for ApiOption<u8> {
    fn from(month: Month) -> Self {
        Self {
            label: month.to_string(),
            value: month.number(),
        }
    }
}

impl From<ChartDimension> for ApiOption<ChartDimension> {
    fn from(dimension: ChartDimension) -> Self {
        Self {
            label: dimension.label().to_string(),
            value: dimension,
        }
    }
}

/// Static and dataset-derived options for the top-level dropdowns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiOptions {
    /// Regions present in the dataset.
    pub regions: Vec<String>,
    /// Attack types present in the dataset.
    pub attack_types: Vec<String>,
    /// Years present in the dataset, ascending.
    pub years: Vec<i32>,
    /// Month options.
    pub months: Vec<ApiOption<u8>>,
    /// Chart grouping options.
    pub dimensions: Vec<ApiOption<ChartDimension>>,
}

/// Upper-level values selected in a cascading dropdown.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionRequest {
    /// Selected values.
    pub selected: Vec<String>,
}

/// Months selected in the month dropdown.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthSelectionRequest {
    /// Selected month numbers.
    pub selected: Vec<u8>,
}

/// Body of `POST /api/aggregate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateRequest {
    /// Already-filtered incidents to aggregate.
    #[serde(default)]
    pub records: Vec<Incident>,
    /// Dimension to group by.
    pub dimension: ChartDimension,
    /// Case-insensitive substring the dimension value must contain.
    #[serde(default)]
    pub search_text: Option<String>,
}
