//! Chart pipeline: year window and scope, then aggregation.

use terror_insights_analytics_models::{ChartRequest, YearCount};
use terror_insights_dataset::Dataset;

use crate::{aggregate, filter};

/// Builds the per-year series for a chart request.
#[must_use]
pub fn chart(dataset: &Dataset, request: &ChartRequest) -> Vec<YearCount> {
    let records = filter(dataset, &request.criteria());

    log::debug!(
        "Charting {} incidents by {} (scope={})",
        records.len(),
        request.dimension,
        request.scope
    );

    aggregate(
        records,
        request.dimension,
        request.search_text.as_deref(),
    )
}
