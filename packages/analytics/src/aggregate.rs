//! Aggregation engine for the chart view.

use std::collections::BTreeMap;

use terror_insights_analytics_models::YearCount;
use terror_insights_incident_models::{ChartDimension, Incident};

/// Counts `records` per `(year, dimension value)`.
///
/// When `search_text` is non-empty, only groups whose dimension value
/// contains it (case-insensitively) are kept. The search runs over the
/// grouped rows, so every surviving count is the exact count for that
/// value. Blank dimension values form their own group.
///
/// Rows are ordered by year, then dimension value. If nothing remains the
/// result is the single [`YearCount::no_data`] sentinel row.
#[must_use]
pub fn aggregate<'a>(
    records: impl IntoIterator<Item = &'a Incident>,
    dimension: ChartDimension,
    search_text: Option<&str>,
) -> Vec<YearCount> {
    let mut groups: BTreeMap<(i32, &str), u64> = BTreeMap::new();
    for incident in records {
        *groups
            .entry((incident.year, dimension.value_of(incident)))
            .or_insert(0) += 1;
    }

    let needle = search_text
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let rows: Vec<YearCount> = groups
        .into_iter()
        .filter(|((_, value), _)| {
            needle
                .as_deref()
                .is_none_or(|needle| value.to_lowercase().contains(needle))
        })
        .map(|((year, value), count)| YearCount {
            year,
            dimension_value: value.to_owned(),
            count,
        })
        .collect();

    log::debug!(
        "Aggregated by {dimension} into {} rows (search={search_text:?})",
        rows.len()
    );

    if rows.is_empty() {
        vec![YearCount::no_data()]
    } else {
        rows
    }
}
