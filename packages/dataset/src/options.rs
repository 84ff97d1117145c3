//! Static dropdown option lists that do not depend on the loaded data.

use terror_insights_incident_models::Month;

/// Highest selectable day of month.
pub const MAX_DAY: u8 = 31;

/// Returns the day options for the given month selection.
///
/// Days only become selectable once at least one month is picked; values
/// outside 1-12 are ignored.
#[must_use]
pub fn day_options(selected_months: &[u8]) -> Vec<u8> {
    if selected_months
        .iter()
        .any(|m| Month::from_number(*m).is_some())
    {
        (1..=MAX_DAY).collect()
    } else {
        Vec::new()
    }
}
