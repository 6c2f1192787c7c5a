use std::collections::BTreeMap;

use crate::db::{PrecipitationRow, TemperatureStats};

/// Precipitation keyed by date. Serializes with dates in ascending order.
pub type PrecipitationByDate = BTreeMap<String, Option<f64>>;

/// Dates are not unique across stations, a later row overwrites an earlier one.
pub fn precipitation_by_date(rows: Vec<PrecipitationRow>) -> PrecipitationByDate {
    rows.into_iter().map(|row| (row.date, row.prcp)).collect()
}

/// Range statistics are always served as a one element list.
pub fn stats_list(stats: TemperatureStats) -> Vec<TemperatureStats> {
    vec![stats]
}
