mod shaping;
mod summaries;
mod window;

pub use shaping::{precipitation_by_date, stats_list, PrecipitationByDate};
pub use summaries::{most_active_tobs, precipitation, stations, temperature_stats_for_range};
pub use window::{format_date, one_year_before, parse_date, WINDOW_DAYS};
