//! The four climate summaries served by the API.
//!
//! Each summary opens one session, runs its queries on it and drops it before
//! shaping the rows, so the connection goes back to the pool on every path.

use log::debug;

use super::{
    one_year_before, parse_date, precipitation_by_date, stats_list, PrecipitationByDate,
};
use crate::db::{ClimateData, Error, TemperatureStats};

/// Precipitation for the trailing year ending at the most recent measurement.
pub async fn precipitation(db: &dyn ClimateData) -> Result<PrecipitationByDate, Error> {
    let mut session = db.session().await?;
    let floor = one_year_before(&session.max_date().await?)?;
    let rows = session.rows_since(&floor).await?;
    drop(session);

    debug!("precipitation since {}: {} rows", floor, rows.len());
    Ok(precipitation_by_date(rows))
}

pub async fn stations(db: &dyn ClimateData) -> Result<Vec<String>, Error> {
    let mut session = db.session().await?;
    let stations = session.all_station_ids().await?;
    Ok(stations)
}

/// Temperature observations of the most active station over the same trailing
/// year as [`precipitation`].
pub async fn most_active_tobs(db: &dyn ClimateData) -> Result<Vec<f64>, Error> {
    let mut session = db.session().await?;
    let floor = one_year_before(&session.max_date().await?)?;
    let station = session.most_active_station().await?;
    let tobs = session.temperature_observations_for(&station, &floor).await?;
    drop(session);

    debug!(
        "most active station {} has {} observations since {}",
        station,
        tobs.len(),
        floor
    );
    Ok(tobs)
}

/// Min/avg/max temperature for `start <= date [<= end]`.
///
/// Both bounds are validated before the store is touched. An empty range is
/// still a one element list, with null fields.
pub async fn temperature_stats_for_range(
    db: &dyn ClimateData,
    start: &str,
    end: Option<&str>,
) -> Result<Vec<TemperatureStats>, Error> {
    parse_date(start)?;
    if let Some(end) = end {
        parse_date(end)?;
    }

    let mut session = db.session().await?;
    let stats = session.temperature_stats(start, end).await?;
    drop(session);

    Ok(stats_list(stats))
}
