use async_trait::async_trait;
use log::{debug, info};
use scooby::postgres::{select, Aliasable, Parameters};
use serde::{Deserialize, Serialize};
use sqlx::{
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    FromRow, Sqlite,
};
use std::{path::Path, str::FromStr};
use utoipa::ToSchema;

/// Columns the service reads, per table. Anything else in the store is ignored.
const REQUIRED_COLUMNS: &[(&str, &[&str])] = &[
    ("measurement", &["station", "date", "prcp", "tobs"]),
    ("station", &["station"]),
];

/// Ties on observation count go to the lexicographically smallest station id.
const MOST_ACTIVE_STATION_SQL: &str = "SELECT station FROM measurement \
     GROUP BY station \
     ORDER BY COUNT(*) DESC, station ASC \
     LIMIT 1";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No measurements available in the climate store")]
    EmptyDataset,
    #[error("Failed to query climate store: {0}")]
    StoreUnavailable(#[from] sqlx::Error),
    #[error("Invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDateFormat {
        value: String,
        #[source]
        source: Option<time::error::Parse>,
    },
    #[error("Stored date '{value}' is not YYYY-MM-DD: {source}")]
    InvalidStoredDate {
        value: String,
        #[source]
        source: time::error::Parse,
    },
    #[error("Failed to format date: {0}")]
    DateFormat(#[from] time::error::Format),
    #[error("Climate store schema mismatch: {0}")]
    Schema(String),
}

/// One `(date, prcp)` measurement row.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PrecipitationRow {
    pub date: String,
    pub prcp: Option<f64>,
}

/// Min/avg/max temperature over a date range. Every field is `None` when no rows matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TemperatureStats {
    #[serde(rename = "TMIN")]
    #[sqlx(rename = "tmin")]
    pub min: Option<f64>,
    #[serde(rename = "TAVG")]
    #[sqlx(rename = "tavg")]
    pub avg: Option<f64>,
    #[serde(rename = "TMAX")]
    #[sqlx(rename = "tmax")]
    pub max: Option<f64>,
}

/// Opens request-scoped sessions against the climate store.
#[async_trait]
pub trait ClimateData: Send + Sync {
    async fn session(&self) -> Result<Box<dyn ClimateReader>, Error>;
}

/// Read operations available on an open session.
///
/// Dates are `YYYY-MM-DD` strings and all range filters are inclusive.
#[async_trait]
pub trait ClimateReader: Send {
    /// Most recent measurement date, `Error::EmptyDataset` when there are none.
    async fn max_date(&mut self) -> Result<String, Error>;
    /// Every `(date, prcp)` row with `date >= date_floor`, in store order.
    async fn rows_since(&mut self, date_floor: &str) -> Result<Vec<PrecipitationRow>, Error>;
    async fn all_station_ids(&mut self) -> Result<Vec<String>, Error>;
    /// Station with the most measurement rows.
    async fn most_active_station(&mut self) -> Result<String, Error>;
    async fn temperature_observations_for(
        &mut self,
        station_id: &str,
        date_floor: &str,
    ) -> Result<Vec<f64>, Error>;
    /// Never fails on an empty range, the fields come back as `None` instead.
    async fn temperature_stats(
        &mut self,
        date_floor: &str,
        date_ceiling: Option<&str>,
    ) -> Result<TemperatureStats, Error>;
}

pub struct ClimateAccess {
    pool: SqlitePool,
}

impl ClimateAccess {
    /// Opens a read-only pool over an existing SQLite file. The file is never created.
    pub async fn connect(path: &Path) -> Result<Self, Error> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        info!("Climate store opened at: {}", path.display());
        Ok(Self { pool })
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check that the tables and columns the queries rely on are present.
    pub async fn verify_schema(&self) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        for (table, columns) in REQUIRED_COLUMNS {
            let present: Vec<String> =
                sqlx::query_scalar("SELECT name FROM pragma_table_info($1)")
                    .bind(*table)
                    .fetch_all(&mut *conn)
                    .await?;

            if present.is_empty() {
                return Err(Error::Schema(format!("missing table '{}'", table)));
            }

            if let Some(column) = columns
                .iter()
                .find(|c| !present.iter().any(|p| p.as_str() == **c))
            {
                return Err(Error::Schema(format!(
                    "table '{}' has no column '{}'",
                    table, column
                )));
            }
        }

        debug!("climate store schema verified");
        Ok(())
    }
}

#[async_trait]
impl ClimateData for ClimateAccess {
    async fn session(&self) -> Result<Box<dyn ClimateReader>, Error> {
        let conn = self.pool.acquire().await?;
        Ok(Box::new(ClimateSession { conn }))
    }
}

/// A single pooled connection. Dropping it hands the connection back to the pool.
pub struct ClimateSession {
    conn: PoolConnection<Sqlite>,
}

#[async_trait]
impl ClimateReader for ClimateSession {
    async fn max_date(&mut self) -> Result<String, Error> {
        let query = select("MAX(date)").from("measurement").to_string();

        let max_date: Option<String> = sqlx::query_scalar(&query)
            .fetch_one(&mut *self.conn)
            .await?;

        max_date.ok_or(Error::EmptyDataset)
    }

    async fn rows_since(&mut self, date_floor: &str) -> Result<Vec<PrecipitationRow>, Error> {
        let mut placeholders = Parameters::new();
        let query = select(("date", "prcp"))
            .from("measurement")
            .where_(format!("date >= {}", placeholders.next()))
            .to_string();

        let rows = sqlx::query_as::<Sqlite, PrecipitationRow>(&query)
            .bind(date_floor)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(rows)
    }

    async fn all_station_ids(&mut self) -> Result<Vec<String>, Error> {
        let query = select("station").from("station").to_string();

        let stations: Vec<String> = sqlx::query_scalar(&query)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(stations)
    }

    async fn most_active_station(&mut self) -> Result<String, Error> {
        let station: Option<String> = sqlx::query_scalar(MOST_ACTIVE_STATION_SQL)
            .fetch_optional(&mut *self.conn)
            .await?;

        station.ok_or(Error::EmptyDataset)
    }

    async fn temperature_observations_for(
        &mut self,
        station_id: &str,
        date_floor: &str,
    ) -> Result<Vec<f64>, Error> {
        let mut placeholders = Parameters::new();
        let query = select("tobs")
            .from("measurement")
            .where_(format!("station = {}", placeholders.next()))
            .where_(format!("date >= {}", placeholders.next()))
            .to_string();

        let tobs: Vec<f64> = sqlx::query_scalar(&query)
            .bind(station_id)
            .bind(date_floor)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(tobs)
    }

    async fn temperature_stats(
        &mut self,
        date_floor: &str,
        date_ceiling: Option<&str>,
    ) -> Result<TemperatureStats, Error> {
        let mut placeholders = Parameters::new();
        let mut base_query = select((
            "MIN(tobs)".as_("tmin"),
            "AVG(tobs)".as_("tavg"),
            "MAX(tobs)".as_("tmax"),
        ))
        .from("measurement")
        .where_(format!("date >= {}", placeholders.next()));

        if date_ceiling.is_some() {
            base_query = base_query.where_(format!("date <= {}", placeholders.next()));
        }

        let query = base_query.to_string();
        let mut stats = sqlx::query_as::<Sqlite, TemperatureStats>(&query).bind(date_floor);
        if let Some(ceiling) = date_ceiling {
            stats = stats.bind(ceiling);
        }

        Ok(stats.fetch_one(&mut *self.conn).await?)
    }
}
