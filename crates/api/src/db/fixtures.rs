//! In-memory climate stores for unit tests.

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::time::Duration;

use super::ClimateAccess;

const SCHEMA: &str = "
    CREATE TABLE measurement (
        id INTEGER PRIMARY KEY,
        station TEXT,
        date TEXT,
        prcp FLOAT,
        tobs FLOAT
    );
    CREATE TABLE station (
        id INTEGER PRIMARY KEY,
        station TEXT,
        name TEXT,
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT
    );
";

const SAMPLE_DATA: &str = "
    INSERT INTO station (station, name) VALUES ('S1', 'Station one'), ('S2', 'Station two');
    INSERT INTO measurement (station, date, prcp, tobs) VALUES
        ('S1', '2020-01-01', 0.1, 70.0),
        ('S1', '2020-01-02', 0.0, 75.0),
        ('S2', '2020-01-01', 0.2, 65.0);
";

/// Window boundary for this dataset is 2016-08-23 (2017-08-23 minus 365 days).
/// Station A is the most active with four rows.
const YEAR_DATA: &str = "
    INSERT INTO station (station, name) VALUES ('A', 'Alpha'), ('B', 'Bravo');
    INSERT INTO measurement (station, date, prcp, tobs) VALUES
        ('A', '2015-06-01', 1.0, 72.0),
        ('A', '2016-08-22', 0.5, 80.0),
        ('A', '2016-08-23', 0.1, 81.0),
        ('B', '2016-08-23', NULL, 79.0),
        ('A', '2017-01-15', 0.0, 70.0),
        ('B', '2017-08-23', 0.3, 82.0);
";

/// A single-connection pool, so the in-memory database lives as long as the pool.
/// Tests that leak a session hit the short acquire timeout instead of hanging.
pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .acquire_timeout(Duration::from_secs(2))
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite pool")
}

async fn seeded(data: &str) -> ClimateAccess {
    let pool = memory_pool().await;
    sqlx::raw_sql(SCHEMA)
        .execute(&pool)
        .await
        .expect("fixture schema");
    if !data.is_empty() {
        sqlx::raw_sql(data)
            .execute(&pool)
            .await
            .expect("fixture data");
    }
    ClimateAccess::from_pool(pool)
}

pub async fn empty_access() -> ClimateAccess {
    seeded("").await
}

pub async fn sample_access() -> ClimateAccess {
    seeded(SAMPLE_DATA).await
}

pub async fn year_access() -> ClimateAccess {
    seeded(YEAR_DATA).await
}
