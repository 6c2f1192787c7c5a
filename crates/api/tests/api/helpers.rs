use async_trait::async_trait;
use axum::Router;
use climate_api::{app, AppState, ClimateAccess, ClimateData, ClimateReader, Error};
use mockall::mock;
use sqlx::sqlite::SqlitePoolOptions;
use std::{sync::Arc, time::Duration};

pub const REMOTE_URL: &str = "http://127.0.0.1:5000";

pub struct TestApp {
    pub app: Router,
}

pub async fn spawn_app(climate_db: Arc<dyn ClimateData>) -> TestApp {
    let app_state = AppState {
        remote_url: REMOTE_URL.to_string(),
        climate_db,
    };

    TestApp {
        app: app(app_state),
    }
}

mock! {
    pub ClimateStore {}
    #[async_trait]
    impl ClimateData for ClimateStore {
        async fn session(&self) -> Result<Box<dyn ClimateReader>, Error>;
    }
}

/// Stations S1/S2 as in the sample dataset, plus a year of data ending
/// 2017-08-23 where USC00519281 is the most active station.
const DATASET: &str = "
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
    INSERT INTO station (station, name, latitude, longitude, elevation) VALUES
        ('USC00519397', 'WAIKIKI 717.2, HI US', 21.2716, -157.8168, 3.0),
        ('USC00519281', 'WAIHEE 837.5, HI US', 21.45167, -157.84888999999998, 32.9),
        ('USC00513117', 'KANEOHE 838.1, HI US', 21.4234, -157.8015, 14.6);
    INSERT INTO measurement (station, date, prcp, tobs) VALUES
        ('USC00519397', '2010-01-01', 0.08, 65.0),
        ('USC00519281', '2010-01-01', 0.15, 70.0),
        ('USC00519281', '2016-08-22', 0.40, 78.0),
        ('USC00519281', '2016-08-23', 1.79, 77.0),
        ('USC00513117', '2016-08-23', 0.15, 76.0),
        ('USC00519281', '2017-02-14', NULL, 68.0),
        ('USC00519397', '2017-08-23', 0.00, 81.0),
        ('USC00519281', '2017-08-23', 0.45, 79.0);
";

pub async fn sample_climate_access() -> ClimateAccess {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .acquire_timeout(Duration::from_secs(2))
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite pool");

    sqlx::raw_sql(DATASET)
        .execute(&pool)
        .await
        .expect("seed climate dataset");

    ClimateAccess::from_pool(pool)
}
