pub mod analysis;
pub mod db;
pub mod routes;
mod startup;
pub mod templates;
mod utils;

pub use db::{
    ClimateAccess, ClimateData, ClimateReader, ClimateSession, Error, PrecipitationRow,
    TemperatureStats,
};
pub use routes::*;
pub use startup::*;
pub use utils::*;
