pub mod climate_data;
#[cfg(test)]
pub(crate) mod fixtures;

pub use climate_data::*;
