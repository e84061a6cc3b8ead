pub mod adapters;
pub mod error;
pub mod models;
pub mod salinity;

pub use crate::adapters::teos10::{sp_from_c, sr_from_sp};
pub use crate::error::{AppError, ExitCode, SalinityError};
pub use crate::models::{Measurement, MeasurementSet, SalinityResult, SalinitySummary};
pub use crate::salinity::calculator::{
    adjust_pressure, calculate_from_document, calculate_salinity, salinity_of, summarize,
};
