use serde_json::Value;
use tracing::{debug, warn};

use crate::adapters::teos10::{sp_from_c, sr_from_sp};
use crate::error::SalinityError;
use crate::models::{Measurement, MeasurementSet, SalinityResult, SalinitySummary};

/// Atmospheric reference subtracted from the raw pressure reading.
pub const ATMOSPHERIC_REFERENCE: f64 = 1013.0;
/// Divisor turning the referenced reading into the dbar-like value PSS-78 expects.
pub const PRESSURE_DIVISOR: f64 = 100.0;

/// Converts an absolute, hPa-like pressure reading into the sea pressure fed
/// to PSS-78: `(pressure - 1013) / 100`.
pub fn adjust_pressure(pressure: f64) -> f64 {
    (pressure - ATMOSPHERIC_REFERENCE) / PRESSURE_DIVISOR
}

/// Practical salinity of a single measurement.
///
/// `index` is only used to label errors.
pub fn salinity_of(index: usize, m: &Measurement) -> Result<f64, SalinityError> {
    let p = adjust_pressure(m.pressure);
    let sp = sp_from_c(m.conductivity, m.temperature, p).map_err(|reason| {
        SalinityError::ComputationError {
            index,
            reason: reason.into(),
        }
    })?;

    if !sp.is_finite() {
        return Err(SalinityError::ComputationError {
            index,
            reason: format!("non-finite salinity {sp}"),
        });
    }
    Ok(sp)
}

/// Maps every measurement through the pressure adjustment and PSS-78.
///
/// The result has the same length and order as `set`. The first failing
/// measurement aborts the whole calculation; no partial result is returned.
pub fn calculate_salinity(set: &MeasurementSet) -> Result<SalinityResult, SalinityError> {
    let out = set
        .iter()
        .enumerate()
        .map(|(i, m)| salinity_of(i, m))
        .collect::<Result<SalinityResult, _>>()
        .inspect_err(|e| warn!(error = %e, "salinity calculation failed"))?;

    debug!(count = out.len(), "computed practical salinity");
    Ok(out)
}

/// Parses a `{"measurements": [...]}` document and computes its salinities.
pub fn calculate_from_document(doc: &Value) -> Result<SalinityResult, SalinityError> {
    let set = MeasurementSet::from_document(doc)?;
    calculate_salinity(&set)
}

/// Like [`calculate_salinity`] but also reports Reference Salinity and the
/// adjusted pressure for each measurement.
pub fn summarize(set: &MeasurementSet) -> Result<Vec<SalinitySummary>, SalinityError> {
    let sps = calculate_salinity(set)?;
    Ok(set
        .iter()
        .zip(sps)
        .map(|(m, sp)| SalinitySummary {
            sp,
            sr: sr_from_sp(sp),
            pressure_dbar: adjust_pressure(m.pressure),
        })
        .collect())
}
