use serde::Serialize;
use serde_json::Value;

use crate::error::SalinityError;

/// One CTD sample as it arrives on the wire.
///
/// - `conductivity`: mS/cm
/// - `temperature`: in-situ temperature, °C (ITS-90)
/// - `pressure`: absolute reading in the input's native (hPa-like) units,
///   not yet referenced to the sea surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub conductivity: f64,
    pub temperature: f64,
    pub pressure: f64,
}

const FIELDS: [&str; 3] = ["conductivity", "temperature", "pressure"];

impl Measurement {
    pub fn new(conductivity: f64, temperature: f64, pressure: f64) -> Self {
        Self {
            conductivity,
            temperature,
            pressure,
        }
    }

    /// Builds a measurement from a `[cond, temp, press]` JSON array.
    ///
    /// `index` is the position in the surrounding document and only used for
    /// error messages.
    pub fn from_json(index: usize, value: &Value) -> Result<Self, SalinityError> {
        let items = value.as_array().ok_or_else(|| {
            SalinityError::malformed(format!(
                "measurement {index} must be an array of 3 values, got {value}"
            ))
        })?;
        if items.len() != FIELDS.len() {
            return Err(SalinityError::malformed(format!(
                "measurement {index} must have exactly 3 values, got {}",
                items.len()
            )));
        }

        let mut vals = [0.0; 3];
        for (slot, (field, item)) in vals.iter_mut().zip(FIELDS.into_iter().zip(items)) {
            *slot = coerce_f64(item).ok_or_else(|| SalinityError::ValueInvalid {
                index,
                field,
                value: item.to_string(),
            })?;
        }

        Ok(Self::new(vals[0], vals[1], vals[2]))
    }
}

/// Coerces a JSON scalar the way a lenient float conversion would: numbers,
/// numeric strings (surrounding whitespace and digit-group underscores
/// allowed) and booleans.
fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_numeric_str(s.trim()),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// `str::parse::<f64>` plus single underscores between digits (`"1_013.25"`).
fn parse_numeric_str(s: &str) -> Option<f64> {
    if !s.contains('_') {
        return s.parse().ok();
    }

    let bytes = s.as_bytes();
    let grouped = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if !grouped {
        return None;
    }
    s.replace('_', "").parse().ok()
}

/// Ordered measurements of one invocation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeasurementSet {
    pub measurements: Vec<Measurement>,
}

impl MeasurementSet {
    /// Reads `{"measurements": [[c, t, p], ...]}`. Other keys are ignored.
    pub fn from_document(doc: &Value) -> Result<Self, SalinityError> {
        let obj = doc
            .as_object()
            .ok_or_else(|| SalinityError::malformed("input document must be a JSON object"))?;
        let raw = obj
            .get("measurements")
            .ok_or_else(|| SalinityError::malformed("missing 'measurements' key"))?;
        let list = raw
            .as_array()
            .ok_or_else(|| SalinityError::malformed("'measurements' must be an array"))?;

        let measurements = list
            .iter()
            .enumerate()
            .map(|(i, v)| Measurement::from_json(i, v))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { measurements })
    }

    pub fn from_json_str(doc: &str) -> Result<Self, SalinityError> {
        let value: Value = serde_json::from_str(doc)
            .map_err(|e| SalinityError::malformed(format!("invalid JSON: {e}")))?;
        Self::from_document(&value)
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Measurement> {
        self.measurements.iter()
    }
}

impl From<Vec<Measurement>> for MeasurementSet {
    fn from(measurements: Vec<Measurement>) -> Self {
        Self { measurements }
    }
}

/// Practical salinity values, one per input measurement and in input order.
pub type SalinityResult = Vec<f64>;

/// Per-measurement record emitted by `--summary`.
///
/// - `sp`: practical salinity (PSU)
/// - `sr`: TEOS-10 Reference Salinity (g/kg)
/// - `pressure_dbar`: the adjusted pressure handed to PSS-78
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SalinitySummary {
    pub sp: f64,
    pub sr: f64,
    pub pressure_dbar: f64,
}
