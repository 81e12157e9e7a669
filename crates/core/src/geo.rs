//! Geographic coordinate value object
//!
//! [`GeoLocation`] is passed as a request parameter for location-tagged
//! requests (check-ins, posts with a place) and appears in responses that
//! carry coordinates.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::json::JsonObject;

/// An immutable latitude/longitude pair
///
/// Equality and hashing compare the IEEE-754 bit patterns of both fields, so
/// `NaN` equals a `NaN` with identical bits and `0.0` differs from `-0.0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoLocation {
    latitude: f64,
    longitude: f64,
    #[serde(skip)]
    json: OnceLock<JsonObject>,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            json: OnceLock::new(),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// True when both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Request parameter form: `"<lat>,<lon>"`
    ///
    /// Uses the shortest decimal that round-trips each value, without
    /// exponent notation: `(1.0, 2.5)` becomes `"1,2.5"`.
    pub fn as_parameter_string(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }

    /// JSON form, built on first use and cached for the lifetime of the value
    ///
    /// JSON has no representation for `NaN` or infinities; non-finite
    /// coordinates become `null`. Check [`is_finite`](Self::is_finite) first
    /// when that matters.
    pub fn as_json_object(&self) -> &JsonObject {
        self.json.get_or_init(|| {
            let mut map = JsonObject::new();
            map.insert("latitude".to_string(), Value::from(self.latitude));
            map.insert("longitude".to_string(), Value::from(self.longitude));
            map
        })
    }

    pub fn as_json_string(&self) -> String {
        Value::Object(self.as_json_object().clone()).to_string()
    }
}

impl PartialEq for GeoLocation {
    fn eq(&self, other: &Self) -> bool {
        self.latitude.to_bits() == other.latitude.to_bits()
            && self.longitude.to_bits() == other.longitude.to_bits()
    }
}

impl Eq for GeoLocation {}

impl Hash for GeoLocation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GeoLocation{{latitude={}, longitude={}}}",
            self.latitude, self.longitude
        )
    }
}
