// src/types/geopoint.rs

use crate::error::{DocstoreError, ValidationError};
use crate::validation::{validate_number, validate_range, NumberRange};
use crate::wire::{LatLng, WireGeoPointValue};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// An immutable geographical point, stored as a document field value.
///
/// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`, both
/// inclusive. Values are checked once, on construction, and kept exactly as
/// given: nothing is rounded, clamped or wrapped.
///
/// ```rust
/// use docstore_rs::GeoPoint;
///
/// let point = GeoPoint::new(37.422, -122.084).unwrap();
/// assert_eq!(point.latitude(), 37.422);
/// assert!(GeoPoint::new(37.422, 190.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "GeoPointJson", into = "GeoPointJson")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Type tag carried by the versioned JSON representation.
    pub const JSON_TYPE: &'static str = "docstore/geoPoint/1.0";

    /// Creates a new `GeoPoint`.
    ///
    /// # Errors
    /// Returns `ValidationError::TypeValidation` if either coordinate is NaN or
    /// infinite, and `ValidationError::RangeValidation` if it is outside its
    /// bounds. Latitude is checked before longitude.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        let latitude = validate_range("latitude", latitude, NumberRange::LATITUDE)?;
        let longitude = validate_range("longitude", longitude, NumberRange::LONGITUDE)?;
        Ok(GeoPoint {
            latitude,
            longitude,
        })
    }

    /// The latitude of this point, in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// The longitude of this point, in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns true if both coordinates are exactly equal.
    pub fn is_equal(&self, other: &GeoPoint) -> bool {
        self.latitude == other.latitude && self.longitude == other.longitude
    }

    /// Orders points by latitude, then by longitude.
    pub fn compare_to(&self, other: &GeoPoint) -> Ordering {
        compare_coordinate(self.latitude, other.latitude)
            .then_with(|| compare_coordinate(self.longitude, other.longitude))
    }

    /// Encodes this point as the protocol's tagged geo-point value.
    pub fn to_wire_value(&self) -> WireGeoPointValue {
        WireGeoPointValue {
            geo_point_value: LatLng::new(Some(self.latitude), Some(self.longitude)),
        }
    }

    /// Decodes a wire latitude/longitude pair. Absent fields read as `0`.
    ///
    /// # Errors
    /// Fails with the constructor's error if the payload is out of range.
    pub fn from_wire_value(lat_lng: &LatLng) -> Result<Self, ValidationError> {
        GeoPoint::new(lat_lng.latitude_or_default(), lat_lng.longitude_or_default()).map_err(
            |err| {
                log::warn!("Received invalid geo point on the wire {:?}: {}", lat_lng, err);
                err
            },
        )
    }

    /// Returns the versioned JSON form of this point.
    pub fn to_json(&self) -> Value {
        json!({
            "latitude": self.latitude,
            "longitude": self.longitude,
            "type": Self::JSON_TYPE,
        })
    }

    /// Builds a `GeoPoint` from its versioned JSON form.
    pub fn from_json(json: &Value) -> Result<Self, DocstoreError> {
        let object = json.as_object().ok_or_else(|| {
            DocstoreError::InvalidJson(format!("expected a JSON object, got {}", json))
        })?;

        match object.get("type").and_then(Value::as_str) {
            Some(Self::JSON_TYPE) => {}
            other => {
                log::warn!("Refusing geo point JSON with type tag {:?}", other);
                return Err(DocstoreError::InvalidJson(format!(
                    "expected type \"{}\", got {:?}",
                    Self::JSON_TYPE,
                    other
                )));
            }
        }

        let latitude = validate_number(
            "latitude",
            required_field(object, "latitude")?,
            NumberRange::LATITUDE,
        )?;
        let longitude = validate_number(
            "longitude",
            required_field(object, "longitude")?,
            NumberRange::LONGITUDE,
        )?;
        Ok(GeoPoint {
            latitude,
            longitude,
        })
    }

    /// Parses versioned JSON text into a `GeoPoint`.
    pub fn from_json_str(s: &str) -> Result<Self, DocstoreError> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_json(&value)
    }
}

fn required_field<'a>(
    object: &'a Map<String, Value>,
    name: &str,
) -> Result<&'a Value, DocstoreError> {
    object
        .get(name)
        .ok_or_else(|| DocstoreError::InvalidJson(format!("missing field '{}'", name)))
}

// Coordinates are always finite, so partial_cmp never yields None.
fn compare_coordinate(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

// -0.0 == 0.0, so both must hash alike.
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Eq for GeoPoint {}

impl Hash for GeoPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.latitude).hash(state);
        canonical_bits(self.longitude).hash(state);
    }
}

impl PartialOrd for GeoPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GeoPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}

impl From<GeoPoint> for WireGeoPointValue {
    fn from(point: GeoPoint) -> Self {
        point.to_wire_value()
    }
}

impl TryFrom<LatLng> for GeoPoint {
    type Error = ValidationError;

    fn try_from(lat_lng: LatLng) -> Result<Self, Self::Error> {
        GeoPoint::from_wire_value(&lat_lng)
    }
}

impl TryFrom<WireGeoPointValue> for GeoPoint {
    type Error = ValidationError;

    fn try_from(value: WireGeoPointValue) -> Result<Self, Self::Error> {
        GeoPoint::from_wire_value(&value.geo_point_value)
    }
}

/// Serde shape of the versioned JSON form.
#[derive(Serialize, Deserialize)]
struct GeoPointJson {
    latitude: f64,
    longitude: f64,
    #[serde(rename = "type")]
    type_field: String,
}

impl From<GeoPoint> for GeoPointJson {
    fn from(point: GeoPoint) -> Self {
        GeoPointJson {
            latitude: point.latitude,
            longitude: point.longitude,
            type_field: GeoPoint::JSON_TYPE.to_string(),
        }
    }
}

impl TryFrom<GeoPointJson> for GeoPoint {
    type Error = DocstoreError;

    fn try_from(json: GeoPointJson) -> Result<Self, Self::Error> {
        if json.type_field != GeoPoint::JSON_TYPE {
            log::warn!("Refusing geo point JSON with type tag {:?}", json.type_field);
            return Err(DocstoreError::InvalidJson(format!(
                "expected type \"{}\", got \"{}\"",
                GeoPoint::JSON_TYPE,
                json.type_field
            )));
        }
        Ok(GeoPoint::new(json.latitude, json.longitude)?)
    }
}
