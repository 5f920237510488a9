// src/wire.rs

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair as it appears on the wire.
///
/// Either field may be absent in a decoded payload. The protocol reads an
/// unset numeric field as zero; use the `*_or_default` accessors to apply that.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct LatLng {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl LatLng {
    pub fn new(latitude: Option<f64>, longitude: Option<f64>) -> Self {
        LatLng {
            latitude,
            longitude,
        }
    }

    pub fn latitude_or_default(&self) -> f64 {
        self.latitude.unwrap_or_else(|| {
            log::trace!("Wire latitude absent, reading as 0");
            0.0
        })
    }

    pub fn longitude_or_default(&self) -> f64 {
        self.longitude.unwrap_or_else(|| {
            log::trace!("Wire longitude absent, reading as 0");
            0.0
        })
    }
}

/// The protocol's tagged geo-point value: `{"geoPointValue": {...}}`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct WireGeoPointValue {
    #[serde(rename = "geoPointValue")]
    pub geo_point_value: LatLng,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_fields_are_omitted_and_accepted() {
        let partial = LatLng::new(Some(10.0), None);
        assert_eq!(serde_json::to_value(partial).unwrap(), json!({ "latitude": 10.0 }));

        let decoded: LatLng = serde_json::from_value(json!({})).unwrap();
        assert_eq!(decoded, LatLng::default());
        assert_eq!(decoded.latitude_or_default(), 0.0);
        assert_eq!(decoded.longitude_or_default(), 0.0);
    }

    #[test]
    fn tagged_value_uses_protocol_field_name() {
        let decoded: WireGeoPointValue =
            serde_json::from_value(json!({ "geoPointValue": { "longitude": -3.5 } })).unwrap();
        assert_eq!(decoded.geo_point_value.latitude, None);
        assert_eq!(decoded.geo_point_value.longitude_or_default(), -3.5);
    }
}
