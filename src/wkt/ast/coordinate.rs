//! Coordinates: longitude, latitude and an optional altitude

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// A longitude/latitude pair with an optional altitude.
///
/// NaN is a legal component. Equality is structural and treats two NaN components as
/// equal, so a tree compares equal to the tree parsed from its own serialization.
#[derive(Debug, Clone, Copy)]
pub struct Coordinate {
    lon: f64,
    lat: f64,
    alt: Option<f64>,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            lon,
            lat,
            alt: None,
        }
    }

    pub fn with_alt(lon: f64, lat: f64, alt: f64) -> Self {
        Self {
            lon,
            lat,
            alt: Some(alt),
        }
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn alt(&self) -> Option<f64> {
        self.alt
    }
}

fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        let alt_eq = match (self.alt, other.alt) {
            (Some(a), Some(b)) => same_value(a, b),
            (None, None) => true,
            _ => false,
        };
        same_value(self.lon, other.lon) && same_value(self.lat, other.lat) && alt_eq
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.alt.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.lon)?;
        seq.serialize_element(&self.lat)?;
        if let Some(alt) = self.alt {
            seq.serialize_element(&alt)?;
        }
        seq.end()
    }
}
