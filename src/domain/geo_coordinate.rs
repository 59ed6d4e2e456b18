use crate::domain::degrees::Axis::{Latitude, Longitude};
use crate::domain::degrees::{Axis, Degrees, IntoDegrees};
use ordered_float::OrderedFloat;
use std::fmt::{Display, Formatter, Write};
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use thiserror::Error;

/// A geographical point, specified by a latitude in [-90, 90] and a longitude in [-180, 180].
///
/// A coordinate is either present, with both components set, or absent, which is how blank
/// values of an optional field are represented. The canonical text form is `"<lat>,<lon>"`
/// for a present coordinate and the empty string for an absent one.
///
/// Equal coordinates can have different text forms: `"10.50,+20"` parsed from storage equals
/// `GeoCoordinate::new(10.5, 20)`, which displays as `"10.5,20"`. Compare values, not strings.
#[derive(Clone, Default, Debug)]
pub struct GeoCoordinate {
    point: Option<(Degrees, Degrees)>,
}

impl GeoCoordinate {
    pub fn absent() -> Self {
        GeoCoordinate { point: None }
    }

    /// Builds a coordinate from already split components, validating the latitude first.
    pub fn new<Lat, Lon>(latitude: Lat, longitude: Lon) -> Result<Self, GeoCoordinateError>
    where
        Lat: IntoDegrees,
        Lon: IntoDegrees,
    {
        let latitude = latitude.into_degrees(Latitude)?;
        let longitude = longitude.into_degrees(Longitude)?;
        Ok(GeoCoordinate {
            point: Some((latitude, longitude)),
        })
    }

    /// Parses a `"lat,lon"` string. The empty string yields the absent coordinate.
    pub fn parse(input: &str) -> Result<Self, GeoCoordinateError> {
        if input.is_empty() {
            return Ok(GeoCoordinate::absent());
        }

        let parts: Vec<&str> = input.split(',').collect();
        if parts.len() != 2 {
            return Err(GeoCoordinateError::Format {
                value: input.to_string(),
                type_name: "str",
            });
        }

        GeoCoordinate::new(parts[0], parts[1])
    }

    pub fn from_optional(input: Option<&str>) -> Result<Self, GeoCoordinateError> {
        match input {
            Some(input) => GeoCoordinate::parse(input),
            None => Ok(GeoCoordinate::absent()),
        }
    }

    pub fn is_absent(&self) -> bool {
        self.point.is_none()
    }

    pub fn is_present(&self) -> bool {
        self.point.is_some()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.point.as_ref().map(|(latitude, _)| latitude.value())
    }

    pub fn longitude(&self) -> Option<f64> {
        self.point.as_ref().map(|(_, longitude)| longitude.value())
    }

    /// Returns `(latitude, longitude)`, or `None` for the absent coordinate.
    pub fn as_pair(&self) -> Option<(f64, f64)> {
        self.point.as_ref().map(|(latitude, longitude)| (latitude.value(), longitude.value()))
    }

    /// Number of characters in the canonical string form.
    pub fn len(&self) -> usize {
        let mut counter = CharCounter(0);
        match write!(counter, "{}", self) {
            Ok(()) => counter.0,
            Err(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.is_absent()
    }
}

struct CharCounter(usize);

impl Write for CharCounter {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        self.0 += s.chars().count();
        Ok(())
    }
}

impl Display for GeoCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.point {
            Some((latitude, longitude)) => write!(f, "{},{}", latitude, longitude),
            None => Ok(()),
        }
    }
}

impl FromStr for GeoCoordinate {
    type Err = GeoCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeoCoordinate::parse(s)
    }
}

impl PartialEq for GeoCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.as_pair() == other.as_pair()
    }
}

// Components are never NaN, so exact float equality is reflexive.
impl Eq for GeoCoordinate {}

impl Hash for GeoCoordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_pair()
            .map(|(latitude, longitude)| (OrderedFloat(latitude), OrderedFloat(longitude)))
            .hash(state);
    }
}

impl From<GeoCoordinate> for Option<(f64, f64)> {
    fn from(coordinate: GeoCoordinate) -> Self {
        coordinate.as_pair()
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoCoordinateError {
    #[error("expected a \"lat,lon\" formatted string; received '{value}' (a {type_name})")]
    Format { value: String, type_name: &'static str },
    #[error("expected a float for the {axis}, received '{value}' (a {type_name})")]
    Type {
        axis: Axis,
        value: String,
        type_name: &'static str,
    },
    #[error("{axis} must be between -{bound} and {bound}; received {value}")]
    Range { axis: Axis, value: f64, bound: f64 },
}
