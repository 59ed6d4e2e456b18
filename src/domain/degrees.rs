use crate::domain::GeoCoordinateError;
use crate::domain::degrees::Axis::*;
use std::any::type_name;
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Largest absolute value a component on this axis may take, inclusive.
    pub fn bound(&self) -> f64 {
        match self {
            Latitude => 90.0,
            Longitude => 180.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Latitude => "latitude",
            Longitude => "longitude",
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single validated coordinate component.
///
/// Components parsed from text remember the trimmed literal so that serializing them gives
/// back the digits that were stored, e.g. `-74.0060` instead of `-74.006`. The literal is
/// only used for display; comparisons look at the numeric value.
#[derive(Clone, Debug)]
pub struct Degrees {
    value: f64,
    literal: Option<String>,
}

impl Degrees {
    pub fn value(&self) -> f64 {
        self.value
    }

    fn parse(raw: &str, axis: Axis, type_name: &'static str) -> Result<Degrees, GeoCoordinateError> {
        let literal = raw.trim();
        let value: f64 = literal.parse().map_err(|_| GeoCoordinateError::Type {
            axis,
            value: raw.to_string(),
            type_name,
        })?;

        check_range(value, axis)?;
        Ok(Degrees {
            value,
            literal: Some(literal.to_string()),
        })
    }

    fn from_value(value: f64, axis: Axis) -> Result<Degrees, GeoCoordinateError> {
        check_range(value, axis)?;
        Ok(Degrees { value, literal: None })
    }
}

impl Display for Degrees {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.literal {
            Some(literal) => f.write_str(literal),
            None => f.write_str(&shortest_text(self.value)),
        }
    }
}

// Plain digits unless the exponent form is shorter, e.g. `1e-300`. Both forms parse back exactly.
fn shortest_text(value: f64) -> String {
    let plain = format!("{}", value);
    let exponent = format!("{:e}", value);
    if exponent.len() < plain.len() { exponent } else { plain }
}

// NaN fails the comparison and is reported as out of range.
fn check_range(value: f64, axis: Axis) -> Result<(), GeoCoordinateError> {
    if value.abs() <= axis.bound() {
        Ok(())
    } else {
        Err(GeoCoordinateError::Range {
            axis,
            value,
            bound: axis.bound(),
        })
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let name = type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

/// Input that can be validated into a [`Degrees`] component for a given axis.
pub trait IntoDegrees {
    fn into_degrees(self, axis: Axis) -> Result<Degrees, GeoCoordinateError>;
}

impl IntoDegrees for &str {
    fn into_degrees(self, axis: Axis) -> Result<Degrees, GeoCoordinateError> {
        Degrees::parse(self, axis, short_type_name::<str>())
    }
}

impl IntoDegrees for String {
    fn into_degrees(self, axis: Axis) -> Result<Degrees, GeoCoordinateError> {
        Degrees::parse(&self, axis, short_type_name::<String>())
    }
}

impl IntoDegrees for Degrees {
    fn into_degrees(self, axis: Axis) -> Result<Degrees, GeoCoordinateError> {
        check_range(self.value, axis)?;
        Ok(self)
    }
}

macro_rules! numeric_into_degrees {
    ($($numeric:ty),*) => {
        $(
            impl IntoDegrees for $numeric {
                fn into_degrees(self, axis: Axis) -> Result<Degrees, GeoCoordinateError> {
                    Degrees::from_value(f64::from(self), axis)
                }
            }
        )*
    };
}

numeric_into_degrees!(f64, f32, i32, u32);

impl IntoDegrees for i64 {
    fn into_degrees(self, axis: Axis) -> Result<Degrees, GeoCoordinateError> {
        // Values past 2^53 lose precision here but are still far outside both bounds.
        Degrees::from_value(self as f64, axis)
    }
}
