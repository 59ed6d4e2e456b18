mod degrees;
mod geo_coordinate;

pub use degrees::{Axis, Degrees, IntoDegrees};
pub use geo_coordinate::{GeoCoordinate, GeoCoordinateError};
