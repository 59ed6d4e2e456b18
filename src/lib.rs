//! A validated latitude/longitude value type, the field adapter that stores it as text, and the
//! data side of a map widget that sits next to an address input.
//!
//! ```
//! use geofield::GeoCoordinate;
//!
//! let coordinate: GeoCoordinate = "40.7128,-74.0060".parse().unwrap();
//! assert_eq!(coordinate.as_pair(), Some((40.7128, -74.006)));
//! assert_eq!(coordinate.to_string(), "40.7128,-74.0060");
//! ```

pub mod app_config;
pub mod domain;
pub mod field;
mod geo_coordinate_serde;
pub mod widget;

pub use domain::{Axis, Degrees, GeoCoordinate, GeoCoordinateError, IntoDegrees};
pub use field::{AddressField, FieldError, GeoLocationField};
