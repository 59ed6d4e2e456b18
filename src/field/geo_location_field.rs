use crate::domain::{GeoCoordinate, GeoCoordinateError};
use crate::field::{FieldError, check_length};
use tracing::{debug, instrument, warn};

/// Column width reserved for a stored coordinate.
pub const MAX_LENGTH: usize = 100;

/// A text column holding a [`GeoCoordinate`] in its canonical `"<lat>,<lon>"` form.
///
/// Blank fields store the absent coordinate as an empty string.
#[derive(Clone, Debug)]
pub struct GeoLocationField {
    blank: bool,
    max_length: usize,
}

impl GeoLocationField {
    pub fn new(blank: bool) -> Self {
        GeoLocationField {
            blank,
            max_length: MAX_LENGTH,
        }
    }

    pub fn blank(&self) -> bool {
        self.blank
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn description(&self) -> &'static str {
        "A geographical point, specified by floating-point latitude and longitude coordinates."
    }

    /// Converts a value read from storage. `None` and the empty string are the absent coordinate.
    pub fn from_stored(&self, raw: Option<&str>) -> Result<GeoCoordinate, GeoCoordinateError> {
        GeoCoordinate::from_optional(raw)
    }

    /// Passes an already validated coordinate through without parsing it again.
    pub fn from_existing(&self, value: GeoCoordinate) -> GeoCoordinate {
        value
    }

    /// Prepares a value for storage.
    pub fn to_stored(&self, value: Option<&GeoCoordinate>) -> Option<String> {
        value.map(GeoCoordinate::to_string)
    }

    /// String form used when exporting a value, with `None` rendered as the empty string.
    pub fn value_to_string(&self, value: Option<&GeoCoordinate>) -> String {
        self.to_stored(value).unwrap_or_default()
    }

    /// Validates user input destined for this field.
    #[instrument(skip(self))]
    pub fn clean(&self, raw: &str) -> Result<GeoCoordinate, FieldError> {
        let result = check_length(raw, self.max_length)
            .and_then(|_| GeoCoordinate::parse(raw).map_err(FieldError::from))
            .and_then(|coordinate| {
                if coordinate.is_absent() && !self.blank {
                    Err(FieldError::Blank)
                } else {
                    Ok(coordinate)
                }
            });

        match &result {
            Ok(coordinate) => debug!(coordinate = %coordinate, "📍 Accepted geo location"),
            Err(err) => warn!("⚠️ Rejected geo location: {}", err),
        }
        result
    }
}

impl Default for GeoLocationField {
    fn default() -> Self {
        GeoLocationField::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Axis;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test_log::test]
    fn reserves_a_hundred_characters() {
        assert_eq!(GeoLocationField::default().max_length(), 100);
    }

    #[rstest]
    #[case::null(None, GeoCoordinate::absent())]
    #[case::empty(Some(""), GeoCoordinate::absent())]
    #[case::pair(Some("51.8615899,4.3580323"), GeoCoordinate::new(51.8615899, 4.3580323).unwrap())]
    fn reads_stored_values(#[case] raw: Option<&str>, #[case] expected: GeoCoordinate) {
        let field = GeoLocationField::new(false);
        assert_eq!(field.from_stored(raw).unwrap(), expected);
    }

    #[test_log::test]
    fn surfaces_errors_for_corrupt_stored_values() {
        let field = GeoLocationField::default();
        assert!(matches!(field.from_stored(Some("51.86")), Err(GeoCoordinateError::Format { .. })));
    }

    #[test_log::test]
    fn passes_existing_coordinates_through() {
        let field = GeoLocationField::default();
        let coordinate = GeoCoordinate::parse("40.7128,-74.0060").unwrap();

        let result = field.from_existing(coordinate.clone());

        assert_eq!(result, coordinate);
        assert_eq!(result.to_string(), "40.7128,-74.0060");
    }

    #[rstest]
    #[case::null(None, None)]
    #[case::absent(Some(GeoCoordinate::absent()), Some(String::new()))]
    #[case::present(Some(GeoCoordinate::new(1.5, -2.5).unwrap()), Some("1.5,-2.5".to_string()))]
    fn prepares_values_for_storage(#[case] value: Option<GeoCoordinate>, #[case] expected: Option<String>) {
        let field = GeoLocationField::default();
        assert_eq!(field.to_stored(value.as_ref()), expected);
    }

    #[rstest]
    #[case::null(None, "")]
    #[case::present(Some(GeoCoordinate::new(-90, 180).unwrap()), "-90,180")]
    fn exports_values_as_strings(#[case] value: Option<GeoCoordinate>, #[case] expected: &str) {
        let field = GeoLocationField::default();
        assert_eq!(field.value_to_string(value.as_ref()), expected);
    }

    #[test_log::test]
    fn round_trips_through_storage() {
        let field = GeoLocationField::default();
        let coordinate = field.from_stored(Some(" 40.7128 ,-74.0060")).unwrap();

        let stored = field.to_stored(Some(&coordinate));

        assert_eq!(stored.as_deref(), Some("40.7128,-74.0060"));
        assert_eq!(field.from_stored(stored.as_deref()).unwrap(), coordinate);
    }

    #[test_log::test]
    fn clean_accepts_a_valid_coordinate() {
        let field = GeoLocationField::new(false);
        assert_eq!(field.clean("10,20"), Ok(GeoCoordinate::new(10, 20).unwrap()));
    }

    #[test_log::test]
    fn clean_accepts_blank_input_for_a_blank_field() {
        let field = GeoLocationField::new(true);
        assert_eq!(field.clean(""), Ok(GeoCoordinate::absent()));
    }

    #[test_log::test]
    fn clean_rejects_blank_input_for_a_required_field() {
        let field = GeoLocationField::new(false);
        assert_eq!(field.clean(""), Err(FieldError::Blank));
    }

    #[test_log::test]
    fn clean_wraps_coordinate_errors() {
        let field = GeoLocationField::default();
        assert_eq!(
            field.clean("abc,20"),
            Err(FieldError::Invalid(GeoCoordinateError::Type {
                axis: Axis::Latitude,
                value: "abc".to_string(),
                type_name: "str",
            }))
        );
    }

    #[test_log::test]
    fn clean_rejects_input_longer_than_the_column() {
        let field = GeoLocationField::default();
        let raw = format!("1.{},2", "0".repeat(100));

        assert_eq!(
            field.clean(&raw),
            Err(FieldError::TooLong {
                max_length: 100,
                length: 104,
            })
        );
    }
}
