use crate::domain::GeoCoordinate;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for GeoCoordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GeoCoordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawGeoCoordinate {
            Text(String),
            Pair { latitude: f64, longitude: f64 },
        }

        match Option::<RawGeoCoordinate>::deserialize(deserializer)? {
            None => Ok(GeoCoordinate::absent()),
            Some(RawGeoCoordinate::Text(text)) => GeoCoordinate::parse(&text).map_err(Error::custom),
            Some(RawGeoCoordinate::Pair { latitude, longitude }) => {
                GeoCoordinate::new(latitude, longitude).map_err(Error::custom)
            }
        }
    }
}
