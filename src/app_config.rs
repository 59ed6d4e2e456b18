use crate::widget::ScriptLoading;
use config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    maps: Maps,
    #[serde(default)]
    geo_location: GeoLocation,
}

impl AppConfig {
    /// Reads `geofield` and `geofield_local` config files when present, then `GEOFIELD_*` environment
    /// variables, e.g. `GEOFIELD_MAPS__API_KEY`.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("geofield").required(false))
            .add_source(config::File::with_name("geofield_local").required(false))
            .add_source(config::Environment::with_prefix("GEOFIELD").prefix_separator("_").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn maps(&self) -> &Maps {
        &self.maps
    }

    pub fn geo_location(&self) -> &GeoLocation {
        &self.geo_location
    }
}

#[derive(Debug, Deserialize)]
pub struct Maps {
    #[serde(default)]
    api_key: String,
    #[serde(default)]
    map_id: String,
    #[serde(default = "default_libraries")]
    libraries: Vec<String>,
    #[serde(default)]
    script_loading: ScriptLoading,
}

impl Maps {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn map_id(&self) -> &str {
        &self.map_id
    }

    pub fn libraries(&self) -> &[String] {
        &self.libraries
    }

    pub fn script_loading(&self) -> ScriptLoading {
        self.script_loading
    }
}

impl Default for Maps {
    fn default() -> Self {
        Maps {
            api_key: String::new(),
            map_id: String::new(),
            libraries: default_libraries(),
            script_loading: ScriptLoading::default(),
        }
    }
}

fn default_libraries() -> Vec<String> {
    ["maps", "marker", "places", "geocoding"].iter().map(|library| library.to_string()).collect()
}

#[derive(Debug, Deserialize)]
pub struct GeoLocation {
    #[serde(default = "default_blank")]
    blank: bool,
}

impl GeoLocation {
    pub fn blank(&self) -> bool {
        self.blank
    }
}

impl Default for GeoLocation {
    fn default() -> Self {
        GeoLocation { blank: default_blank() }
    }
}

fn default_blank() -> bool {
    true
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                maps: Maps {
                    api_key: "key".to_string(),
                    map_id: "map".to_string(),
                    libraries: default_libraries(),
                    script_loading: ScriptLoading::Defer,
                },
                geo_location: GeoLocation { blank: true },
            },
        }
    }

    pub fn api_key(mut self, api_key: &str) -> Self {
        self.config.maps.api_key = api_key.to_string();
        self
    }

    pub fn libraries(mut self, libraries: &[&str]) -> Self {
        self.config.maps.libraries = libraries.iter().map(|library| library.to_string()).collect();
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
