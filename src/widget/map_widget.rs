use crate::app_config::Maps;
use serde::Deserialize;
use url::Url;

pub const TEMPLATE_NAME: &str = "geofield/widgets/map_widget.html";

const MAPS_JAVASCRIPT_API: &str = "https://maps.googleapis.com/maps/api/js";
const ADMIN_STYLESHEET: &str = "geofield/css/google-maps-admin.css";
const ADMIN_SCRIPT: &str = "geofield/js/google-maps-admin.js";

/// How the page should load a widget script.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptLoading {
    Blocking,
    Async,
    #[default]
    Defer,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Script {
    src: String,
    loading: ScriptLoading,
}

impl Script {
    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn loading(&self) -> ScriptLoading {
        self.loading
    }
}

/// Assets the page must include for the widget to work.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Media {
    css: Vec<String>,
    js: Vec<Script>,
}

impl Media {
    pub fn css(&self) -> &[String] {
        &self.css
    }

    pub fn js(&self) -> &[Script] {
        &self.js
    }
}

/// Everything the address input template needs to place a map after the field.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MapWidgetContext {
    pub name: String,
    pub value: String,
    pub map_id: String,
    pub template_name: &'static str,
}

/// Text input that gets an interactive map placed right after it.
///
/// The widget only carries the raw value to the page. It never parses or validates it; that is
/// the job of the field the value belongs to.
#[derive(Clone, Debug)]
pub struct MapWidget {
    api_key: String,
    map_id: String,
    libraries: Vec<String>,
    script_loading: ScriptLoading,
}

impl MapWidget {
    pub fn new(maps: &Maps) -> Self {
        MapWidget {
            api_key: maps.api_key().to_string(),
            map_id: maps.map_id().to_string(),
            libraries: maps.libraries().to_vec(),
            script_loading: maps.script_loading(),
        }
    }

    pub fn with_script_loading(mut self, script_loading: ScriptLoading) -> Self {
        self.script_loading = script_loading;
        self
    }

    pub fn context(&self, name: &str, value: &str) -> MapWidgetContext {
        MapWidgetContext {
            name: name.to_string(),
            value: value.to_string(),
            map_id: self.map_id.clone(),
            template_name: TEMPLATE_NAME,
        }
    }

    pub fn media(&self) -> Result<Media, url::ParseError> {
        let mut api_url = Url::parse(MAPS_JAVASCRIPT_API)?;
        api_url
            .query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("libraries", &self.libraries.join(","));

        Ok(Media {
            css: vec![ADMIN_STYLESHEET.to_string()],
            js: vec![
                Script {
                    src: api_url.into(),
                    loading: self.script_loading,
                },
                Script {
                    src: ADMIN_SCRIPT.to_string(),
                    loading: self.script_loading,
                },
            ],
        })
    }
}
