use crate::map::MapView;
use std::path::PathBuf;
use std::time::Duration;

/// Boundary dataset source
#[derive(Clone, Debug)]
pub struct BoundarySource {
    pub url: String,
    /// Feature property holding the county name
    pub name_property: String,
    pub timeout: Duration,
}

impl Default for BoundarySource {
    fn default() -> Self {
        Self {
            url: "https://raw.githubusercontent.com/g0v/twgeojson/master/json/twCounty2010.geo.json"
                .to_string(),
            name_property: "COUNTYNAME".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Base map tiles drawn under the regions
#[derive(Clone, Debug)]
pub struct TileLayer {
    pub url: String,
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> \
                contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>"
                .to_string(),
        }
    }
}

/// Run settings. There are no flags; everything comes from `Default`.
#[derive(Clone, Debug)]
pub struct Config {
    pub source: BoundarySource,
    pub tiles: TileLayer,
    /// Used when the boundary data has no coordinates to centre on
    pub fallback_view: MapView,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: BoundarySource::default(),
            tiles: TileLayer::default(),
            fallback_view: MapView::default(),
            output_path: PathBuf::from("taiwan_language_map.html"),
        }
    }
}
