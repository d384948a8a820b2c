use super::legend::{legend_html, TOGGLE_ID};
use super::popup::popup_html;
use super::style::RegionStyle;
use super::view::MapView;
use crate::config::TileLayer;
use crate::data::{positions, BoundaryShape};
use crate::geo::Bounds;
use crate::lang::{resolve, LanguageFilter};
use geojson::{Feature, FeatureCollection};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Feature property the page script reads the precomputed views from
const VIEWS_PROPERTY: &str = "views";

/// Style and popup of one region under one filter
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegionView {
    pub style: RegionStyle,
    pub popup: Option<String>,
}

/// One boundary shape with its classification under every filter
#[derive(Clone, Debug)]
pub struct Region {
    /// Name as it appears in the boundary data
    pub name: Option<String>,
    /// Canonical table entry the name resolved to
    pub matched: Option<&'static str>,
    views: BTreeMap<&'static str, RegionView>,
    feature: Feature,
}

impl Region {
    fn classify(shape: BoundaryShape) -> Self {
        let resolution = resolve(shape.name.as_deref());

        let views = LanguageFilter::ALL
            .into_iter()
            .map(|filter| {
                let view = match &resolution {
                    Some(r) => RegionView {
                        style: RegionStyle::for_shares(r.mix.shares(), filter),
                        popup: Some(popup_html(r.name, r.mix.shares(), filter)),
                    },
                    None => RegionView {
                        style: RegionStyle::no_data(),
                        popup: None,
                    },
                };
                (filter.key(), view)
            })
            .collect();

        Self {
            name: shape.name,
            matched: resolution.map(|r| r.name),
            views,
            feature: shape.feature,
        }
    }

    #[cfg(test)]
    pub fn view(&self, filter: LanguageFilter) -> Option<&RegionView> {
        self.views.get(filter.key())
    }

    /// The boundary feature with the views attached as a property
    fn to_feature(&self) -> serde_json::Result<Feature> {
        let mut feature = self.feature.clone();
        feature.set_property(VIEWS_PROPERTY, serde_json::to_value(&self.views)?);
        Ok(feature)
    }
}

#[derive(Serialize)]
struct TileSettings<'a> {
    url: &'a str,
    attribution: &'a str,
}

#[derive(Serialize)]
struct FilterKeys {
    off: &'static str,
    on: &'static str,
}

/// Values the page script needs, embedded as a JSON literal
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageSettings<'a> {
    center: [f64; 2],
    zoom: f64,
    tiles: TileSettings<'a>,
    highlight: RegionStyle,
    filters: FilterKeys,
    toggle_id: &'static str,
}

/// Applies a filter's precomputed style and popup to every region.
/// Holds no classification logic of its own.
const PAGE_SCRIPT: &str = r#"
const map = L.map('map', { zoomSnap: 0.5 }).setView(SETTINGS.center, SETTINGS.zoom);
L.tileLayer(SETTINGS.tiles.url, {
  attribution: SETTINGS.tiles.attribution,
  subdomains: 'abcd',
  maxZoom: 20,
}).addTo(map);

let current = SETTINGS.filters.off;
const viewOf = (feature) => feature.properties.views[current];

const regions = L.geoJSON(REGIONS, {
  style: (feature) => viewOf(feature).style,
  onEachFeature: (feature, layer) => {
    const popup = viewOf(feature).popup;
    if (popup) {
      layer.bindPopup(popup, { maxWidth: 300 });
    }
    layer.on('mouseover', () => layer.setStyle(SETTINGS.highlight));
    layer.on('mouseout', () => regions.resetStyle(layer));
  },
}).addTo(map);

document.getElementById(SETTINGS.toggleId).addEventListener('change', (event) => {
  current = event.target.checked ? SETTINGS.filters.on : SETTINGS.filters.off;
  regions.eachLayer((layer) => {
    regions.resetStyle(layer);
    const popup = viewOf(layer.feature).popup;
    if (popup && layer.getPopup()) {
      layer.setPopupContent(popup);
    }
  });
});
"#;

const PAGE_STYLE: &str = r#"
html, body, #map { height: 100%; width: 100%; margin: 0; padding: 0; }
.legend {
  position: fixed; bottom: 50px; right: 50px; z-index: 9999;
  border: 2px solid grey; background-color: white; opacity: 0.9;
  font-size: 14px; padding: 10px;
}
.swatch {
  display: inline-block; width: 20px; height: 20px;
  border: 1px solid black; vertical-align: middle;
}
"#;

/// Serialize for inline `<script>` use; `</` would end the element early
fn script_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Every boundary shape classified, ready to be written out as one page
pub struct LanguageMap {
    pub regions: Vec<Region>,
    pub view: MapView,
    tiles: TileLayer,
}

impl LanguageMap {
    /// Classify every shape. Shapes without a table entry become no-data
    /// regions rather than failing the run.
    pub fn assemble(shapes: Vec<BoundaryShape>, tiles: &TileLayer, fallback_view: &MapView) -> Self {
        let bounds = Bounds::enclosing(
            shapes
                .iter()
                .filter_map(|shape| shape.feature.geometry.as_ref())
                .flat_map(positions),
        );
        let view = MapView::fitting(bounds, fallback_view);

        let regions: Vec<Region> = shapes
            .into_iter()
            .map(|shape| {
                let region = Region::classify(shape);
                if region.matched.is_none() {
                    warn!(name = ?region.name, "no language data for region");
                }
                region
            })
            .collect();

        let matched = regions.iter().filter(|r| r.matched.is_some()).count();
        info!(
            matched,
            unmatched = regions.len() - matched,
            "assembled language map"
        );

        Self {
            regions,
            view,
            tiles: tiles.clone(),
        }
    }

    /// Full HTML page: Leaflet map, legend and the embedded regions
    pub fn render(&self) -> serde_json::Result<String> {
        let features = self
            .regions
            .iter()
            .map(Region::to_feature)
            .collect::<serde_json::Result<Vec<Feature>>>()?;
        let collection = FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        };

        let settings = PageSettings {
            center: self.view.center(),
            zoom: self.view.zoom,
            tiles: TileSettings {
                url: &self.tiles.url,
                attribution: &self.tiles.attribution,
            },
            highlight: RegionStyle::highlight(),
            filters: FilterKeys {
                off: LanguageFilter::All.key(),
                on: LanguageFilter::ExcludeMandarin.key(),
            },
            toggle_id: TOGGLE_ID,
        };

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="zh-Hant">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>台灣語言分布地圖</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <style>{style}</style>
</head>
<body>
    <div id="map"></div>
    {legend}
    <script>
const SETTINGS = {settings};
const REGIONS = {regions};
{script}
    </script>
</body>
</html>
"#,
            style = PAGE_STYLE,
            legend = legend_html(),
            settings = script_json(&settings)?,
            regions = script_json(&collection)?,
            script = PAGE_SCRIPT,
        ))
    }
}
