use crate::config::BoundarySource;
use geojson::{Feature, GeoJson, Geometry, Value};
use glam::DVec2;
use std::io::Read;
use tracing::{debug, info};

/// Ways retrieving the boundary dataset can fail
#[derive(thiserror::Error, Debug)]
pub enum BoundaryError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Transport>,
    },
    #[error("{url} answered HTTP {code}")]
    Status { url: String, code: u16 },
    #[error("failed to read response body")]
    Read(#[from] std::io::Error),
    #[error("response is not valid GeoJSON")]
    Parse(#[from] geojson::Error),
    #[error("expected a FeatureCollection, got a {0}")]
    NotFeatureCollection(&'static str),
}

/// One county polygon from the boundary dataset
#[derive(Clone, Debug)]
pub struct BoundaryShape {
    /// Value of the name property, if the feature carries one
    pub name: Option<String>,
    pub feature: Feature,
}

/// Download and parse the boundary dataset. Any transport error or
/// non-success status fails the whole retrieval.
pub fn fetch_boundaries(source: &BoundarySource) -> Result<Vec<BoundaryShape>, BoundaryError> {
    info!(url = %source.url, "downloading boundary data");

    let agent = ureq::AgentBuilder::new().timeout(source.timeout).build();
    let response = agent.get(&source.url).call().map_err(|e| match e {
        ureq::Error::Status(code, _) => BoundaryError::Status {
            url: source.url.clone(),
            code,
        },
        ureq::Error::Transport(transport) => BoundaryError::Transport {
            url: source.url.clone(),
            source: Box::new(transport),
        },
    })?;

    // into_string() caps bodies at 10 MB, read the whole thing instead
    let mut body = String::new();
    response.into_reader().read_to_string(&mut body)?;
    debug!(bytes = body.len(), "boundary data received");

    parse_boundaries(&body, &source.name_property)
}

/// Parse a GeoJSON FeatureCollection into named shapes
pub fn parse_boundaries(body: &str, name_property: &str) -> Result<Vec<BoundaryShape>, BoundaryError> {
    let geojson: GeoJson = body.parse()?;

    let fc = match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        GeoJson::Feature(_) => return Err(BoundaryError::NotFeatureCollection("Feature")),
        GeoJson::Geometry(_) => return Err(BoundaryError::NotFeatureCollection("Geometry")),
    };

    let shapes: Vec<BoundaryShape> = fc
        .features
        .into_iter()
        .map(|feature| {
            let name = feature
                .property(name_property)
                .and_then(|v| v.as_str())
                .map(str::to_string);
            BoundaryShape { name, feature }
        })
        .collect();

    info!(count = shapes.len(), "parsed boundary shapes");
    Ok(shapes)
}

/// Every exterior-ring / line / point coordinate of a geometry as (lon, lat)
pub fn positions(geometry: &Geometry) -> Vec<DVec2> {
    let mut out = Vec::new();
    collect_positions(geometry, &mut out);
    out
}

fn collect_positions(geometry: &Geometry, out: &mut Vec<DVec2>) {
    let to_vec = |c: &Vec<f64>| (c.len() >= 2).then(|| DVec2::new(c[0], c[1]));

    match &geometry.value {
        Value::Point(coords) => out.extend(to_vec(coords)),
        Value::MultiPoint(points) | Value::LineString(points) => {
            out.extend(points.iter().filter_map(to_vec));
        }
        Value::MultiLineString(lines) => {
            for line in lines {
                out.extend(line.iter().filter_map(to_vec));
            }
        }
        Value::Polygon(rings) => {
            if let Some(exterior) = rings.first() {
                out.extend(exterior.iter().filter_map(to_vec));
            }
        }
        Value::MultiPolygon(polygons) => {
            for rings in polygons {
                if let Some(exterior) = rings.first() {
                    out.extend(exterior.iter().filter_map(to_vec));
                }
            }
        }
        Value::GeometryCollection(geometries) => {
            for g in geometries {
                collect_positions(g, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "COUNTYNAME": "台東縣" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[121.0, 22.5], [121.5, 22.5], [121.5, 23.0], [121.0, 22.5]]]
                }
            },
            {
                "type": "Feature",
                "properties": {},
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [[[[119.5, 23.5], [119.7, 23.5], [119.7, 23.7], [119.5, 23.5]]]]
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_names() {
        let shapes = parse_boundaries(SAMPLE, "COUNTYNAME").unwrap();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].name.as_deref(), Some("台東縣"));
        assert_eq!(shapes[1].name, None);
    }

    #[test]
    fn test_parse_other_property() {
        let shapes = parse_boundaries(SAMPLE, "name").unwrap();
        assert!(shapes.iter().all(|s| s.name.is_none()));
    }

    #[test]
    fn test_rejects_non_collection() {
        let point = r#"{"type": "Point", "coordinates": [121.0, 23.5]}"#;
        assert!(matches!(
            parse_boundaries(point, "COUNTYNAME"),
            Err(BoundaryError::NotFeatureCollection("Geometry"))
        ));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            parse_boundaries("<html>404</html>", "COUNTYNAME"),
            Err(BoundaryError::Parse(_))
        ));
    }

    #[test]
    fn test_positions() {
        let shapes = parse_boundaries(SAMPLE, "COUNTYNAME").unwrap();
        let polygon = positions(shapes[0].feature.geometry.as_ref().unwrap());
        assert_eq!(polygon.len(), 4);
        assert_eq!(polygon[1], DVec2::new(121.5, 22.5));

        let multi = positions(shapes[1].feature.geometry.as_ref().unwrap());
        assert_eq!(multi.len(), 4);
    }
}
