use crate::geo::Bounds;

/// Initial map position and zoom for the generated page
#[derive(Clone, Debug, PartialEq)]
pub struct MapView {
    /// Center latitude (-90 to 90)
    pub center_lat: f64,
    /// Center longitude (-180 to 180)
    pub center_lon: f64,
    /// Leaflet zoom level, half steps allowed
    pub zoom: f64,
}

impl Default for MapView {
    /// Whole of Taiwan including the outlying islands
    fn default() -> Self {
        Self::new(23.5, 121.0, 7.5)
    }
}

impl MapView {
    pub fn new(center_lat: f64, center_lon: f64, zoom: f64) -> Self {
        Self {
            center_lat,
            center_lon,
            zoom,
        }
    }

    /// Centre on the given bounds, keeping the fallback's zoom.
    /// Without bounds the fallback is used as is.
    pub fn fitting(bounds: Option<Bounds>, fallback: &MapView) -> Self {
        match bounds {
            Some(b) => {
                let center = b.center();
                Self::new(center.y.clamp(-85.0, 85.0), center.x, fallback.zoom)
            }
            None => fallback.clone(),
        }
    }

    /// `[lat, lon]` as Leaflet expects it
    pub fn center(&self) -> [f64; 2] {
        [self.center_lat, self.center_lon]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_fitting_centers_on_bounds() {
        let bounds = Bounds {
            min: DVec2::new(119.0, 21.5),
            max: DVec2::new(123.0, 26.5),
        };
        let view = MapView::fitting(Some(bounds), &MapView::default());
        assert_eq!(view.center(), [24.0, 121.0]);
        assert_eq!(view.zoom, 7.5);
    }

    #[test]
    fn test_fitting_without_bounds() {
        let fallback = MapView::new(10.0, 20.0, 3.0);
        assert_eq!(MapView::fitting(None, &fallback), fallback);
    }
}
