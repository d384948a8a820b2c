use glam::DVec2;

/// Axis-aligned lon/lat bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    /// Smallest box holding every point, or `None` for no points
    pub fn enclosing(points: impl IntoIterator<Item = DVec2>) -> Option<Self> {
        points
            .into_iter()
            .filter(|p| p.is_finite())
            .fold(None, |bounds: Option<Bounds>, p| {
                Some(match bounds {
                    Some(b) => Bounds {
                        min: b.min.min(p),
                        max: b.max.max(p),
                    },
                    None => Bounds { min: p, max: p },
                })
            })
    }

    /// Centre as (lon, lat)
    #[inline(always)]
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enclosing_and_center() {
        let b = Bounds::enclosing([
            DVec2::new(119.0, 22.0),
            DVec2::new(122.0, 25.0),
            DVec2::new(120.5, 21.5),
        ])
        .unwrap();
        assert_eq!(b.min, DVec2::new(119.0, 21.5));
        assert_eq!(b.max, DVec2::new(122.0, 25.0));
        assert_eq!(b.center(), DVec2::new(120.5, 23.25));
    }

    #[test]
    fn test_enclosing_empty() {
        assert!(Bounds::enclosing(std::iter::empty()).is_none());
        assert!(Bounds::enclosing([DVec2::new(f64::NAN, 1.0)]).is_none());
    }
}
