use crate::lang::{dominant, Language, LanguageFilter, Share};
use serde::Serialize;

/// Fill for regions without language data
pub const NO_DATA_COLOR: &str = "#cccccc";

const OUTLINE_COLOR: &str = "black";
const HIGHLIGHT_COLOR: &str = "#43484A";

/// Fill color for a region dominated by `language`
pub fn fill_color(language: Language) -> &'static str {
    match language {
        Language::Mandarin => "#FF6B6B",
        Language::Hokkien => "#4ECB71",
        Language::Hakka => "#6B8EFF",
        Language::Indigenous => "#FFD93D",
    }
}

/// Leaflet path options for one region
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionStyle {
    pub fill_color: &'static str,
    pub color: &'static str,
    pub weight: u32,
    pub fill_opacity: f64,
}

impl RegionStyle {
    pub fn classified(language: Language) -> Self {
        Self {
            fill_color: fill_color(language),
            color: OUTLINE_COLOR,
            weight: 1,
            fill_opacity: 0.7,
        }
    }

    /// Faded neutral fill so missing data stands apart from classified regions
    pub fn no_data() -> Self {
        Self {
            fill_color: NO_DATA_COLOR,
            color: OUTLINE_COLOR,
            weight: 1,
            fill_opacity: 0.3,
        }
    }

    /// Hover style
    pub fn highlight() -> Self {
        Self {
            fill_color: HIGHLIGHT_COLOR,
            color: OUTLINE_COLOR,
            weight: 2,
            fill_opacity: 0.7,
        }
    }

    /// Style from the dominant language under `filter`
    pub fn for_shares(shares: &[Share], filter: LanguageFilter) -> Self {
        dominant(shares, filter)
            .map(|best| Self::classified(best.language))
            .unwrap_or_else(Self::no_data)
    }
}
