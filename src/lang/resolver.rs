use super::table::{lookup, LanguageMix};
use tracing::debug;

/// Administrative units renamed or merged since the boundary data was drawn
const RENAMED_UNITS: [(&str, &str); 2] = [("桃園縣", "桃園市"), ("臺北縣", "新北市")];

/// A boundary name matched to a table entry
#[derive(Debug)]
pub struct Resolution {
    /// Canonical name of the matched entry, used for display
    pub name: &'static str,
    pub mix: &'static LanguageMix,
}

/// Canonical spelling of a boundary name: 台 folded to 臺, renamed units
/// mapped to their current names. Empty or missing names yield `None`.
pub fn normalize(raw: Option<&str>) -> Option<String> {
    let raw = raw.filter(|name| !name.is_empty())?;
    let folded = raw.replace('台', "臺");

    let renamed = RENAMED_UNITS
        .iter()
        .find(|(old, _)| *old == folded)
        .map(|(_, current)| current.to_string());

    Some(renamed.unwrap_or(folded))
}

/// Names to probe for a boundary shape, most specific first.
///
/// County (縣) to city (市) substitution covers counties upgraded to
/// municipalities; it only runs when the suffix is present.
pub fn candidates(raw: &str, normalized: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(4);
    let probes = [
        normalized.to_string(),
        raw.to_string(),
        normalized.replace('縣', "市"),
        raw.replace('縣', "市"),
    ];

    for probe in probes {
        if !names.contains(&probe) {
            names.push(probe);
        }
    }
    names
}

/// Find the table entry for a raw boundary name
pub fn resolve(raw: Option<&str>) -> Option<Resolution> {
    let normalized = normalize(raw)?;
    // normalize() only succeeds for a present, non-empty name
    let raw = raw.unwrap_or_default();

    candidates(raw, &normalized).iter().find_map(|name| {
        lookup(name).map(|(name, mix)| {
            debug!(raw, matched = name, "resolved region");
            Resolution { name, mix }
        })
    })
}
