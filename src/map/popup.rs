use crate::lang::{LanguageFilter, Share};

const BAR_COLOR: &str = "#4188e0";
const TRACK_COLOR: &str = "#f0f0f0";

/// Shares kept by the filter, highest first. Equal percentages keep table order.
pub fn ranked(shares: &[Share], filter: LanguageFilter) -> Vec<Share> {
    let mut kept: Vec<Share> = shares
        .iter()
        .filter(|share| filter.includes(share.language))
        .copied()
        .collect();
    kept.sort_by(|a, b| b.percent.total_cmp(&a.percent));
    kept
}

/// Popup body: one labelled bar per language, widest first
pub fn popup_html(display_name: &str, shares: &[Share], filter: LanguageFilter) -> String {
    let mut html = String::new();
    let name = html_escape::encode_text(display_name);

    html.push_str(&format!(
        r#"<div style="min-width: 300px"><h4 style="text-align: center">{name}語言使用比例</h4><div style="padding: 10px;">"#
    ));

    for share in ranked(shares, filter) {
        html.push_str(&format!(
            r#"<div style="margin: 10px 0;"><div style="display: flex; justify-content: space-between; margin-bottom: 2px;"><span>{label}</span><span>{percent}%</span></div><div style="background-color: {TRACK_COLOR}; border-radius: 4px; height: 20px; overflow: hidden;"><div style="width: {percent}%; height: 100%; background-color: {BAR_COLOR};"></div></div></div>"#,
            label = share.language.label(),
            percent = share.percent,
        ));
    }

    html.push_str("</div></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{lookup, Language};

    fn sample() -> Vec<Share> {
        vec![
            Share::new(Language::Hakka, 13.0),
            Share::new(Language::Indigenous, 1.5),
            Share::new(Language::Mandarin, 95.0),
            Share::new(Language::Hokkien, 75.0),
        ]
    }

    #[test]
    fn test_ranked_descending() {
        let order: Vec<f64> = ranked(&sample(), LanguageFilter::All)
            .iter()
            .map(|s| s.percent)
            .collect();
        assert_eq!(order, vec![95.0, 75.0, 13.0, 1.5]);
    }

    #[test]
    fn test_ranked_stable_on_ties() {
        let shares = [
            Share::new(Language::Hakka, 2.0),
            Share::new(Language::Indigenous, 2.0),
            Share::new(Language::Hokkien, 84.0),
        ];
        let order: Vec<Language> = ranked(&shares, LanguageFilter::All)
            .iter()
            .map(|s| s.language)
            .collect();
        assert_eq!(order, vec![Language::Hokkien, Language::Hakka, Language::Indigenous]);
    }

    #[test]
    fn test_ranked_drops_excluded() {
        let kept = ranked(&sample(), LanguageFilter::ExcludeMandarin);
        assert_eq!(kept.len(), 3);
        assert_eq!(kept[0].language, Language::Hokkien);
    }

    #[test]
    fn test_popup_lists_languages_in_order() {
        let (name, mix) = lookup("臺北市").unwrap();
        let html = popup_html(name, mix.shares(), LanguageFilter::All);

        assert!(html.contains("臺北市語言使用比例"));
        assert!(html.contains("<span>1.5%</span>"));
        assert!(html.contains("width: 95%"));

        let positions: Vec<usize> = ["華語", "閩南語", "客家話", "原住民語"]
            .iter()
            .map(|label| html.find(label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_popup_without_mandarin() {
        let (name, mix) = lookup("臺北市").unwrap();
        let html = popup_html(name, mix.shares(), LanguageFilter::ExcludeMandarin);
        assert!(!html.contains("華語"));
        assert!(html.contains("閩南語"));
    }

    #[test]
    fn test_popup_escapes_name() {
        let html = popup_html("<b>x</b>", &[], LanguageFilter::All);
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
    }
}
