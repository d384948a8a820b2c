use super::style::fill_color;
use crate::lang::Language;

/// Element id of the checkbox that switches to `LanguageFilter::ExcludeMandarin`
pub const TOGGLE_ID: &str = "exclude-mandarin";

/// Fixed legend panel with one swatch per language and the exclusion toggle
pub fn legend_html() -> String {
    let mut html = String::from(
        r#"<div class="legend"><p style="margin-bottom: 5px;"><b>台灣主要語言分布</b></p><p style="margin: 5px 0;"><b>地圖顏色代表該地區使用比例最高的語言：</b></p>"#,
    );

    for language in Language::ALL {
        html.push_str(&format!(
            r#"<div style="margin: 5px 0;"><span class="swatch" style="background-color: {color};"></span><span style="margin-left: 5px;">{label}</span></div>"#,
            color = fill_color(language),
            label = language.label(),
        ));
    }

    html.push_str(&format!(
        r#"<hr style="margin: 10px 0;"><label style="display: block; margin: 5px 0;"><input type="checkbox" id="{TOGGLE_ID}"> 排除{excluded}，顯示次要語言</label><p style="margin: 5px 0; text-align: center;"><b>點擊各縣市查看詳細語言使用比例</b></p></div>"#,
        excluded = Language::Mandarin.label(),
    ));
    html
}
