use phf::phf_map;

/// Language categories tracked per region, in table order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    Mandarin,
    Hokkien,
    Hakka,
    Indigenous,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Mandarin,
        Language::Hokkien,
        Language::Hakka,
        Language::Indigenous,
    ];

    /// Display label used in popups and the legend
    pub fn label(self) -> &'static str {
        match self {
            Language::Mandarin => "華語",
            Language::Hokkien => "閩南語",
            Language::Hakka => "客家話",
            Language::Indigenous => "原住民語",
        }
    }
}

/// Which categories take part in dominant-language selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LanguageFilter {
    All,
    /// Drop the majority language so the strongest minority language shows
    ExcludeMandarin,
}

impl LanguageFilter {
    pub const ALL: [LanguageFilter; 2] = [LanguageFilter::All, LanguageFilter::ExcludeMandarin];

    pub fn includes(self, language: Language) -> bool {
        match self {
            LanguageFilter::All => true,
            LanguageFilter::ExcludeMandarin => language != Language::Mandarin,
        }
    }

    /// Stable key used for this filter in the generated page
    pub fn key(self) -> &'static str {
        match self {
            LanguageFilter::All => "all",
            LanguageFilter::ExcludeMandarin => "exclude_mandarin",
        }
    }
}

/// Usage percentage of one language in a region (0-100)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Share {
    pub language: Language,
    pub percent: f64,
}

impl Share {
    pub const fn new(language: Language, percent: f64) -> Self {
        Self { language, percent }
    }
}

/// One share per language, in `Language::ALL` order.
/// Percentages are not exclusive and need not sum to 100.
#[derive(Debug, PartialEq)]
pub struct LanguageMix([Share; 4]);

impl LanguageMix {
    const fn new(mandarin: f64, hokkien: f64, hakka: f64, indigenous: f64) -> Self {
        Self([
            Share::new(Language::Mandarin, mandarin),
            Share::new(Language::Hokkien, hokkien),
            Share::new(Language::Hakka, hakka),
            Share::new(Language::Indigenous, indigenous),
        ])
    }

    pub fn shares(&self) -> &[Share] {
        &self.0
    }
}

// Keys are canonical names: 臺 rather than 台, post-2010 municipalities.
static REGIONS: phf::Map<&'static str, LanguageMix> = phf_map! {
    "臺北市" => LanguageMix::new(95.0, 75.0, 13.0, 1.5),
    "新北市" => LanguageMix::new(93.0, 78.0, 15.0, 1.2),
    "桃園市" => LanguageMix::new(90.0, 65.0, 35.0, 1.0),
    "臺中市" => LanguageMix::new(92.0, 82.0, 8.0, 0.8),
    "臺南市" => LanguageMix::new(88.0, 85.0, 2.0, 0.5),
    "高雄市" => LanguageMix::new(90.0, 83.0, 4.0, 0.7),
    "基隆市" => LanguageMix::new(92.0, 80.0, 3.0, 0.5),
    "新竹市" => LanguageMix::new(91.0, 60.0, 40.0, 0.4),
    "新竹縣" => LanguageMix::new(85.0, 45.0, 70.0, 1.2),
    "苗栗縣" => LanguageMix::new(84.0, 40.0, 65.0, 1.5),
    "彰化縣" => LanguageMix::new(90.0, 88.0, 2.0, 0.3),
    "南投縣" => LanguageMix::new(88.0, 80.0, 3.0, 2.5),
    "雲林縣" => LanguageMix::new(87.0, 90.0, 1.0, 0.4),
    "嘉義市" => LanguageMix::new(89.0, 87.0, 2.0, 0.3),
    "嘉義縣" => LanguageMix::new(86.0, 89.0, 1.0, 0.5),
    "屏東縣" => LanguageMix::new(87.0, 82.0, 8.0, 3.5),
    "宜蘭縣" => LanguageMix::new(89.0, 84.0, 2.0, 2.0),
    "花蓮縣" => LanguageMix::new(88.0, 65.0, 5.0, 25.0),
    "臺東縣" => LanguageMix::new(86.0, 60.0, 3.0, 35.0),
    "澎湖縣" => LanguageMix::new(89.0, 95.0, 0.5, 0.1),
    "金門縣" => LanguageMix::new(90.0, 98.0, 0.2, 0.1),
    "連江縣" => LanguageMix::new(95.0, 90.0, 0.2, 0.1),
};

/// Exact lookup by canonical name, returning the stored key alongside the mix
pub fn lookup(name: &str) -> Option<(&'static str, &'static LanguageMix)> {
    REGIONS.get_entry(name).map(|(key, mix)| (*key, mix))
}

#[cfg(test)]
pub(crate) fn canonical_names() -> impl Iterator<Item = &'static str> {
    REGIONS.keys().copied()
}
