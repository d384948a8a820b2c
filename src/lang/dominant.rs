use super::table::{LanguageFilter, Share};

/// Highest share among the languages the filter keeps.
/// Ties go to the earlier share.
pub fn dominant(shares: &[Share], filter: LanguageFilter) -> Option<Share> {
    shares
        .iter()
        .filter(|share| filter.includes(share.language))
        .fold(None, |best: Option<Share>, share| match best {
            Some(best) if best.percent >= share.percent => Some(best),
            _ => Some(*share),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{lookup, Language};

    #[test]
    fn test_majority_language_wins_without_filter() {
        let (_, mix) = lookup("花蓮縣").unwrap();
        let best = dominant(mix.shares(), LanguageFilter::All).unwrap();
        assert_eq!(best.language, Language::Mandarin);
    }

    #[test]
    fn test_excluding_mandarin_reveals_minority() {
        let (_, hualien) = lookup("花蓮縣").unwrap();
        let best = dominant(hualien.shares(), LanguageFilter::ExcludeMandarin).unwrap();
        assert_eq!(best.language, Language::Hokkien);

        let (_, hsinchu) = lookup("新竹縣").unwrap();
        let best = dominant(hsinchu.shares(), LanguageFilter::ExcludeMandarin).unwrap();
        assert_eq!(best, Share::new(Language::Hakka, 70.0));

        let shares = [
            Share::new(Language::Mandarin, 80.0),
            Share::new(Language::Hokkien, 10.0),
            Share::new(Language::Indigenous, 40.0),
        ];
        let best = dominant(&shares, LanguageFilter::ExcludeMandarin).unwrap();
        assert_eq!(best.language, Language::Indigenous);
    }

    #[test]
    fn test_empty_and_fully_excluded() {
        assert_eq!(dominant(&[], LanguageFilter::All), None);
        let mandarin_only = [Share::new(Language::Mandarin, 90.0)];
        assert_eq!(dominant(&mandarin_only, LanguageFilter::ExcludeMandarin), None);
    }

    #[test]
    fn test_tie_keeps_first() {
        let shares = [
            Share::new(Language::Hokkien, 50.0),
            Share::new(Language::Hakka, 50.0),
        ];
        assert_eq!(dominant(&shares, LanguageFilter::All).unwrap().language, Language::Hokkien);
    }
}
