// src/core/karaka.rs
use crate::core::types::Vibhakti;
use serde::Serialize;
use std::fmt;

/// Semantic role of a nominal relative to the verb's action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Karaka {
    Kartr,
    Karma,
    Karana,
    Sampradana,
    Apadana,
    Sambandha,
    Adhikarana,
    /// The case label was not one of the seven cases.
    Unresolved,
}

impl Karaka {
    pub fn name(self) -> &'static str {
        match self {
            Karaka::Kartr => "कर्तृ",
            Karaka::Karma => "कर्म",
            Karaka::Karana => "करण",
            Karaka::Sampradana => "सम्प्रदान",
            Karaka::Apadana => "अपादान",
            Karaka::Sambandha => "सम्बन्ध",
            Karaka::Adhikarana => "अधिकरण",
            Karaka::Unresolved => "❓",
        }
    }

    pub fn gloss(self) -> &'static str {
        match self {
            Karaka::Kartr => "The doer of the action.",
            Karaka::Karma => "The object of the action.",
            Karaka::Karana => "Instrument or means.",
            Karaka::Sampradana => "Recipient.",
            Karaka::Apadana => "Point of separation or origin.",
            Karaka::Sambandha => "Relation or possession.",
            Karaka::Adhikarana => "Location or context.",
            Karaka::Unresolved => "❓",
        }
    }
}

impl fmt::Display for Karaka {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Karaka> for &'static str {
    fn from(role: Karaka) -> Self {
        role.name()
    }
}

impl From<Vibhakti> for Karaka {
    fn from(case: Vibhakti) -> Self {
        match case {
            Vibhakti::Prathama => Karaka::Kartr,
            Vibhakti::Dvitiya => Karaka::Karma,
            Vibhakti::Tritiya => Karaka::Karana,
            Vibhakti::Chaturthi => Karaka::Sampradana,
            Vibhakti::Panchami => Karaka::Apadana,
            Vibhakti::Shashthi => Karaka::Sambandha,
            Vibhakti::Saptami => Karaka::Adhikarana,
        }
    }
}

/// Maps a case label as written in a table to its role. Never fails.
pub fn role_for_case(case_label: &str) -> Karaka {
    Vibhakti::from_label(case_label).map_or(Karaka::Unresolved, Karaka::from)
}

/// A sūtra licensing the apādāna role for a family of roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SutraRule {
    pub sutra: &'static str,
    pub meaning: &'static str,
    pub roots: &'static [&'static str],
}

impl SutraRule {
    /// Substring match, so a root carrying an affix still finds its base entry.
    pub fn governs(&self, verb_root: &str) -> bool {
        self.roots.iter().any(|root| verb_root.contains(root))
    }

    pub fn citation(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SutraRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} — {}", self.sutra, self.meaning)
    }
}

/// Searched in order; the first governing rule wins.
pub const APADANA_SUTRAS: [SutraRule; 8] = [
    SutraRule {
        sutra: "1.4.31 भुवः प्रभवः",
        meaning: "Source from which something originates.",
        roots: &["भू", "प्रभव"],
    },
    SutraRule {
        sutra: "1.4.24 ध्रुवमपायेऽपादानम्",
        meaning: "Fixed point from which departure happens.",
        roots: &["गम्", "व्रज्", "अवरोह्", "पत्"],
    },
    SutraRule {
        sutra: "1.4.25 भीत्रार्थानां भयहेतुः",
        meaning: "Cause/source of fear or danger.",
        roots: &["बिभे", "उद्विज्", "त्रै", "रक्ष्"],
    },
    SutraRule {
        sutra: "1.4.26 पराजेरसोढः",
        meaning: "Something that becomes unbearable.",
        roots: &["पराजि"],
    },
    SutraRule {
        sutra: "1.4.27 वारणार्थानामीप्सितः",
        meaning: "Desired object from which one is prevented.",
        roots: &["वारय", "निवर्त", "निवार"],
    },
    SutraRule {
        sutra: "1.4.28 अन्तर्द्धौ येनादर्शनमिच्छति",
        meaning: "The one from whom one hides (concealment).",
        roots: &["अन्तर्धा", "निल", "दृश्"],
    },
    SutraRule {
        sutra: "1.4.29 आख्यातोपयोगे",
        meaning: "In relation to learning from a teacher.",
        roots: &["धी", "शिक्ष", "आगम"],
    },
    SutraRule {
        sutra: "1.4.30 जनिकर्तुः प्रकृतिः",
        meaning: "Prime cause of something's origin.",
        roots: &["जन्"],
    },
];

/// The first apādāna rule governing `verb_root`.
pub fn apadana_rule(verb_root: &str) -> Option<&'static SutraRule> {
    if verb_root.is_empty() {
        return None;
    }
    APADANA_SUTRAS.iter().find(|rule| rule.governs(verb_root))
}

/// The formatted citation of the first governing rule.
pub fn ablative_citation(verb_root: &str) -> Option<String> {
    apadana_rule(verb_root).map(SutraRule::citation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("प्रथमा", Karaka::Kartr)]
    #[case("द्वितीया", Karaka::Karma)]
    #[case("तृतीया", Karaka::Karana)]
    #[case("चतुर्थी", Karaka::Sampradana)]
    #[case("पञ्चमी", Karaka::Apadana)]
    #[case("षष्ठी", Karaka::Sambandha)]
    #[case("सप्तमी", Karaka::Adhikarana)]
    fn every_case_has_a_role(#[case] label: &str, #[case] role: Karaka) {
        assert_eq!(role_for_case(label), role);
        assert!(!role.name().is_empty());
        assert_ne!(role, Karaka::Unresolved);
    }

    #[rstest]
    #[case("सम्बोधन")]
    #[case("")]
    #[case("ablative")]
    fn unknown_case_is_unresolved(#[case] label: &str) {
        assert_eq!(role_for_case(label), Karaka::Unresolved);
    }

    #[test]
    fn first_governing_rule_wins() {
        let rule = apadana_rule("गम्").map(|r| r.sutra);
        assert_eq!(rule, Some("1.4.24 ध्रुवमपायेऽपादानम्"));
        // आगम्-style roots contain गम् and hit the earlier rule.
        assert_eq!(apadana_rule("आगम्").map(|r| r.sutra), Some("1.4.24 ध्रुवमपायेऽपादानम्"));
        // Without the virama गम् is not a substring; the stem falls through to आगम.
        assert_eq!(apadana_rule("आगम").map(|r| r.sutra), Some("1.4.29 आख्यातोपयोगे"));
    }

    #[test]
    fn affixed_root_still_matches() {
        assert_eq!(apadana_rule("भूय").map(|r| r.sutra), Some("1.4.31 भुवः प्रभवः"));
    }

    #[test]
    fn citation_joins_sutra_and_meaning() {
        assert_eq!(
            ablative_citation("जन्").as_deref(),
            Some("1.4.30 जनिकर्तुः प्रकृतिः — Prime cause of something's origin.")
        );
        assert_eq!(ablative_citation("पठ्"), None);
        assert_eq!(ablative_citation(""), None);
    }
}
