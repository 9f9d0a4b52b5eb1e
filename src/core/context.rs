// File: src/core/context.rs
use crate::core::index::{NounMatch, VerbMatch};
use crate::core::karaka::ablative_citation;

/// How a single token resolved, before any sentence-level data is attached.
#[derive(Debug, Clone)]
pub enum Resolution<'c> {
    Noun(NounMatch<'c>),
    Verb(VerbMatch<'c>),
    Unknown,
}

/// Sentence-level facts shared by all tokens of one sentence.
///
/// Built from the first-pass resolutions of every token, so nothing here
/// depends on the order in which results are later assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceContext<'c> {
    governing_root: Option<&'c str>,
    apadana_citation: Option<String>,
}

impl<'c> SentenceContext<'c> {
    /// Takes the root of the first token that resolved as a verb with a
    /// readable root. This ignores syntax: the first verb governs every
    /// ablative in the sentence.
    pub fn from_resolutions(resolutions: &[Resolution<'c>]) -> Self {
        let governing_root = resolutions.iter().find_map(|resolution| match resolution {
            Resolution::Verb(verb) => verb.paradigm.meta.root.as_deref(),
            _ => None,
        });
        Self {
            governing_root,
            apadana_citation: governing_root.and_then(ablative_citation),
        }
    }

    pub fn governing_root(&self) -> Option<&'c str> {
        self.governing_root
    }

    /// Citation attached to every apādāna noun in the sentence.
    pub fn apadana_citation(&self) -> Option<&str> {
        self.apadana_citation.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::index::resolve_verb;
    use crate::core::loader::load_verb_paradigms;

    const VERBS: &str = "Heading: 1. (१) पठ् व्यक्तायां वाचि (भ्वादिः शप् सकर्मकः सेट्)
कर्तरि लट्
पठति पठतः पठन्ति

Heading: 2. (२) गम् गतौ (भ्वादिः शप् सकर्मकः अनिट्)
कर्तरि लट्
गच्छति गच्छतः गच्छन्ति

Heading: broken
कर्तरि लट्
पतति पततः पतन्ति
";

    #[test]
    fn first_verb_root_governs() {
        let verbs = load_verb_paradigms(VERBS);
        let resolutions: Vec<_> = ["गच्छति", "पठति"]
            .iter()
            .map(|w| Resolution::Verb(resolve_verb(&verbs, w).expect("verb")))
            .collect();
        let context = SentenceContext::from_resolutions(&resolutions);
        assert_eq!(context.governing_root(), Some("गम्"));
        assert!(context.apadana_citation().is_some_and(|c| c.starts_with("1.4.24")));
    }

    #[test]
    fn root_without_rule_gives_no_citation() {
        let verbs = load_verb_paradigms(VERBS);
        let resolutions = vec![
            Resolution::Unknown,
            Resolution::Verb(resolve_verb(&verbs, "पठति").expect("verb")),
            Resolution::Verb(resolve_verb(&verbs, "गच्छति").expect("verb")),
        ];
        let context = SentenceContext::from_resolutions(&resolutions);
        assert_eq!(context.governing_root(), Some("पठ्"));
        assert_eq!(context.apadana_citation(), None);
    }

    #[test]
    fn unreadable_roots_are_passed_over() {
        let verbs = load_verb_paradigms(VERBS);
        let resolutions = vec![
            Resolution::Verb(resolve_verb(&verbs, "पतति").expect("verb")),
            Resolution::Verb(resolve_verb(&verbs, "गच्छन्ति").expect("verb")),
        ];
        let context = SentenceContext::from_resolutions(&resolutions);
        assert_eq!(context.governing_root(), Some("गम्"));
    }

    #[test]
    fn no_verbs_no_root() {
        let context = SentenceContext::from_resolutions(&[Resolution::Unknown]);
        assert_eq!(context, SentenceContext::default());
    }
}
