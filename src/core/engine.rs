use crate::core::context::{Resolution, SentenceContext};
use crate::core::corpus::{Corpus, SharedCorpus};
use crate::core::index::{resolve_noun, resolve_verb, NounMatch, VerbMatch};
use crate::core::karaka::{ablative_citation, role_for_case, Karaka};
use crate::core::script::segment;
use crate::core::types::{MetaField, NounParadigm, Purusha, Vachana, VerbParadigm, Vibhakti};
use serde::Serialize;
use std::sync::Arc;

/// A token analysed as a declined noun.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NounResult {
    pub surface_form: String,
    pub lemma: MetaField,
    pub stem_class: MetaField,
    pub gender: MetaField,
    /// Case label as written in the table.
    pub case: String,
    pub vibhakti: Option<Vibhakti>,
    pub number: Vachana,
    pub role: Karaka,
    pub role_gloss: String,
    pub gloss: Option<String>,
    pub ablative_citation: Option<String>,
}

/// A token analysed as a conjugated verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerbResult {
    pub surface_form: String,
    pub root: MetaField,
    pub gloss: MetaField,
    pub verb_class: MetaField,
    pub lakara: String,
    pub person: Purusha,
    pub number: Vachana,
    pub upasarga: Option<String>,
    pub citation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownResult {
    pub surface_form: String,
}

/// The analysis of one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisResult {
    Noun(NounResult),
    Verb(VerbResult),
    Unknown(UnknownResult),
}

impl AnalysisResult {
    pub fn surface_form(&self) -> &str {
        match self {
            AnalysisResult::Noun(noun) => &noun.surface_form,
            AnalysisResult::Verb(verb) => &verb.surface_form,
            AnalysisResult::Unknown(unknown) => &unknown.surface_form,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, AnalysisResult::Unknown(_))
    }
}

/// Resolves one token, trying the noun index before the verb index.
pub fn resolve_token<'c>(
    nouns: &'c [NounParadigm],
    verbs: &'c [VerbParadigm],
    token: &str,
) -> Resolution<'c> {
    if let Some(noun) = resolve_noun(nouns, token) {
        Resolution::Noun(noun)
    } else if let Some(verb) = resolve_verb(verbs, token) {
        Resolution::Verb(verb)
    } else {
        Resolution::Unknown
    }
}

/// Analyses every Devanagari token of `text`, in input order.
///
/// Runs in two passes: every token is resolved on its own first, then
/// ablative nouns take their citation from the first verb root found in the
/// first pass.
pub fn analyze_sentence(
    text: &str,
    nouns: &[NounParadigm],
    verbs: &[VerbParadigm],
) -> Vec<AnalysisResult> {
    let tokens = segment(text);
    let resolutions: Vec<Resolution> = tokens
        .iter()
        .map(|token| resolve_token(nouns, verbs, token))
        .collect();
    let context = SentenceContext::from_resolutions(&resolutions);

    tokens
        .into_iter()
        .zip(resolutions)
        .map(|(token, resolution)| build_result(token, resolution, &context))
        .collect()
}

fn build_result(surface_form: String, resolution: Resolution<'_>, context: &SentenceContext<'_>) -> AnalysisResult {
    match resolution {
        Resolution::Noun(noun) => AnalysisResult::Noun(noun_result(surface_form, &noun, context)),
        Resolution::Verb(verb) => AnalysisResult::Verb(verb_result(surface_form, &verb)),
        Resolution::Unknown => AnalysisResult::Unknown(UnknownResult { surface_form }),
    }
}

fn noun_result(surface_form: String, noun: &NounMatch<'_>, context: &SentenceContext<'_>) -> NounResult {
    let meta = &noun.paradigm.meta;
    let role = role_for_case(noun.case_label);
    let ablative_citation = match role {
        Karaka::Apadana => context.apadana_citation().map(str::to_string),
        _ => None,
    };
    NounResult {
        surface_form,
        lemma: meta.lemma.clone(),
        stem_class: meta.stem_class.clone(),
        gender: meta.gender.clone(),
        case: noun.case_label.to_string(),
        vibhakti: noun.vibhakti,
        number: noun.vachana,
        role,
        role_gloss: role.gloss().to_string(),
        gloss: meta.gloss.as_deref().map(str::to_string),
        ablative_citation,
    }
}

fn verb_result(surface_form: String, verb: &VerbMatch<'_>) -> VerbResult {
    let meta = &verb.paradigm.meta;
    VerbResult {
        surface_form,
        root: meta.root.clone(),
        gloss: meta.gloss.clone(),
        verb_class: meta.class.clone(),
        lakara: verb.lakara.to_string(),
        person: verb.purusha,
        number: verb.vachana,
        upasarga: verb.upasarga.map(str::to_string),
        citation: meta.root.as_deref().and_then(ablative_citation),
    }
}

/// Owns a corpus snapshot and analyses sentences against it.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    corpus: Arc<Corpus>,
}

impl Analyzer {
    pub fn new(corpus: Corpus) -> Self {
        Self { corpus: Arc::new(corpus) }
    }

    /// Pins the corpus currently installed in `shared`.
    pub fn from_shared(shared: &SharedCorpus) -> Self {
        Self { corpus: shared.snapshot() }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn analyze_sentence(&self, text: &str) -> Vec<AnalysisResult> {
        analyze_sentence(text, &self.corpus.nouns, &self.corpus.verbs)
    }

    /// Analyses a single token with no sentence around it, so ablative
    /// nouns carry no citation.
    pub fn analyze_word(&self, word: &str) -> AnalysisResult {
        let resolution = resolve_token(&self.corpus.nouns, &self.corpus.verbs, word);
        build_result(word.to_string(), resolution, &SentenceContext::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NOUNS: &str = "Sanskrit Header: 1. गज अकारान्तः पुंलिङ्गः elephant
<<TABLE>>
प्रथमा\tगजः\tगजौ\tगजाः
पञ्चमी\tगजात्\tगजाभ्याम्\tगजेभ्यः
</TABLE>
<<INFO>></INFO>
Sanskrit Header: 2. भवत् तकारान्तः पुंलिङ्गः you
<<TABLE>>
प्रथमा\tभवान्\tभवन्तौ\tभवन्तः
</TABLE>
";

    const VERBS: &str = "Heading: 1. (१) त्रै पालने (भ्वादिः शप् सकर्मकः अनिट्)
कर्तरि लट्
त्रायते त्रायेते त्रायन्ते

Heading: 2. (२) भू सत्तायाम् (भ्वादिः शप् अकर्मकः सेट्)
कर्तरि लट्
भवति भवतः भवन्ति
भवसि भवथः भवन्तः
";

    fn analyzer() -> Analyzer {
        Analyzer::new(Corpus::from_texts(NOUNS, VERBS))
    }

    #[test]
    fn noun_wins_a_collision() {
        // भवन्तः is listed in both corpora.
        let results = analyzer().analyze_sentence("भवन्तः");
        assert!(matches!(&results[..], [AnalysisResult::Noun(n)] if n.case == "प्रथमा"));
    }

    #[test]
    fn ablative_without_a_verb_has_no_citation() {
        let results = analyzer().analyze_sentence("गजात्");
        let AnalysisResult::Noun(noun) = &results[0] else {
            panic!("expected a noun, got {:?}", results[0]);
        };
        assert_eq!(noun.role, Karaka::Apadana);
        assert_eq!(noun.role_gloss, "Point of separation or origin.");
        assert_eq!(noun.ablative_citation, None);
    }

    #[test]
    fn ablative_takes_citation_from_a_later_verb() {
        let results = analyzer().analyze_sentence("गजात् त्रायते");
        let AnalysisResult::Noun(noun) = &results[0] else {
            panic!("expected a noun");
        };
        assert_eq!(
            noun.ablative_citation.as_deref(),
            Some("1.4.25 भीत्रार्थानां भयहेतुः — Cause/source of fear or danger.")
        );
    }

    #[test]
    fn only_ablatives_get_citations() {
        let results = analyzer().analyze_sentence("गजः भवति");
        let AnalysisResult::Noun(noun) = &results[0] else {
            panic!("expected a noun");
        };
        assert_eq!(noun.role, Karaka::Kartr);
        assert_eq!(noun.ablative_citation, None);
    }

    #[test]
    fn verb_carries_its_own_citation() {
        let result = analyzer().analyze_word("भवति");
        let AnalysisResult::Verb(verb) = result else {
            panic!("expected a verb");
        };
        assert_eq!(verb.root.as_deref(), Some("भू"));
        assert_eq!(verb.verb_class.as_deref(), Some("भ्वादिः"));
        assert_eq!(verb.person, Purusha::Prathama);
        assert_eq!(verb.citation.as_deref().map(|c| c.starts_with("1.4.31")), Some(true));
    }

    #[test]
    fn preverb_is_reported_not_reinterpreted() {
        let result = analyzer().analyze_word("अनुभवति");
        let AnalysisResult::Verb(verb) = result else {
            panic!("expected a verb");
        };
        assert_eq!(verb.upasarga.as_deref(), Some("अनु"));
        assert_eq!(verb.gloss.as_deref(), Some("सत्तायाम्"));
        assert_eq!(verb.surface_form, "अनुभवति");
    }

    #[test]
    fn unknown_tokens_keep_their_place() {
        let results = analyzer().analyze_sentence("अज्ञातम् गजः, xyz भवति।");
        let forms: Vec<_> = results.iter().map(AnalysisResult::surface_form).collect();
        assert_eq!(forms, vec!["अज्ञातम्", "गजः", "भवति"]);
        assert!(results[0].is_unknown());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(analyzer().analyze_word("गजाः")).expect("json");
        assert_eq!(json["kind"], "noun");
        assert_eq!(json["number"], "बहुवचन");
        assert_eq!(json["role"], "कर्तृ");
        assert_eq!(json["lemma"], "गज");

        let json = serde_json::to_value(analyzer().analyze_word("क")).expect("json");
        assert_eq!(json, serde_json::json!({ "kind": "unknown", "surface_form": "क" }));
    }
}
